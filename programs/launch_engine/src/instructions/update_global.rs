use anchor_lang::prelude::*;

use crate::errors::LaunchError;
use crate::state::{GlobalState, LaunchMetadata};

pub fn handle(ctx: Context<AdminLaunch>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let launch = &mut ctx.accounts.launch_metadata;

    if !launch.roll_day(now)? {
        msg!("📅 [update_global] launch {} still on day {}", launch.launch_id, launch.current_day);
        return Ok(());
    }

    msg!(
        "📅 [update_global] launch {} rolled to day {} windows: [{}, {}) [{}, {})",
        launch.launch_id,
        launch.current_day,
        launch.window1_start,
        launch.window1_end,
        launch.window2_start,
        launch.window2_end
    );

    emit!(crate::DayRolled {
        launch_id: launch.launch_id,
        day: launch.current_day,
        window1_start: launch.window1_start,
        window1_end: launch.window1_end,
        window2_start: launch.window2_start,
        window2_end: launch.window2_end,
    });

    Ok(())
}

/// Admin-gated access to one launch; shared by the day rollover and window override.
#[derive(Accounts)]
pub struct AdminLaunch<'info> {
    #[account(
        seeds = [GlobalState::SEED.as_bytes()],
        bump = global_state.bump,
        has_one = admin @ LaunchError::Unauthorized,
    )]
    pub global_state: Box<Account<'info, GlobalState>>,

    #[account(
        mut,
        seeds = [
            LaunchMetadata::SEED_PREFIX.as_bytes(),
            launch_metadata.launch_id.to_le_bytes().as_ref(),
        ],
        bump = launch_metadata.bump,
    )]
    pub launch_metadata: Box<Account<'info, LaunchMetadata>>,

    pub admin: Signer<'info>,
}
