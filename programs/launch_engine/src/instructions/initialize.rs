use anchor_lang::prelude::*;

use crate::errors::LaunchError;
use crate::state::GlobalState;

pub fn handle(ctx: Context<Initialize>) -> Result<()> {
    let global = &mut ctx.accounts.global_state;

    // init_if_needed: an existing config lands here with its admin set
    require!(
        global.admin == Pubkey::default(),
        LaunchError::AlreadyInitialized
    );

    global.admin = ctx.accounts.admin.key();
    global.launch_count = 0;
    global.bump = ctx.bumps.global_state;

    msg!("🛠️ [initialize] admin: {}", global.admin);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = admin,
        space = GlobalState::ACCOUNT_SIZE,
        seeds = [GlobalState::SEED.as_bytes()],
        bump,
    )]
    pub global_state: Box<Account<'info, GlobalState>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
