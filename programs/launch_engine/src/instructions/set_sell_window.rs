use anchor_lang::prelude::*;

use crate::instructions::update_global::AdminLaunch;

pub fn handle(
    ctx: Context<AdminLaunch>,
    window1_start: i64,
    window1_end: i64,
    window2_start: i64,
    window2_end: i64,
) -> Result<()> {
    let launch = &mut ctx.accounts.launch_metadata;
    launch.set_window((window1_start, window1_end), (window2_start, window2_end))?;

    msg!(
        "🕛 [set_sell_window] launch {} windows: [{}, {}) [{}, {})",
        launch.launch_id,
        window1_start,
        window1_end,
        window2_start,
        window2_end
    );

    emit!(crate::SellWindowSet {
        launch_id: launch.launch_id,
        window1_start,
        window1_end,
        window2_start,
        window2_end,
    });

    Ok(())
}
