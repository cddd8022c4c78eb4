use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::errors::LaunchError;
use crate::state::{GlobalState, LaunchAccount, LaunchMetadata};

pub fn handle(ctx: Context<Migrate>) -> Result<()> {
    let launch = &ctx.accounts.launch_metadata;

    // 1) drain vault tokens -> admin ATA
    let tokens = ctx.accounts.vault.amount;
    if tokens > 0 {
        launch.transfer_token_from_vault(
            &ctx.accounts.vault,
            &ctx.accounts.admin_token_account,
            &ctx.accounts.token_mint,
            tokens,
            &ctx.accounts.token_program,
        )?;
    }

    // 2) drop the freeze authority while the launch still holds it
    let freeze_revoked = ctx.accounts.token_mint.freeze_authority == COption::Some(launch.key());
    if freeze_revoked {
        launch.revoke_freeze_authority(&ctx.accounts.token_mint, &ctx.accounts.token_program)?;
    }

    // 3) sweep the SOL reserve, keeping the launch rent-exempt
    let lamports = launch.withdrawable_lamports()?;
    if lamports > 0 {
        launch.transfer_sol_from_launch(&ctx.accounts.admin, lamports)?;
    }

    msg!(
        "🚚 [migrate] launch {} tokens: {} lamports: {} freeze revoked: {}",
        launch.launch_id,
        tokens,
        lamports,
        freeze_revoked
    );

    emit!(crate::LaunchMigrated {
        launch_id: launch.launch_id,
        admin: ctx.accounts.admin.key(),
        tokens,
        lamports,
        freeze_revoked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Migrate<'info> {
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
        has_one = token_mint,
        has_one = vault,
    )]
    pub launch_metadata: Box<Account<'info, LaunchMetadata>>,

    #[account(mut)]
    pub token_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub vault: Box<Account<'info, TokenAccount>>,

    // Admin ATA receiving the unsold supply (auto-create if missing)
    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = token_mint,
        associated_token::authority = admin,
    )]
    pub admin_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    // Programs & sysvars
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
