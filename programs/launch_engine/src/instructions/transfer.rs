use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount},
};

use crate::errors::LaunchError;
use crate::state::LaunchMetadata;
use crate::utils::limits::{check_transfer, TRANSFER_CAP};

pub fn handle(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
    check_transfer(amount, TRANSFER_CAP)?;
    require!(
        amount <= ctx.accounts.source_token_account.amount,
        LaunchError::InsufficientTokens
    );

    msg!("🔁 [transfer] {} -> {} amount: {}", ctx.accounts.from.key(), ctx.accounts.to.key(), amount);

    token::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::TransferChecked {
                from: ctx.accounts.source_token_account.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.destination_token_account.to_account_info(),
                authority: ctx.accounts.from.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;

    emit!(crate::TransferEvent {
        launch_id: ctx.accounts.launch_metadata.launch_id,
        from: ctx.accounts.from.key(),
        to: ctx.accounts.to.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferTokens<'info> {
    #[account(
        seeds = [
            LaunchMetadata::SEED_PREFIX.as_bytes(),
            launch_metadata.launch_id.to_le_bytes().as_ref(),
        ],
        bump = launch_metadata.bump,
        has_one = token_mint,
    )]
    pub launch_metadata: Box<Account<'info, LaunchMetadata>>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = from,
    )]
    pub source_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: any wallet may receive; only used as the destination ATA authority
    pub to: UncheckedAccount<'info>,

    // Receiver's token ATA (auto-create if missing)
    #[account(
        init_if_needed,
        payer = from,
        associated_token::mint = token_mint,
        associated_token::authority = to,
    )]
    pub destination_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub from: Signer<'info>,

    // Programs & sysvars
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
