use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::errors::LaunchError;
use crate::state::{BondingCurveState, LaunchAccount, LaunchMetadata};

pub fn handle(ctx: Context<Buy>, amount: u64) -> Result<()> {
    require!(amount > 0, LaunchError::InvalidParams);
    require!(
        amount <= ctx.accounts.vault.amount,
        LaunchError::InsufficientSupply
    );

    let curve = &mut ctx.accounts.bonding_curve;
    let cost = curve.quote_buy(amount)?;

    msg!("🛒 [buy] amount (base units): {}", amount);
    msg!("🛒 [buy] supply before: {}", curve.current_supply);
    msg!("🛒 [buy] cost (lamports): {}", cost);

    require!(
        ctx.accounts.buyer.lamports() >= cost,
        LaunchError::InsufficientFunds
    );

    let launch = &ctx.accounts.launch_metadata;
    launch.transfer_sol_to_launch(&ctx.accounts.buyer, cost, &ctx.accounts.system_program)?;
    launch.transfer_token_from_vault(
        &ctx.accounts.vault,
        &ctx.accounts.buyer_token_account,
        &ctx.accounts.token_mint,
        amount,
        &ctx.accounts.token_program,
    )?;

    curve.record_buy(amount)?;

    emit!(crate::PurchaseEvent {
        launch_id: launch.launch_id,
        buyer: ctx.accounts.buyer.key(),
        amount,
        cost,
        supply_after: curve.current_supply,
        price_after: curve.spot_price().unwrap_or(u64::MAX),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Buy<'info> {
    // Launch PDA; receives the SOL and signs for the vault
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

    #[account(
        mut,
        seeds = [
            BondingCurveState::SEED_PREFIX.as_bytes(),
            launch_metadata.launch_id.to_le_bytes().as_ref(),
        ],
        bump,
        has_one = launch_metadata,
    )]
    pub bonding_curve: Box<Account<'info, BondingCurveState>>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub vault: Box<Account<'info, TokenAccount>>,

    // Buyer's token ATA (auto-create if missing)
    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = token_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    // Programs & sysvars
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}
