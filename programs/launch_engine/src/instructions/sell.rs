use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::errors::LaunchError;
use crate::state::{BondingCurveState, LaunchAccount, LaunchMetadata, UserRecord};

pub fn handle(ctx: Context<Sell>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // Trace logs
    msg!("💸 [sell] amount (base units): {}", amount);
    msg!("💸 [sell] seller balance: {}", ctx.accounts.seller_token_account.amount);
    msg!(
        "💸 [sell] now: {} windows: [{}, {}) [{}, {})",
        now,
        ctx.accounts.launch_metadata.window1_start,
        ctx.accounts.launch_metadata.window1_end,
        ctx.accounts.launch_metadata.window2_start,
        ctx.accounts.launch_metadata.window2_end
    );

    let quota = ctx.accounts.launch_metadata.authorize_sell(
        &ctx.accounts.user_record,
        now,
        amount,
        ctx.accounts.seller_token_account.amount,
    )?;

    let proceeds = ctx.accounts.bonding_curve.quote_sell(amount)?;
    msg!("💸 [sell] proceeds (lamports): {}", proceeds);
    require!(
        proceeds <= ctx.accounts.launch_metadata.withdrawable_lamports()?,
        LaunchError::InsufficientLiquidity
    );

    let launch = &mut ctx.accounts.launch_metadata;
    launch.transfer_token_to_vault(
        &ctx.accounts.seller_token_account,
        &ctx.accounts.vault,
        &ctx.accounts.token_mint,
        amount,
        &ctx.accounts.seller,
        &ctx.accounts.token_program,
    )?;
    launch.transfer_sol_from_launch(&ctx.accounts.seller, proceeds)?;

    let curve = &mut ctx.accounts.bonding_curve;
    curve.record_sell(amount)?;
    launch.commit_sell(&mut ctx.accounts.user_record, ctx.accounts.seller.key(), quota);

    emit!(crate::SellEvent {
        launch_id: launch.launch_id,
        seller: ctx.accounts.seller.key(),
        amount,
        proceeds,
        supply_after: curve.current_supply,
        price_after: curve.spot_price().unwrap_or(u64::MAX),
        wallet_sold_today: quota.user_total,
        launch_sold_today: quota.day_total,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Sell<'info> {
    // Launch PDA; pays out SOL and tracks the day's sells
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

    // Per-wallet sell quota (created on first sell)
    #[account(
        init_if_needed,
        payer = seller,
        space = UserRecord::ACCOUNT_SIZE,
        seeds = [
            UserRecord::SEED_PREFIX.as_bytes(),
            launch_metadata.key().as_ref(),
            seller.key().as_ref(),
        ],
        bump,
    )]
    pub user_record: Box<Account<'info, UserRecord>>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = seller,
    )]
    pub seller_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub seller: Signer<'info>,

    // Programs & sysvars
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
