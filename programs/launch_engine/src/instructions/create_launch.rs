use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::consts::{INITIAL_SUPPLY, MIN_BASE_PRICE, TOKEN_DECIMALS};
use crate::errors::LaunchError;
use crate::state::{BondingCurveState, GlobalState, LaunchAccount, LaunchMetadata};

pub fn handle(ctx: Context<CreateLaunch>, base_price: u64, slope: u64) -> Result<()> {
    require!(base_price >= MIN_BASE_PRICE, LaunchError::InvalidParams);

    let global = &mut ctx.accounts.global_state;
    let launch_id = global.launch_count;
    let now = Clock::get()?.unix_timestamp;

    let launch = &mut ctx.accounts.launch_metadata;
    launch.token_mint = ctx.accounts.token_mint.key();
    launch.vault = ctx.accounts.vault.key();
    launch.launch_id = launch_id;
    launch.current_day = 0;
    launch.day_sold_total = 0;
    launch.bump = ctx.bumps.launch_metadata;
    launch.schedule_window(now);

    let curve = &mut ctx.accounts.bonding_curve;
    curve.launch_metadata = launch.key();
    curve.base_price = base_price;
    curve.slope = slope;
    curve.current_supply = 0;
    curve.decimals = TOKEN_DECIMALS;

    // Fixed supply: everything lands in the vault, then minting is switched off
    launch.mint_to_vault(
        &ctx.accounts.token_mint,
        &ctx.accounts.vault,
        INITIAL_SUPPLY,
        &ctx.accounts.token_program,
    )?;
    launch.disable_minting(&ctx.accounts.token_mint, &ctx.accounts.token_program)?;

    global.launch_count = launch_id
        .checked_add(1)
        .ok_or(LaunchError::ArithmeticOverflow)?;

    msg!(
        "🚀 [create_launch] id: {} mint: {} base_price: {} slope: {}",
        launch_id,
        launch.token_mint,
        base_price,
        slope
    );
    msg!(
        "🚀 [create_launch] sell windows: [{}, {}) [{}, {})",
        launch.window1_start,
        launch.window1_end,
        launch.window2_start,
        launch.window2_end
    );

    emit!(crate::LaunchCreated {
        launch_id,
        mint: launch.token_mint,
        vault: launch.vault,
        base_price,
        slope,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateLaunch<'info> {
    // Global config; admin-gated, supplies the next launch id
    #[account(
        mut,
        seeds = [GlobalState::SEED.as_bytes()],
        bump = global_state.bump,
        has_one = admin @ LaunchError::Unauthorized,
    )]
    pub global_state: Box<Account<'info, GlobalState>>,

    // Launch PDA: mint/freeze authority, vault owner, SOL reserve
    #[account(
        init,
        payer = admin,
        space = LaunchMetadata::ACCOUNT_SIZE,
        seeds = [
            LaunchMetadata::SEED_PREFIX.as_bytes(),
            global_state.launch_count.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub launch_metadata: Box<Account<'info, LaunchMetadata>>,

    #[account(
        init,
        payer = admin,
        space = BondingCurveState::ACCOUNT_SIZE,
        seeds = [
            BondingCurveState::SEED_PREFIX.as_bytes(),
            global_state.launch_count.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub bonding_curve: Box<Account<'info, BondingCurveState>>,

    #[account(
        init,
        payer = admin,
        seeds = [
            LaunchMetadata::MINT_SEED_PREFIX.as_bytes(),
            global_state.launch_count.to_le_bytes().as_ref(),
        ],
        bump,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = launch_metadata,
        mint::freeze_authority = launch_metadata,
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    // Launch vault ATA (authority = launch PDA)
    #[account(
        init,
        payer = admin,
        associated_token::mint = token_mint,
        associated_token::authority = launch_metadata,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    // Programs & sysvars
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}
