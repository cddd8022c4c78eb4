use anchor_lang::prelude::*;

pub mod consts;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::buy::*;
use instructions::create_launch::*;
use instructions::initialize::*;
use instructions::migrate::*;
use instructions::sell::*;
use instructions::transfer::*;
use instructions::update_global::*;

declare_id!("9Aje6DxfVL2w8L6adPU2bjTZW2xLzrcKMNScoBAzndsG");

#[program]
pub mod launch_engine {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        crate::instructions::initialize::handle(ctx)
    }

    pub fn create_launch(ctx: Context<CreateLaunch>, base_price: u64, slope: u64) -> Result<()> {
        crate::instructions::create_launch::handle(ctx, base_price, slope)
    }

    pub fn buy(ctx: Context<Buy>, amount: u64) -> Result<()> {
        crate::instructions::buy::handle(ctx, amount)
    }

    pub fn sell(ctx: Context<Sell>, amount: u64) -> Result<()> {
        crate::instructions::sell::handle(ctx, amount)
    }

    pub fn transfer(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
        crate::instructions::transfer::handle(ctx, amount)
    }

    pub fn update_global(ctx: Context<AdminLaunch>) -> Result<()> {
        crate::instructions::update_global::handle(ctx)
    }

    pub fn set_sell_window(
        ctx: Context<AdminLaunch>,
        window1_start: i64,
        window1_end: i64,
        window2_start: i64,
        window2_end: i64,
    ) -> Result<()> {
        crate::instructions::set_sell_window::handle(
            ctx,
            window1_start,
            window1_end,
            window2_start,
            window2_end,
        )
    }

    pub fn migrate(ctx: Context<Migrate>) -> Result<()> {
        crate::instructions::migrate::handle(ctx)
    }
}

#[event]
pub struct LaunchCreated {
    pub launch_id: u64,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub base_price: u64,
    pub slope: u64,
}

#[event]
pub struct PurchaseEvent {
    pub launch_id: u64,
    pub buyer: Pubkey,
    pub amount: u64,
    pub cost: u64,
    pub supply_after: u64,
    pub price_after: u64,
}

#[event]
pub struct SellEvent {
    pub launch_id: u64,
    pub seller: Pubkey,
    pub amount: u64,
    pub proceeds: u64,
    pub supply_after: u64,
    pub price_after: u64,
    pub wallet_sold_today: u64,
    pub launch_sold_today: u64,
}

#[event]
pub struct TransferEvent {
    pub launch_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct DayRolled {
    pub launch_id: u64,
    pub day: u64,
    pub window1_start: i64,
    pub window1_end: i64,
    pub window2_start: i64,
    pub window2_end: i64,
}

#[event]
pub struct SellWindowSet {
    pub launch_id: u64,
    pub window1_start: i64,
    pub window1_end: i64,
    pub window2_start: i64,
    pub window2_end: i64,
}

#[event]
pub struct LaunchMigrated {
    pub launch_id: u64,
    pub admin: Pubkey,
    pub tokens: u64,
    pub lamports: u64,
    pub freeze_revoked: bool,
}
