//! Linear bonding curve in integer lamports.
//! - price(s)       = base + slope * s   (lamports per base unit at supply s)
//! - cost(s, n)     = sum of price(s..s+n)
//!                  = n*base + slope * (n*s + n*(n-1)/2)
//! Buys pay cost(supply, n); sells receive cost(supply - n, n), so a buy
//! followed by a sell of the same size at the same supply nets to zero.

use anchor_lang::prelude::*;

use crate::errors::LaunchError;

// ====================== Core sums ======================

/// Price of the next unit at `supply`.
pub fn spot_price(base_price: u64, slope: u64, supply: u64) -> Result<u64> {
    let price = (slope as u128)
        .checked_mul(supply as u128)
        .and_then(|v| v.checked_add(base_price as u128))
        .ok_or(LaunchError::ArithmeticOverflow)?;
    u64::try_from(price).map_err(|_| error!(LaunchError::ArithmeticOverflow))
}

/// Sum of unit prices over `[supply, supply + amount)`.
pub fn range_cost(base_price: u64, slope: u64, supply: u64, amount: u64) -> Result<u64> {
    if amount == 0 {
        return Ok(0);
    }

    let n = amount as u128;
    let s = supply as u128;

    let flat = (base_price as u128)
        .checked_mul(n)
        .ok_or(LaunchError::ArithmeticOverflow)?;

    // n*(n-1) is always even
    let triangle = n
        .checked_mul(n - 1)
        .ok_or(LaunchError::ArithmeticOverflow)?
        / 2;

    let ramp = n
        .checked_mul(s)
        .and_then(|v| v.checked_add(triangle))
        .and_then(|v| v.checked_mul(slope as u128))
        .ok_or(LaunchError::ArithmeticOverflow)?;

    let total = flat
        .checked_add(ramp)
        .ok_or(LaunchError::ArithmeticOverflow)?;

    u64::try_from(total).map_err(|_| error!(LaunchError::ArithmeticOverflow))
}

// ====================== Trading helpers ======================

/// Lamports owed for buying `amount` base units at `current_supply`.
pub fn buy_cost(base_price: u64, slope: u64, current_supply: u64, amount: u64) -> Result<u64> {
    range_cost(base_price, slope, current_supply, amount)
}

/// Lamports paid out for selling `amount` base units back at `current_supply`.
/// Priced over `[current_supply - amount, current_supply)`.
pub fn sell_proceeds(base_price: u64, slope: u64, current_supply: u64, amount: u64) -> Result<u64> {
    let start = current_supply
        .checked_sub(amount)
        .ok_or(LaunchError::InsufficientSupply)?;
    range_cost(base_price, slope, start, amount)
}
