//! Anti-whale caps, all expressed as a percent of the initial supply.

use anchor_lang::prelude::*;

use crate::consts::{
    DAY_SELL_LIMIT_PERCENT, INITIAL_SUPPLY, SELL_LIMIT_PERCENT, TRANSFER_LIMIT_PERCENT,
};
use crate::errors::LaunchError;

#[inline]
pub const fn percent_of_supply(percent: u64) -> u64 {
    ((INITIAL_SUPPLY as u128) * (percent as u128) / 100) as u64
}

/// Tokens one wallet may sell per launch day.
pub const PER_USER_SELL_CAP: u64 = percent_of_supply(SELL_LIMIT_PERCENT);

/// Tokens a single transfer may move.
pub const TRANSFER_CAP: u64 = percent_of_supply(TRANSFER_LIMIT_PERCENT);

/// Launch-wide daily sell cap, if one is configured.
pub const DAY_SELL_CAP: Option<u64> = match DAY_SELL_LIMIT_PERCENT {
    Some(percent) => Some(percent_of_supply(percent)),
    None => None,
};

/// New per-wallet total after selling `amount`, if it stays within `cap`.
pub fn check_user_sell(sold_so_far: u64, amount: u64, cap: u64) -> Result<u64> {
    let total = sold_so_far
        .checked_add(amount)
        .ok_or(LaunchError::ArithmeticOverflow)?;
    require!(total <= cap, LaunchError::ExceedsSellLimit);
    Ok(total)
}

/// New launch-wide day total after selling `amount`; `None` means uncapped.
pub fn check_day_sell(day_total: u64, amount: u64, cap: Option<u64>) -> Result<u64> {
    let total = day_total
        .checked_add(amount)
        .ok_or(LaunchError::ArithmeticOverflow)?;
    if let Some(cap) = cap {
        require!(total <= cap, LaunchError::ExceedsSellLimit);
    }
    Ok(total)
}

pub fn check_transfer(amount: u64, cap: u64) -> Result<()> {
    require!(amount <= cap, LaunchError::ExceedsTransferLimit);
    Ok(())
}
