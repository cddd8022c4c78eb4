use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchError {
    #[msg("Global state is already initialized")]
    AlreadyInitialized,

    #[msg("Unauthorized access or incorrect signer")]
    Unauthorized,

    #[msg("Invalid launch parameters")]
    InvalidParams,

    #[msg("Insufficient funds to complete the purchase")]
    InsufficientFunds,

    #[msg("Selling is not allowed outside the sell window")]
    NotInTradingWindow,

    #[msg("Sell amount exceeds the daily sell limit")]
    ExceedsSellLimit,

    #[msg("Transfer amount exceeds the per-transfer limit")]
    ExceedsTransferLimit,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Not enough tokens left on the curve")]
    InsufficientSupply,

    #[msg("Seller does not hold enough tokens")]
    InsufficientTokens,

    #[msg("Launch reserve cannot cover the payout")]
    InsufficientLiquidity,

    #[msg("Invalid sell window bounds")]
    InvalidWindowTimes,
}
