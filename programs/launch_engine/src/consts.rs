// Token granularity for every launch mint.
pub const TOKEN_DECIMALS: u8 = 9;

// Whole tokens minted into each launch vault.
pub const INITIAL_SUPPLY_TOKENS: u64 = 1_000_000_000;

// Same supply in base units (1e9 * 1e9 = 1e18).
pub const INITIAL_SUPPLY: u64 = INITIAL_SUPPLY_TOKENS * 1_000_000_000;

// Lowest accepted curve base price (lamports per base unit).
pub const MIN_BASE_PRICE: u64 = 1;

// Max percent of the initial supply one wallet may sell per launch day.
pub const SELL_LIMIT_PERCENT: u64 = 10;

// Max percent of the initial supply a single transfer may move.
pub const TRANSFER_LIMIT_PERCENT: u64 = 20;

// Optional launch-wide cap on tokens sold per day (percent of initial supply).
// `None` leaves only the per-wallet cap in force.
pub const DAY_SELL_LIMIT_PERCENT: Option<u64> = None;

pub const SECONDS_PER_DAY: i64 = 86_400;

// Sell window length (15 minutes).
pub const WINDOW_DURATION: i64 = 15 * 60;

// Where the first daily window opens, measured from 00:00 UTC.
pub const WINDOW_OFFSET: i64 = 6 * 60 * 60;

// Gap between the two daily windows; both stay inside one UTC day.
pub const HALF_DAY: i64 = 12 * 60 * 60;
