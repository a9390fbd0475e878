/// Fixed-point scale of market exchange rates (18 decimals)
pub const EXCHANGE_RATE_SCALE: i128 = 1_000_000_000_000_000_000;

/// Exchange rate of a freshly initialized market: 1 cToken = 1 underlying unit
pub const INITIAL_EXCHANGE_RATE: i128 = EXCHANGE_RATE_SCALE;

/// Percentages of a donation split must add up to this value
pub const PERCENT_TOTAL: u32 = 100;

/// Bounds of a single split percentage
pub const MIN_PERCENTAGE: u32 = 1;
pub const MAX_PERCENTAGE: u32 = 100;

/// Maximum number of donees in a single donation
pub const MAX_DONEES_PER_DONATION: u32 = 20;

/// Donee names are limited to 32 bytes
pub const MAX_NAME_LEN: u32 = 32;

pub const BPS_DENOMINATOR: i128 = 10_000;

/// Supply rates above 100% a year are rejected
pub const MAX_SUPPLY_RATE_BPS: u32 = 10_000;

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Strkey of the all-zero contract id, used as the null identity
pub const ZERO_ADDRESS_STRKEY: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";
