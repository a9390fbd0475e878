use soroban_sdk::{symbol_short, Symbol};

// Donee registry events
pub const DONEE_ADDED: Symbol = symbol_short!("don_add");
pub const DONEE_ENABLED: Symbol = symbol_short!("don_on");
pub const DONEE_DISABLED: Symbol = symbol_short!("don_off");
pub const RECORDER_SET: Symbol = symbol_short!("rec_set");

// Investment pool events
pub const INVESTED: Symbol = symbol_short!("invested");
pub const INTEREST_REDEEMED: Symbol = symbol_short!("redeemed");
pub const POOL_TRANSFER: Symbol = symbol_short!("pool_xfer");
pub const OWNERSHIP_TRANSFERRED: Symbol = symbol_short!("owner_set");

// Donation events
pub const POOL_OPENED: Symbol = symbol_short!("pool_open");
pub const INVESTMENT: Symbol = symbol_short!("invest");
pub const DONATION: Symbol = symbol_short!("donation");

// Yield market events
pub const MARKET_MINT: Symbol = symbol_short!("mint");
pub const MARKET_REDEEM: Symbol = symbol_short!("redeem");
pub const INTEREST_ACCRUED: Symbol = symbol_short!("accrued");
pub const SUPPLY_RATE_SET: Symbol = symbol_short!("rate_set");
