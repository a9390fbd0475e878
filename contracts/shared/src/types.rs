use soroban_sdk::{contracttype, Address, Map, String, Symbol};

/// Token amounts in the token's base units.
pub type Amount = i128;

/// Allow-listed token the pool can invest, together with its market.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenConfig {
    pub symbol: Symbol,
    pub token: Address,
    pub c_token: Address,
}

/// A vetted recipient of donated interests.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donee {
    pub name: String,
    pub address: Address,
    pub enabled: bool,
    /// Running sum of received donations per token symbol
    pub total_donated: Map<Symbol, Amount>,
}

/// One entry of a donation split request.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoneeSplit {
    pub donee: Address,
    pub percentage: u32,
}

/// An executed transfer of redeemed interest to a donee.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    pub donee: Address,
    pub symbol: Symbol,
    pub amount: Amount,
}

/// Investor position for a single token symbol.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    /// Cumulative underlying amount invested
    pub principal: Amount,
    /// Market tokens attributable to this investor
    pub c_tokens: Amount,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketState {
    pub underlying: Address,
    /// Underlying per cToken, scaled by `EXCHANGE_RATE_SCALE`
    pub exchange_rate: i128,
    /// Yearly supply rate in basis points
    pub supply_rate_bps: u32,
    pub last_accrual: u64,
    pub total_supply: Amount,
}
