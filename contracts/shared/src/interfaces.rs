//! Cross-contract interfaces.
//!
//! Contracts call each other through these generated clients instead of
//! linking the callee crates, so every contract wasm only carries its own
//! exports.

use crate::errors::Error;
use crate::types::{Amount, Position, TokenConfig};
use soroban_sdk::{contractclient, Address, Env, Symbol, Vec};

/// Compound-style money market wrapping a single underlying token.
#[contractclient(name = "MarketClient")]
pub trait YieldMarketInterface {
    fn underlying(env: Env) -> Result<Address, Error>;

    /// Deposit `amount` of underlying (pulled through an allowance), returns cTokens minted
    fn mint(env: Env, minter: Address, amount: Amount) -> Result<Amount, Error>;

    /// Burn `c_tokens`, returns underlying paid out
    fn redeem(env: Env, redeemer: Address, c_tokens: Amount) -> Result<Amount, Error>;

    /// Withdraw exactly `amount` of underlying, returns cTokens burned
    fn redeem_underlying(env: Env, redeemer: Address, amount: Amount) -> Result<Amount, Error>;

    fn exchange_rate_stored(env: Env) -> Result<i128, Error>;

    fn accrue_interest(env: Env) -> Result<i128, Error>;

    fn balance_of(env: Env, owner: Address) -> Amount;
}

#[contractclient(name = "RegistryClient")]
pub trait DoneeRegistryInterface {
    fn is_donee_enabled(env: Env, address: Address) -> bool;

    fn get_trusted_donees(env: Env) -> Vec<Address>;

    fn record_donation(env: Env, donee: Address, symbol: Symbol, amount: Amount)
        -> Result<(), Error>;
}

#[contractclient(name = "PoolClient")]
pub trait InvestmentPoolInterface {
    fn get_token_config(env: Env, symbol: Symbol) -> Option<TokenConfig>;

    fn get_invertible_token_symbols(env: Env) -> Vec<Symbol>;

    fn invest(env: Env, investor: Address, symbol: Symbol, amount: Amount)
        -> Result<Amount, Error>;

    fn get_invested_amount(env: Env, investor: Address, symbol: Symbol) -> Result<Amount, Error>;

    fn get_generated_interest(env: Env, investor: Address, symbol: Symbol)
        -> Result<Amount, Error>;

    fn get_position(env: Env, investor: Address, symbol: Symbol) -> Result<Position, Error>;

    fn redeem_interest(env: Env, investor: Address, symbol: Symbol, amount: Amount)
        -> Result<Amount, Error>;

    fn transfer(env: Env, symbol: Symbol, to: Address, amount: Amount) -> Result<(), Error>;
}
