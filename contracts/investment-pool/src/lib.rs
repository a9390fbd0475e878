#![no_std]

//! Per-investor accounting of stablecoins invested in yield markets.
//!
//! The pool holds the market tokens of every investor; each investor's share
//! is tracked as a `Position` keyed by `(investor, symbol)`. Only the owner
//! (the donation router once ownership is transferred) can move funds.

use shared::{
    errors::Error,
    events::{INTEREST_REDEEMED, INVESTED, OWNERSHIP_TRANSFERRED, POOL_TRANSFER},
    interfaces::MarketClient,
    math,
    types::{Amount, Position, TokenConfig},
};
use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env, Symbol, Vec};

mod storage;


use storage::*;

#[contract]
pub struct InvestmentPool;

#[contractimpl]
impl InvestmentPool {
    /// Initialize the pool with its owner and the allow-list of invertible tokens
    ///
    /// # Errors
    /// * `AlreadyInit` - Pool is already initialized
    /// * `InvInput` - Token list is empty
    /// * `DupSymbol` - A symbol appears more than once
    pub fn initialize(env: Env, owner: Address, tokens: Vec<TokenConfig>) -> Result<(), Error> {
        if has_owner(&env) {
            return Err(Error::AlreadyInit);
        }
        owner.require_auth();

        if tokens.is_empty() {
            return Err(Error::InvInput);
        }

        let mut symbols: Vec<Symbol> = Vec::new(&env);
        for config in tokens.iter() {
            if symbols.contains(&config.symbol) {
                return Err(Error::DupSymbol);
            }
            symbols.push_back(config.symbol.clone());
            set_token_config(&env, &config);
        }

        set_symbols(&env, &symbols);
        set_owner(&env, &owner);

        Ok(())
    }

    /// Hand the pool over to a new owner (owner only)
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), Error> {
        let owner = Self::require_owner(&env)?;

        set_owner(&env, &new_owner);
        env.events()
            .publish((OWNERSHIP_TRANSFERRED,), (owner, new_owner));

        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn get_token_config(env: Env, symbol: Symbol) -> Option<TokenConfig> {
        find_token_config(&env, &symbol)
    }

    pub fn get_invertible_token_symbols(env: Env) -> Vec<Symbol> {
        get_symbols(&env)
    }

    /// Invest `amount` of the pool's free `symbol` balance on behalf of `investor` (owner only)
    ///
    /// # Returns
    /// * cTokens minted for the investor
    ///
    /// # Errors
    /// * `InvSymbol` - Symbol is not allow-listed
    /// * `ZeroAmount` - Amount is not positive
    /// * `InsufFunds` - The pool does not hold `amount` of free underlying
    pub fn invest(
        env: Env,
        investor: Address,
        symbol: Symbol,
        amount: Amount,
    ) -> Result<Amount, Error> {
        Self::require_owner(&env)?;

        let config = get_token_config(&env, &symbol)?;
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        let pool = env.current_contract_address();
        let token = TokenClient::new(&env, &config.token);
        if token.balance(&pool) < amount {
            return Err(Error::InsufFunds);
        }

        token.approve(&pool, &config.c_token, &amount, &env.ledger().sequence());
        let minted = MarketClient::new(&env, &config.c_token).mint(&pool, &amount);

        let mut position = get_position(&env, &investor, &symbol);
        position.principal = position
            .principal
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        position.c_tokens = position
            .c_tokens
            .checked_add(minted)
            .ok_or(Error::Overflow)?;
        set_position(&env, &investor, &symbol, &position);

        let total = get_total_c_tokens(&env, &symbol)
            .checked_add(minted)
            .ok_or(Error::Overflow)?;
        set_total_c_tokens(&env, &symbol, total);

        log!(&env, "invested", investor, symbol, amount, minted);
        env.events()
            .publish((INVESTED,), (investor, symbol, amount, minted));

        Ok(minted)
    }

    /// Cumulative principal invested by `investor` in `symbol`
    pub fn get_invested_amount(env: Env, investor: Address, symbol: Symbol) -> Result<Amount, Error> {
        get_token_config(&env, &symbol)?;
        Ok(get_position(&env, &investor, &symbol).principal)
    }

    /// Interest generated by the position, valued at the market's stored exchange rate
    pub fn get_generated_interest(
        env: Env,
        investor: Address,
        symbol: Symbol,
    ) -> Result<Amount, Error> {
        let config = get_token_config(&env, &symbol)?;
        let position = get_position(&env, &investor, &symbol);
        Self::interest_of(&env, &config, &position)
    }

    pub fn get_position(env: Env, investor: Address, symbol: Symbol) -> Result<Position, Error> {
        get_token_config(&env, &symbol)?;
        Ok(get_position(&env, &investor, &symbol))
    }

    pub fn get_total_c_tokens(env: Env, symbol: Symbol) -> Result<Amount, Error> {
        get_token_config(&env, &symbol)?;
        Ok(get_total_c_tokens(&env, &symbol))
    }

    /// Withdraw `amount` of generated interest from the market into the pool (owner only).
    /// The principal is left untouched; a non-positive amount is a no-op.
    ///
    /// # Errors
    /// * `InvSymbol` - Symbol is not allow-listed
    /// * `InsufInterest` - Amount exceeds the generated interest
    pub fn redeem_interest(
        env: Env,
        investor: Address,
        symbol: Symbol,
        amount: Amount,
    ) -> Result<Amount, Error> {
        Self::require_owner(&env)?;

        let config = get_token_config(&env, &symbol)?;
        if amount <= 0 {
            return Ok(0);
        }

        let mut position = get_position(&env, &investor, &symbol);
        let interest = Self::interest_of(&env, &config, &position)?;
        if amount > interest {
            return Err(Error::InsufInterest);
        }

        let pool = env.current_contract_address();
        let burned = MarketClient::new(&env, &config.c_token).redeem_underlying(&pool, &amount);

        position.c_tokens -= burned;
        set_position(&env, &investor, &symbol, &position);
        set_total_c_tokens(&env, &symbol, get_total_c_tokens(&env, &symbol) - burned);

        log!(&env, "redeemed interest", investor, symbol, amount, burned);
        env.events()
            .publish((INTEREST_REDEEMED,), (investor, symbol, amount, burned));

        Ok(amount)
    }

    /// Withdraw all the generated interest of the position (owner only).
    /// Nothing to redeem is not an error: it returns 0 without side effects.
    pub fn redeem_generated_interests(
        env: Env,
        investor: Address,
        symbol: Symbol,
    ) -> Result<Amount, Error> {
        let config = get_token_config(&env, &symbol)?;
        let interest = Self::interest_of(&env, &config, &get_position(&env, &investor, &symbol))?;
        Self::redeem_interest(env, investor, symbol, interest)
    }

    /// Move free underlying held by the pool (owner only)
    ///
    /// # Errors
    /// * `InvSymbol` - Symbol is not allow-listed
    /// * `ZeroAmount` - Amount is not positive
    /// * `InsufFunds` - The pool holds less than `amount`
    pub fn transfer(env: Env, symbol: Symbol, to: Address, amount: Amount) -> Result<(), Error> {
        Self::require_owner(&env)?;

        let config = get_token_config(&env, &symbol)?;
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        let pool = env.current_contract_address();
        let token = TokenClient::new(&env, &config.token);
        if token.balance(&pool) < amount {
            return Err(Error::InsufFunds);
        }
        token.transfer(&pool, &to, &amount);

        env.events().publish((POOL_TRANSFER,), (symbol, to, amount));

        Ok(())
    }

    fn require_owner(env: &Env) -> Result<Address, Error> {
        let owner = get_owner(env)?;
        owner.require_auth();
        Ok(owner)
    }

    fn interest_of(env: &Env, config: &TokenConfig, position: &Position) -> Result<Amount, Error> {
        if position.c_tokens == 0 {
            return Ok(0);
        }
        let rate = MarketClient::new(env, &config.c_token).exchange_rate_stored();
        math::generated_interest(position.principal, position.c_tokens, rate)
    }
}
