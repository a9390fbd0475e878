#![no_std]

//! Compound-style money market for a single underlying token.
//!
//! Suppliers deposit underlying and receive cTokens; the exchange rate
//! between the two grows linearly with time at the configured supply rate.
//! Interest is paid out of the market's cash, which is topped up by the
//! borrowing side outside of this contract.

use shared::{
    constants::{INITIAL_EXCHANGE_RATE, MAX_SUPPLY_RATE_BPS},
    errors::Error,
    events::{INTEREST_ACCRUED, MARKET_MINT, MARKET_REDEEM, SUPPLY_RATE_SET},
    math,
    types::{Amount, MarketState},
};
use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env};

mod storage;

use storage::*;

#[contract]
pub struct YieldMarket;

#[contractimpl]
impl YieldMarket {
    /// Initialize the market
    ///
    /// # Arguments
    /// * `admin` - Address allowed to change the supply rate
    /// * `underlying` - Token supplied to the market
    /// * `supply_rate_bps` - Yearly supply rate in basis points
    pub fn initialize(
        env: Env,
        admin: Address,
        underlying: Address,
        supply_rate_bps: u32,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        if supply_rate_bps > MAX_SUPPLY_RATE_BPS {
            return Err(Error::InvRate);
        }

        set_admin(&env, &admin);
        set_state(
            &env,
            &MarketState {
                underlying,
                exchange_rate: INITIAL_EXCHANGE_RATE,
                supply_rate_bps,
                last_accrual: env.ledger().timestamp(),
                total_supply: 0,
            },
        );

        Ok(())
    }

    /// Change the supply rate (admin only). Interest up to now accrues at the old rate.
    pub fn set_supply_rate(env: Env, supply_rate_bps: u32) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        if supply_rate_bps > MAX_SUPPLY_RATE_BPS {
            return Err(Error::InvRate);
        }

        let mut state = Self::accrued_state(&env)?;
        state.supply_rate_bps = supply_rate_bps;
        set_state(&env, &state);

        env.events().publish((SUPPLY_RATE_SET,), supply_rate_bps);

        Ok(())
    }

    /// Bring the exchange rate up to the current ledger time
    pub fn accrue_interest(env: Env) -> Result<i128, Error> {
        let state = Self::accrued_state(&env)?;
        set_state(&env, &state);
        Ok(state.exchange_rate)
    }

    /// Supply `amount` of underlying, pulled from `minter` through its allowance
    ///
    /// # Returns
    /// * cTokens credited to `minter`
    ///
    /// # Errors
    /// * `ZeroAmount` - Amount is not positive or too small to mint a cToken
    pub fn mint(env: Env, minter: Address, amount: Amount) -> Result<Amount, Error> {
        minter.require_auth();

        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        let mut state = Self::accrued_state(&env)?;
        let c_tokens = math::underlying_to_c_token(amount, state.exchange_rate)?;
        if c_tokens == 0 {
            return Err(Error::ZeroAmount);
        }

        let market = env.current_contract_address();
        TokenClient::new(&env, &state.underlying).transfer_from(&market, &minter, &market, &amount);

        let balance = get_balance(&env, &minter)
            .checked_add(c_tokens)
            .ok_or(Error::Overflow)?;
        set_balance(&env, &minter, balance);
        state.total_supply = state
            .total_supply
            .checked_add(c_tokens)
            .ok_or(Error::Overflow)?;
        set_state(&env, &state);

        env.events()
            .publish((MARKET_MINT,), (minter, amount, c_tokens));

        Ok(c_tokens)
    }

    /// Burn `c_tokens` and pay out their underlying value
    ///
    /// # Returns
    /// * Underlying amount paid to `redeemer`
    pub fn redeem(env: Env, redeemer: Address, c_tokens: Amount) -> Result<Amount, Error> {
        redeemer.require_auth();

        if c_tokens <= 0 {
            return Err(Error::ZeroAmount);
        }

        let mut state = Self::accrued_state(&env)?;
        let amount = math::c_token_to_underlying(c_tokens, state.exchange_rate)?;
        Self::pay_out(&env, &mut state, &redeemer, amount, c_tokens)?;

        Ok(amount)
    }

    /// Withdraw exactly `amount` of underlying
    ///
    /// # Returns
    /// * cTokens burned from `redeemer`, rounded up
    pub fn redeem_underlying(env: Env, redeemer: Address, amount: Amount) -> Result<Amount, Error> {
        redeemer.require_auth();

        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        let mut state = Self::accrued_state(&env)?;
        let c_tokens = math::underlying_to_c_token_ceil(amount, state.exchange_rate)?;
        Self::pay_out(&env, &mut state, &redeemer, amount, c_tokens)?;

        Ok(c_tokens)
    }

    pub fn exchange_rate_stored(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.exchange_rate)
    }

    pub fn balance_of(env: Env, owner: Address) -> Amount {
        get_balance(&env, &owner)
    }

    pub fn total_supply(env: Env) -> Result<Amount, Error> {
        Ok(get_state(&env)?.total_supply)
    }

    pub fn supply_rate(env: Env) -> Result<u32, Error> {
        Ok(get_state(&env)?.supply_rate_bps)
    }

    pub fn underlying(env: Env) -> Result<Address, Error> {
        Ok(get_state(&env)?.underlying)
    }

    fn accrued_state(env: &Env) -> Result<MarketState, Error> {
        let mut state = get_state(env)?;
        let now = env.ledger().timestamp();
        if now <= state.last_accrual {
            return Ok(state);
        }

        let elapsed = now - state.last_accrual;
        state.exchange_rate =
            math::accrue_exchange_rate(state.exchange_rate, state.supply_rate_bps, elapsed)?;
        state.last_accrual = now;

        log!(env, "accrued interest", elapsed, state.exchange_rate);
        env.events()
            .publish((INTEREST_ACCRUED,), (state.exchange_rate, now));

        Ok(state)
    }

    fn pay_out(
        env: &Env,
        state: &mut MarketState,
        redeemer: &Address,
        amount: Amount,
        c_tokens: Amount,
    ) -> Result<(), Error> {
        let balance = get_balance(env, redeemer);
        if balance < c_tokens {
            return Err(Error::InsufCTokens);
        }

        let market = env.current_contract_address();
        let token = TokenClient::new(env, &state.underlying);
        if token.balance(&market) < amount {
            return Err(Error::InsufReserves);
        }

        set_balance(env, redeemer, balance - c_tokens);
        state.total_supply -= c_tokens;
        set_state(env, state);

        if amount > 0 {
            token.transfer(&market, redeemer, &amount);
        }

        env.events()
            .publish((MARKET_REDEEM,), (redeemer.clone(), amount, c_tokens));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::constants::SECONDS_PER_YEAR;
    use soroban_sdk::{
        testutils::{Address as _, Ledger},
        token::StellarAssetClient,
    };

    const START: u64 = 1_000;
    const RATE_105: i128 = 1_050_000_000_000_000_000;

    struct Setup {
        env: Env,
        market: YieldMarketClient<'static>,
        token: TokenClient<'static>,
        asset: StellarAssetClient<'static>,
        supplier: Address,
    }

    fn setup() -> Setup {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(START);

        let admin = Address::generate(&env);
        let underlying = env.register_stellar_asset_contract(admin.clone());
        let market_id = env.register_contract(None, YieldMarket);
        let market = YieldMarketClient::new(&env, &market_id);
        market.initialize(&admin, &underlying, &500);

        let supplier = Address::generate(&env);
        let asset = StellarAssetClient::new(&env, &underlying);
        asset.mint(&supplier, &1_000_000);
        let token = TokenClient::new(&env, &underlying);
        token.approve(&supplier, &market_id, &1_000_000, &(env.ledger().sequence() + 100));

        Setup {
            env,
            market,
            token,
            asset,
            supplier,
        }
    }

    fn one_year_later(env: &Env) {
        env.ledger().set_timestamp(START + SECONDS_PER_YEAR);
    }

    #[test]
    fn test_mint_at_initial_rate() {
        let s = setup();

        let minted = s.market.mint(&s.supplier, &100_000);

        assert_eq!(minted, 100_000);
        assert_eq!(s.market.balance_of(&s.supplier), 100_000);
        assert_eq!(s.market.total_supply(), 100_000);
        assert_eq!(s.token.balance(&s.market.address), 100_000);
        assert_eq!(s.token.balance(&s.supplier), 900_000);
    }

    #[test]
    fn test_accrue_interest_grows_exchange_rate() {
        let s = setup();
        s.market.mint(&s.supplier, &100_000);

        one_year_later(&s.env);
        let rate = s.market.accrue_interest();

        assert_eq!(rate, RATE_105);
        assert_eq!(s.market.exchange_rate_stored(), RATE_105);

        // a second accrual at the same timestamp changes nothing
        assert_eq!(s.market.accrue_interest(), RATE_105);
    }

    #[test]
    fn test_exchange_rate_stored_is_not_accrued() {
        let s = setup();
        one_year_later(&s.env);

        assert_eq!(s.market.exchange_rate_stored(), INITIAL_EXCHANGE_RATE);
    }

    #[test]
    fn test_redeem_underlying_pays_interest_from_cash() {
        let s = setup();
        s.market.mint(&s.supplier, &100_000);
        // borrowers repaid with interest
        s.asset.mint(&s.market.address, &10_000);

        one_year_later(&s.env);
        let burned = s.market.redeem_underlying(&s.supplier, &5_000);

        // 5_000 / 1.05 = 4761.9, rounded up
        assert_eq!(burned, 4_762);
        assert_eq!(s.market.balance_of(&s.supplier), 95_238);
        assert_eq!(s.token.balance(&s.supplier), 905_000);
    }

    #[test]
    fn test_redeem_all() {
        let s = setup();
        s.market.mint(&s.supplier, &100_000);
        s.asset.mint(&s.market.address, &10_000);

        one_year_later(&s.env);
        let paid = s.market.redeem(&s.supplier, &100_000);

        assert_eq!(paid, 105_000);
        assert_eq!(s.market.balance_of(&s.supplier), 0);
        assert_eq!(s.market.total_supply(), 0);
    }

    #[test]
    fn test_redeem_more_than_balance() {
        let s = setup();
        s.market.mint(&s.supplier, &1_000);

        let result = s.market.try_redeem(&s.supplier, &1_001);
        assert_eq!(result, Err(Ok(Error::InsufCTokens)));
    }

    #[test]
    fn test_redeem_without_cash() {
        let s = setup();
        s.market.mint(&s.supplier, &100_000);

        one_year_later(&s.env);
        let result = s.market.try_redeem(&s.supplier, &100_000);
        assert_eq!(result, Err(Ok(Error::InsufReserves)));
    }

    #[test]
    fn test_mint_zero_amount() {
        let s = setup();

        assert_eq!(s.market.try_mint(&s.supplier, &0), Err(Ok(Error::ZeroAmount)));
        assert_eq!(
            s.market.try_redeem_underlying(&s.supplier, &0),
            Err(Ok(Error::ZeroAmount))
        );
    }

    #[test]
    fn test_mint_without_allowance_fails() {
        let s = setup();
        let stranger = Address::generate(&s.env);
        s.asset.mint(&stranger, &1_000);

        let result = s.market.try_mint(&stranger, &1_000);
        assert!(result.is_err());
        assert_eq!(s.market.balance_of(&stranger), 0);
    }

    #[test]
    fn test_set_supply_rate_accrues_first() {
        let s = setup();
        one_year_later(&s.env);

        s.market.set_supply_rate(&1_000);

        assert_eq!(s.market.exchange_rate_stored(), RATE_105);
        assert_eq!(s.market.supply_rate(), 1_000);
        assert_eq!(s.market.try_set_supply_rate(&10_001), Err(Ok(Error::InvRate)));
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #2)")]
    fn test_initialize_twice() {
        let s = setup();
        let admin = Address::generate(&s.env);
        s.market.initialize(&admin, &s.token.address, &500);
    }
}
