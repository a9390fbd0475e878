#![no_std]

use shared::{
    errors::Error,
    events::{DONATION, INVESTMENT, POOL_OPENED},
    interfaces::{PoolClient, RegistryClient},
    math,
    types::{Amount, Donation, DoneeSplit},
};
use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env, Symbol, Vec};

mod storage;
mod validation;


#[cfg(test)]
mod test_simulation;

use storage::*;

#[contract]
pub struct SmartDonation;

#[contractimpl]
impl SmartDonation {
    /// Wire the router to its donee registry and investment pool.
    ///
    /// The pool ownership must be transferred to this contract, and the
    /// registry must accept it as donation recorder, before anyone invests.
    pub fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        pool: Address,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();
        set_config(&env, &admin, &registry, &pool);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    pub fn get_registry(env: Env) -> Result<Address, Error> {
        get_registry(&env)
    }

    pub fn get_pool(env: Env) -> Result<Address, Error> {
        get_pool(&env)
    }

    /// Open the caller's account in the investment pool
    ///
    /// # Errors
    /// * `PoolExists` - The investor already has an account
    pub fn open_investment_pool(env: Env, investor: Address) -> Result<Address, Error> {
        investor.require_auth();

        if is_opened(&env, &investor) {
            return Err(Error::PoolExists);
        }
        Self::open(&env, &investor)
    }

    /// Pool holding the investor's positions
    pub fn investment_pool(env: Env, investor: Address) -> Result<Address, Error> {
        if !is_opened(&env, &investor) {
            return Err(Error::PoolNF);
        }
        get_pool(&env)
    }

    /// Invest `amount` of `symbol` from the caller; the router must be allowed
    /// to spend `amount` on the investor's behalf.
    ///
    /// # Errors
    /// * `InvSymbol` - Token is not invertible
    /// * `ZeroAmount` - Amount is not positive
    pub fn invest_token(
        env: Env,
        investor: Address,
        symbol: Symbol,
        amount: Amount,
    ) -> Result<(), Error> {
        investor.require_auth();

        let pool = PoolClient::new(&env, &get_pool(&env)?);
        let config = pool.get_token_config(&symbol).ok_or(Error::InvSymbol)?;
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        if !is_opened(&env, &investor) {
            Self::open(&env, &investor)?;
        }

        TokenClient::new(&env, &config.token).transfer_from(
            &env.current_contract_address(),
            &investor,
            &pool.address,
            &amount,
        );
        pool.invest(&investor, &symbol, &amount);

        env.events()
            .publish((INVESTMENT,), (investor, symbol, amount));

        Ok(())
    }

    pub fn get_token_invested_amount(
        env: Env,
        investor: Address,
        symbol: Symbol,
    ) -> Result<Amount, Error> {
        let pool = Self::investor_pool(&env, &investor, &symbol)?;
        Ok(pool.get_invested_amount(&investor, &symbol))
    }

    pub fn get_token_generated_interests(
        env: Env,
        investor: Address,
        symbol: Symbol,
    ) -> Result<Amount, Error> {
        let pool = Self::investor_pool(&env, &investor, &symbol)?;
        Ok(pool.get_generated_interest(&investor, &symbol))
    }

    pub fn get_invertible_token_symbols(env: Env) -> Result<Vec<Symbol>, Error> {
        let pool = PoolClient::new(&env, &get_pool(&env)?);
        Ok(pool.get_invertible_token_symbols())
    }

    pub fn get_trusted_donees(env: Env) -> Result<Vec<Address>, Error> {
        let registry = RegistryClient::new(&env, &get_registry(&env)?);
        Ok(registry.get_trusted_donees())
    }

    /// Donate the interest generated by every invested token of the caller.
    ///
    /// Each donee receives `interest * percentage / 100` of every token. Only
    /// the distributed amount is redeemed, so the truncation residue stays
    /// invested as interest for the next donation and the principal is never
    /// touched.
    ///
    /// # Errors
    /// * `NoDonees` - Empty split list
    /// * `ZeroAddr` - A donee address is the null identity
    /// * `InvPct` - A percentage is outside 1-100
    /// * `Untrusted` - A donee is not registered or is disabled
    /// * `InvTotalPct` - Percentages do not add up to 100
    /// * `PoolNF` - The caller never opened an account
    /// * `NoInterests` - Nothing to donate
    pub fn donate_generated_interests(
        env: Env,
        investor: Address,
        donees: Vec<DoneeSplit>,
    ) -> Result<Vec<Donation>, Error> {
        investor.require_auth();

        let registry = RegistryClient::new(&env, &get_registry(&env)?);
        validation::validate_splits(&env, &registry, &donees)?;

        if !is_opened(&env, &investor) {
            return Err(Error::PoolNF);
        }
        let pool = PoolClient::new(&env, &get_pool(&env)?);

        let mut donations = Vec::new(&env);
        for symbol in pool.get_invertible_token_symbols().iter() {
            let interest = pool.get_generated_interest(&investor, &symbol);
            if interest <= 0 {
                continue;
            }

            let mut distributed: Amount = 0;
            for split in donees.iter() {
                distributed = distributed
                    .checked_add(math::percentage_of(interest, split.percentage)?)
                    .ok_or(Error::Overflow)?;
            }
            if distributed == 0 {
                continue;
            }

            log!(&env, "donating interest", symbol, interest, distributed);
            pool.redeem_interest(&investor, &symbol, &distributed);

            for split in donees.iter() {
                let amount = math::percentage_of(interest, split.percentage)?;
                if amount == 0 {
                    continue;
                }

                pool.transfer(&symbol, &split.donee, &amount);
                registry.record_donation(&split.donee, &symbol, &amount);

                env.events().publish(
                    (DONATION,),
                    (investor.clone(), split.donee.clone(), symbol.clone(), amount),
                );
                donations.push_back(Donation {
                    donee: split.donee,
                    symbol: symbol.clone(),
                    amount,
                });
            }
        }

        if donations.is_empty() {
            return Err(Error::NoInterests);
        }

        Ok(donations)
    }

    fn open(env: &Env, investor: &Address) -> Result<Address, Error> {
        let pool = get_pool(env)?;
        set_opened(env, investor);
        env.events()
            .publish((POOL_OPENED,), (investor.clone(), pool.clone()));
        Ok(pool)
    }

    /// Pool client for read operations, checking the symbol before the account
    fn investor_pool<'a>(
        env: &'a Env,
        investor: &Address,
        symbol: &Symbol,
    ) -> Result<PoolClient<'a>, Error> {
        let pool = PoolClient::new(env, &get_pool(env)?);
        if pool.get_token_config(symbol).is_none() {
            return Err(Error::InvSymbol);
        }
        if !is_opened(env, investor) {
            return Err(Error::PoolNF);
        }
        Ok(pool)
    }
}
