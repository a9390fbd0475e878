#![no_std]

use shared::{
    constants::MAX_NAME_LEN,
    errors::Error,
    events::{DONEE_ADDED, DONEE_DISABLED, DONEE_ENABLED, RECORDER_SET},
    is_zero_address,
    types::{Amount, Donee},
};
use soroban_sdk::{contract, contractimpl, Address, Env, Map, String, Symbol, Vec};

mod storage;


use storage::*;

#[contract]
pub struct DoneeRegistry;

#[contractimpl]
impl DoneeRegistry {
    /// Initialize the registry with the admin allowed to manage donees
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();
        set_admin(&env, &admin);
        Ok(())
    }

    /// Register a new trusted donee (admin only)
    ///
    /// # Arguments
    /// * `name` - Display name, 1 to 32 bytes
    /// * `address` - Address receiving the donations
    ///
    /// # Errors
    /// * `ZeroAddr` - Address is the null identity
    /// * `InvName` - Name is empty or longer than 32 bytes
    /// * `DoneeExists` - Address is already registered
    pub fn add_donee(env: Env, name: String, address: Address) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        if is_zero_address(&env, &address) {
            return Err(Error::ZeroAddr);
        }
        if name.len() == 0 || name.len() > MAX_NAME_LEN {
            return Err(Error::InvName);
        }
        if donee_exists(&env, &address) {
            return Err(Error::DoneeExists);
        }

        let donee = Donee {
            name: name.clone(),
            address: address.clone(),
            enabled: true,
            total_donated: Map::new(&env),
        };
        set_donee(&env, &donee);
        push_donee_list(&env, &address);

        env.events().publish((DONEE_ADDED,), (name, address));

        Ok(())
    }

    /// Disable a donee; it stays registered and can be enabled again (admin only)
    pub fn disable_donee(env: Env, address: Address) -> Result<(), Error> {
        Self::set_enabled(&env, &address, false)
    }

    /// Enable a previously disabled donee (admin only)
    pub fn enable_donee(env: Env, address: Address) -> Result<(), Error> {
        Self::set_enabled(&env, &address, true)
    }

    /// Whether `address` is a registered and enabled donee
    pub fn is_donee_enabled(env: Env, address: Address) -> bool {
        get_donee(&env, &address)
            .map(|donee| donee.enabled)
            .unwrap_or(false)
    }

    pub fn get_donee(env: Env, address: Address) -> Result<Donee, Error> {
        get_donee(&env, &address)
    }

    /// Enabled donees in registration order
    pub fn get_trusted_donees(env: Env) -> Vec<Address> {
        let mut trusted = Vec::new(&env);
        for address in get_donee_list(&env).iter() {
            if let Ok(donee) = get_donee(&env, &address) {
                if donee.enabled {
                    trusted.push_back(address);
                }
            }
        }
        trusted
    }

    /// Set the contract allowed to record donations (admin only)
    pub fn set_donation_recorder(env: Env, recorder: Address) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        set_recorder(&env, &recorder);
        env.events().publish((RECORDER_SET,), recorder);

        Ok(())
    }

    /// Add `amount` of `symbol` to the donee's donated total (recorder only)
    ///
    /// # Errors
    /// * `Unauthorized` - No recorder configured
    /// * `ZeroAmount` - Amount is not positive
    /// * `DoneeNF` - Donee is not registered
    pub fn record_donation(
        env: Env,
        donee: Address,
        symbol: Symbol,
        amount: Amount,
    ) -> Result<(), Error> {
        let recorder = get_recorder(&env).ok_or(Error::Unauthorized)?;
        recorder.require_auth();

        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        let mut entry = get_donee(&env, &donee)?;
        let total = entry
            .total_donated
            .get(symbol.clone())
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        entry.total_donated.set(symbol, total);
        set_donee(&env, &entry);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    fn set_enabled(env: &Env, address: &Address, enabled: bool) -> Result<(), Error> {
        let admin = get_admin(env)?;
        admin.require_auth();

        let mut donee = get_donee(env, address)?;
        donee.enabled = enabled;
        set_donee(env, &donee);

        let topic = if enabled { DONEE_ENABLED } else { DONEE_DISABLED };
        env.events().publish((topic,), (donee.name, address.clone()));

        Ok(())
    }
}
