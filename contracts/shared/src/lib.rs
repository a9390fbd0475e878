#![no_std]

pub mod constants;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod math;
pub mod types;

use soroban_sdk::{Address, Env, String};

pub use constants::{MAX_PERCENTAGE, MIN_PERCENTAGE, PERCENT_TOTAL};

/// The all-zero contract address, standing in for the null identity.
pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, constants::ZERO_ADDRESS_STRKEY))
}

/// Whether `address` is the null identity.
pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == zero_address(env)
}
