use shared::errors::Error;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Registry,
    Pool,
    /// Investor has an open account in the pool
    Opened(Address),
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_config(env: &Env, admin: &Address, registry: &Address, pool: &Address) {
    let storage = env.storage().instance();
    storage.set(&DataKey::Admin, admin);
    storage.set(&DataKey::Registry, registry);
    storage.set(&DataKey::Pool, pool);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInit)
}

pub fn get_registry(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Registry)
        .ok_or(Error::NotInit)
}

pub fn get_pool(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .ok_or(Error::NotInit)
}

pub fn is_opened(env: &Env, investor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Opened(investor.clone()))
}

pub fn set_opened(env: &Env, investor: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Opened(investor.clone()), &true);
}
