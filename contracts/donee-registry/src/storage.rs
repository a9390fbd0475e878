use shared::errors::Error;
use shared::types::Donee;
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Recorder,
    Donee(Address),
    DoneeList,
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInit)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_recorder(env: &Env, recorder: &Address) {
    env.storage().instance().set(&DataKey::Recorder, recorder);
}

pub fn get_recorder(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Recorder)
}

pub fn set_donee(env: &Env, donee: &Donee) {
    env.storage()
        .persistent()
        .set(&DataKey::Donee(donee.address.clone()), donee);
}

pub fn get_donee(env: &Env, address: &Address) -> Result<Donee, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Donee(address.clone()))
        .ok_or(Error::DoneeNF)
}

pub fn donee_exists(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Donee(address.clone()))
}

/// Registered donee addresses in registration order
pub fn get_donee_list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::DoneeList)
        .unwrap_or(Vec::new(env))
}

pub fn push_donee_list(env: &Env, address: &Address) {
    let mut list = get_donee_list(env);
    list.push_back(address.clone());
    env.storage().persistent().set(&DataKey::DoneeList, &list);
}
