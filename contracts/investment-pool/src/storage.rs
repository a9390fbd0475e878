use shared::errors::Error;
use shared::types::{Amount, Position, TokenConfig};
use soroban_sdk::{contracttype, Address, Env, Symbol, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Symbols,
    Token(Symbol),
    Position(Address, Symbol),
    TotalCTokens(Symbol),
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInit)
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_symbols(env: &Env, symbols: &Vec<Symbol>) {
    env.storage().instance().set(&DataKey::Symbols, symbols);
}

pub fn get_symbols(env: &Env) -> Vec<Symbol> {
    env.storage()
        .instance()
        .get(&DataKey::Symbols)
        .unwrap_or(Vec::new(env))
}

pub fn set_token_config(env: &Env, config: &TokenConfig) {
    env.storage()
        .instance()
        .set(&DataKey::Token(config.symbol.clone()), config);
}

pub fn find_token_config(env: &Env, symbol: &Symbol) -> Option<TokenConfig> {
    env.storage().instance().get(&DataKey::Token(symbol.clone()))
}

/// Allow-listed token config for `symbol`
pub fn get_token_config(env: &Env, symbol: &Symbol) -> Result<TokenConfig, Error> {
    find_token_config(env, symbol).ok_or(Error::InvSymbol)
}

pub fn get_position(env: &Env, investor: &Address, symbol: &Symbol) -> Position {
    env.storage()
        .persistent()
        .get(&DataKey::Position(investor.clone(), symbol.clone()))
        .unwrap_or_default()
}

pub fn set_position(env: &Env, investor: &Address, symbol: &Symbol, position: &Position) {
    env.storage()
        .persistent()
        .set(&DataKey::Position(investor.clone(), symbol.clone()), position);
}

/// Sum of the cTokens of every position in `symbol`
pub fn get_total_c_tokens(env: &Env, symbol: &Symbol) -> Amount {
    env.storage()
        .persistent()
        .get(&DataKey::TotalCTokens(symbol.clone()))
        .unwrap_or(0)
}

pub fn set_total_c_tokens(env: &Env, symbol: &Symbol, total: Amount) {
    env.storage()
        .persistent()
        .set(&DataKey::TotalCTokens(symbol.clone()), &total);
}
