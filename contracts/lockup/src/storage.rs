use soroban_sdk::{contracttype, Address, Env};

use stakegate::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Config,
    Locked(Address),
    TotalLocked,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub staking_token: Address,
    pub stokens: Address,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Lockup: Config not set")
}

pub fn get_locked(env: &Env, property: &Address) -> i128 {
    let key = DataKey::Locked(property.clone());
    if let Some(locked) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
        locked
    } else {
        0
    }
}

pub fn save_locked(env: &Env, property: &Address, locked: i128) {
    let key = DataKey::Locked(property.clone());
    env.storage().persistent().set(&key, &locked);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_total_locked(env: &Env) -> i128 {
    let key = DataKey::TotalLocked;
    if let Some(total) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
        total
    } else {
        0
    }
}

pub fn save_total_locked(env: &Env, total: i128) {
    let key = DataKey::TotalLocked;
    env.storage().persistent().set(&key, &total);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
