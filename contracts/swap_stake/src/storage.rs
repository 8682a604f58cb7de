use soroban_sdk::{contracttype, Address, Env, Symbol};

use stakegate::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

/// Role gating the bridge mint path.
pub const CALL_MINTFOR: &str = "call_mintfor";

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Config,
    GatewayFee(Address, Address), // (gateway, asset)
    EcosystemFee(Address),
    Role(Symbol, Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub staking_token: Address,
    pub router: Address,
    pub lockup: Address,
    pub stokens: Address,
    pub ecosystem_fee_bps: i64,
    pub ecosystem_fee_threshold_bps: i64,
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
        .expect("Swap and Stake: Config not set")
}

pub fn get_gateway_fee(env: &Env, gateway: &Address, asset: &Address) -> i128 {
    let key = DataKey::GatewayFee(gateway.clone(), asset.clone());
    if let Some(accrued) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
        accrued
    } else {
        0
    }
}

pub fn save_gateway_fee(env: &Env, gateway: &Address, asset: &Address, accrued: i128) {
    let key = DataKey::GatewayFee(gateway.clone(), asset.clone());
    env.storage().persistent().set(&key, &accrued);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_ecosystem_fee(env: &Env, asset: &Address) -> i128 {
    let key = DataKey::EcosystemFee(asset.clone());
    if let Some(accrued) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
        accrued
    } else {
        0
    }
}

pub fn save_ecosystem_fee(env: &Env, asset: &Address, accrued: i128) {
    let key = DataKey::EcosystemFee(asset.clone());
    env.storage().persistent().set(&key, &accrued);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Whether `account` was explicitly granted `role`. Owner privileges are
/// layered on top of this by the contract.
pub fn has_role_grant(env: &Env, role: &Symbol, account: &Address) -> bool {
    let key = DataKey::Role(role.clone(), account.clone());
    if env.storage().persistent().has(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
        true
    } else {
        false
    }
}

pub fn save_role_grant(env: &Env, role: &Symbol, account: &Address) {
    let key = DataKey::Role(role.clone(), account.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_role_grant(env: &Env, role: &Symbol, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Role(role.clone(), account.clone()));
}
