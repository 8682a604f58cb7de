use soroban_sdk::{contracttype, Address, BytesN, Env};

use stakegate::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Config,
    CurrentIndex,
    Owner(u64),
    Position(u64),
    Payload(u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub minter: Address,
}

/// A staked position as recorded at mint time. The second field is the
/// amount of staking tokens locked behind the receipt.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingPosition {
    pub property: Address,
    pub amount: i128,
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
        .expect("STokens: Config not set")
}

pub fn get_current_index(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CurrentIndex)
        .unwrap_or(0u64)
}

/// Reserve and return the next position id.
pub fn bump_current_index(env: &Env) -> u64 {
    let next = get_current_index(env) + 1;
    env.storage().instance().set(&DataKey::CurrentIndex, &next);
    next
}

pub fn save_owner(env: &Env, token_id: u64, owner: &Address) {
    let key = DataKey::Owner(token_id);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_owner(env: &Env, token_id: u64) -> Option<Address> {
    let key = DataKey::Owner(token_id);
    let owner = env.storage().persistent().get(&key);
    if owner.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    owner
}

pub fn save_position(env: &Env, token_id: u64, position: &StakingPosition) {
    let key = DataKey::Position(token_id);
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_position(env: &Env, token_id: u64) -> Option<StakingPosition> {
    let key = DataKey::Position(token_id);
    let position = env.storage().persistent().get(&key);
    if position.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    position
}

pub fn save_payload(env: &Env, token_id: u64, payload: &BytesN<32>) {
    let key = DataKey::Payload(token_id);
    env.storage().persistent().set(&key, payload);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_payload(env: &Env, token_id: u64) -> Option<BytesN<32>> {
    let key = DataKey::Payload(token_id);
    let payload = env.storage().persistent().get(&key);
    if payload.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    payload
}
