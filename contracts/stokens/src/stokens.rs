use soroban_sdk::{Address, BytesN, Env};

use crate::storage::{Config, StakingPosition};

#[allow(dead_code)]
pub trait STokensTrait {
    fn initialize(env: Env, admin: Address, minter: Address);

    /// Mint the next position receipt to `to`. Only the configured minter
    /// (the lockup contract) may call this.
    fn mint(env: Env, to: Address, property: Address, amount: i128, payload: BytesN<32>) -> u64;

    fn transfer(env: Env, from: Address, to: Address, token_id: u64);

    // ################################################################
    //                             Queries
    // ################################################################

    /// The id of the most recently minted position; the next mint receives
    /// `current_index() + 1`.
    fn current_index(env: Env) -> u64;

    fn owner_of(env: Env, token_id: u64) -> Address;

    fn positions(env: Env, token_id: u64) -> StakingPosition;

    fn payload_of(env: Env, token_id: u64) -> BytesN<32>;

    fn query_config(env: Env) -> Config;
}
