use soroban_sdk::{Address, BytesN, Env};

use crate::storage::Config;

#[allow(dead_code)]
pub trait LockupTrait {
    fn initialize(env: Env, admin: Address, staking_token: Address, stokens: Address);

    /// Lock `amount` of the staking token against `property` and mint one
    /// position receipt to `recipient`. The depositor pays; zero-amount
    /// deposits are allowed and mint an empty position.
    fn deposit_to_property(
        env: Env,
        depositor: Address,
        recipient: Address,
        property: Address,
        amount: i128,
        payload: BytesN<32>,
    ) -> u64;

    // ################################################################
    //                             Queries
    // ################################################################

    fn query_locked(env: Env, property: Address) -> i128;

    fn query_total_locked(env: Env) -> i128;

    fn query_config(env: Env) -> Config;
}
