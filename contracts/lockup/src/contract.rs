use sep_41_token::TokenClient;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, BytesN, Env, IntoVal,
    Symbol,
};

use stakegate::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use stakegate::error::ErrorCode;
use stakegate::math::safe_math::SafeMath;

use crate::{
    events::LockupEvents,
    lockup::LockupTrait,
    storage::{
        get_config, get_locked, get_total_locked, is_initialized, save_config, save_locked,
        save_total_locked, set_initialized, Config,
    },
};

contractmeta!(
    key = "Description",
    val = "Records staked value per property and mints position receipts"
);

#[contract]
pub struct Lockup;

#[contractimpl]
impl LockupTrait for Lockup {
    fn initialize(env: Env, admin: Address, staking_token: Address, stokens: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "Lockup: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            &Config {
                admin: admin.clone(),
                staking_token,
                stokens,
            },
        );

        LockupEvents::initialize(&env, admin);
    }

    fn deposit_to_property(
        env: Env,
        depositor: Address,
        recipient: Address,
        property: Address,
        amount: i128,
        payload: BytesN<32>,
    ) -> u64 {
        depositor.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);

        if amount < 0 {
            log!(&env, "Lockup: Deposit: cannot lock a negative amount");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        if amount > 0 {
            TokenClient::new(&env, &config.staking_token).transfer(
                &depositor,
                &env.current_contract_address(),
                &amount,
            );
        }

        let locked = match get_locked(&env, &property).safe_add(amount, &env) {
            Ok(locked) => locked,
            Err(err) => panic_with_error!(&env, err),
        };
        save_locked(&env, &property, locked);

        let total = match get_total_locked(&env).safe_add(amount, &env) {
            Ok(total) => total,
            Err(err) => panic_with_error!(&env, err),
        };
        save_total_locked(&env, total);

        let token_id: u64 = env.invoke_contract(
            &config.stokens,
            &Symbol::new(&env, "mint"),
            (recipient, property.clone(), amount, payload).into_val(&env),
        );

        LockupEvents::lockedup(&env, depositor, property, amount, token_id);

        token_id
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn query_locked(env: Env, property: Address) -> i128 {
        get_locked(&env, &property)
    }

    fn query_total_locked(env: Env) -> i128 {
        get_total_locked(&env)
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }
}

#[contractimpl]
impl Lockup {
    #[allow(dead_code)]
    pub fn update(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = get_config(&env).admin;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}
