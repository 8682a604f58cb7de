use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, BytesN, Env,
};

use stakegate::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use stakegate::error::ErrorCode;

use crate::{
    events::STokensEvents,
    stokens::STokensTrait,
    storage::{
        bump_current_index, get_config, get_current_index, get_owner, get_payload, get_position,
        is_initialized, save_config, save_owner, save_payload, save_position, set_initialized,
        Config, StakingPosition,
    },
};

contractmeta!(
    key = "Description",
    val = "Non-fungible receipts for staked positions"
);

#[contract]
pub struct STokens;

#[contractimpl]
impl STokensTrait for STokens {
    fn initialize(env: Env, admin: Address, minter: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "STokens: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            &Config {
                admin: admin.clone(),
                minter,
            },
        );

        STokensEvents::initialize(&env, admin);
    }

    fn mint(env: Env, to: Address, property: Address, amount: i128, payload: BytesN<32>) -> u64 {
        let config = get_config(&env);
        config.minter.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount < 0 {
            log!(&env, "STokens: Mint: cannot record a negative stake");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        let token_id = bump_current_index(&env);

        save_owner(&env, token_id, &to);
        save_position(
            &env,
            token_id,
            &StakingPosition {
                property: property.clone(),
                amount,
            },
        );
        save_payload(&env, token_id, &payload);

        STokensEvents::mint(&env, to, property, amount, token_id);

        token_id
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let owner = match get_owner(&env, token_id) {
            Some(owner) => owner,
            None => {
                log!(&env, "STokens: Transfer: unknown position {}", token_id);
                panic_with_error!(&env, ErrorCode::PositionNotFound);
            }
        };
        if owner != from {
            log!(
                &env,
                "STokens: Transfer: sender does not own position {}",
                token_id
            );
            panic_with_error!(&env, ErrorCode::NotPositionOwner);
        }

        save_owner(&env, token_id, &to);

        STokensEvents::transfer(&env, from, to, token_id);
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn current_index(env: Env) -> u64 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_current_index(&env)
    }

    fn owner_of(env: Env, token_id: u64) -> Address {
        match get_owner(&env, token_id) {
            Some(owner) => owner,
            None => {
                log!(&env, "STokens: OwnerOf: unknown position {}", token_id);
                panic_with_error!(&env, ErrorCode::PositionNotFound);
            }
        }
    }

    fn positions(env: Env, token_id: u64) -> StakingPosition {
        match get_position(&env, token_id) {
            Some(position) => position,
            None => {
                log!(&env, "STokens: Positions: unknown position {}", token_id);
                panic_with_error!(&env, ErrorCode::PositionNotFound);
            }
        }
    }

    fn payload_of(env: Env, token_id: u64) -> BytesN<32> {
        match get_payload(&env, token_id) {
            Some(payload) => payload,
            None => {
                log!(&env, "STokens: PayloadOf: unknown position {}", token_id);
                panic_with_error!(&env, ErrorCode::PositionNotFound);
            }
        }
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }
}

#[contractimpl]
impl STokens {
    #[allow(dead_code)]
    pub fn update(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = get_config(&env).admin;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}
