use sep_41_token::TokenClient;
use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    contract, contractimpl, contractmeta, log, panic_with_error, vec, Address, BytesN, Env,
    IntoVal, Symbol, Vec,
};

use stakegate::error::ErrorCode;
use stakegate::math::fees::{self, DepositSplit};
use stakegate::math::safe_math::SafeMath;
use stakegate::types::MintAmounts;
use stakegate::validate_bps;
use stakegate::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

use crate::{
    events::SwapStakeEvents,
    router,
    storage::{
        get_config, get_ecosystem_fee, get_gateway_fee, has_role_grant, is_initialized,
        remove_role_grant, save_config, save_ecosystem_fee, save_gateway_fee, save_role_grant,
        set_initialized, Config, CALL_MINTFOR,
    },
    swap_stake::SwapStakeTrait,
};

contractmeta!(
    key = "Description",
    val = "Swaps a deposit into the staking token and stakes it in one call"
);

#[contract]
pub struct SwapStake;

#[contractimpl]
impl SwapStakeTrait for SwapStake {
    fn initialize(
        env: Env,
        admin: Address,
        staking_token: Address,
        router: Address,
        lockup: Address,
        stokens: Address,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Swap and Stake: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            &Config {
                owner: admin.clone(),
                staking_token,
                router,
                lockup,
                stokens,
                ecosystem_fee_bps: 0,
                ecosystem_fee_threshold_bps: 0,
            },
        );

        SwapStakeEvents::initialize(&env, admin);
    }

    #[allow(clippy::too_many_arguments)]
    fn swap_and_stake(
        env: Env,
        sender: Address,
        deposit_asset: Address,
        path: Vec<Address>,
        property: Address,
        amount: i128,
        amount_out_min: i128,
        deadline: u64,
        payload: BytesN<32>,
        gateway: Option<Address>,
        gateway_fee_bps: i64,
    ) -> u64 {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);

        check_deadline(&env, deadline);

        let path_len = path.len();
        if path_len < 2
            || path.get(0) != Some(deposit_asset.clone())
            || path.get(path_len - 1) != Some(config.staking_token.clone())
        {
            log!(
                &env,
                "Swap and Stake: Swap and stake: path must route the deposit asset into the staking token"
            );
            panic_with_error!(&env, ErrorCode::InvalidPath);
        }

        // Fee settlement only runs for gateway-bearing deposits; a direct
        // deposit swaps the full amount.
        let split = match gateway {
            Some(_) => match fees::split_deposit(
                &env,
                amount,
                gateway_fee_bps,
                config.ecosystem_fee_bps,
                config.ecosystem_fee_threshold_bps,
            ) {
                Ok(split) => split,
                Err(err) => panic_with_error!(&env, err),
            },
            None => {
                if gateway_fee_bps != 0 {
                    log!(
                        &env,
                        "Swap and Stake: Swap and stake: gateway fee bps passed without a gateway"
                    );
                    panic_with_error!(&env, ErrorCode::InvalidFee);
                }
                if amount <= 0 {
                    log!(&env, "Swap and Stake: Swap and stake: must pass a non zero deposit");
                    panic_with_error!(&env, ErrorCode::InsufficientDeposit);
                }
                DepositSplit {
                    ecosystem_fee: 0,
                    gateway_fee: 0,
                    swap_input: amount,
                }
            }
        };

        let this = env.current_contract_address();
        TokenClient::new(&env, &deposit_asset).transfer(&sender, &this, &amount);

        if let Some(gateway) = gateway {
            if split.gateway_fee > 0 {
                credit_gateway_fee(&env, &gateway, &deposit_asset, split.gateway_fee);
            }
        }
        if split.ecosystem_fee > 0 {
            credit_ecosystem_fee(&env, &deposit_asset, split.ecosystem_fee);
        }

        authorize_token_transfer(&env, &deposit_asset, &config.router, split.swap_input);
        let amounts = router::swap_exact_tokens_for_tokens(
            &env,
            &config.router,
            split.swap_input,
            amount_out_min,
            &path,
            &this,
            deadline,
        );
        let amount_out = match amounts.last() {
            Some(amount_out) if amount_out >= amount_out_min => amount_out,
            _ => {
                log!(
                    &env,
                    "Swap and Stake: Swap and stake: swap returned less than the requested minimum"
                );
                panic_with_error!(&env, ErrorCode::InsufficientOutputAmount);
            }
        };

        authorize_token_transfer(&env, &config.staking_token, &config.lockup, amount_out);
        let token_id: u64 = env.invoke_contract(
            &config.lockup,
            &Symbol::new(&env, "deposit_to_property"),
            (
                this,
                sender.clone(),
                property.clone(),
                amount_out,
                payload,
            )
                .into_val(&env),
        );

        SwapStakeEvents::staked(
            &env,
            sender,
            property,
            deposit_asset,
            amount,
            split.ecosystem_fee,
            split.gateway_fee,
            amount_out,
            token_id,
        );

        token_id
    }

    fn claim(env: Env, sender: Address, asset: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let accrued = get_gateway_fee(&env, &sender, &asset);
        if accrued == 0 {
            return;
        }

        save_gateway_fee(&env, &sender, &asset, 0);
        TokenClient::new(&env, &asset).transfer(&env.current_contract_address(), &sender, &accrued);

        SwapStakeEvents::withdrawn(&env, sender, asset, accrued);
    }

    fn claim_ecosystem_fees(env: Env, asset: Address) {
        let config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let accrued = get_ecosystem_fee(&env, &asset);
        if accrued == 0 {
            return;
        }

        save_ecosystem_fee(&env, &asset, 0);
        TokenClient::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &config.owner,
            &accrued,
        );

        SwapStakeEvents::ecosystem_withdrawn(&env, config.owner, asset, accrued);
    }

    fn mint_for(
        env: Env,
        sender: Address,
        to: Address,
        property: Address,
        payload: BytesN<32>,
        gateway: Address,
        amounts: MintAmounts,
    ) -> u64 {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);

        if !check_role(&env, &config, &Symbol::new(&env, CALL_MINTFOR), &sender) {
            log!(&env, "Swap and Stake: Mint for: caller is missing the role");
            panic_with_error!(&env, ErrorCode::MissingRole);
        }
        if amounts.input < 0 || amounts.fee < 0 || amounts.fee > amounts.input {
            log!(&env, "Swap and Stake: Mint for: malformed bridge amounts");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        // The bridge pre-funds this contract; whatever it holds is staked.
        let this = env.current_contract_address();
        let staked = TokenClient::new(&env, &config.staking_token).balance(&this);

        if amounts.fee > 0 {
            credit_gateway_fee(&env, &gateway, &amounts.token, amounts.fee);
        }

        if staked > 0 {
            authorize_token_transfer(&env, &config.staking_token, &config.lockup, staked);
        }
        let token_id: u64 = env.invoke_contract(
            &config.lockup,
            &Symbol::new(&env, "deposit_to_property"),
            (this, to.clone(), property.clone(), staked, payload).into_val(&env),
        );

        SwapStakeEvents::minted_for(&env, sender, to, property, staked, token_id, amounts);

        token_id
    }

    fn grant_role(env: Env, role: Symbol, account: Address) {
        let config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        save_role_grant(&env, &role, &account);

        SwapStakeEvents::role_granted(&env, role, account);
    }

    fn revoke_role(env: Env, role: Symbol, account: Address) {
        let config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        remove_role_grant(&env, &role, &account);

        SwapStakeEvents::role_revoked(&env, role, account);
    }

    fn update_owner(env: Env, new_owner: Address) {
        let mut config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let previous = config.owner.clone();
        config.owner = new_owner.clone();
        save_config(&env, &config);

        SwapStakeEvents::owner_updated(&env, previous, new_owner);
    }

    fn update_ecosystem_fee(env: Env, fee_bps: i64) {
        let mut config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        validate_bps!(&env, fee_bps);
        config.ecosystem_fee_bps = fee_bps;
        save_config(&env, &config);
    }

    fn update_ecosystem_fee_threshold(env: Env, threshold_bps: i64) {
        let mut config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        validate_bps!(&env, threshold_bps);
        config.ecosystem_fee_threshold_bps = threshold_bps;
        save_config(&env, &config);
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_estimated_stake(env: Env, path: Vec<Address>, amount_in: i128) -> Vec<i128> {
        let config = get_config(&env);
        router::get_amounts_out(&env, &config.router, amount_in, &path)
    }

    fn get_estimated_deposit(env: Env, path: Vec<Address>, amount_out: i128) -> Vec<i128> {
        let config = get_config(&env);
        router::get_amounts_in(&env, &config.router, amount_out, &path)
    }

    fn gateway_fees(env: Env, gateway: Address, asset: Address) -> i128 {
        get_gateway_fee(&env, &gateway, &asset)
    }

    fn ecosystem_fees(env: Env, asset: Address) -> i128 {
        get_ecosystem_fee(&env, &asset)
    }

    fn call_mintfor_role(env: Env) -> Symbol {
        Symbol::new(&env, CALL_MINTFOR)
    }

    fn has_role(env: Env, role: Symbol, account: Address) -> bool {
        let config = get_config(&env);
        check_role(&env, &config, &role, &account)
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }
}

#[contractimpl]
impl SwapStake {
    #[allow(dead_code)]
    pub fn update(env: Env, new_wasm_hash: BytesN<32>) {
        let owner = get_config(&env).owner;
        owner.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}

/// The owner holds every role implicitly.
fn check_role(env: &Env, config: &Config, role: &Symbol, account: &Address) -> bool {
    account == &config.owner || has_role_grant(env, role, account)
}

fn check_deadline(env: &Env, deadline: u64) {
    if env.ledger().timestamp() > deadline {
        log!(env, "Swap and Stake: Swap and stake: deadline has passed");
        panic_with_error!(env, ErrorCode::DeadlineExpired);
    }
}

/// Pre-authorize the token transfer a callee will perform on this
/// contract's behalf (the router pulling the swap input, the lockup pulling
/// the staking deposit).
fn authorize_token_transfer(env: &Env, token: &Address, spender: &Address, amount: i128) {
    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: Symbol::new(env, "transfer"),
                args: (env.current_contract_address(), spender.clone(), amount).into_val(env),
            },
            sub_invocations: vec![env],
        }),
    ]);
}

fn credit_gateway_fee(env: &Env, gateway: &Address, asset: &Address, amount: i128) {
    let accrued = match get_gateway_fee(env, gateway, asset).safe_add(amount, env) {
        Ok(accrued) => accrued,
        Err(err) => panic_with_error!(env, err),
    };
    save_gateway_fee(env, gateway, asset, accrued);
}

fn credit_ecosystem_fee(env: &Env, asset: &Address, amount: i128) {
    let accrued = match get_ecosystem_fee(env, asset).safe_add(amount, env) {
        Ok(accrued) => accrued,
        Err(err) => panic_with_error!(env, err),
    };
    save_ecosystem_fee(env, asset, accrued);
}
