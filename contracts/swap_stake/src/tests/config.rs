use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::contract::{SwapStake, SwapStakeClient};

use super::setup::deploy_swap_stake_context;

#[test]
fn initialize_wires_the_protocol_together() {
    let env = Env::default();
    let ctx = deploy_swap_stake_context(&env);

    let config = ctx.swap_stake.query_config();
    assert_eq!(config.owner, ctx.admin);
    assert_eq!(config.staking_token, ctx.staking_token.address);
    assert_eq!(config.router, ctx.router.address);
    assert_eq!(config.lockup, ctx.lockup.address);
    assert_eq!(config.stokens, ctx.stokens.address);
    assert_eq!(config.ecosystem_fee_bps, 0);
    assert_eq!(config.ecosystem_fee_threshold_bps, 0);
}

#[test]
fn owner_updates_the_ecosystem_fee_settings() {
    let env = Env::default();
    let ctx = deploy_swap_stake_context(&env);

    ctx.swap_stake.update_ecosystem_fee(&250);
    ctx.swap_stake.update_ecosystem_fee_threshold(&8_500);

    let config = ctx.swap_stake.query_config();
    assert_eq!(config.ecosystem_fee_bps, 250);
    assert_eq!(config.ecosystem_fee_threshold_bps, 8_500);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn ecosystem_fee_above_full_range_should_fail() {
    let env = Env::default();
    let ctx = deploy_swap_stake_context(&env);

    ctx.swap_stake.update_ecosystem_fee(&10_001);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn ecosystem_fee_threshold_above_full_range_should_fail() {
    let env = Env::default();
    let ctx = deploy_swap_stake_context(&env);

    ctx.swap_stake.update_ecosystem_fee_threshold(&10_001);
}

#[test]
#[should_panic(expected = "Error(Auth, InvalidAction)")]
fn fee_updates_require_the_owner() {
    let env = Env::default();

    let admin = Address::generate(&env);

    let swap_stake = SwapStakeClient::new(&env, &env.register(SwapStake, ()));
    swap_stake.initialize(
        &admin,
        &Address::generate(&env),
        &Address::generate(&env),
        &Address::generate(&env),
        &Address::generate(&env),
    );

    swap_stake.update_ecosystem_fee(&250);
}
