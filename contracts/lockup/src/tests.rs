
use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, BytesN, Env, IntoVal, Symbol,
};

use self::setup::deploy_lockup_contract;

#[test]
fn initializes_once() {
    let env = Env::default();
    let admin = Address::generate(&env);

    let ctx = deploy_lockup_contract(&env, &admin);

    let config = ctx.lockup.query_config();
    assert_eq!(config.admin, admin);
    assert_eq!(config.staking_token, ctx.staking_token.address);
    assert_eq!(config.stokens, ctx.stokens.address);
    assert_eq!(ctx.lockup.query_total_locked(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn initializing_twice_should_fail() {
    let env = Env::default();
    let admin = Address::generate(&env);

    let ctx = deploy_lockup_contract(&env, &admin);
    ctx.lockup
        .initialize(&admin, &ctx.staking_token.address, &ctx.stokens.address);
}

#[test]
fn deposit_locks_tokens_and_mints_a_receipt() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let staker = Address::generate(&env);
    let property = Address::generate(&env);
    let payload = BytesN::from_array(&env, &[9u8; 32]);

    let ctx = deploy_lockup_contract(&env, &admin);
    ctx.staking_token_admin.mint(&staker, &1_000);

    assert_eq!(ctx.stokens.current_index(), 0);

    let token_id = ctx
        .lockup
        .deposit_to_property(&staker, &staker, &property, &900, &payload);

    assert_eq!(token_id, 1);
    assert_eq!(ctx.stokens.owner_of(&token_id), staker);
    assert_eq!(ctx.stokens.positions(&token_id).property, property);
    assert_eq!(ctx.stokens.positions(&token_id).amount, 900);
    assert_eq!(ctx.stokens.payload_of(&token_id), payload);

    assert_eq!(ctx.lockup.query_locked(&property), 900);
    assert_eq!(ctx.lockup.query_total_locked(), 900);
    assert_eq!(ctx.staking_token.balance(&staker), 100);
    assert_eq!(ctx.staking_token.balance(&ctx.lockup.address), 900);

    // The lockedup event closes out the deposit.
    let last = env.events().all().last_unchecked();
    assert_eq!(
        vec![&env, last],
        vec![
            &env,
            (
                ctx.lockup.address.clone(),
                (Symbol::new(&env, "lockedup"), staker.clone(), property.clone()).into_val(&env),
                (900_i128, 1_u64).into_val(&env),
            )
        ]
    );
}

#[test]
fn deposit_can_mint_for_another_recipient() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let payer = Address::generate(&env);
    let recipient = Address::generate(&env);
    let property = Address::generate(&env);

    let ctx = deploy_lockup_contract(&env, &admin);
    ctx.staking_token_admin.mint(&payer, &400);

    let token_id = ctx.lockup.deposit_to_property(
        &payer,
        &recipient,
        &property,
        &400,
        &BytesN::from_array(&env, &[0u8; 32]),
    );

    assert_eq!(ctx.stokens.owner_of(&token_id), recipient);
    assert_eq!(ctx.staking_token.balance(&payer), 0);
}

#[test]
fn deposits_accumulate_per_property() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let staker = Address::generate(&env);
    let property_a = Address::generate(&env);
    let property_b = Address::generate(&env);
    let payload = BytesN::from_array(&env, &[0u8; 32]);

    let ctx = deploy_lockup_contract(&env, &admin);
    ctx.staking_token_admin.mint(&staker, &1_000);

    let first = ctx
        .lockup
        .deposit_to_property(&staker, &staker, &property_a, &300, &payload);
    let second = ctx
        .lockup
        .deposit_to_property(&staker, &staker, &property_a, &200, &payload);
    let third = ctx
        .lockup
        .deposit_to_property(&staker, &staker, &property_b, &500, &payload);

    assert_eq!((first, second, third), (1, 2, 3));
    assert_eq!(ctx.lockup.query_locked(&property_a), 500);
    assert_eq!(ctx.lockup.query_locked(&property_b), 500);
    assert_eq!(ctx.lockup.query_total_locked(), 1_000);
}

#[test]
fn zero_amount_deposit_mints_an_empty_position() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let staker = Address::generate(&env);
    let property = Address::generate(&env);

    let ctx = deploy_lockup_contract(&env, &admin);

    let token_id = ctx.lockup.deposit_to_property(
        &staker,
        &staker,
        &property,
        &0,
        &BytesN::from_array(&env, &[0u8; 32]),
    );

    assert_eq!(ctx.stokens.positions(&token_id).amount, 0);
    assert_eq!(ctx.lockup.query_locked(&property), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #14)")]
fn negative_deposit_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let staker = Address::generate(&env);
    let property = Address::generate(&env);

    let ctx = deploy_lockup_contract(&env, &admin);

    ctx.lockup.deposit_to_property(
        &staker,
        &staker,
        &property,
        &-5,
        &BytesN::from_array(&env, &[0u8; 32]),
    );
}

#[test]
#[should_panic(expected = "Error(Auth, InvalidAction)")]
fn deposit_requires_depositor_auth() {
    let env = Env::default();

    let admin = Address::generate(&env);
    let staker = Address::generate(&env);
    let property = Address::generate(&env);

    let ctx = deploy_lockup_contract(&env, &admin);

    ctx.lockup.deposit_to_property(
        &staker,
        &staker,
        &property,
        &100,
        &BytesN::from_array(&env, &[0u8; 32]),
    );
}
