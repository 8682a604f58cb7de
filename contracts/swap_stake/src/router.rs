//! Thin wrappers over the external AMM router's pair-router surface.

use soroban_sdk::{Address, Env, IntoVal, Symbol, Vec};

pub fn get_amounts_out(
    env: &Env,
    router: &Address,
    amount_in: i128,
    path: &Vec<Address>,
) -> Vec<i128> {
    env.invoke_contract(
        router,
        &Symbol::new(env, "get_amounts_out"),
        (amount_in, path.clone()).into_val(env),
    )
}

pub fn get_amounts_in(
    env: &Env,
    router: &Address,
    amount_out: i128,
    path: &Vec<Address>,
) -> Vec<i128> {
    env.invoke_contract(
        router,
        &Symbol::new(env, "get_amounts_in"),
        (amount_out, path.clone()).into_val(env),
    )
}

pub fn swap_exact_tokens_for_tokens(
    env: &Env,
    router: &Address,
    amount_in: i128,
    amount_out_min: i128,
    path: &Vec<Address>,
    to: &Address,
    deadline: u64,
) -> Vec<i128> {
    env.invoke_contract(
        router,
        &Symbol::new(env, "swap_exact_tokens_for_tokens"),
        (amount_in, amount_out_min, path.clone(), to.clone(), deadline).into_val(env),
    )
}
