use soroban_sdk::{Address, BytesN, Env, Symbol, Vec};

use stakegate::types::MintAmounts;

use crate::storage::Config;

#[allow(dead_code)]
pub trait SwapStakeTrait {
    fn initialize(
        env: Env,
        admin: Address,
        staking_token: Address,
        router: Address,
        lockup: Address,
        stokens: Address,
    );

    /// Swap a deposit into the staking token along `path`, settle the
    /// gateway and ecosystem fees, stake the proceeds against `property`
    /// and mint one position receipt to the sender.
    ///
    /// A `None` gateway waives fee settlement entirely; `gateway_fee_bps`
    /// must then be zero.
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
    ) -> u64;

    /// Withdraw the sender's entire accrued gateway balance for `asset`.
    /// A zero balance is a no-op.
    fn claim(env: Env, sender: Address, asset: Address);

    /// Withdraw the retained ecosystem fees for `asset` to the owner.
    fn claim_ecosystem_fees(env: Env, asset: Address);

    /// Stake the contract's current staking-token balance on behalf of
    /// `to`, crediting the gateway with the fee it took on the source
    /// side. Restricted to holders of the mint-for role.
    fn mint_for(
        env: Env,
        sender: Address,
        to: Address,
        property: Address,
        payload: BytesN<32>,
        gateway: Address,
        amounts: MintAmounts,
    ) -> u64;

    fn grant_role(env: Env, role: Symbol, account: Address);

    fn revoke_role(env: Env, role: Symbol, account: Address);

    fn update_owner(env: Env, new_owner: Address);

    fn update_ecosystem_fee(env: Env, fee_bps: i64);

    fn update_ecosystem_fee_threshold(env: Env, threshold_bps: i64);

    // ################################################################
    //                             Queries
    // ################################################################

    /// Router quote: staking tokens received for `amount_in` along `path`.
    fn get_estimated_stake(env: Env, path: Vec<Address>, amount_in: i128) -> Vec<i128>;

    /// Router quote: deposit required to receive `amount_out` along `path`.
    fn get_estimated_deposit(env: Env, path: Vec<Address>, amount_out: i128) -> Vec<i128>;

    fn gateway_fees(env: Env, gateway: Address, asset: Address) -> i128;

    fn ecosystem_fees(env: Env, asset: Address) -> i128;

    fn call_mintfor_role(env: Env) -> Symbol;

    fn has_role(env: Env, role: Symbol, account: Address) -> bool;

    fn query_config(env: Env) -> Config;
}
