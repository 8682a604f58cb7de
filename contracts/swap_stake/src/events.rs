use soroban_sdk::{Address, Env, Symbol};

use stakegate::types::MintAmounts;

pub struct SwapStakeEvents {}

impl SwapStakeEvents {
    /// Emitted when the Swap and Stake contract is initialized
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - ()
    pub fn initialize(env: &Env, owner: Address) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, ());
    }

    /// Emitted once per successful swap-and-stake
    ///
    /// - topics - `["staked", sender: Address, property: Address]`
    /// - data - `[deposit_asset: Address, deposit: i128, ecosystem_fee: i128,
    ///   gateway_fee: i128, staked: i128, token_id: u64]`
    #[allow(clippy::too_many_arguments)]
    pub fn staked(
        env: &Env,
        sender: Address,
        property: Address,
        deposit_asset: Address,
        deposit: i128,
        ecosystem_fee: i128,
        gateway_fee: i128,
        staked: i128,
        token_id: u64,
    ) {
        let topics = (Symbol::new(env, "staked"), sender, property);
        env.events().publish(
            topics,
            (
                deposit_asset,
                deposit,
                ecosystem_fee,
                gateway_fee,
                staked,
                token_id,
            ),
        );
    }

    /// Emitted when a gateway withdraws its accrued fees
    ///
    /// - topics - `["withdrawn", gateway: Address]`
    /// - data - `[asset: Address, amount: i128]`
    pub fn withdrawn(env: &Env, gateway: Address, asset: Address, amount: i128) {
        let topics = (Symbol::new(env, "withdrawn"), gateway);
        env.events().publish(topics, (asset, amount));
    }

    /// Emitted when the owner withdraws retained ecosystem fees
    ///
    /// - topics - `["ecosystem_withdrawn", owner: Address]`
    /// - data - `[asset: Address, amount: i128]`
    pub fn ecosystem_withdrawn(env: &Env, owner: Address, asset: Address, amount: i128) {
        let topics = (Symbol::new(env, "ecosystem_withdrawn"), owner);
        env.events().publish(topics, (asset, amount));
    }

    /// Emitted on a bridge-originated mint
    ///
    /// - topics - `["minted_for", minter: Address, to: Address]`
    /// - data - `[property: Address, staked: i128, token_id: u64,
    ///   amounts: MintAmounts]`
    pub fn minted_for(
        env: &Env,
        minter: Address,
        to: Address,
        property: Address,
        staked: i128,
        token_id: u64,
        amounts: MintAmounts,
    ) {
        let topics = (Symbol::new(env, "minted_for"), minter, to);
        env.events()
            .publish(topics, (property, staked, token_id, amounts));
    }

    /// Emitted when a role is granted
    ///
    /// - topics - `["role_granted", role: Symbol]`
    /// - data - `[account: Address]`
    pub fn role_granted(env: &Env, role: Symbol, account: Address) {
        let topics = (Symbol::new(env, "role_granted"), role);
        env.events().publish(topics, account);
    }

    /// Emitted when a role is revoked
    ///
    /// - topics - `["role_revoked", role: Symbol]`
    /// - data - `[account: Address]`
    pub fn role_revoked(env: &Env, role: Symbol, account: Address) {
        let topics = (Symbol::new(env, "role_revoked"), role);
        env.events().publish(topics, account);
    }

    /// Emitted when ownership rotates
    ///
    /// - topics - `["owner_updated", previous: Address]`
    /// - data - `[new_owner: Address]`
    pub fn owner_updated(env: &Env, previous: Address, new_owner: Address) {
        let topics = (Symbol::new(env, "owner_updated"), previous);
        env.events().publish(topics, new_owner);
    }
}
