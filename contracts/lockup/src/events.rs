use soroban_sdk::{Address, Env, Symbol};

pub struct LockupEvents {}

impl LockupEvents {
    /// Emitted when the Lockup is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - ()
    pub fn initialize(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, ());
    }

    /// Emitted once per deposit, after the position receipt is minted
    ///
    /// - topics - `["lockedup", depositor: Address, property: Address]`
    /// - data - `[amount: i128, token_id: u64]`
    pub fn lockedup(env: &Env, depositor: Address, property: Address, amount: i128, token_id: u64) {
        let topics = (Symbol::new(env, "lockedup"), depositor, property);
        env.events().publish(topics, (amount, token_id));
    }
}
