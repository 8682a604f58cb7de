use soroban_sdk::{Address, Env, Symbol};

pub struct STokensEvents {}

impl STokensEvents {
    /// Emitted when the sTokens registry is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - ()
    pub fn initialize(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, ());
    }

    /// Emitted when a position receipt is minted
    ///
    /// - topics - `["mint", to: Address, property: Address]`
    /// - data - `[amount: i128, token_id: u64]`
    pub fn mint(env: &Env, to: Address, property: Address, amount: i128, token_id: u64) {
        let topics = (Symbol::new(env, "mint"), to, property);
        env.events().publish(topics, (amount, token_id));
    }

    /// Emitted when a position receipt changes hands
    ///
    /// - topics - `["transfer", from: Address, to: Address]`
    /// - data - `[token_id: u64]`
    pub fn transfer(env: &Env, from: Address, to: Address, token_id: u64) {
        let topics = (Symbol::new(env, "transfer"), from, to);
        env.events().publish(topics, token_id);
    }
}
