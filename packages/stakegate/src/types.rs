use soroban_sdk::{contracttype, Address};

/// Attribution for a bridge-originated mint: the asset the depositor paid
/// with on the source side, the gross input, and the fee the gateway took.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintAmounts {
    pub token: Address,
    pub input: i128,
    pub fee: i128,
}
