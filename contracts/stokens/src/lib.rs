#![no_std]

mod contract;
mod events;
mod stokens;
mod storage;


pub use crate::contract::{STokens, STokensClient};
pub use crate::storage::{Config, StakingPosition};
