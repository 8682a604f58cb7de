#![no_std]

mod contract;
mod events;
mod router;
mod storage;
mod swap_stake;


pub use crate::contract::{SwapStake, SwapStakeClient};
pub use crate::storage::Config;
