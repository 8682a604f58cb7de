#![no_std]

mod contract;
mod events;
mod lockup;
mod storage;

#[cfg(test)]
mod tests;

pub use crate::contract::{Lockup, LockupClient};
pub use crate::storage::Config;
