#![no_std]

pub mod constants;
pub mod error;
pub mod macros;
pub mod math;
pub mod types;
