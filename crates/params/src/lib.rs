//! Constant values shared by the camellia-engine crates

#![no_std]

pub mod utils;
