//! Public API types for the camellia-engine workspace
//!
//! This crate holds the pieces every other crate agrees on: the error
//! taxonomy returned by key derivation, block operations and cipher sessions,
//! and the small value types (`Block`, `KeyBits`, `Mode`) that cross crate
//! boundaries.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod types;

pub use error::{validate, Error, Result};
pub use types::{random_iv, Block, Direction, KeyBits, Mode, BLOCK_SIZE, KEY_SIZES};
