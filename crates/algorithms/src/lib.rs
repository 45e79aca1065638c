//! Camellia block primitive and mode-of-operation engine
//!
//! This crate provides the Camellia single-block primitive behind the
//! [`BlockPrimitive`] trait, key schedule derivation, and a stateful
//! [`CipherSession`] serving ECB, CBC and CTR. Sessions refuse to start until
//! the primitive's known-answer self-test has passed.
//!
//! The library is usable in `no_std` environments with an allocator.
//!
//! # Security Features
//!
//! - Key tables, chaining registers and buffered keystream are zeroized on drop
//! - Output produced before an error is wiped, never returned
//! - Self-test comparisons are constant-time

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(not(feature = "alloc"))]
compile_error!("camellia-algorithms requires the `alloc` feature");

// Error types come from the api crate
pub use camellia_api::error;
pub use camellia_api::{Error, Result};

// Block primitive, key schedule and modes
pub mod block;
pub use block::{
    decrypt_block, derive, encrypt_block, BlockPrimitive, Camellia, CamelliaKeyTable,
    CipherSession, CounterGenerator, KeySchedule, NonceCounter, SessionParams, SessionState,
};

// Known-answer self-test
pub mod selftest;
pub use selftest::{KnownAnswer, SelfTestStatus};

// Shared value types
pub use camellia_api::{random_iv, Block, Direction, KeyBits, Mode, BLOCK_SIZE, KEY_SIZES};
