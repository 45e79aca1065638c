//! # camellia-engine
//!
//! Camellia (RFC 3713) with the ECB, CBC and CTR modes of operation.
//!
//! ## Usage
//!
//! ```rust
//! use camellia_engine::prelude::*;
//!
//! camellia_engine::init()?;
//!
//! let key = [0x42u8; 32];
//! let iv = [0u8; 16];
//! let mut enc = camellia_engine::new(&key, Mode::Cbc, SessionParams::new().with_iv(&iv))?;
//! let ciphertext = enc.encrypt(&[0u8; 32])?;
//!
//! let mut dec = camellia_engine::new(&key, Mode::Cbc, SessionParams::new().with_iv(&iv))?;
//! assert_eq!(dec.decrypt(&ciphertext)?, [0u8; 32]);
//! # Ok::<(), camellia_engine::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for the error type
//! - `alloc`: heap-backed sessions for `no_std` targets
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`camellia-params`]: Sizes, round counts and mode tags
//! - [`camellia-api`]: Error type, validation helpers and shared value types
//! - [`camellia-algorithms`]: Camellia primitive, key schedules, sessions and the self-test

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports
pub use camellia_algorithms as algorithms;
pub use camellia_api as api;
pub use camellia_params as params;

pub use camellia_algorithms::{
    selftest, BlockPrimitive, Camellia, CipherSession, CounterGenerator, KeySchedule,
    NonceCounter, SessionParams, SessionState,
};
pub use camellia_api::{
    random_iv, Block, Direction, Error, KeyBits, Mode, Result, BLOCK_SIZE, KEY_SIZES,
};

/// Run the Camellia known-answer self-test
///
/// Safe to call any number of times; the vectors run once per process.
/// Building a session runs the same check, so calling this first only moves
/// a failure to a point of the caller's choosing.
pub fn init() -> Result<()> {
    selftest::ensure::<Camellia>()
}

/// Build a Camellia session
pub fn new(key: &[u8], mode: Mode, params: SessionParams) -> Result<CipherSession> {
    CipherSession::new(key, mode, params)
}

/// Common imports for camellia-engine users
pub mod prelude {
    pub use crate::api::{Error, Result};
    pub use crate::{
        Block, CipherSession, CounterGenerator, Direction, KeyBits, Mode, NonceCounter,
        SessionParams, SessionState,
    };
}
