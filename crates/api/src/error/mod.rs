//! Error handling for the mode-of-operation engine

pub mod types;
pub mod validate;

pub use types::{Error, Result};

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Specialized result types for the engine layers
/// Result of key schedule derivation
pub type KeyResult<T> = Result<T>;
/// Result of a single block primitive call
pub type BlockResult<T> = Result<T>;
/// Result of a cipher session operation
pub type CipherResult<T> = Result<T>;
