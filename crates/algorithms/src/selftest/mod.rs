//! Known-answer self-test
//!
//! Every primitive carries a small set of vectors. Before the first session
//! for a primitive is built, the vectors are pushed through a fresh ECB
//! session in both directions. The outcome is recorded once per process and
//! a failure blocks every later session for that primitive.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
use log::{debug, error};
use once_cell::race::OnceBox;
use subtle::ConstantTimeEq;

use crate::block::modes::{CipherSession, SessionParams};
use crate::block::BlockPrimitive;
use crate::error::{Error, Result};
use camellia_api::{Block, Mode};

pub(crate) mod vectors;

/// One known-answer vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswer {
    /// Name reported when the vector fails
    pub name: &'static str,
    /// Raw key
    pub key: &'static [u8],
    /// Plaintext block
    pub plaintext: Block,
    /// Expected ciphertext block
    pub ciphertext: Block,
}

/// Write-once record of a primitive's self-test outcome
///
/// Concurrent first callers may each run the vectors; the first outcome to
/// land is kept and the others are discarded.
pub struct SelfTestStatus {
    outcome: OnceBox<Result<()>>,
}

impl SelfTestStatus {
    /// Empty record, usable in a `static`
    pub const fn new() -> Self {
        Self {
            outcome: OnceBox::new(),
        }
    }

    /// Recorded outcome, if the self-test has run
    pub fn get(&self) -> Option<Result<()>> {
        self.outcome.get().cloned()
    }

    fn get_or_run(&self, run: impl FnOnce() -> Result<()>) -> Result<()> {
        self.outcome.get_or_init(|| Box::new(run())).clone()
    }
}

impl Default for SelfTestStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SelfTestStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelfTestStatus")
            .field("outcome", &self.get())
            .finish()
    }
}

fn check_vector<P: BlockPrimitive>(vector: &KnownAnswer) -> Result<bool> {
    let mut session = CipherSession::<P>::build(vector.key, Mode::Ecb, SessionParams::new())?;

    let ciphertext = session.encrypt(&vector.plaintext)?;
    let decrypted = session.decrypt(&vector.ciphertext)?;

    let encrypt_ok = ciphertext.as_slice().ct_eq(&vector.ciphertext[..]);
    let decrypt_ok = decrypted.as_slice().ct_eq(&vector.plaintext[..]);
    Ok(bool::from(encrypt_ok & decrypt_ok))
}

/// Run every known-answer vector for `P`
///
/// Stops at the first vector that does not match, or that cannot be run at
/// all, and reports it as `SelfTestFailure`.
pub fn run<P: BlockPrimitive>() -> Result<()> {
    for vector in P::known_answers() {
        let passed = matches!(check_vector::<P>(vector), Ok(true));
        if !passed {
            error!("{} self-test failed on vector '{}'", P::name(), vector.name);
            return Err(Error::SelfTestFailure {
                primitive: P::name(),
                vector: vector.name,
            });
        }
    }

    debug!("{} self-test passed ({} vectors)", P::name(), P::known_answers().len());
    Ok(())
}

/// Run the self-test for `P` unless it has already run in this process
pub fn ensure<P: BlockPrimitive>() -> Result<()> {
    P::self_test_status().get_or_run(run::<P>)
}

/// Outcome of the self-test for `P`, `None` before it has run
pub fn status<P: BlockPrimitive>() -> Option<Result<()>> {
    P::self_test_status().get()
}
