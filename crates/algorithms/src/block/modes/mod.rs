//! Modes of operation
//!
//! A single [`CipherSession`] type serves every supported mode. The
//! per-mode chaining state lives in a tagged [`ChainingState`]; the ECB, CBC
//! and CTR submodules hold the transforms for each variant.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroizing;

pub mod cbc;
pub mod ctr;
pub mod ecb;
mod session;

pub use cbc::CbcState;
pub use ctr::{CounterGenerator, CtrState, NonceCounter};
pub use session::{ChainingState, CipherSession, SessionParams, SessionState};

/// XOR `src` into `dst` over the shorter of the two
#[inline(always)]
pub(crate) fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Hand back a finished output buffer
///
/// Output is accumulated in a `Zeroizing` buffer so that an early `?` wipes
/// whatever was produced. On success the contents move out and the empty
/// shell is dropped.
#[inline]
pub(crate) fn finish(mut out: Zeroizing<Vec<u8>>) -> Vec<u8> {
    core::mem::take(&mut *out)
}
