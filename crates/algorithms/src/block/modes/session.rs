//! Cipher sessions
//!
//! A session binds a key schedule to a mode and its chaining state. It
//! starts `Idle` and becomes `Active` after the first successful call that
//! processed data; it never goes back.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
use core::fmt;
use log::{debug, trace, warn};
use zeroize::Zeroizing;

use super::cbc::CbcState;
use super::ctr::{CounterGenerator, CtrState};
use super::ecb;
use crate::block::{BlockPrimitive, Camellia, KeySchedule};
use crate::error::{validate, CipherResult, Error, Result};
use crate::selftest;
use camellia_api::{Block, Direction, KeyBits, Mode, BLOCK_SIZE};

/// Optional construction parameters
///
/// CBC needs an IV, CTR needs a counter generator, ECB needs neither.
/// Supplying a parameter the mode does not use is an error.
#[derive(Default)]
pub struct SessionParams {
    iv: Option<Zeroizing<Vec<u8>>>,
    counter: Option<Box<dyn CounterGenerator>>,
}

impl SessionParams {
    /// No IV, no counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CBC initialization vector
    pub fn with_iv(mut self, iv: &[u8]) -> Self {
        self.iv = Some(Zeroizing::new(iv.to_vec()));
        self
    }

    /// Set the CTR counter generator
    pub fn with_counter<C: CounterGenerator + 'static>(mut self, counter: C) -> Self {
        self.counter = Some(Box::new(counter));
        self
    }

    /// Set an already boxed CTR counter generator
    pub fn with_boxed_counter(mut self, counter: Box<dyn CounterGenerator>) -> Self {
        self.counter = Some(counter);
        self
    }
}

impl fmt::Debug for SessionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionParams")
            .field("iv", &self.iv.as_ref().map(|iv| iv.len()))
            .field("counter", &self.counter.is_some())
            .finish()
    }
}

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, no data processed yet
    Idle,
    /// At least one call has processed data
    Active,
}

/// Per-mode chaining state
#[derive(Debug)]
pub enum ChainingState {
    /// ECB carries nothing between blocks
    Ecb,
    /// CBC register
    Cbc(CbcState),
    /// CTR counter source and buffered keystream
    Ctr(CtrState),
}

impl ChainingState {
    fn for_mode(mode: Mode, params: SessionParams) -> Result<Self> {
        let SessionParams { iv, counter } = params;
        let name = mode.name();

        match mode {
            Mode::Ecb => {
                validate::absent(iv.is_some(), name, "IV")?;
                validate::absent(counter.is_some(), name, "counter")?;
                Ok(Self::Ecb)
            }
            Mode::Cbc => {
                validate::absent(counter.is_some(), name, "counter")?;
                let iv = iv.ok_or(Error::MissingIv)?;
                Ok(Self::Cbc(CbcState::new(&iv)?))
            }
            Mode::Ctr => {
                validate::absent(iv.is_some(), name, "IV")?;
                let counter = counter.ok_or(Error::MissingCounter)?;
                Ok(Self::Ctr(CtrState::new(counter)))
            }
            Mode::Cfb | Mode::Ofb => Err(Error::UnsupportedMode { tag: mode.tag() }),
        }
    }
}

/// Stateful cipher over one key and one mode
///
/// `encrypt` and `decrypt` take `&mut self`, so a session is used by one
/// caller at a time. Sessions are `Send`; distinct sessions share nothing
/// but the self-test record.
pub struct CipherSession<P: BlockPrimitive = Camellia> {
    schedule: KeySchedule<P>,
    bits: KeyBits,
    mode: Mode,
    chaining: ChainingState,
    state: SessionState,
    last_direction: Option<Direction>,
    warned_interleave: bool,
}

impl<P: BlockPrimitive> CipherSession<P> {
    /// Block size in bytes
    pub const BLOCK_SIZE: usize = BLOCK_SIZE;

    /// Build a session
    ///
    /// Runs the primitive's self-test first if it has not run yet in this
    /// process. Then checks, in order: the mode, the key length and the
    /// mode's parameters.
    pub fn new(key: &[u8], mode: Mode, params: SessionParams) -> Result<Self> {
        selftest::ensure::<P>()?;
        Self::build(key, mode, params)
    }

    /// Build a session from a numeric mode tag
    pub fn with_tag(key: &[u8], tag: u8, params: SessionParams) -> Result<Self> {
        let mode = Mode::try_from(tag)?;
        Self::new(key, mode, params)
    }

    /// Build without the self-test gate; the self-test itself uses this
    pub(crate) fn build(key: &[u8], mode: Mode, params: SessionParams) -> Result<Self> {
        if !mode.is_supported() {
            return Err(Error::UnsupportedMode { tag: mode.tag() });
        }

        let schedule = KeySchedule::<P>::derive(key)?;
        let bits = schedule.bits();
        let chaining = ChainingState::for_mode(mode, params)?;

        debug!("{}-{} {} session created", P::name(), bits, mode);

        Ok(Self {
            schedule,
            bits,
            mode,
            chaining,
            state: SessionState::Idle,
            last_direction: None,
            warned_interleave: false,
        })
    }

    /// Encrypt `data`
    ///
    /// ECB and CBC need a whole number of blocks; CTR takes any length.
    pub fn encrypt(&mut self, data: &[u8]) -> CipherResult<Vec<u8>> {
        self.process(Direction::Encrypt, data)
    }

    /// Decrypt `data`
    pub fn decrypt(&mut self, data: &[u8]) -> CipherResult<Vec<u8>> {
        self.process(Direction::Decrypt, data)
    }

    fn process(&mut self, direction: Direction, data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        self.note_direction(direction);

        let bits = self.bits;
        let schedule = &self.schedule;
        let out = match &mut self.chaining {
            ChainingState::Ecb => ecb::process(bits, schedule, direction, data)?,
            ChainingState::Cbc(cbc) => match direction {
                Direction::Encrypt => cbc.encrypt(bits, schedule, data)?,
                Direction::Decrypt => cbc.decrypt(bits, schedule, data)?,
            },
            ChainingState::Ctr(ctr) => ctr.apply(bits, schedule, data)?,
        };

        trace!(
            "{} {:?}: {} bytes ({} blocks)",
            self.mode,
            direction,
            data.len(),
            (data.len() + BLOCK_SIZE - 1) / BLOCK_SIZE
        );

        self.last_direction = Some(direction);
        self.state = SessionState::Active;
        Ok(out)
    }

    fn note_direction(&mut self, direction: Direction) {
        if !self.mode.is_stateful() || self.warned_interleave {
            return;
        }
        if let Some(last) = self.last_direction {
            if last != direction {
                warn!(
                    "{} session switched from {:?} to {:?}; chaining state is shared between directions",
                    self.mode, last, direction
                );
                self.warned_interleave = true;
            }
        }
    }

    /// Mode of operation
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Key bit-length
    pub fn key_bits(&self) -> KeyBits {
        self.bits
    }

    /// Lifecycle phase
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current CBC register, `None` for other modes
    pub fn chaining_block(&self) -> Option<&Block> {
        match &self.chaining {
            ChainingState::Cbc(cbc) => Some(cbc.register()),
            _ => None,
        }
    }

    /// Chaining state
    pub fn chaining(&self) -> &ChainingState {
        &self.chaining
    }

    /// Key schedule, for read-only sharing
    pub fn schedule(&self) -> &KeySchedule<P> {
        &self.schedule
    }
}

impl<P: BlockPrimitive> fmt::Debug for CipherSession<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherSession")
            .field("primitive", &P::name())
            .field("bits", &self.bits)
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("chaining", &self.chaining)
            .finish()
    }
}
