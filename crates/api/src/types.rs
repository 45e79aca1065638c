//! Value types shared across the engine
//!
//! These are deliberately small `Copy` types: a block, the key bit-length tag
//! that travels with every key schedule, and the mode selector.

use core::fmt;
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use camellia_params::utils::symmetric::{
    CAMELLIA128_KEY_SIZE, CAMELLIA192_KEY_SIZE, CAMELLIA256_KEY_SIZE, CAMELLIA_BLOCK_SIZE,
    CAMELLIA_KEY_SIZES, MODE_CBC, MODE_CFB, MODE_CTR, MODE_ECB, MODE_OFB,
};

/// Block size in bytes
pub const BLOCK_SIZE: usize = CAMELLIA_BLOCK_SIZE;

/// Accepted raw key sizes in bytes
pub const KEY_SIZES: [usize; 3] = CAMELLIA_KEY_SIZES;

/// One cipher block
pub type Block = [u8; BLOCK_SIZE];

/// Key bit-length tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyBits {
    /// 128-bit key
    Bits128,
    /// 192-bit key
    Bits192,
    /// 256-bit key
    Bits256,
}

impl KeyBits {
    /// Tag for a raw key of `len` bytes
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            CAMELLIA128_KEY_SIZE => Ok(Self::Bits128),
            CAMELLIA192_KEY_SIZE => Ok(Self::Bits192),
            CAMELLIA256_KEY_SIZE => Ok(Self::Bits256),
            _ => Err(Error::InvalidKeyLength { bits: len * 8 }),
        }
    }

    /// Tag for an explicit bit-length
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(Self::Bits128),
            192 => Ok(Self::Bits192),
            256 => Ok(Self::Bits256),
            _ => Err(Error::InvalidKeyLength { bits: bits as usize }),
        }
    }

    /// Bit-length as a number
    pub fn bits(self) -> u32 {
        match self {
            Self::Bits128 => 128,
            Self::Bits192 => 192,
            Self::Bits256 => 256,
        }
    }

    /// Raw key size in bytes
    pub fn key_len(self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u32> for KeyBits {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        Self::from_bits(bits)
    }
}

impl fmt::Display for KeyBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Mode of operation selector
///
/// The numeric tags are stable. CFB and OFB are recognised so that callers
/// asking for them get `UnsupportedMode` rather than a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// Electronic codebook
    Ecb = MODE_ECB,
    /// Cipher block chaining
    Cbc = MODE_CBC,
    /// Cipher feedback (not supported)
    Cfb = MODE_CFB,
    /// Output feedback (not supported)
    Ofb = MODE_OFB,
    /// Counter
    Ctr = MODE_CTR,
}

impl Mode {
    /// Modes a cipher session can be built for
    pub const SUPPORTED: [Mode; 3] = [Mode::Ecb, Mode::Cbc, Mode::Ctr];

    /// Numeric tag
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Short upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Self::Ecb => "ECB",
            Self::Cbc => "CBC",
            Self::Cfb => "CFB",
            Self::Ofb => "OFB",
            Self::Ctr => "CTR",
        }
    }

    /// Whether a cipher session can be built for this mode
    pub fn is_supported(self) -> bool {
        Self::SUPPORTED.contains(&self)
    }

    /// Whether the mode carries chaining state between calls
    pub fn is_stateful(self) -> bool {
        !matches!(self, Self::Ecb)
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            MODE_ECB => Ok(Self::Ecb),
            MODE_CBC => Ok(Self::Cbc),
            MODE_CFB => Ok(Self::Cfb),
            MODE_OFB => Ok(Self::Ofb),
            MODE_CTR => Ok(Self::Ctr),
            _ => Err(Error::UnsupportedMode { tag }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a block or session operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

/// Generate a random IV
pub fn random_iv<R: RngCore + CryptoRng>(rng: &mut R) -> Block {
    let mut iv = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut iv);
    iv
}
