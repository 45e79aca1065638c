//! Error type definitions for the mode-of-operation engine

use core::fmt;

/// Primary error type for key derivation, block operations and sessions
///
/// Every variant is a hard failure: the engine never retries and never hands
/// back partial output alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raw key (or a bit-length tag) is not 128, 192 or 256 bits
    InvalidKeyLength {
        /// Offending length in bits
        bits: usize,
    },

    /// A single-block operation received something other than 16 bytes
    InvalidBlockLength {
        /// Where the block was rejected
        context: &'static str,
        /// Actual length in bytes
        actual: usize,
    },

    /// ECB/CBC input is not a whole number of blocks
    InvalidInputLength {
        /// Where the input was rejected
        context: &'static str,
        /// Actual length in bytes
        actual: usize,
    },

    /// Mode tag outside the supported set
    UnsupportedMode {
        /// Numeric mode tag
        tag: u8,
    },

    /// CBC session constructed without an IV
    MissingIv,

    /// IV supplied with the wrong length
    InvalidIvLength {
        /// Actual length in bytes
        actual: usize,
    },

    /// A session parameter was supplied for a mode that does not use it
    UnexpectedParameter {
        /// Mode the session was constructed for
        mode: &'static str,
        /// Name of the parameter that does not belong
        parameter: &'static str,
    },

    /// CTR session constructed without a counter generator
    MissingCounter,

    /// Counter generator returned a block of the wrong size
    InvalidCounterLength {
        /// Actual length in bytes
        actual: usize,
    },

    /// Counter generator ran out of fresh counter blocks
    CounterExhausted,

    /// Session and key schedule disagree on the key bit-length
    KeyScheduleMismatch {
        /// Bit-length recorded by the caller
        expected: usize,
        /// Bit-length the schedule was derived for
        actual: usize,
    },

    /// Known-answer self-test failed; no sessions may be served
    SelfTestFailure {
        /// Primitive under test
        primitive: &'static str,
        /// Name of the first vector that did not match
        vector: &'static str,
    },
}

/// Result type for engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Short, stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidKeyLength { .. } => "InvalidKeyLength",
            Self::InvalidBlockLength { .. } => "InvalidBlockLength",
            Self::InvalidInputLength { .. } => "InvalidInputLength",
            Self::UnsupportedMode { .. } => "UnsupportedMode",
            Self::MissingIv => "MissingIv",
            Self::InvalidIvLength { .. } => "InvalidIvLength",
            Self::UnexpectedParameter { .. } => "UnexpectedParameter",
            Self::MissingCounter => "MissingCounter",
            Self::InvalidCounterLength { .. } => "InvalidCounterLength",
            Self::CounterExhausted => "CounterExhausted",
            Self::KeyScheduleMismatch { .. } => "KeyScheduleMismatch",
            Self::SelfTestFailure { .. } => "SelfTestFailure",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength { bits } => {
                write!(f, "Invalid key length: {} bits (expected 128, 192 or 256)", bits)
            },
            Self::InvalidBlockLength { context, actual } => {
                write!(f, "{}: invalid block length (expected 16, got {})", context, actual)
            },
            Self::InvalidInputLength { context, actual } => {
                write!(f, "{}: input length {} is not a multiple of the block size", context, actual)
            },
            Self::UnsupportedMode { tag } => {
                write!(f, "Unsupported mode of operation: {}", tag)
            },
            Self::MissingIv => write!(f, "CBC mode requires an IV"),
            Self::InvalidIvLength { actual } => {
                write!(f, "IV must be 16 bytes long, got {}", actual)
            },
            Self::UnexpectedParameter { mode, parameter } => {
                write!(f, "{} mode does not take a {}", mode, parameter)
            },
            Self::MissingCounter => write!(f, "CTR mode requires a counter generator"),
            Self::InvalidCounterLength { actual } => {
                write!(f, "Counter generator must return 16 bytes, got {}", actual)
            },
            Self::CounterExhausted => write!(f, "Counter generator is exhausted"),
            Self::KeyScheduleMismatch { expected, actual } => {
                write!(f, "Key schedule derived for {} bits used as {} bits", actual, expected)
            },
            Self::SelfTestFailure { primitive, vector } => {
                write!(f, "{} self-test failed on vector '{}'", primitive, vector)
            },
        }
    }
}
