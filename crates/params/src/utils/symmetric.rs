//! Constants for the Camellia block cipher and its modes of operation

/// Camellia-128 key size in bytes
pub const CAMELLIA128_KEY_SIZE: usize = 16;

/// Camellia-192 key size in bytes
pub const CAMELLIA192_KEY_SIZE: usize = 24;

/// Camellia-256 key size in bytes
pub const CAMELLIA256_KEY_SIZE: usize = 32;

/// Every accepted raw key size, in bytes
pub const CAMELLIA_KEY_SIZES: [usize; 3] = [
    CAMELLIA128_KEY_SIZE,
    CAMELLIA192_KEY_SIZE,
    CAMELLIA256_KEY_SIZE,
];

/// Camellia block size in bytes
pub const CAMELLIA_BLOCK_SIZE: usize = 16;

/// Size of one subkey in bytes
pub const CAMELLIA_SUBKEY_SIZE: usize = 8;

/// Number of subkeys derived from a 128-bit key
pub const CAMELLIA128_SUBKEYS: usize = 26;

/// Number of subkeys derived from a 192- or 256-bit key
pub const CAMELLIA256_SUBKEYS: usize = 34;

/// Size of the opaque key table in bytes (large enough for every key size)
pub const CAMELLIA_TABLE_SIZE: usize = CAMELLIA256_SUBKEYS * CAMELLIA_SUBKEY_SIZE;

/// Feistel rounds for a 128-bit key
pub const CAMELLIA128_ROUNDS: usize = 18;

/// Feistel rounds for a 192- or 256-bit key
pub const CAMELLIA256_ROUNDS: usize = 24;

/// Size of the fixed prefix of a CTR counter block (nonce and IV)
pub const CTR_PREFIX_SIZE: usize = 12;

/// Size of the big-endian sequence number at the end of a CTR counter block
pub const CTR_SEQUENCE_SIZE: usize = 4;

/// Numeric tag of electronic codebook mode
pub const MODE_ECB: u8 = 1;

/// Numeric tag of cipher block chaining mode
pub const MODE_CBC: u8 = 2;

/// Numeric tag of cipher feedback mode (recognised, not supported)
pub const MODE_CFB: u8 = 3;

/// Numeric tag of output feedback mode (recognised, not supported)
pub const MODE_OFB: u8 = 5;

/// Numeric tag of counter mode
pub const MODE_CTR: u8 = 6;
