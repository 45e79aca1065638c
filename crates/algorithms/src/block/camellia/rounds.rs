//! Camellia round functions and key expansion
//!
//! Byte-oriented implementation working on big-endian halves. The key table
//! is a flat run of 8-byte subkeys: 26 are filled for 128-bit keys and 34 for
//! 192/256-bit keys.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use camellia_api::{Block, KeyBits};
use camellia_params::utils::symmetric::{
    CAMELLIA128_ROUNDS, CAMELLIA128_SUBKEYS, CAMELLIA256_ROUNDS, CAMELLIA256_SUBKEYS,
    CAMELLIA_SUBKEY_SIZE, CAMELLIA_TABLE_SIZE,
};

/// Camellia S-box (s1)
const SBOX: [u8; 256] = [
    0x70, 0x82, 0x2c, 0xec, 0xb3, 0x27, 0xc0, 0xe5, 0xe4, 0x85, 0x57, 0x35, 0xea, 0x0c, 0xae, 0x41,
    0x23, 0xef, 0x6b, 0x93, 0x45, 0x19, 0xa5, 0x21, 0xed, 0x0e, 0x4f, 0x4e, 0x1d, 0x65, 0x92, 0xbd,
    0x86, 0xb8, 0xaf, 0x8f, 0x7c, 0xeb, 0x1f, 0xce, 0x3e, 0x30, 0xdc, 0x5f, 0x5e, 0xc5, 0x0b, 0x1a,
    0xa6, 0xe1, 0x39, 0xca, 0xd5, 0x47, 0x5d, 0x3d, 0xd9, 0x01, 0x5a, 0xd6, 0x51, 0x56, 0x6c, 0x4d,
    0x8b, 0x0d, 0x9a, 0x66, 0xfb, 0xcc, 0xb0, 0x2d, 0x74, 0x12, 0x2b, 0x20, 0xf0, 0xb1, 0x84, 0x99,
    0xdf, 0x4c, 0xcb, 0xc2, 0x34, 0x7e, 0x76, 0x05, 0x6d, 0xb7, 0xa9, 0x31, 0xd1, 0x17, 0x04, 0xd7,
    0x14, 0x58, 0x3a, 0x61, 0xde, 0x1b, 0x11, 0x1c, 0x32, 0x0f, 0x9c, 0x16, 0x53, 0x18, 0xf2, 0x22,
    0xfe, 0x44, 0xcf, 0xb2, 0xc3, 0xb5, 0x7a, 0x91, 0x24, 0x08, 0xe8, 0xa8, 0x60, 0xfc, 0x69, 0x50,
    0xaa, 0xd0, 0xa0, 0x7d, 0xa1, 0x89, 0x62, 0x97, 0x54, 0x5b, 0x1e, 0x95, 0xe0, 0xff, 0x64, 0xd2,
    0x10, 0xc4, 0x00, 0x48, 0xa3, 0xf7, 0x75, 0xdb, 0x8a, 0x03, 0xe6, 0xda, 0x09, 0x3f, 0xdd, 0x94,
    0x87, 0x5c, 0x83, 0x02, 0xcd, 0x4a, 0x90, 0x33, 0x73, 0x67, 0xf6, 0xf3, 0x9d, 0x7f, 0xbf, 0xe2,
    0x52, 0x9b, 0xd8, 0x26, 0xc8, 0x37, 0xc6, 0x3b, 0x81, 0x96, 0x6f, 0x4b, 0x13, 0xbe, 0x63, 0x2e,
    0xe9, 0x79, 0xa7, 0x8c, 0x9f, 0x6e, 0xbc, 0x8e, 0x29, 0xf5, 0xf9, 0xb6, 0x2f, 0xfd, 0xb4, 0x59,
    0x78, 0x98, 0x06, 0x6a, 0xe7, 0x46, 0x71, 0xba, 0xd4, 0x25, 0xab, 0x42, 0x88, 0xa2, 0x8d, 0xfa,
    0x72, 0x07, 0xb9, 0x55, 0xf8, 0xee, 0xac, 0x0a, 0x36, 0x49, 0x2a, 0x68, 0x3c, 0x38, 0xf1, 0xa4,
    0x40, 0x28, 0xd3, 0x7b, 0xbb, 0xc9, 0x43, 0xc1, 0x15, 0xe3, 0xad, 0xf4, 0x77, 0xc7, 0x80, 0x9e,
];

/// Key schedule constants Σ1..Σ6
const SIGMA: [[u8; 8]; 6] = [
    [0xa0, 0x9e, 0x66, 0x7f, 0x3b, 0xcc, 0x90, 0x8b],
    [0xb6, 0x7a, 0xe8, 0x58, 0x4c, 0xaa, 0x73, 0xb2],
    [0xc6, 0xef, 0x37, 0x2f, 0xe9, 0x4f, 0x82, 0xbe],
    [0x54, 0xff, 0x53, 0xa5, 0xf1, 0xd3, 0x6f, 0x1c],
    [0x10, 0xe5, 0x27, 0xfa, 0xde, 0x68, 0x2d, 0x1d],
    [0xb0, 0x56, 0x88, 0xc2, 0xb3, 0xe6, 0xc1, 0xfd],
];

/// Positions in the rotation sequence that never become subkeys (128-bit keys)
const DROP_128: [usize; 6] = [8, 9, 15, 16, 22, 23];

/// Positions in the rotation sequence that never become subkeys (192/256-bit keys)
const DROP_256: [usize; 30] = [
    2, 3, 4, 5, 8, 9, 14, 15, 16, 17, 20, 21, 26, 27, 30, 31, 36, 37, 42, 43, 46, 47, 48, 49, 54,
    55, 58, 59, 60, 61,
];

#[inline(always)]
fn s1(x: u8) -> u8 {
    SBOX[x as usize]
}

#[inline(always)]
fn s2(x: u8) -> u8 {
    SBOX[x as usize].rotate_left(1)
}

#[inline(always)]
fn s3(x: u8) -> u8 {
    SBOX[x as usize].rotate_right(1)
}

#[inline(always)]
fn s4(x: u8) -> u8 {
    SBOX[x.rotate_left(1) as usize]
}

/// F-function folded into the Feistel XOR: `right ^= P(S(left ^ subkey))`
///
/// Halves are not swapped; callers alternate which half they pass.
fn feistel(subkey: &[u8], left: &[u8], right: &mut [u8]) {
    let mut t = [0u8; 8];
    for (i, byte) in t.iter_mut().enumerate() {
        *byte = left[i] ^ subkey[i];
    }

    t[0] = s1(t[0]);
    t[1] = s2(t[1]);
    t[2] = s3(t[2]);
    t[3] = s4(t[3]);
    t[4] = s2(t[4]);
    t[5] = s3(t[5]);
    t[6] = s4(t[6]);
    t[7] = s1(t[7]);

    // P-function, accumulated so each output byte reuses the previous sum
    let mut a = t[0] ^ t[3] ^ t[4] ^ t[5] ^ t[6];
    right[7] ^= a;
    a ^= t[0] ^ t[1] ^ t[2];
    right[3] ^= a;
    a ^= t[1] ^ t[6] ^ t[7];
    right[6] ^= a;
    a ^= t[0] ^ t[1] ^ t[3];
    right[2] ^= a;
    a ^= t[0] ^ t[5] ^ t[6];
    right[5] ^= a;
    a ^= t[0] ^ t[2] ^ t[3];
    right[1] ^= a;
    a ^= t[3] ^ t[4] ^ t[5];
    right[4] ^= a;
    a ^= t[1] ^ t[2] ^ t[3];
    right[0] ^= a;

    t.zeroize();
}

/// FL layer applied to the left half
fn fl(subkey: &[u8], half: &mut [u8]) {
    let kl = BigEndian::read_u32(&subkey[..4]);
    let kr = BigEndian::read_u32(&subkey[4..8]);
    let mut xl = BigEndian::read_u32(&half[..4]);
    let mut xr = BigEndian::read_u32(&half[4..8]);

    xr ^= (xl & kl).rotate_left(1);
    xl ^= xr | kr;

    BigEndian::write_u32(&mut half[..4], xl);
    BigEndian::write_u32(&mut half[4..8], xr);
}

/// FL⁻¹ layer applied to the right half
fn fl_inv(subkey: &[u8], half: &mut [u8]) {
    let kl = BigEndian::read_u32(&subkey[..4]);
    let kr = BigEndian::read_u32(&subkey[4..8]);
    let mut yl = BigEndian::read_u32(&half[..4]);
    let mut yr = BigEndian::read_u32(&half[4..8]);

    yl ^= yr | kr;
    yr ^= (yl & kl).rotate_left(1);

    BigEndian::write_u32(&mut half[..4], yl);
    BigEndian::write_u32(&mut half[4..8], yr);
}

#[inline(always)]
fn rotate(word: &mut [u8; 16], bits: u32) {
    *word = u128::from_be_bytes(*word).rotate_left(bits).to_be_bytes();
}

#[inline(always)]
fn xor_into(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Number of 8-byte subkeys a key size uses
pub(crate) fn subkey_count(bits: KeyBits) -> usize {
    match bits {
        KeyBits::Bits128 => CAMELLIA128_SUBKEYS,
        KeyBits::Bits192 | KeyBits::Bits256 => CAMELLIA256_SUBKEYS,
    }
}

#[inline(always)]
fn subkey(table: &[u8; CAMELLIA_TABLE_SIZE], index: usize) -> &[u8] {
    &table[index * CAMELLIA_SUBKEY_SIZE..(index + 1) * CAMELLIA_SUBKEY_SIZE]
}

/// Expand a raw key into the flat subkey table
///
/// `key` must already have the length `bits` implies.
pub(crate) fn expand(bits: KeyBits, key: &[u8], table: &mut [u8; CAMELLIA_TABLE_SIZE]) {
    // KL, KR, KA, KB
    let mut ikey = [[0u8; 16]; 4];

    // Key bytes run over KL into KR
    for (i, byte) in key.iter().enumerate() {
        ikey[i / 16][i % 16] = *byte;
    }
    if bits == KeyBits::Bits192 {
        for i in 0..8 {
            ikey[1][i + 8] = !ikey[1][i];
        }
    }

    // KA
    let mut ka = [0u8; 16];
    for i in 0..16 {
        ka[i] = ikey[0][i] ^ ikey[1][i];
    }
    {
        let (l, r) = ka.split_at_mut(8);
        feistel(&SIGMA[0], l, r);
        feistel(&SIGMA[1], r, l);
    }
    xor_into(&mut ka, &ikey[0]);
    {
        let (l, r) = ka.split_at_mut(8);
        feistel(&SIGMA[2], l, r);
        feistel(&SIGMA[3], r, l);
    }
    ikey[2] = ka;

    // KB
    if bits != KeyBits::Bits128 {
        let mut kb = [0u8; 16];
        for i in 0..16 {
            kb[i] = ka[i] ^ ikey[1][i];
        }
        let (l, r) = kb.split_at_mut(8);
        feistel(&SIGMA[4], l, r);
        feistel(&SIGMA[5], r, l);
        ikey[3] = kb;
        kb.zeroize();
    }
    ka.zeroize();

    // 128-bit keys only rotate KL and KA; KA takes KR's slot
    let (live, skipped): (usize, &[usize]) = match bits {
        KeyBits::Bits128 => {
            ikey[1] = ikey[2];
            (2, &DROP_128)
        }
        KeyBits::Bits192 | KeyBits::Bits256 => (4, &DROP_256),
    };

    let mut position = 0usize;
    let mut dropped = 0usize;
    let mut filled = 0usize;
    for pass in 0..8 {
        for half in 0..2 * live {
            if skipped.get(dropped) == Some(&position) {
                dropped += 1;
            } else {
                let offset = (half % 2) * 8;
                table[filled * CAMELLIA_SUBKEY_SIZE..(filled + 1) * CAMELLIA_SUBKEY_SIZE]
                    .copy_from_slice(&ikey[half / 2][offset..offset + 8]);
                filled += 1;
            }
            position += 1;
        }
        let step = if pass < 4 { 15 } else { 17 };
        for word in ikey.iter_mut().take(live) {
            rotate(word, step);
        }
    }
    debug_assert_eq!(filled, subkey_count(bits));

    ikey.zeroize();
}

/// Run one block through the cipher in either direction
pub(crate) fn crypt(
    decrypt: bool,
    bits: KeyBits,
    table: &[u8; CAMELLIA_TABLE_SIZE],
    input: &Block,
) -> Block {
    let count = subkey_count(bits);
    let rounds = match bits {
        KeyBits::Bits128 => CAMELLIA128_ROUNDS,
        KeyBits::Bits192 | KeyBits::Bits256 => CAMELLIA256_ROUNDS,
    };

    // Subkey cursor. Decryption walks the table backwards.
    let mut ski: usize = if decrypt { count - 2 } else { 0 };
    let advance = |ski: &mut usize| {
        if decrypt {
            *ski -= 1;
        } else {
            *ski += 1;
        }
    };

    let mut out = *input;
    xor_into(&mut out, subkey(table, ski));
    xor_into(&mut out[8..], subkey(table, ski + 1));
    if decrypt {
        ski -= 1;
    } else {
        ski += 2;
    }

    for r in (0..rounds).step_by(2) {
        let (l, rhalf) = out.split_at_mut(8);
        if r == 6 || r == 12 || r == 18 {
            fl(subkey(table, ski), l);
            advance(&mut ski);
            fl_inv(subkey(table, ski), rhalf);
            advance(&mut ski);
        }
        feistel(subkey(table, ski), l, rhalf);
        advance(&mut ski);
        feistel(subkey(table, ski), rhalf, l);
        advance(&mut ski);
    }

    // Undo the last implicit swap
    let (l, rhalf) = out.split_at_mut(8);
    l.swap_with_slice(rhalf);

    if decrypt {
        ski -= 1;
    }
    xor_into(&mut out, subkey(table, ski));
    xor_into(&mut out[8..], subkey(table, ski + 1));

    out
}
