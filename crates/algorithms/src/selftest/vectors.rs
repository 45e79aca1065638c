//! Built-in known-answer vectors

use super::KnownAnswer;

const RFC3713_PLAINTEXT: [u8; 16] = [
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32, 0x10,
];

/// Camellia: NESSIE set 1 vector 0 and the RFC 3713 appendix vectors
pub(crate) static CAMELLIA: [KnownAnswer; 4] = [
    KnownAnswer {
        name: "nessie-set1-vector0",
        key: &[
            0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00,
        ],
        plaintext: [0u8; 16],
        ciphertext: [
            0x6c, 0x22, 0x7f, 0x74, 0x93, 0x19, 0xa3, 0xaa, 0x7d, 0xa2, 0x35, 0xa9, 0xbb, 0xa0,
            0x5a, 0x2c,
        ],
    },
    KnownAnswer {
        name: "rfc3713-128",
        key: &[
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ],
        plaintext: RFC3713_PLAINTEXT,
        ciphertext: [
            0x67, 0x67, 0x31, 0x38, 0x54, 0x96, 0x69, 0x73, 0x08, 0x57, 0x06, 0x56, 0x48, 0xea,
            0xbe, 0x43,
        ],
    },
    KnownAnswer {
        name: "rfc3713-192",
        key: &[
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54,
            0x32, 0x10, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
        ],
        plaintext: RFC3713_PLAINTEXT,
        ciphertext: [
            0xb4, 0x99, 0x34, 0x01, 0xb3, 0xe9, 0x96, 0xf8, 0x4e, 0xe5, 0xce, 0xe7, 0xd7, 0x9b,
            0x09, 0xb9,
        ],
    },
    KnownAnswer {
        name: "rfc3713-256",
        key: &[
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54,
            0x32, 0x10, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb,
            0xcc, 0xdd, 0xee, 0xff,
        ],
        plaintext: RFC3713_PLAINTEXT,
        ciphertext: [
            0x9a, 0xcc, 0x23, 0x7d, 0xff, 0x16, 0xd7, 0x6c, 0x20, 0xef, 0x7c, 0x91, 0x9e, 0x3a,
            0x75, 0x09,
        ],
    },
];
