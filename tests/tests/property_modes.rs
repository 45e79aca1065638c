//! Property-based tests for the Camellia modes of operation

use camellia_algorithms::{Camellia, CipherSession, Mode, NonceCounter, SessionParams};
use proptest::prelude::*;

/// Generate data that's a multiple of 16 bytes
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=256).prop_map(|mut v| {
        v.truncate(v.len() - v.len() % 16);
        v
    })
}

/// Any of the three key sizes
fn key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

fn ecb(key: &[u8]) -> CipherSession {
    CipherSession::<Camellia>::new(key, Mode::Ecb, SessionParams::new()).unwrap()
}

fn cbc(key: &[u8], iv: &[u8; 16]) -> CipherSession {
    CipherSession::<Camellia>::new(key, Mode::Cbc, SessionParams::new().with_iv(iv)).unwrap()
}

fn ctr(key: &[u8], prefix: [u8; 12]) -> CipherSession {
    let params = SessionParams::new().with_counter(NonceCounter::new(prefix));
    CipherSession::<Camellia>::new(key, Mode::Ctr, params).unwrap()
}

proptest! {
    #[test]
    fn ecb_roundtrip(key in key(), data in block_aligned_data()) {
        let ciphertext = ecb(&key).encrypt(&data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(ecb(&key).decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn ecb_blocks_are_independent(key in key(), block in any::<[u8; 16]>(), copies in 1usize..8) {
        let data = block.repeat(copies);
        let ciphertext = ecb(&key).encrypt(&data).unwrap();
        let single = ecb(&key).encrypt(&block).unwrap();
        for chunk in ciphertext.chunks(16) {
            prop_assert_eq!(chunk, &single[..]);
        }
    }

    #[test]
    fn cbc_roundtrip(key in key(), iv in any::<[u8; 16]>(), data in block_aligned_data()) {
        let ciphertext = cbc(&key, &iv).encrypt(&data).unwrap();
        prop_assert_eq!(cbc(&key, &iv).decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn cbc_split_matches_joined(
        key in key(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data(),
        split in any::<prop::sample::Index>(),
    ) {
        let blocks = data.len() / 16;
        let at = split.index(blocks + 1) * 16;

        let joined = cbc(&key, &iv).encrypt(&data).unwrap();

        let mut session = cbc(&key, &iv);
        let mut pieces = session.encrypt(&data[..at]).unwrap();
        pieces.extend(session.encrypt(&data[at..]).unwrap());
        prop_assert_eq!(&pieces, &joined);

        let mut session = cbc(&key, &iv);
        let mut recovered = session.decrypt(&joined[..at]).unwrap();
        recovered.extend(session.decrypt(&joined[at..]).unwrap());
        prop_assert_eq!(recovered, data);
    }

    #[test]
    fn ctr_roundtrip_any_length(
        key in key(),
        prefix in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let ciphertext = ctr(&key, prefix).encrypt(&data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(ctr(&key, prefix).decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn ctr_chunking_is_invisible(
        key in key(),
        prefix in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 0..200),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let whole = ctr(&key, prefix).encrypt(&data).unwrap();

        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(data.len() + 1)).collect();
        points.push(0);
        points.push(data.len());
        points.sort_unstable();

        let mut session = ctr(&key, prefix);
        let mut pieces = Vec::new();
        for pair in points.windows(2) {
            pieces.extend(session.encrypt(&data[pair[0]..pair[1]]).unwrap());
        }
        prop_assert_eq!(pieces, whole);
    }

    #[test]
    fn wrong_key_lengths_rejected(len in 0usize..64) {
        prop_assume!(![16, 24, 32].contains(&len));
        let err = CipherSession::<Camellia>::new(&vec![0u8; len], Mode::Ecb, SessionParams::new())
            .unwrap_err();
        prop_assert_eq!(err, camellia_algorithms::Error::InvalidKeyLength { bits: len * 8 });
    }
}
