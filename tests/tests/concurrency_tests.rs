//! Sessions, schedules and the self-test under concurrent use

use camellia_algorithms::block::{derive, encrypt_block};
use camellia_algorithms::{selftest, Camellia, CipherSession, Mode, NonceCounter, SessionParams};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn concurrent_self_test_agrees() {
    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                selftest::ensure::<Camellia>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(()));
    }
    assert_eq!(selftest::status::<Camellia>(), Some(Ok(())));
}

#[test]
fn schedule_is_shared_read_only() {
    let schedule = derive::<Camellia>(&[0x0fu8; 32]).unwrap();
    let bits = schedule.bits();
    let expected: Vec<_> = (0u8..16)
        .map(|i| encrypt_block(bits, &schedule, &[i; 16]).unwrap())
        .collect();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (i, want) in expected.iter().enumerate() {
                    let got = encrypt_block(bits, &schedule, &[i as u8; 16]).unwrap();
                    assert_eq!(&got, want);
                }
            });
        }
    });
}

#[test]
fn sessions_move_between_threads() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let mut data = vec![0u8; 1000];
    rng.fill_bytes(&mut data);
    let data = Arc::new(data);

    let build = |i: u8| {
        let prefix = [i; 12];
        let params = SessionParams::new().with_counter(NonceCounter::new(prefix));
        CipherSession::<Camellia>::new(&[i; 16], Mode::Ctr, params).unwrap()
    };

    let sequential: Vec<Vec<u8>> = (0..6u8).map(|i| build(i).encrypt(&data).unwrap()).collect();

    let handles: Vec<_> = (0..6u8)
        .map(|i| {
            let mut session = build(i);
            let data = Arc::clone(&data);
            thread::spawn(move || {
                // Uneven chunks on the worker thread
                let mut out = Vec::new();
                for chunk in data.chunks(37) {
                    out.extend(session.encrypt(chunk).unwrap());
                }
                out
            })
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(sequential) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn independent_cbc_sessions_in_parallel() {
    let key = [0x5au8; 24];
    let iv = [0xa5u8; 16];
    let data = vec![0x11u8; 16 * 64];

    let reference =
        CipherSession::<Camellia>::new(&key, Mode::Cbc, SessionParams::new().with_iv(&iv))
            .unwrap()
            .encrypt(&data)
            .unwrap();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let params = SessionParams::new().with_iv(&iv);
                let mut session = CipherSession::<Camellia>::new(&key, Mode::Cbc, params).unwrap();
                let mut out = Vec::new();
                for chunk in data.chunks(16 * 5) {
                    out.extend(session.encrypt(chunk).unwrap());
                }
                assert_eq!(out, reference);
            });
        }
    });
}
