//! Known-answer vectors replayed through the session API

use camellia_algorithms::{
    Camellia, CipherSession, Error, KeyBits, Mode, NonceCounter, SessionParams,
};
use camellia_tests::suites::kat::{self, all_files, load_file, run_group};

#[test]
fn all_vector_files_pass() {
    // nessie 2, openssl 3, rfc3713 3, rfc5528 9
    let count = kat::run_all().unwrap();
    assert_eq!(count, 17, "unexpected number of vectors ran");
}

#[test]
fn each_file_loads_and_passes() {
    let files = all_files().unwrap();
    let stems: Vec<&str> = files.iter().map(|(stem, _)| stem.as_str()).collect();
    assert_eq!(stems, ["nessie", "openssl", "rfc3713", "rfc5528"]);

    for (stem, file) in files {
        for group in &file.groups {
            if let Err(e) = run_group(group) {
                panic!("{} ({}) failed: {}", stem, file.source, e);
            }
        }
    }
}

#[test]
fn rfc5528_covers_every_key_size() {
    let file = load_file("rfc5528").unwrap();
    let tests = &file.groups[0].tests;
    assert_eq!(tests.len(), 9);

    for (i, case) in tests.iter().enumerate() {
        let bits = KeyBits::from_key_len(case.key.len() / 2).unwrap();
        let expected = [KeyBits::Bits128, KeyBits::Bits192, KeyBits::Bits256][i / 3];
        assert_eq!(bits, expected, "{}", case.name);
    }
}

#[test]
fn rfc5528_counter_blocks() {
    let file = load_file("rfc5528").unwrap();
    let case = &file.groups[0].tests[0];
    assert_eq!(case.counter_blocks.as_deref(), Some("00000030000000000000000000000001"));

    let key = hex::decode(&case.key).unwrap();
    let pt = hex::decode(&case.pt).unwrap();
    assert_eq!(pt, b"Single block msg");

    let counter = NonceCounter::from_nonce_iv([0, 0, 0, 0x30], [0; 8]);
    let params = SessionParams::new().with_counter(counter);
    let mut session = CipherSession::<Camellia>::new(&key, Mode::Ctr, params).unwrap();
    let ct = session.encrypt(&pt).unwrap();
    assert_eq!(hex::encode(ct), "d09dc29a8214619a20877c76db1f0b3f");
}

#[test]
fn rfc5528_partial_block_in_chunks() {
    // TV #3: 36 bytes, so the third counter block is only partly used
    let file = load_file("rfc5528").unwrap();
    let case = &file.groups[0].tests[2];
    assert_eq!(case.name, "rfc5528-tv3");
    assert!(case.counter_blocks.as_deref().unwrap().ends_with("00000003"));

    let key = hex::decode(&case.key).unwrap();
    let pt = hex::decode(&case.pt).unwrap();
    let ct = hex::decode(&case.ct).unwrap();
    assert_eq!(pt.len(), 36);

    let iv = [0x27, 0x77, 0x7f, 0x3f, 0x4a, 0x17, 0x86, 0xf0];
    let counter = NonceCounter::from_nonce_iv([0x00, 0xe0, 0x01, 0x7b], iv);
    let params = SessionParams::new().with_counter(counter);
    let mut session = CipherSession::<Camellia>::new(&key, Mode::Ctr, params).unwrap();

    let mut out = Vec::new();
    for chunk in pt.chunks(7) {
        out.extend(session.encrypt(chunk).unwrap());
    }
    assert_eq!(out, ct);
}

#[test]
fn openssl_cbc_chains_block_by_block() {
    let file = load_file("openssl").unwrap();
    let group = &file.groups[0];
    assert_eq!(group.mode, "CBC");

    for case in &group.tests {
        let key = hex::decode(&case.key).unwrap();
        let iv = hex::decode(case.iv.as_deref().unwrap()).unwrap();
        let pt = hex::decode(&case.pt).unwrap();
        let ct = hex::decode(&case.ct).unwrap();

        let params = SessionParams::new().with_iv(&iv);
        let mut session = CipherSession::<Camellia>::new(&key, Mode::Cbc, params).unwrap();
        let mut out = Vec::new();
        for block in pt.chunks(16) {
            out.extend(session.encrypt(block).unwrap());
        }
        assert_eq!(out, ct, "{}", case.name);
        assert_eq!(&session.chaining_block().unwrap()[..], &ct[ct.len() - 16..]);
    }
}

#[test]
fn tampered_vector_is_reported() {
    let mut file = load_file("rfc3713").unwrap();
    let case = &mut file.groups[0].tests[0];
    case.ct.replace_range(0..2, "00");

    let err = run_group(&file.groups[0]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("rfc3713-128"), "{}", message);
    assert!(message.contains("ciphertext"), "{}", message);
}

#[test]
fn tampered_counter_blocks_are_reported() {
    let mut file = load_file("rfc5528").unwrap();
    let case = &mut file.groups[0].tests[1];
    let blocks = case.counter_blocks.as_mut().unwrap();
    let len = blocks.len();
    blocks.replace_range(len - 2..len, "07");

    let err = run_group(&file.groups[0]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("rfc5528-tv2"), "{}", message);
    assert!(message.contains("counter blocks"), "{}", message);
}

#[test]
fn missing_ctr_fields_are_reported() {
    let mut file = load_file("rfc5528").unwrap();
    file.groups[0].tests[0].nonce = None;

    let err = run_group(&file.groups[0]).unwrap_err();
    assert!(matches!(err, kat::KatError::MissingField("nonce")));
}

#[test]
fn malformed_inputs_are_rejected() {
    assert_eq!(
        CipherSession::<Camellia>::new(&[0u8; 15], Mode::Ecb, SessionParams::new()).unwrap_err(),
        Error::InvalidKeyLength { bits: 120 }
    );

    let params = SessionParams::new().with_iv(&[0u8; 16]);
    let mut cbc = CipherSession::<Camellia>::new(&[0u8; 16], Mode::Cbc, params).unwrap();
    assert_eq!(
        cbc.encrypt(&[0u8; 17]).unwrap_err(),
        Error::InvalidInputLength { context: "CBC plaintext", actual: 17 }
    );

    let mut ctr = CipherSession::<Camellia>::new(
        &[0u8; 16],
        Mode::Ctr,
        SessionParams::new().with_counter(|| vec![0u8; 15]),
    )
    .unwrap();
    assert_eq!(
        ctr.encrypt(b"x").unwrap_err(),
        Error::InvalidCounterLength { actual: 15 }
    );
}
