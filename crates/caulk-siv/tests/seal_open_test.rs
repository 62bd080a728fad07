//! Seal/open behavioral tests.

use caulk_siv::{Aead, SivError, TAG_SIZE};

const KEY_128: [u8; 16] = [0x11; 16];
const KEY_256: [u8; 32] = [0x22; 32];
const NONCE: [u8; 12] = [0x33; 12];

#[test]
fn round_trips_under_both_key_sizes() {
    for key in [&KEY_128[..], &KEY_256[..]] {
        let aead = Aead::new(key).unwrap();
        let sealed = aead.seal(&NONCE, b"the quick brown fox", b"aad").unwrap();
        assert_eq!(aead.open(&NONCE, &sealed, b"aad").unwrap(), b"the quick brown fox");
    }
}

#[test]
fn empty_plaintext_and_empty_aad_round_trip() {
    let aead = Aead::new(&KEY_128).unwrap();
    let sealed = aead.seal(&NONCE, b"", b"").unwrap();
    assert_eq!(sealed.len(), TAG_SIZE);
    assert_eq!(aead.open(&NONCE, &sealed, b"").unwrap(), b"");
}

#[test]
fn seal_is_deterministic() {
    let aead = Aead::new(&KEY_256).unwrap();
    let a = aead.seal(&NONCE, b"payload", b"aad").unwrap();
    let b = aead.seal(&NONCE, b"payload", b"aad").unwrap();
    assert_eq!(a, b);
}

#[test]
fn wrong_key_fails_authentication() {
    let sealer = Aead::new(&KEY_128).unwrap();
    let opener = Aead::new(&[0x12; 16]).unwrap();
    let sealed = sealer.seal(&NONCE, b"payload", b"").unwrap();
    assert_eq!(opener.open(&NONCE, &sealed, b""), Err(SivError::AuthenticationFailed));
}

#[test]
fn wrong_nonce_fails_authentication() {
    let aead = Aead::new(&KEY_128).unwrap();
    let sealed = aead.seal(&NONCE, b"payload", b"").unwrap();
    assert_eq!(aead.open(&[0x34; 12], &sealed, b""), Err(SivError::AuthenticationFailed));
}

#[test]
fn wrong_aad_fails_authentication() {
    let aead = Aead::new(&KEY_128).unwrap();
    let sealed = aead.seal(&NONCE, b"payload", b"expected aad").unwrap();
    assert_eq!(aead.open(&NONCE, &sealed, b"other aad"), Err(SivError::AuthenticationFailed));
    assert_eq!(aead.open(&NONCE, &sealed, b""), Err(SivError::AuthenticationFailed));
}

#[test]
fn truncated_and_extended_sealed_messages_fail() {
    let aead = Aead::new(&KEY_256).unwrap();
    let sealed = aead.seal(&NONCE, b"payload", b"").unwrap();

    assert_eq!(
        aead.open(&NONCE, &sealed[..sealed.len() - 1], b""),
        Err(SivError::AuthenticationFailed)
    );

    let mut extended = sealed;
    extended.push(0);
    assert_eq!(aead.open(&NONCE, &extended, b""), Err(SivError::AuthenticationFailed));
}

#[test]
fn nonce_reuse_reveals_only_message_equality() {
    // Same (key, nonce) and same plaintext collide by design; different
    // plaintexts still produce unrelated ciphertexts and tags.
    let aead = Aead::new(&KEY_128).unwrap();
    let a = aead.seal(&NONCE, b"same message", b"").unwrap();
    let b = aead.seal(&NONCE, b"same message", b"").unwrap();
    let c = aead.seal(&NONCE, b"diff message", b"").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
