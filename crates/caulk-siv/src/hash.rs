//! POLYVAL hash over associated data and plaintext.
//!
//! The hash input is: associated data zero-padded to a 16-byte boundary,
//! plaintext zero-padded likewise, then one length block holding the 64-bit
//! little-endian bit lengths of the associated data and the plaintext. The
//! length block makes the padding unambiguous, so `[0; 15]` and `[0; 16]`
//! hash differently even though their padded bytes are identical.
//!
//! The `polyval` crate works in POLYVAL's native field-element order, so the
//! byte-reversal and mulX bridging steps needed when a GHASH-oriented
//! multiplier is reused do not apply here; the authentication key is the
//! field element H as-is.

use polyval::{
    Polyval,
    universal_hash::{KeyInit, UniversalHash},
};

use crate::aead::BLOCK_SIZE;

/// Hashes `aad` then `plaintext` under the 16-byte POLYVAL key.
///
/// Always returns 16 bytes, including when both inputs are empty (the
/// length block alone is hashed in that case).
pub(crate) fn polyval_hash(auth_key: &[u8; 16], aad: &[u8], plaintext: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut poly = Polyval::new(polyval::Key::from_slice(auth_key));
    poly.update_padded(aad);
    poly.update_padded(plaintext);

    let mut length_block = [0u8; BLOCK_SIZE];
    length_block[..8].copy_from_slice(&((aad.len() as u64) * 8).to_le_bytes());
    length_block[8..].copy_from_slice(&((plaintext.len() as u64) * 8).to_le_bytes());
    poly.update(&[length_block.into()]);

    let mut digest = [0u8; BLOCK_SIZE];
    digest.copy_from_slice(&poly.finalize());
    digest
}
