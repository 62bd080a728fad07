//! Seal/open orchestration.
//!
//! [`GcmSiv`] is the construction itself, generic over the injected 128-bit
//! block cipher. [`Aead`] fronts it with runtime key-size dispatch so
//! callers holding an opaque 16- or 32-byte key never name a cipher type.
//!
//! # Invariants
//!
//! - Sealed output is `ciphertext || tag`; its length is always plaintext
//!   length + 16
//! - All subkeys are derived fresh per call and wiped before returning
//! - `open` returns the whole verified plaintext or nothing

use core::fmt;

use aes::{Aes128, Aes256};
use cipher::{BlockEncrypt, BlockSizeUser, Key, KeyInit, consts::U16};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::{ctr, error::SivError, hash, subkey, tag};

/// Nonce length in bytes.
pub const NONCE_SIZE: usize = 12;

/// Authentication tag length in bytes.
pub const TAG_SIZE: usize = 16;

/// AES block length in bytes.
pub(crate) const BLOCK_SIZE: usize = 16;

/// AES-GCM-SIV with a 128-bit key.
pub type Aes128GcmSiv = GcmSiv<Aes128>;

/// AES-GCM-SIV with a 256-bit key.
pub type Aes256GcmSiv = GcmSiv<Aes256>;

/// The AES-GCM-SIV construction over an injected block cipher.
///
/// `C` supplies the forward AES permutation (decryption is never used; CTR
/// mode only encrypts). The master key schedule is held for the lifetime of
/// the instance and wiped on drop by the cipher implementation; everything
/// else is derived per call.
#[derive(Clone)]
pub struct GcmSiv<C> {
    cipher: C,
}

impl<C> GcmSiv<C>
where
    C: BlockEncrypt + BlockSizeUser<BlockSize = U16> + KeyInit,
{
    /// Creates an instance from a key of the cipher's native width.
    pub fn new(key: &Key<C>) -> Self {
        Self { cipher: C::new(key) }
    }

    /// Encrypts and authenticates `plaintext`, binding `aad` and `nonce`.
    ///
    /// Returns `ciphertext || tag`. The nonce must be unique per key for
    /// the full security margin; reuse reveals only message equality.
    ///
    /// # Errors
    ///
    /// [`SivError::InvalidNonceSize`] if `nonce` is not 12 bytes.
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, SivError> {
        let nonce = check_nonce(nonce)?;
        let keys = subkey::derive_subkeys(&self.cipher, nonce);
        let enc = C::new(&keys.enc);

        let digest = hash::polyval_hash(&keys.auth, aad, plaintext);
        let tag = tag::compute_tag(&enc, &digest, nonce);

        let mut sealed = Vec::with_capacity(plaintext.len() + TAG_SIZE);
        sealed.extend_from_slice(plaintext);
        ctr::apply_keystream(&enc, &tag::tag_to_counter(&tag), &mut sealed);
        sealed.extend_from_slice(&tag);
        Ok(sealed)
    }

    /// Verifies and decrypts a sealed message.
    ///
    /// `sealed` is the `ciphertext || tag` produced by [`Self::seal`]; the
    /// nonce and associated data are supplied out-of-band and must match
    /// the sealing call.
    ///
    /// # Errors
    ///
    /// [`SivError::InvalidNonceSize`] if `nonce` is not 12 bytes.
    /// [`SivError::AuthenticationFailed`] for any input `seal` did not
    /// produce, including sealed messages shorter than one tag.
    pub fn open(&self, nonce: &[u8], sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>, SivError> {
        let nonce = check_nonce(nonce)?;
        let Some(split) = sealed.len().checked_sub(TAG_SIZE) else {
            // Too short to hold a tag; same failure mode as a bad tag.
            return Err(SivError::AuthenticationFailed);
        };
        let (ciphertext, tail) = sealed.split_at(split);
        let mut received = [0u8; TAG_SIZE];
        received.copy_from_slice(tail);

        let keys = subkey::derive_subkeys(&self.cipher, nonce);
        let enc = C::new(&keys.enc);

        let mut plaintext = ciphertext.to_vec();
        ctr::apply_keystream(&enc, &tag::tag_to_counter(&received), &mut plaintext);

        let digest = hash::polyval_hash(&keys.auth, aad, &plaintext);
        let expected = tag::compute_tag(&enc, &digest, nonce);

        // Fixed-width comparison; no early exit on the first mismatch.
        if bool::from(expected[..].ct_eq(&received[..])) {
            Ok(plaintext)
        } else {
            plaintext.zeroize();
            Err(SivError::AuthenticationFailed)
        }
    }
}

impl<C> fmt::Debug for GcmSiv<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the key schedule.
        f.debug_struct("GcmSiv").finish_non_exhaustive()
    }
}

/// An AES-GCM-SIV instance keyed at runtime.
///
/// The key length (16 or 32 bytes) selects AES-128 or AES-256 at
/// construction; seal/open behave identically from then on.
#[derive(Clone)]
pub struct Aead {
    inner: Inner,
}

#[derive(Clone)]
enum Inner {
    Aes128(Aes128GcmSiv),
    Aes256(Aes256GcmSiv),
}

impl Aead {
    /// Creates an instance from a 16- or 32-byte key.
    ///
    /// # Errors
    ///
    /// [`SivError::InvalidKeySize`] for any other key length.
    pub fn new(key: &[u8]) -> Result<Self, SivError> {
        let inner = match key.len() {
            16 => Inner::Aes128(GcmSiv::new(Key::<Aes128>::from_slice(key))),
            32 => Inner::Aes256(GcmSiv::new(Key::<Aes256>::from_slice(key))),
            len => return Err(SivError::InvalidKeySize { len }),
        };
        Ok(Self { inner })
    }

    /// Key length in bytes (16 or 32).
    pub fn key_size(&self) -> usize {
        match &self.inner {
            Inner::Aes128(_) => 16,
            Inner::Aes256(_) => 32,
        }
    }

    /// Encrypts and authenticates `plaintext`; see [`GcmSiv::seal`].
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, SivError> {
        match &self.inner {
            Inner::Aes128(siv) => siv.seal(nonce, plaintext, aad),
            Inner::Aes256(siv) => siv.seal(nonce, plaintext, aad),
        }
    }

    /// Verifies and decrypts a sealed message; see [`GcmSiv::open`].
    pub fn open(&self, nonce: &[u8], sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>, SivError> {
        match &self.inner {
            Inner::Aes128(siv) => siv.open(nonce, sealed, aad),
            Inner::Aes256(siv) => siv.open(nonce, sealed, aad),
        }
    }
}

impl fmt::Debug for Aead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact everything but the variant.
        f.debug_struct("Aead").field("key_size", &self.key_size()).finish()
    }
}

fn check_nonce(nonce: &[u8]) -> Result<&[u8; NONCE_SIZE], SivError> {
    nonce.try_into().map_err(|_| SivError::InvalidNonceSize { len: nonce.len() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONCE: [u8; NONCE_SIZE] = [3; NONCE_SIZE];

    #[test]
    fn rejects_keys_that_are_not_16_or_32_bytes() {
        for len in [0, 1, 15, 17, 24, 31, 33, 64] {
            let err = Aead::new(&vec![0u8; len]).unwrap_err();
            assert_eq!(err, SivError::InvalidKeySize { len });
        }
    }

    #[test]
    fn rejects_nonces_that_are_not_12_bytes() {
        let aead = Aead::new(&[0; 16]).unwrap();
        for len in [0, 1, 11, 13, 16] {
            let nonce = vec![0u8; len];
            assert_eq!(
                aead.seal(&nonce, b"x", b"").unwrap_err(),
                SivError::InvalidNonceSize { len }
            );
            assert_eq!(
                aead.open(&nonce, &[0u8; 32], b"").unwrap_err(),
                SivError::InvalidNonceSize { len }
            );
        }
    }

    #[test]
    fn sealed_length_is_plaintext_length_plus_tag() {
        let aead = Aead::new(&[0; 32]).unwrap();
        for len in [0usize, 1, 15, 16, 17, 255] {
            let sealed = aead.seal(&NONCE, &vec![0u8; len], b"").unwrap();
            assert_eq!(sealed.len(), len + TAG_SIZE);
        }
    }

    #[test]
    fn open_rejects_sealed_messages_shorter_than_a_tag() {
        let aead = Aead::new(&[0; 16]).unwrap();
        for len in 0..TAG_SIZE {
            assert_eq!(
                aead.open(&NONCE, &vec![0u8; len], b"").unwrap_err(),
                SivError::AuthenticationFailed
            );
        }
    }

    #[test]
    fn debug_output_redacts_key_material() {
        let aead = Aead::new(&[0x42; 32]).unwrap();
        let rendered = format!("{aead:?}");
        assert!(!rendered.contains("42"));
        assert!(rendered.contains("32"));
    }

    #[test]
    fn generic_core_round_trips_without_the_runtime_front() {
        let siv = Aes128GcmSiv::new(&[9; 16].into());
        let sealed = siv.seal(&NONCE, b"payload", b"aad").unwrap();
        assert_eq!(siv.open(&NONCE, &sealed, b"aad").unwrap(), b"payload");
    }
}
