//! Reference oracle backed by the published `aes-gcm-siv` crate.
//!
//! The oracle mirrors the subject's interface (runtime key-size dispatch,
//! slice-based seal/open) so differential tests can apply identical
//! operations to both sides and compare results directly.

use aes_gcm_siv::{
    Aes128GcmSiv, Aes256GcmSiv, Key, Nonce,
    aead::{Aead as _, KeyInit, Payload},
};

/// Independent AES-GCM-SIV implementation with the subject's interface.
pub struct Oracle {
    inner: Inner,
}

enum Inner {
    Aes128(Aes128GcmSiv),
    Aes256(Aes256GcmSiv),
}

impl Oracle {
    /// Creates an oracle for a 16- or 32-byte key; `None` otherwise.
    pub fn new(key: &[u8]) -> Option<Self> {
        let inner = match key.len() {
            16 => Inner::Aes128(Aes128GcmSiv::new(Key::<Aes128GcmSiv>::from_slice(key))),
            32 => Inner::Aes256(Aes256GcmSiv::new(Key::<Aes256GcmSiv>::from_slice(key))),
            _ => return None,
        };
        Some(Self { inner })
    }

    /// Reference `seal`; `None` only for inputs beyond the RFC length caps.
    pub fn seal(&self, nonce: &[u8; 12], plaintext: &[u8], aad: &[u8]) -> Option<Vec<u8>> {
        let nonce = Nonce::from_slice(nonce);
        let payload = Payload { msg: plaintext, aad };
        match &self.inner {
            Inner::Aes128(cipher) => cipher.encrypt(nonce, payload).ok(),
            Inner::Aes256(cipher) => cipher.encrypt(nonce, payload).ok(),
        }
    }

    /// Reference `open`; `None` means the oracle rejects the message.
    pub fn open(&self, nonce: &[u8; 12], sealed: &[u8], aad: &[u8]) -> Option<Vec<u8>> {
        let nonce = Nonce::from_slice(nonce);
        let payload = Payload { msg: sealed, aad };
        match &self.inner {
            Inner::Aes128(cipher) => cipher.decrypt(nonce, payload).ok(),
            Inner::Aes256(cipher) => cipher.decrypt(nonce, payload).ok(),
        }
    }
}
