//! Per-message subkey derivation.
//!
//! AES-GCM-SIV never authenticates or encrypts under the master key
//! directly. Each call derives a 16-byte POLYVAL authentication key and a
//! key-sized encryption key from (master key, nonce) by encrypting counter
//! blocks and keeping the first half of each ciphertext.
//!
//! # Invariants
//!
//! - Derivation is a pure function of (master key, nonce)
//! - Counter blocks carry a 32-bit little-endian counter in bytes 0..4 and
//!   the nonce in bytes 4..16; only the counter bytes change between calls
//!   to the block cipher
//! - Counters 0 and 1 feed the authentication key; counters 2.. feed the
//!   encryption key (two blocks for AES-128, four for AES-256)

use cipher::{Block, BlockEncrypt, BlockSizeUser, Key, KeySizeUser, consts::U16};
use zeroize::Zeroize;

use crate::aead::NONCE_SIZE;

/// Subkeys for a single seal or open call. Wiped on drop, on every exit
/// path.
pub(crate) struct Subkeys<C: KeySizeUser> {
    /// POLYVAL authentication key (`message_authentication_key`).
    pub(crate) auth: [u8; 16],
    /// CTR/tag encryption key (`message_encryption_key`), same width as the
    /// master key.
    pub(crate) enc: Key<C>,
}

impl<C: KeySizeUser> Drop for Subkeys<C> {
    fn drop(&mut self) {
        self.auth.zeroize();
        self.enc.as_mut_slice().zeroize();
    }
}

/// Derives the per-message subkeys for `nonce` under the master cipher.
pub(crate) fn derive_subkeys<C>(master: &C, nonce: &[u8; NONCE_SIZE]) -> Subkeys<C>
where
    C: BlockEncrypt + BlockSizeUser<BlockSize = U16> + KeySizeUser,
{
    let mut keys = Subkeys { auth: [0u8; 16], enc: Key::<C>::default() };
    let mut counter = 0u32;
    derive_into(master, nonce, &mut counter, &mut keys.auth);
    derive_into(master, nonce, &mut counter, keys.enc.as_mut_slice());
    keys
}

/// Fills `out` 8 bytes at a time, taking the first half of each counter
/// block's ciphertext. `out.len()` must be a multiple of 8.
fn derive_into<C>(master: &C, nonce: &[u8; NONCE_SIZE], counter: &mut u32, out: &mut [u8])
where
    C: BlockEncrypt + BlockSizeUser<BlockSize = U16>,
{
    let mut block = Block::<C>::default();
    block[4..].copy_from_slice(nonce);

    for chunk in out.chunks_exact_mut(8) {
        block[..4].copy_from_slice(&counter.to_le_bytes());
        let mut ciphertext = block.clone();
        master.encrypt_block(&mut ciphertext);
        chunk.copy_from_slice(&ciphertext[..8]);
        *counter += 1;
    }
}
