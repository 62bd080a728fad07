//! Tag generation and tag-to-counter conversion.
//!
//! The tag is the encryption (under the per-message encryption key) of the
//! POLYVAL digest XORed with the nonce in its first 12 bytes, with the
//! most-significant bit of the last byte cleared. The initial CTR block is
//! the tag with that same bit set. Tag and counter differ in exactly that
//! one bit, which keeps the keystream's seed block from ever appearing on
//! the wire as an authentication value.

use cipher::{Block, BlockEncrypt, BlockSizeUser, consts::U16};

use crate::aead::{BLOCK_SIZE, NONCE_SIZE};

/// Computes the authentication tag from the POLYVAL digest and nonce.
pub(crate) fn compute_tag<C>(
    enc: &C,
    digest: &[u8; BLOCK_SIZE],
    nonce: &[u8; NONCE_SIZE],
) -> [u8; BLOCK_SIZE]
where
    C: BlockEncrypt + BlockSizeUser<BlockSize = U16>,
{
    let mut block = *digest;
    for (byte, n) in block.iter_mut().zip(nonce) {
        *byte ^= n;
    }
    block[BLOCK_SIZE - 1] &= 0x7f;

    let mut buf = Block::<C>::clone_from_slice(&block);
    enc.encrypt_block(&mut buf);
    block.copy_from_slice(&buf);
    block
}

/// Derives the initial CTR block from a tag: same bytes, MSB of the last
/// byte forced to one.
pub(crate) fn tag_to_counter(tag: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut counter = *tag;
    counter[BLOCK_SIZE - 1] |= 0x80;
    counter
}
