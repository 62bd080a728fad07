//! Little-endian counter-mode keystream.
//!
//! AES-GCM-SIV's CTR variant increments a 32-bit little-endian counter held
//! in the first 4 bytes of the block; the remaining 12 bytes stay fixed for
//! the whole message. The counter wraps rather than carrying into byte 4.

use cipher::{Block, BlockEncrypt, BlockSizeUser, consts::U16};

use crate::aead::BLOCK_SIZE;

/// XORs the keystream seeded by `counter_block` into `buf` in place.
///
/// The counter advances once per 16 bytes consumed, including for a partial
/// final block. Encrypting and decrypting are the same operation.
pub(crate) fn apply_keystream<C>(enc: &C, counter_block: &[u8; BLOCK_SIZE], buf: &mut [u8])
where
    C: BlockEncrypt + BlockSizeUser<BlockSize = U16>,
{
    let mut block = Block::<C>::clone_from_slice(counter_block);
    let mut counter = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);

    for chunk in buf.chunks_mut(BLOCK_SIZE) {
        let mut keystream = block.clone();
        enc.encrypt_block(&mut keystream);
        for (byte, k) in chunk.iter_mut().zip(&keystream) {
            *byte ^= k;
        }
        counter = counter.wrapping_add(1);
        block[..4].copy_from_slice(&counter.to_le_bytes());
    }
}
