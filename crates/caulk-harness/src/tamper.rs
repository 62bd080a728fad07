//! Bit-flipping helpers for tamper-sensitivity tests.

/// Flips one bit of `data` in place.
///
/// `bit` is taken modulo 8 so callers can drive it from arbitrary generated
/// integers. Panics if `byte` is out of range (test helper; indexing is
/// intentional).
pub fn flip_bit(data: &mut [u8], byte: usize, bit: u8) {
    data[byte] ^= 1 << (bit % 8);
}
