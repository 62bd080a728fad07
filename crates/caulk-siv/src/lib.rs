//! AES-GCM-SIV authenticated encryption (RFC 8452).
//!
//! This crate implements the AES-GCM-SIV construction: a nonce-misuse-
//! resistant AEAD built from per-message subkey derivation, the POLYVAL
//! universal hash, masked tag generation, and little-endian counter mode.
//! Unlike plain AES-GCM, repeating a nonce under the same key degrades
//! security gracefully (it reveals only message equality) instead of
//! catastrophically.
//!
//! # Design
//!
//! All operations in this crate are pure: `seal` and `open` are
//! deterministic, single-shot functions of their inputs with no I/O and no
//! cross-call state. The AES permutation and the GF(2^128) field multiplier
//! are injected through the `cipher` and `polyval` trait surfaces rather
//! than hardcoded, so reference or hardware-accelerated backends can be
//! substituted: [`GcmSiv`] is generic over any 128-bit block cipher, and
//! [`Aead`] fronts it with runtime key-size dispatch (AES-128 / AES-256).
//!
//! # Security Properties
//!
//! - Tag verification is constant-time over the full 16-byte width
//! - Per-message subkeys live in wipe-on-drop buffers and never outlive a
//!   single call
//! - `open` is all-or-nothing: on authentication failure the candidate
//!   plaintext is zeroized and nothing is returned
//! - Nonce uniqueness remains the caller's responsibility; misuse resistance
//!   is a safety margin, not an invitation
//!
//! # Example
//!
//! ```
//! use caulk_siv::Aead;
//!
//! # fn main() -> Result<(), caulk_siv::SivError> {
//! let aead = Aead::new(&[0x42; 16])?;
//! let nonce = [0x24; 12];
//!
//! let sealed = aead.seal(&nonce, b"attack at dawn", b"header")?;
//! let plaintext = aead.open(&nonce, &sealed, b"header")?;
//! assert_eq!(&plaintext, b"attack at dawn");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aead;
pub mod error;

mod ctr;
mod hash;
mod subkey;
mod tag;

pub use aead::{Aead, Aes128GcmSiv, Aes256GcmSiv, GcmSiv, NONCE_SIZE, TAG_SIZE};
pub use error::SivError;
