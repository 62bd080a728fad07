//! AEAD error types.

use thiserror::Error;

/// Errors from AEAD operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SivError {
    /// Key length is not 16 or 32 bytes.
    #[error("key must be 16 or 32 bytes, got {len}")]
    InvalidKeySize {
        /// Length of the rejected key.
        len: usize,
    },

    /// Nonce length is not 12 bytes.
    #[error("nonce must be 12 bytes, got {len}")]
    InvalidNonceSize {
        /// Length of the rejected nonce.
        len: usize,
    },

    /// Tag verification failed during `open`.
    ///
    /// Covers tampered ciphertext, tampered associated data, a wrong key or
    /// nonce, and sealed messages too short to contain a tag. All of these
    /// report identically so the failure mode leaks nothing about the cause.
    #[error("authentication failed")]
    AuthenticationFailed,
}

impl SivError {
    /// Returns true if this error is fatal (a precondition violation).
    ///
    /// Size errors indicate programmer error and are not recoverable by
    /// retrying. Authentication failure is an expected runtime outcome for
    /// corrupted or forged input.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::InvalidKeySize { .. } | Self::InvalidNonceSize { .. } => true,
            Self::AuthenticationFailed => false,
        }
    }
}
