//! Error types for vault core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-facing messages. Codec failures never surface from the read path -
//! `Vault::get` collapses them to "not found".

use thiserror::Error;

/// Result type alias for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Core error type for vault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Glyph failed format validation (caller-side, preventable)
    #[error("Invalid glyph: {0}")]
    InvalidGlyph(String),

    /// Backing store unavailable or I/O failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Ciphertext did not decode to parseable content.
    ///
    /// This is the expected outcome of decoding with the wrong glyph; there
    /// is no separate integrity check that could tell the two apart.
    #[error("Malformed ciphertext: {0}")]
    Malformed(String),
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        VaultError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for VaultError {
    fn from(err: rusqlite::Error) -> Self {
        VaultError::Storage(err.to_string())
    }
}
