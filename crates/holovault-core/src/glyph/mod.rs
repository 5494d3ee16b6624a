//! Glyph generation, validation, and secure persistence.
//!
//! A glyph is the 8-character `[A-Z0-9]` secret that partitions the vault.
//! There is exactly one active glyph per device, held in a single secure
//! slot; see [`GlyphSlot`] for the persistence contract.

mod slot;

pub use slot::{GlyphSlot, KeyringSlot, MemorySlot};

use zeroize::Zeroize;

use crate::error::{Result, VaultError};

/// Required glyph length in characters.
pub const GLYPH_LEN: usize = 8;

/// The 36-symbol glyph alphabet.
const GLYPH_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Validate glyph format.
///
/// Returns true iff `input` is exactly 8 characters drawn from `A-Z0-9`.
///
/// # Examples
///
/// ```
/// use holovault_core::glyph::validate;
///
/// assert!(validate("ABCD1234"));
/// assert!(!validate("abcd1234"));
/// assert!(!validate("ABCDEFG"));
/// ```
pub fn validate(input: &str) -> bool {
    input.len() == GLYPH_LEN
        && input
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// A validated glyph.
///
/// The sole secret distinguishing one vault partition from another. The
/// backing string is wiped from memory on drop and redacted from `Debug`
/// output, mirroring how derived key material is handled elsewhere.
#[derive(Clone, PartialEq, Eq)]
pub struct Glyph(String);

impl Glyph {
    /// Accept a user-supplied glyph.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::InvalidGlyph` if `input` does not match
    /// `^[A-Z0-9]{8}$`. Rejection happens before any I/O is attempted.
    pub fn new(input: impl Into<String>) -> Result<Self> {
        let input = input.into();
        if !validate(&input) {
            return Err(VaultError::InvalidGlyph(format!(
                "Glyph must be exactly {} characters from A-Z0-9",
                GLYPH_LEN
            )));
        }
        Ok(Self(input))
    }

    /// Draw a fresh glyph from the 36-symbol alphabet.
    ///
    /// Uses the system randomness source. No cryptographic-strength claim
    /// is made for glyph generation.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Storage` if the randomness source is
    /// unavailable.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; GLYPH_LEN];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| VaultError::Storage(format!("Random source unavailable: {}", e)))?;

        let glyph: String = bytes
            .iter()
            .map(|b| GLYPH_ALPHABET[usize::from(*b) % GLYPH_ALPHABET.len()] as char)
            .collect();
        Ok(Self(glyph))
    }

    /// The glyph's character representation.
    ///
    /// Avoid storing or logging this value outside the secure slot.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for Glyph {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Glyph").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_uppercase_alphanumeric() {
        assert!(validate("ABCD1234"));
        assert!(validate("QZX1Y2K9"));
        assert!(validate("00000000"));
        assert!(validate("ZZZZZZZZ"));
    }

    #[test]
    fn test_validate_rejects_lowercase() {
        assert!(!validate("abcd1234"));
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        assert!(!validate("ABCDEFG"));
        assert!(!validate("ABCDEFGH1"));
        assert!(!validate(""));
    }

    #[test]
    fn test_validate_rejects_symbols_and_unicode() {
        assert!(!validate("ABCD-123"));
        assert!(!validate("ABCD 123"));
        assert!(!validate("ÄBCD1234"));
    }

    #[test]
    fn test_new_rejects_invalid_input() {
        let result = Glyph::new("abcd1234");
        assert!(matches!(result, Err(VaultError::InvalidGlyph(_))));
    }

    #[test]
    fn test_generated_glyph_is_valid() {
        for _ in 0..32 {
            let glyph = Glyph::generate().expect("generation should succeed");
            assert!(validate(glyph.as_str()));
        }
    }

    #[test]
    fn test_debug_redacts_value() {
        let glyph = Glyph::new("ABCD1234").unwrap();
        let debug_output = format!("{:?}", glyph);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("ABCD1234"));
    }
}
