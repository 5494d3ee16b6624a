//! Holographic encode/decode.
//!
//! Values are serialized to canonical JSON, shifted per UTF-16 code unit by
//! the glyph-derived keystream (mod 65536), framed as little-endian byte
//! pairs, and base64-encoded into a transportable token. The 16-bit unit
//! width keeps the transform faithful for multi-byte text; astral-plane
//! characters ride through as surrogate pairs.
//!
//! There is no nonce and no integrity check: encoding the same value with
//! the same glyph twice yields an identical token, and decoding with the
//! wrong glyph surfaces only as [`VaultError::Malformed`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::pattern;
use crate::error::{Result, VaultError};
use crate::glyph::Glyph;

/// Encode a value into a glyph-keyed token.
///
/// # Examples
///
/// ```
/// use holovault_core::glyph::Glyph;
/// use holovault_core::holo::{decode, encode};
///
/// let glyph = Glyph::new("QZX1Y2K9").unwrap();
/// let value = serde_json::json!({"count": 5});
///
/// let token = encode(&value, &glyph).unwrap();
/// assert_eq!(decode(&token, &glyph).unwrap(), value);
/// ```
pub fn encode(value: &serde_json::Value, glyph: &Glyph) -> Result<String> {
    let text = serde_json::to_string(value)
        .map_err(|e| VaultError::Storage(format!("Failed to serialize value: {}", e)))?;
    let units: Vec<u16> = text.encode_utf16().collect();
    let keystream = pattern::derive(pattern::glyph_seed(glyph), units.len());

    let mut framed = Vec::with_capacity(units.len() * 2);
    for (i, unit) in units.iter().enumerate() {
        let shifted = unit.wrapping_add(u16::from(keystream[i % keystream.len()]));
        framed.extend_from_slice(&shifted.to_le_bytes());
    }

    Ok(STANDARD.encode(framed))
}

/// Decode a token produced by [`encode`] with the same glyph.
///
/// # Errors
///
/// Returns `VaultError::Malformed` if the token does not unframe, or if the
/// shifted text fails to parse. A mismatched glyph produces exactly this
/// error - there is no distinguishable "wrong key" outcome.
pub fn decode(token: &str, glyph: &Glyph) -> Result<serde_json::Value> {
    let framed = STANDARD
        .decode(token)
        .map_err(|e| VaultError::Malformed(format!("Invalid token framing: {}", e)))?;
    if framed.len() % 2 != 0 {
        return Err(VaultError::Malformed(
            "Token length is not unit-aligned".to_string(),
        ));
    }

    let cipher_units: Vec<u16> = framed
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let keystream = pattern::derive(pattern::glyph_seed(glyph), cipher_units.len());

    let mut units = Vec::with_capacity(cipher_units.len());
    for (i, unit) in cipher_units.iter().enumerate() {
        units.push(unit.wrapping_sub(u16::from(keystream[i % keystream.len()])));
    }

    let text = String::from_utf16(&units)
        .map_err(|e| VaultError::Malformed(format!("Token did not decode to text: {}", e)))?;
    serde_json::from_str(&text)
        .map_err(|e| VaultError::Malformed(format!("Token did not decode to a value: {}", e)))
}
