//! Holographic keystream derivation.
//!
//! Derives the additive keystream from a glyph as a pure function of
//! (seed, length). Identical glyph and length always produce an identical
//! pattern.

use crate::glyph::Glyph;

/// Linear congruential generator parameters.
const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

/// Maximum keystream length. Payloads longer than this reuse the pattern
/// cyclically (`i mod pattern.len()`).
pub const MAX_PATTERN_LEN: usize = 256;

/// Integer seed for a glyph: the sum of its character codes.
pub fn glyph_seed(glyph: &Glyph) -> u32 {
    glyph.as_str().bytes().map(u32::from).sum()
}

/// Derive a keystream of `min(len, 256)` bytes from `seed`.
///
/// Each step advances `state = (state * 9301 + 49297) mod 233280` and
/// emits `state mod 256`.
pub fn derive(seed: u32, len: usize) -> Vec<u8> {
    let capped = len.min(MAX_PATTERN_LEN);
    let mut pattern = Vec::with_capacity(capped);
    let mut state = u64::from(seed);

    for _ in 0..capped {
        state = (state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        pattern.push((state % 256) as u8);
    }

    pattern
}
