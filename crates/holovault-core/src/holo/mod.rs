//! Holographic keystream and codec.
//!
//! The keystream is derived from the glyph on every call - it is never
//! persisted or cached, so determinism is an explicit contract rather than
//! an accident of shared state.

pub mod codec;
pub mod pattern;

pub use codec::{decode, encode};
