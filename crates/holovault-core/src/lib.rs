//! # Holovault Core
//!
//! Core library for Holovault - a glyph-keyed holographic vault for a single
//! local device.
//!
//! This crate provides the glyph manager, the holographic codec, and the
//! indexed persistence layer, independent of any CLI or UI surface.
//!
//! ## Architecture
//!
//! - **glyph**: generation, validation, and secure-slot persistence of the
//!   active glyph (the 8-character partition key)
//! - **holo**: the glyph-derived keystream and the encode/decode transform
//!   built on it
//! - **storage**: the vault entry model and the indexed SQLite store
//! - **vault**: the facade tying the codec and the store together
//!
//! ## What this is not
//!
//! The codec is deterministic, keyed obfuscation - not encryption that would
//! hold up against a capable adversary. A wrong glyph is indistinguishable
//! from an absent entry.

pub mod error;
pub mod glyph;
pub mod holo;
pub mod storage;
pub mod vault;

pub use error::{Result, VaultError};
pub use glyph::{Glyph, GlyphSlot, KeyringSlot, MemorySlot};
pub use storage::{EntryKind, SqliteStore, VaultEntry, VaultStore};
pub use vault::Vault;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
