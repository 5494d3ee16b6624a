//! Secure single-slot persistence for the active glyph.
//!
//! The slot holds at most one glyph per device; saving replaces any prior
//! value. Reads are best-effort: a missing slot, a platform failure, or a
//! stored value that no longer validates all collapse to `None`, so
//! dependents can treat "no glyph" uniformly.

use std::sync::Mutex;

use tracing::warn;

use super::Glyph;
use crate::error::{Result, VaultError};

/// The secure storage slot holding the active glyph.
pub trait GlyphSlot: Send + Sync {
    /// Persist the glyph, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Storage` if the platform slot is unavailable.
    /// Write failures are reported, never silently swallowed.
    fn save(&self, glyph: &Glyph) -> Result<()>;

    /// The currently stored glyph, or `None` if never set.
    ///
    /// Read failures are logged and treated as "none" - this is a
    /// best-effort accessor.
    fn load(&self) -> Option<Glyph>;

    /// Remove the stored glyph. Clearing an empty slot is not an error.
    fn clear(&self) -> Result<()>;
}

/// Glyph slot backed by the OS keychain.
pub struct KeyringSlot {
    service: String,
    account: String,
}

impl KeyringSlot {
    /// Default keychain account name for the glyph slot.
    pub const DEFAULT_ACCOUNT: &'static str = "glyph";

    pub fn new(service: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            account: account.into(),
        }
    }

    /// Slot under the given service name with the default account.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self::new(service, Self::DEFAULT_ACCOUNT)
    }

    fn entry(&self) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service, &self.account)
            .map_err(|e| VaultError::Storage(format!("Keychain entry failed: {}", e)))
    }
}

impl GlyphSlot for KeyringSlot {
    fn save(&self, glyph: &Glyph) -> Result<()> {
        self.entry()?
            .set_password(glyph.as_str())
            .map_err(|e| VaultError::Storage(format!("Keychain write failed: {}", e)))
    }

    fn load(&self) -> Option<Glyph> {
        let entry = match self.entry() {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Keychain unavailable: {}", err);
                return None;
            }
        };

        match entry.get_password() {
            Ok(value) => match Glyph::new(value) {
                Ok(glyph) => Some(glyph),
                Err(err) => {
                    warn!("Stored glyph failed validation: {}", err);
                    None
                }
            },
            Err(keyring::Error::NoEntry) => None,
            Err(err) => {
                warn!("Keychain read failed: {}", err);
                None
            }
        }
    }

    fn clear(&self) -> Result<()> {
        match self.entry()?.delete_password() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(VaultError::Storage(format!(
                "Keychain delete failed: {}",
                err
            ))),
        }
    }
}

/// In-process glyph slot.
///
/// Lets tests and embedders exercise multiple partitions in one process
/// without touching the platform keychain.
#[derive(Default)]
pub struct MemorySlot {
    glyph: Mutex<Option<Glyph>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-loaded with the given glyph.
    pub fn holding(glyph: Glyph) -> Self {
        Self {
            glyph: Mutex::new(Some(glyph)),
        }
    }
}

impl GlyphSlot for MemorySlot {
    fn save(&self, glyph: &Glyph) -> Result<()> {
        let mut guard = self
            .glyph
            .lock()
            .map_err(|_| VaultError::Storage("Glyph slot poisoned".to_string()))?;
        *guard = Some(glyph.clone());
        Ok(())
    }

    fn load(&self) -> Option<Glyph> {
        match self.glyph.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                warn!("Glyph slot poisoned");
                None
            }
        }
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .glyph
            .lock()
            .map_err(|_| VaultError::Storage("Glyph slot poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}
