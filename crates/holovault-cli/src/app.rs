//! Resolved runtime context shared by all commands.

use std::path::PathBuf;

use anyhow::Context;

use holovault_core::glyph::{Glyph, GlyphSlot, KeyringSlot};
use holovault_core::storage::SqliteStore;
use holovault_core::vault::Vault;

use crate::cli::Cli;
use crate::config::{self, VaultConfig};

pub struct AppContext {
    pub vault_path: PathBuf,
    pub keychain_service: String,
}

impl AppContext {
    /// Resolve the vault path and keychain service.
    ///
    /// Precedence for the path: `--vault` / `HOLOVAULT_PATH`, then the
    /// config file, then the default data directory.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let config = match config::default_config_path() {
            Ok(path) if path.exists() => Some(config::read_config(&path)?),
            _ => None,
        };

        let vault_path = match &cli.vault {
            Some(path) => path.clone(),
            None => match &config {
                Some(cfg) => PathBuf::from(&cfg.vault.path),
                None => config::default_vault_path()?,
            },
        };

        let keychain_service = config
            .as_ref()
            .map(|cfg| cfg.keychain.service.clone())
            .unwrap_or_else(|| "holovault".to_string());

        Ok(Self {
            vault_path,
            keychain_service,
        })
    }

    pub fn slot(&self) -> KeyringSlot {
        KeyringSlot::with_service(self.keychain_service.clone())
    }

    pub fn open_vault(&self) -> anyhow::Result<Vault<SqliteStore, KeyringSlot>> {
        let store = SqliteStore::open(&self.vault_path).with_context(|| {
            format!("Failed to open vault at {}", self.vault_path.display())
        })?;
        Ok(Vault::new(store, self.slot()))
    }

    /// The active glyph, or a hint to run `init`.
    pub fn require_glyph(&self) -> anyhow::Result<Glyph> {
        self.slot()
            .load()
            .context("No glyph configured. Run `holovault init` first.")
    }

    /// Write the config file if it does not exist yet.
    pub fn persist_config(&self) -> anyhow::Result<()> {
        let path = config::default_config_path()?;
        if path.exists() {
            return Ok(());
        }
        let mut cfg = VaultConfig::new(self.vault_path.clone());
        cfg.keychain.service = self.keychain_service.clone();
        config::write_config(&path, &cfg)
    }
}
