//! Load and persist the settings record.

use tracing::warn;

use crate::error::Result;
use crate::settings::{Settings, SettingsUpdate};

use super::SettingsBackend;

/// Facade over a [`SettingsBackend`] that owns the TOML encoding and the
/// clamp-on-every-write-path policy.
pub struct SettingsStore<B> {
    backend: B,
}

impl<B: SettingsBackend> SettingsStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load from the backend, or return defaults.
    ///
    /// Never fails: a missing, unreadable, or unparseable record falls back
    /// to defaults, and out-of-range fields are clamped after the merge.
    pub fn load(&self) -> Settings {
        let record = match self.backend.read() {
            Ok(Some(record)) => record,
            Ok(None) => return Settings::default(),
            Err(e) => {
                warn!("settings record unreadable, using defaults: {e}");
                return Settings::default();
            }
        };
        match toml::from_str::<Settings>(&record) {
            Ok(settings) => settings.clamped(),
            Err(e) => {
                warn!("settings record malformed, using defaults: {e}");
                Settings::default()
            }
        }
    }

    /// Apply `update` over `current` with clamping, then persist and
    /// return the result.
    ///
    /// # Errors
    /// Returns an error if the record cannot be serialized or written.
    pub fn save(&self, current: Settings, update: &SettingsUpdate) -> Result<Settings> {
        let next = current.apply(update);
        let record = toml::to_string_pretty(&next)?;
        self.backend.write(&record)?;
        Ok(next)
    }

    /// Clear the persisted record and return defaults.
    ///
    /// # Errors
    /// Returns an error if the record cannot be removed.
    pub fn reset(&self) -> Result<Settings> {
        self.backend.clear()?;
        Ok(Settings::default())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
