mod backend;
mod store;

pub use backend::{FileBackend, MemoryBackend, SettingsBackend};
pub use store::SettingsStore;

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Returns `~/.config/focusring[-dev]/` based on FOCUSRING_ENV.
///
/// Set FOCUSRING_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSRING_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusring-dev")
    } else {
        base_dir.join("focusring")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
