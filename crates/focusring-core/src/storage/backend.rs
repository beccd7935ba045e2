//! Pluggable persistence for the settings record.
//!
//! A backend stores exactly one TOML document as opaque text. Parsing and
//! clamping stay in [`super::SettingsStore`].

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Result, StorageError};

use super::data_dir;

/// Storage for the single settings record.
pub trait SettingsBackend {
    /// Read the record, or `None` if nothing has been persisted yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the record.
    fn write(&self, record: &str) -> Result<()>;

    /// Delete the record. Absence is not an error.
    fn clear(&self) -> Result<()>;
}

/// File-backed settings record at `<data_dir>/settings.toml`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Backend rooted at the standard data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join("settings.toml"),
        })
    }

    /// Backend at an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ReadFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&self, record: &str) -> Result<()> {
        std::fs::write(&self.path, record).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::RemoveFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

/// In-memory settings record for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    record: Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning cannot tear an Option<String>; take the value as-is.
    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SettingsBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.lock().clone())
    }

    fn write(&self, record: &str) -> Result<()> {
        *self.lock() = Some(record.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_starts_empty() {
        let backend = MemoryBackend::new();
        assert!(backend.read().unwrap().is_none());
    }

    #[test]
    fn memory_backend_write_read_clear() {
        let backend = MemoryBackend::new();
        backend.write("work_minutes = 30").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("work_minutes = 30"));
        backend.clear().unwrap();
        assert!(backend.read().unwrap().is_none());
    }

    #[test]
    fn memory_backend_clear_when_empty_is_ok() {
        let backend = MemoryBackend::new();
        assert!(backend.clear().is_ok());
    }
}
