//! Core error types for focusring-core.
//!
//! The only fallible surface in this crate is the settings persistence
//! layer. The timer engine itself has no error states: every public
//! operation is either a no-op or a total state transition, and malformed
//! persisted input is recovered at load time by falling back to defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The settings directory could not be resolved or created.
    #[error("failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the persisted record failed for a reason other than absence.
    #[error("failed to read settings record at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the persisted record failed.
    #[error("failed to write settings record at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deleting the persisted record failed.
    #[error("failed to remove settings record at {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The clamped settings could not be serialized.
    #[error("failed to serialize settings record: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for StorageError
pub type Result<T, E = StorageError> = std::result::Result<T, E>;
