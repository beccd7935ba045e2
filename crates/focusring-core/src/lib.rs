//! # Focusring Core Library
//!
//! Core business logic for the Focusring Pomodoro timer. The engine is a
//! caller-ticked state machine with no UI and no clock thread of its own;
//! front-ends drive it through [`TickDriver`] and observe it through the
//! [`Presenter`] port.
//!
//! ## Architecture
//!
//! - **Timer Engine**: mode state machine, countdown, round counting, and
//!   session auto-chaining
//! - **Settings**: four clamped durations/counters persisted as TOML
//! - **Ports**: presenter and notification contracts implemented by
//!   front-ends
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`SettingsStore`]: clamped settings persistence
//! - [`TickDriver`]: 1 Hz tick source
//! - [`Presenter`] / [`NotificationPort`]: outbound contracts

pub mod error;
pub mod settings;
pub mod storage;
pub mod timer;

pub use error::StorageError;
pub use settings::{Settings, SettingsUpdate};
pub use storage::{FileBackend, MemoryBackend, SettingsBackend, SettingsStore};
pub use timer::{
    format_clock, Mode, NotificationPort, NullNotifier, NullPresenter, Presenter, Snapshot,
    TickDriver, TimerEngine,
};
