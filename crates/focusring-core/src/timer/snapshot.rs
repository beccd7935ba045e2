//! Presenter-facing view of the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Mode;

/// Full engine state at one instant, pushed to the presenter after every
/// state-affecting operation and each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub running: bool,
    /// Whole seconds left in the current session.
    pub remaining_secs: u32,
    /// Session length fixed at mode entry. Settings applied mid-session do
    /// not change it.
    pub total_secs: u32,
    /// Work sessions completed naturally since engine construction.
    pub completed_work_sessions: u32,
    pub at: DateTime<Utc>,
}

impl Snapshot {
    /// 0.0 .. 1.0 progress within the current session.
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / self.total_secs as f64)
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

/// Format whole seconds as `MM:SS`. Minutes widen past two digits rather
/// than truncate.
pub fn format_clock(secs: u32) -> String {
    let minutes = secs / 60;
    let seconds = secs % 60;
    format!("{minutes:02}:{seconds:02}")
}
