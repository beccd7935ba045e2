//! Timer engine implementation.
//!
//! The engine is a caller-ticked state machine. It owns no thread and no
//! clock - the driver (or a test) calls `tick()` once per elapsed second
//! while the engine is running.
//!
//! ## Mode cycle
//!
//! ```text
//! Work -> ShortBreak -> Work -> ... -> Work -> LongBreak -> Work
//! ```
//!
//! Every `rounds_per_long_break`-th completed work session earns the long
//! break. Sessions auto-chain: when a countdown reaches zero the engine
//! switches mode and keeps running; `pause()` is the only way to stop the
//! chain.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(settings, presenter, notifier);
//! engine.start();
//! // Once per second while running:
//! engine.tick();
//! ```

use chrono::Utc;
use tracing::debug;

use super::ports::{NotificationPort, Presenter};
use super::snapshot::Snapshot;
use super::Mode;
use crate::settings::Settings;

/// Core timer engine.
///
/// Holds its own copy of [`Settings`]; changes applied mid-session never
/// resize the countdown in progress. Pushes a [`Snapshot`] to the presenter
/// after every state-affecting operation.
pub struct TimerEngine {
    settings: Settings,
    mode: Mode,
    running: bool,
    /// Whole seconds left in the current session.
    remaining_secs: u32,
    /// Session length fixed when the current mode was entered.
    total_secs: u32,
    completed_work_sessions: u32,
    presenter: Box<dyn Presenter>,
    notifier: Box<dyn NotificationPort>,
}

impl TimerEngine {
    /// Create an engine in `Work` mode, paused, with a full countdown.
    ///
    /// Presents the initial state once so the presenter never starts blank.
    pub fn new(
        settings: Settings,
        presenter: Box<dyn Presenter>,
        notifier: Box<dyn NotificationPort>,
    ) -> Self {
        let total_secs = settings.duration_secs(Mode::Work);
        let mut engine = Self {
            settings,
            mode: Mode::Work,
            running: false,
            remaining_secs: total_secs,
            total_secs,
            completed_work_sessions: 0,
            presenter,
            notifier,
        };
        engine.present();
        engine
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    pub fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// 0.0 .. 1.0 progress within the current session.
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / self.total_secs as f64)
    }

    /// Build a full state snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs,
            completed_work_sessions: self.completed_work_sessions,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin or continue the countdown. No-op if already running, so a
    /// second `start()` can never stack a second tick source.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.present();
    }

    /// Stop the countdown, keeping the remaining time. No-op if paused.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.present();
    }

    /// Jump to `target`, paused, with a full countdown for that mode.
    ///
    /// Allowed from any state; never touches the completed-session counter.
    /// Switching to the current mode restarts it from the top.
    pub fn switch_mode(&mut self, target: Mode) {
        self.running = false;
        self.enter_mode(target);
        self.present();
    }

    /// Stop and restore the current mode's full duration.
    ///
    /// Re-enters the mode, so settings applied since the last entry take
    /// effect here.
    pub fn reset(&mut self) {
        self.running = false;
        self.enter_mode(self.mode);
        self.present();
    }

    /// Replace the engine's settings copy.
    ///
    /// The session in progress keeps its remaining and total seconds; the
    /// new durations are picked up at the next mode entry (`switch_mode`,
    /// `reset`, or natural completion).
    pub fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Count down one second. Call once per elapsed second while running.
    ///
    /// A tick delivered while paused is a no-op, so a stray callback after
    /// `pause()` cannot move the state. Reaching zero runs the session-end
    /// policy within the same call and leaves the next session running.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.remaining_secs == 0 {
            self.session_end();
            self.present();
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.session_end();
        }
        self.present();
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Session-end policy: notify once, then advance the mode and chain
    /// straight into the next session.
    fn session_end(&mut self) {
        self.running = false;
        self.notifier.notify();
        let ended = self.mode;
        let next = match ended {
            Mode::Work => {
                self.completed_work_sessions += 1;
                // A hand-built settings value could carry zero rounds.
                let rounds = self.settings.rounds_per_long_break.max(1);
                if self.completed_work_sessions % rounds == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Work,
        };
        debug!(
            from = ended.label(),
            to = next.label(),
            completed = self.completed_work_sessions,
            "session complete"
        );
        self.enter_mode(next);
        self.running = true;
    }

    /// Seed the mode and its full countdown from the current settings copy.
    fn enter_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.total_secs = self.settings.duration_secs(mode);
        self.remaining_secs = self.total_secs;
    }

    fn present(&mut self) {
        let snapshot = self.snapshot();
        self.presenter.present(&snapshot);
    }
}
