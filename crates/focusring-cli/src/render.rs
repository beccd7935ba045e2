//! Terminal implementations of the engine's outbound ports.
//!
//! Write errors are swallowed, per the port contract: a broken pipe must
//! not reach the state machine.

use std::io::{self, Write};

use focusring_core::{Mode, NotificationPort, Presenter, Snapshot};

/// Rewrites one status line in place per snapshot; starts a new line when
/// the mode changes so finished sessions stay visible in the scrollback.
pub struct TerminalPresenter {
    last_mode: Option<Mode>,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self { last_mode: None }
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, snapshot: &Snapshot) {
        let mut out = io::stdout();
        if self.last_mode.is_some() && self.last_mode != Some(snapshot.mode) {
            let _ = writeln!(out);
        }
        self.last_mode = Some(snapshot.mode);

        let state = if snapshot.running { "running" } else { "paused" };
        let _ = write!(
            out,
            "\r{:<11} {}  {:>3.0}%  sessions: {}  [{}]",
            snapshot.mode.label(),
            snapshot.clock(),
            snapshot.progress() * 100.0,
            snapshot.completed_work_sessions,
            state
        );
        let _ = out.flush();
    }
}

/// Rings the terminal bell once per completed session.
pub struct BellNotifier;

impl NotificationPort for BellNotifier {
    fn notify(&mut self) {
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}
