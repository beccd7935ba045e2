//! 1 Hz tick source for the engine.

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use super::TimerEngine;

/// Drives a [`TimerEngine`] at a fixed cadence on the current task.
///
/// The driver borrows the engine exclusively while driving, so only one
/// tick source can exist at a time and engine commands issued between
/// firings never race a tick.
pub struct TickDriver {
    period: Duration,
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl TickDriver {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Tick `engine` once per period until it stops running.
    ///
    /// Returns immediately for a paused engine. The first tick fires one
    /// full period after entry. Missed firings are skipped rather than
    /// bursted, so a stalled task cannot fast-forward the countdown.
    pub async fn drive(&self, engine: &mut TimerEngine) {
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // An interval's first tick completes at once; consume it so the
        // countdown starts a full period from now.
        interval.tick().await;

        while engine.is_running() {
            interval.tick().await;
            engine.tick();
        }
        debug!("tick driver stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::timer::ports::{NullNotifier, NullPresenter};
    use crate::timer::Mode;

    fn engine() -> TimerEngine {
        TimerEngine::new(
            Settings {
                work_minutes: 1,
                short_break_minutes: 1,
                long_break_minutes: 1,
                rounds_per_long_break: 4,
            },
            Box::new(NullPresenter),
            Box::new(NullNotifier),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn drive_returns_at_once_for_a_paused_engine() {
        let mut engine = engine();
        TickDriver::default().drive(&mut engine).await;
        assert_eq!(engine.remaining_secs(), 60);
        assert!(!engine.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn drive_counts_the_engine_down() {
        let mut engine = engine();
        engine.start();
        let driver = TickDriver::new(Duration::from_millis(5));
        let _ = time::timeout(Duration::from_millis(103), driver.drive(&mut engine)).await;
        assert_eq!(engine.remaining_secs(), 60 - 20);
        assert!(engine.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn drive_follows_the_auto_chain_across_sessions() {
        let mut engine = engine();
        engine.start();
        let driver = TickDriver::new(Duration::from_millis(1));
        let _ = time::timeout(Duration::from_millis(70), driver.drive(&mut engine)).await;
        assert_eq!(engine.mode(), Mode::ShortBreak);
        assert!(engine.is_running());
        assert_eq!(engine.completed_work_sessions(), 1);
    }
}
