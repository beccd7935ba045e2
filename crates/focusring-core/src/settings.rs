//! User-tunable timer settings.
//!
//! Four numeric fields drive the engine: durations for the three modes and
//! the work-session cadence for long breaks. Every write path funnels raw
//! input through per-field clamping, so a `Settings` value handed to the
//! engine is always in range.
//!
//! Persisted to TOML at `~/.config/focusring/settings.toml`.

use serde::{Deserialize, Serialize};

use crate::timer::Mode;

const WORK_MINUTES_MIN: u32 = 1;
const WORK_MINUTES_MAX: u32 = 180;
const BREAK_MINUTES_MIN: u32 = 1;
const BREAK_MINUTES_MAX: u32 = 60;
const ROUNDS_MIN: u32 = 1;
const ROUNDS_MAX: u32 = 8;

/// Timer durations and long-break cadence.
///
/// Fields are clamped to `1..=180` minutes of work, `1..=60` minutes per
/// break, and `1..=8` rounds between long breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    #[serde(default = "default_rounds_per_long_break")]
    pub rounds_per_long_break: u32,
}

/// Raw per-field input for [`Settings::apply`].
///
/// `None` keeps the current value. Supplied values may be out of range,
/// fractional, or NaN; clamping handles all of them the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsUpdate {
    pub work_minutes: Option<f64>,
    pub short_break_minutes: Option<f64>,
    pub long_break_minutes: Option<f64>,
    pub rounds_per_long_break: Option<f64>,
}

// Default functions
fn default_work_minutes() -> u32 {
    25
}
fn default_short_break_minutes() -> u32 {
    5
}
fn default_long_break_minutes() -> u32 {
    15
}
fn default_rounds_per_long_break() -> u32 {
    4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            rounds_per_long_break: default_rounds_per_long_break(),
        }
    }
}

/// Clamp a raw numeric input into `min..=max`, truncating toward zero.
/// NaN maps to `min`.
fn clamp_field(value: f64, min: u32, max: u32) -> u32 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min as f64, max as f64) as u32
}

impl Settings {
    /// Replace out-of-range fields with the nearest bound.
    ///
    /// Persisted records are merged over defaults before this runs, so a
    /// hand-edited file with `work_minutes = 900` loads as 180 rather than
    /// failing.
    pub fn clamped(self) -> Self {
        Self {
            work_minutes: self.work_minutes.clamp(WORK_MINUTES_MIN, WORK_MINUTES_MAX),
            short_break_minutes: self
                .short_break_minutes
                .clamp(BREAK_MINUTES_MIN, BREAK_MINUTES_MAX),
            long_break_minutes: self
                .long_break_minutes
                .clamp(BREAK_MINUTES_MIN, BREAK_MINUTES_MAX),
            rounds_per_long_break: self.rounds_per_long_break.clamp(ROUNDS_MIN, ROUNDS_MAX),
        }
    }

    /// Apply a raw update, clamping each supplied field into its range.
    pub fn apply(self, update: &SettingsUpdate) -> Self {
        Self {
            work_minutes: update.work_minutes.map_or(self.work_minutes, |v| {
                clamp_field(v, WORK_MINUTES_MIN, WORK_MINUTES_MAX)
            }),
            short_break_minutes: update.short_break_minutes.map_or(self.short_break_minutes, |v| {
                clamp_field(v, BREAK_MINUTES_MIN, BREAK_MINUTES_MAX)
            }),
            long_break_minutes: update.long_break_minutes.map_or(self.long_break_minutes, |v| {
                clamp_field(v, BREAK_MINUTES_MIN, BREAK_MINUTES_MAX)
            }),
            rounds_per_long_break: update.rounds_per_long_break.map_or(
                self.rounds_per_long_break,
                |v| clamp_field(v, ROUNDS_MIN, ROUNDS_MAX),
            ),
        }
    }

    /// Session length in whole seconds for the given mode.
    pub fn duration_secs(&self, mode: Mode) -> u32 {
        let minutes = match mode {
            Mode::Work => self.work_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        };
        minutes.saturating_mul(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_classic_pomodoro_values() {
        let s = Settings::default();
        assert_eq!(s.work_minutes, 25);
        assert_eq!(s.short_break_minutes, 5);
        assert_eq!(s.long_break_minutes, 15);
        assert_eq!(s.rounds_per_long_break, 4);
    }

    #[test]
    fn apply_clamps_each_field_to_its_range() {
        let s = Settings::default().apply(&SettingsUpdate {
            work_minutes: Some(500.0),
            short_break_minutes: Some(0.0),
            long_break_minutes: Some(-3.0),
            rounds_per_long_break: Some(99.0),
        });
        assert_eq!(s.work_minutes, 180);
        assert_eq!(s.short_break_minutes, 1);
        assert_eq!(s.long_break_minutes, 1);
        assert_eq!(s.rounds_per_long_break, 8);
    }

    #[test]
    fn apply_maps_nan_to_the_lower_bound() {
        let s = Settings::default().apply(&SettingsUpdate {
            work_minutes: Some(f64::NAN),
            ..SettingsUpdate::default()
        });
        assert_eq!(s.work_minutes, 1);
    }

    #[test]
    fn apply_truncates_fractional_input_toward_zero() {
        let s = Settings::default().apply(&SettingsUpdate {
            work_minutes: Some(26.9),
            ..SettingsUpdate::default()
        });
        assert_eq!(s.work_minutes, 26);
    }

    #[test]
    fn apply_clamps_infinities_to_the_bounds() {
        let s = Settings::default().apply(&SettingsUpdate {
            work_minutes: Some(f64::INFINITY),
            short_break_minutes: Some(f64::NEG_INFINITY),
            ..SettingsUpdate::default()
        });
        assert_eq!(s.work_minutes, 180);
        assert_eq!(s.short_break_minutes, 1);
    }

    #[test]
    fn apply_keeps_unset_fields() {
        let s = Settings::default().apply(&SettingsUpdate {
            long_break_minutes: Some(20.0),
            ..SettingsUpdate::default()
        });
        assert_eq!(s.work_minutes, 25);
        assert_eq!(s.short_break_minutes, 5);
        assert_eq!(s.long_break_minutes, 20);
        assert_eq!(s.rounds_per_long_break, 4);
    }

    #[test]
    fn partial_record_merges_over_defaults() {
        let s: Settings = toml::from_str("work_minutes = 50").unwrap();
        assert_eq!(s.work_minutes, 50);
        assert_eq!(s.short_break_minutes, 5);
        assert_eq!(s.long_break_minutes, 15);
        assert_eq!(s.rounds_per_long_break, 4);
    }

    #[test]
    fn clamped_repairs_out_of_range_persisted_values() {
        let s: Settings = toml::from_str("work_minutes = 900\nrounds_per_long_break = 0").unwrap();
        let s = s.clamped();
        assert_eq!(s.work_minutes, 180);
        assert_eq!(s.rounds_per_long_break, 1);
    }

    #[test]
    fn duration_secs_converts_minutes() {
        let s = Settings::default();
        assert_eq!(s.duration_secs(Mode::Work), 25 * 60);
        assert_eq!(s.duration_secs(Mode::ShortBreak), 5 * 60);
        assert_eq!(s.duration_secs(Mode::LongBreak), 15 * 60);
    }
}
