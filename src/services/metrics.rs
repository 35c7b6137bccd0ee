//! Derived duration and efficiency metrics.

use crate::domain::Task;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// Efficiency below this percentage took notably longer than estimated.
pub const NEAR_THRESHOLD: u64 = 80;
/// Efficiency at or above this percentage met or beat the estimate.
pub const GOOD_THRESHOLD: u64 = 100;

/// Formats an elapsed duration as space-separated `d h m s` components,
/// most-significant first, emitting only non-zero leading units. A zero
/// duration renders as `"0s"`, never as an empty string.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let hours = seconds.rem_euclid(SECONDS_PER_DAY).div_euclid(SECONDS_PER_HOUR);
    let minutes = seconds
        .rem_euclid(SECONDS_PER_HOUR)
        .div_euclid(SECONDS_PER_MINUTE);
    let secs = seconds.rem_euclid(SECONDS_PER_MINUTE);

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if secs > 0 || parts.is_empty() {
        parts.push(format!("{secs}s"));
    }
    parts.join(" ")
}

/// Returns the recorded duration in whole minutes, rounded up.
///
/// Absent when the task carries no duration or a zero duration — a
/// zero-second completion has no meaningful actual-minutes figure.
#[must_use]
pub fn actual_minutes(task: &Task) -> Option<u64> {
    task.duration()
        .filter(|&seconds| seconds > 0)
        .map(|seconds| seconds.div_ceil(SECONDS_PER_MINUTE))
}

/// Presentation band for an efficiency percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyBand {
    /// Below [`NEAR_THRESHOLD`]: took notably longer than estimated.
    Over,
    /// Between the thresholds: close to the estimate.
    Near,
    /// At or above [`GOOD_THRESHOLD`]: met or beat the estimate.
    Good,
}

/// Estimate-vs-actual efficiency, as a rounded percentage.
///
/// Values above 100 mean the task finished faster than estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Efficiency {
    percent: u64,
}

impl Efficiency {
    /// Returns the rounded percentage.
    #[must_use]
    pub const fn percent(self) -> u64 {
        self.percent
    }

    /// Returns the presentation band for this percentage.
    #[must_use]
    pub const fn band(self) -> EfficiencyBand {
        if self.percent < NEAR_THRESHOLD {
            EfficiencyBand::Over
        } else if self.percent < GOOD_THRESHOLD {
            EfficiencyBand::Near
        } else {
            EfficiencyBand::Good
        }
    }
}

/// Computes estimate-vs-actual efficiency for a task.
///
/// Defined only when both an estimate and a non-zero recorded duration are
/// present: `round(estimated_minutes / actual_minutes * 100)`. Callers must
/// not display an efficiency figure when this returns `None`.
#[must_use]
pub fn efficiency(task: &Task) -> Option<Efficiency> {
    let estimated = u64::from(task.estimated_duration()?);
    let actual = actual_minutes(task)?;
    // Integer round-half-up of (estimated / actual * 100).
    let percent = (estimated * 200 + actual).div_euclid(actual * 2);
    Some(Efficiency { percent })
}
