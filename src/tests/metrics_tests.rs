//! Tests for duration formatting and efficiency derivation.

use super::support::{completed_task, estimated_completed_task, pending_task};
use crate::services::metrics::{self, EfficiencyBand};
use rstest::rstest;

#[rstest]
#[case(0, "0s")]
#[case(45, "45s")]
#[case(60, "1m")]
#[case(61, "1m 1s")]
#[case(3_600, "1h")]
#[case(3_661, "1h 1m 1s")]
#[case(86_400, "1d")]
#[case(90_000, "1d 1h")]
#[case(90_061, "1d 1h 1m 1s")]
#[case(86_401, "1d 1s")]
fn format_duration_emits_nonzero_units_most_significant_first(
    #[case] seconds: u64,
    #[case] expected: &str,
) {
    assert_eq!(metrics::format_duration(seconds), expected);
}

#[rstest]
#[case(1, 1)]
#[case(59, 1)]
#[case(60, 1)]
#[case(61, 2)]
#[case(3_000, 50)]
fn actual_minutes_rounds_up(#[case] elapsed_seconds: i64, #[case] expected_minutes: u64) {
    let task = completed_task("Report", elapsed_seconds);
    assert_eq!(metrics::actual_minutes(&task), Some(expected_minutes));
}

#[rstest]
fn actual_minutes_is_absent_without_a_duration() {
    assert_eq!(metrics::actual_minutes(&pending_task("Report")), None);
}

#[rstest]
fn actual_minutes_is_absent_for_zero_duration() {
    let task = completed_task("Report", 0);
    assert_eq!(task.duration(), Some(0));
    assert_eq!(metrics::actual_minutes(&task), None);
}

#[rstest]
fn efficiency_is_undefined_without_an_estimate() {
    let task = completed_task("Report", 3_000);
    assert_eq!(metrics::efficiency(&task), None);
}

#[rstest]
fn efficiency_is_undefined_without_a_duration() {
    let task = crate::domain::Task::from_draft(
        super::support::draft("Report").with_estimated_duration(60),
    );
    assert_eq!(metrics::efficiency(&task), None);
}

#[rstest]
fn efficiency_is_undefined_for_zero_duration() {
    let task = estimated_completed_task("Report", 60, 0);
    assert_eq!(metrics::efficiency(&task), None);
}

#[rstest]
fn efficiency_is_estimate_over_actual_as_rounded_percent() {
    // 3000 seconds -> 50 actual minutes; 60 / 50 = 120%.
    let task = estimated_completed_task("Report", 60, 3_000);
    let rating = metrics::efficiency(&task).expect("efficiency defined");
    assert_eq!(rating.percent(), 120);
    assert_eq!(rating.band(), EfficiencyBand::Good);
}

#[rstest]
fn efficiency_rounds_half_up() {
    // 180 seconds -> 3 actual minutes; 5 / 3 = 166.67 -> 167.
    let task = estimated_completed_task("Report", 5, 180);
    let rating = metrics::efficiency(&task).expect("efficiency defined");
    assert_eq!(rating.percent(), 167);

    // 3600 seconds -> 60 actual minutes; 50 / 60 = 83.33 -> 83.
    let truncated = estimated_completed_task("Report", 50, 3_600);
    let truncated_rating = metrics::efficiency(&truncated).expect("efficiency defined");
    assert_eq!(truncated_rating.percent(), 83);
}

#[rstest]
#[case(79, EfficiencyBand::Over)]
#[case(80, EfficiencyBand::Near)]
#[case(99, EfficiencyBand::Near)]
#[case(100, EfficiencyBand::Good)]
#[case(120, EfficiencyBand::Good)]
fn efficiency_bands_use_fixed_thresholds(
    #[case] estimated_minutes: u32,
    #[case] expected_band: EfficiencyBand,
) {
    // 6000 seconds -> exactly 100 actual minutes, so percent == estimate.
    let task = estimated_completed_task("Report", estimated_minutes, 6_000);
    let rating = metrics::efficiency(&task).expect("efficiency defined");
    assert_eq!(rating.percent(), u64::from(estimated_minutes));
    assert_eq!(rating.band(), expected_band);
}
