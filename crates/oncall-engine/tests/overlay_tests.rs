//! Tests for layering overrides onto a schedule.

use chrono::{DateTime, Duration, TimeZone, Utc};
use oncall_engine::interval::{covered_spans, is_well_formed};
use oncall_engine::{apply_overrides, Interval, Override, ScheduleError};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 7, 17, 0, 0).unwrap()
}

fn hours(h: i64) -> DateTime<Utc> {
    base_time() + Duration::hours(h)
}

fn shift(owner: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Interval {
    Interval::new(owner, start, end).unwrap()
}

/// alice for the first week, bob for the second.
fn two_week_base() -> Vec<Interval> {
    vec![
        shift("alice", base_time(), hours(7 * 24)),
        shift("bob", hours(7 * 24), hours(14 * 24)),
    ]
}

fn summary(schedule: &[Interval]) -> Vec<(&str, DateTime<Utc>, DateTime<Utc>)> {
    schedule
        .iter()
        .map(|i| (i.owner.as_str(), i.start, i.end))
        .collect()
}

#[test]
fn no_overrides_returns_base() {
    let base = two_week_base();
    assert_eq!(apply_overrides(&base, &[]).unwrap(), base);
}

#[test]
fn no_overrides_on_empty_base_is_identity() {
    assert!(apply_overrides(&[], &[]).unwrap().is_empty());
}

#[test]
fn override_inside_shift_splits_it_in_three() {
    let overrides = [Override::new("charlie", hours(24), hours(48))];
    let result = apply_overrides(&two_week_base(), &overrides).unwrap();

    assert_eq!(
        summary(&result),
        vec![
            ("alice", base_time(), hours(24)),
            ("charlie", hours(24), hours(48)),
            ("alice", hours(48), hours(7 * 24)),
            ("bob", hours(7 * 24), hours(14 * 24)),
        ]
    );
}

#[test]
fn override_aligned_with_shift_start_has_no_pre_part() {
    let overrides = [Override::new("charlie", base_time(), hours(24))];
    let result = apply_overrides(&two_week_base(), &overrides).unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result[0].owner, "charlie");
    assert_eq!(result[0].start, base_time());
    assert_eq!(result[1].owner, "alice");
    assert_eq!(result[1].start, hours(24));
}

#[test]
fn override_aligned_with_shift_end_has_no_post_part() {
    let overrides = [Override::new("charlie", hours(6 * 24), hours(7 * 24))];
    let result = apply_overrides(&two_week_base(), &overrides).unwrap();

    assert_eq!(
        summary(&result),
        vec![
            ("alice", base_time(), hours(6 * 24)),
            ("charlie", hours(6 * 24), hours(7 * 24)),
            ("bob", hours(7 * 24), hours(14 * 24)),
        ]
    );
}

#[test]
fn override_covering_whole_shift_replaces_owner() {
    let overrides = [Override::new("charlie", base_time(), hours(7 * 24))];
    let result = apply_overrides(&two_week_base(), &overrides).unwrap();

    assert_eq!(
        summary(&result),
        vec![
            ("charlie", base_time(), hours(7 * 24)),
            ("bob", hours(7 * 24), hours(14 * 24)),
        ]
    );
}

#[test]
fn override_spanning_handover_splits_both_shifts() {
    let overrides = [Override::new("charlie", hours(6 * 24), hours(8 * 24))];
    let result = apply_overrides(&two_week_base(), &overrides).unwrap();

    assert_eq!(
        summary(&result),
        vec![
            ("alice", base_time(), hours(6 * 24)),
            ("charlie", hours(6 * 24), hours(7 * 24)),
            ("charlie", hours(7 * 24), hours(8 * 24)),
            ("bob", hours(8 * 24), hours(14 * 24)),
        ]
    );
}

#[test]
fn override_reaching_outside_base_is_clipped() {
    let overrides = [Override::new("charlie", hours(-24), hours(24))];
    let result = apply_overrides(&two_week_base(), &overrides).unwrap();

    assert_eq!(result[0].owner, "charlie");
    assert_eq!(result[0].start, base_time(), "coverage must not grow");
    assert_eq!(result[0].end, hours(24));
}

#[test]
fn override_entirely_outside_base_changes_nothing() {
    let base = two_week_base();
    let overrides = [Override::new("charlie", hours(20 * 24), hours(21 * 24))];

    assert_eq!(apply_overrides(&base, &overrides).unwrap(), base);
}

#[test]
fn override_touching_shift_boundary_does_not_overlap() {
    // Ends exactly where the base begins: adjacent, not overlapping.
    let base = two_week_base();
    let overrides = [Override::new("charlie", hours(-24), base_time())];

    assert_eq!(apply_overrides(&base, &overrides).unwrap(), base);
}

#[test]
fn empty_base_with_overrides_rejected() {
    let overrides = [Override::new("charlie", base_time(), hours(1))];
    let err = apply_overrides(&[], &overrides).unwrap_err();

    assert!(matches!(err, ScheduleError::Validation(_)));
    assert!(err.to_string().contains("base schedule must be defined"));
}

#[test]
fn empty_base_rejected_even_for_zero_length_overrides() {
    let overrides = [Override::new("charlie", base_time(), base_time())];
    assert!(apply_overrides(&[], &overrides).is_err());
}

#[test]
fn zero_length_override_ignored() {
    let base = two_week_base();
    let overrides = [Override::new("charlie", hours(24), hours(24))];

    assert_eq!(apply_overrides(&base, &overrides).unwrap(), base);
}

#[test]
fn zero_length_override_mixed_with_real_one() {
    let overrides = [
        Override::new("dave", hours(30), hours(30)),
        Override::new("charlie", hours(24), hours(48)),
    ];
    let result = apply_overrides(&two_week_base(), &overrides).unwrap();

    assert_eq!(result.len(), 4);
    assert!(result.iter().all(|i| i.owner != "dave"));
}

#[test]
fn unsorted_overrides_are_applied_by_start() {
    let overrides = [
        Override::new("dave", hours(8 * 24), hours(9 * 24)),
        Override::new("charlie", hours(24), hours(48)),
    ];
    let result = apply_overrides(&two_week_base(), &overrides).unwrap();

    let owners: Vec<&str> = result.iter().map(|i| i.owner.as_str()).collect();
    assert_eq!(owners, ["alice", "charlie", "alice", "bob", "dave", "bob"]);
    assert!(is_well_formed(&result));
}

#[test]
fn later_starting_override_wins_contested_region() {
    // charlie 24h-72h, dave 48h-96h: dave takes 48h-72h from charlie.
    // Adjacent pieces with the same owner are not merged.
    let overrides = [
        Override::new("dave", hours(48), hours(96)),
        Override::new("charlie", hours(24), hours(72)),
    ];
    let result = apply_overrides(&two_week_base(), &overrides).unwrap();

    assert_eq!(
        summary(&result),
        vec![
            ("alice", base_time(), hours(24)),
            ("charlie", hours(24), hours(48)),
            ("dave", hours(48), hours(72)),
            ("dave", hours(72), hours(96)),
            ("alice", hours(96), hours(7 * 24)),
            ("bob", hours(7 * 24), hours(14 * 24)),
        ]
    );
}

#[test]
fn nested_later_override_splits_earlier_one() {
    let overrides = [
        Override::new("charlie", hours(24), hours(96)),
        Override::new("dave", hours(48), hours(72)),
    ];
    let result = apply_overrides(&two_week_base(), &overrides).unwrap();

    let owners: Vec<&str> = result.iter().map(|i| i.owner.as_str()).collect();
    assert_eq!(owners, ["alice", "charlie", "dave", "charlie", "alice", "bob"]);
}

#[test]
fn equal_start_overrides_keep_input_order() {
    // Same start: stable sort keeps charlie first, so dave is applied last and wins.
    let overrides = [
        Override::new("charlie", hours(24), hours(48)),
        Override::new("dave", hours(24), hours(36)),
    ];
    let result = apply_overrides(&two_week_base(), &overrides).unwrap();

    assert_eq!(
        summary(&result)[..3],
        [
            ("alice", base_time(), hours(24)),
            ("dave", hours(24), hours(36)),
            ("charlie", hours(36), hours(48)),
        ]
    );
}

#[test]
fn inverted_override_is_inert() {
    let base = two_week_base();
    let overrides = [Override::new("charlie", hours(48), hours(24))];

    assert_eq!(apply_overrides(&base, &overrides).unwrap(), base);
}

#[test]
fn coverage_is_conserved() {
    let base = two_week_base();
    let overrides = [
        Override::new("charlie", hours(3), hours(100)),
        Override::new("dave", hours(50), hours(200)),
        Override::new("erin", hours(199), hours(300)),
    ];
    let result = apply_overrides(&base, &overrides).unwrap();

    assert!(is_well_formed(&result));
    assert_eq!(covered_spans(&result), covered_spans(&base));
}

#[test]
fn base_with_gap_keeps_gap() {
    let base = vec![
        shift("alice", base_time(), hours(24)),
        shift("bob", hours(48), hours(72)),
    ];
    let overrides = [Override::new("charlie", hours(12), hours(60))];
    let result = apply_overrides(&base, &overrides).unwrap();

    assert_eq!(
        summary(&result),
        vec![
            ("alice", base_time(), hours(12)),
            ("charlie", hours(12), hours(24)),
            ("charlie", hours(48), hours(60)),
            ("bob", hours(60), hours(72)),
        ]
    );
}

#[test]
fn input_slices_are_not_modified() {
    let base = two_week_base();
    let overrides = vec![
        Override::new("dave", hours(48), hours(96)),
        Override::new("charlie", hours(24), hours(72)),
    ];
    let snapshot = overrides.clone();

    let _ = apply_overrides(&base, &overrides).unwrap();

    assert_eq!(base, two_week_base());
    assert_eq!(overrides, snapshot, "override order must be left as given");
}
