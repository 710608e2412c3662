//! Tests for `TimeRange` construction and its overlap/containment rules.
//!
//! Boundaries are where off-by-one defects live: identical ranges, nested
//! ranges, ranges that only touch, and empty ranges are each pinned here.

use meeting_finder::{SchedulingError, TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY};

fn r(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn start_after_end_is_rejected() {
    let err = TimeRange::from_start_end(630, 600, false).unwrap_err();
    assert_eq!(err, SchedulingError::InvalidRange { start: 630, end: 600 });
}

#[test]
fn bounds_past_midnight_are_rejected_not_clamped() {
    assert_eq!(
        TimeRange::from_start_end(600, 1441, false).unwrap_err(),
        SchedulingError::OutOfDay { value: 1441 }
    );
    assert_eq!(
        TimeRange::from_start_end(1500, 1500, false).unwrap_err(),
        SchedulingError::OutOfDay { value: 1500 }
    );
    assert!(TimeRange::from_start_end(0, MINUTES_PER_DAY, true).is_err());
}

#[test]
fn inclusive_end_adds_the_last_minute() {
    let range = TimeRange::from_start_end(START_OF_DAY, END_OF_DAY, true).unwrap();
    assert_eq!(range.start(), 0);
    assert_eq!(range.end(), 1440);
    assert_eq!(range.duration(), 1440);
}

#[test]
fn start_duration_matches_start_end() {
    assert_eq!(TimeRange::from_start_duration(540, 90).unwrap(), r(540, 630));
    assert!(TimeRange::from_start_duration(1400, 60).is_err());
    assert!(TimeRange::from_start_duration(10, u32::MAX).is_err());
}

#[test]
fn zero_length_range_is_valid_and_empty() {
    let empty = r(600, 600);
    assert!(empty.is_empty());
    assert_eq!(empty.duration(), 0);
}

#[test]
fn deserialization_validates_bounds() {
    let ok: TimeRange = serde_json::from_str(r#"{"start":60,"end":120}"#).unwrap();
    assert_eq!(ok, r(60, 120));

    let inverted = serde_json::from_str::<TimeRange>(r#"{"start":120,"end":60}"#);
    assert!(inverted.is_err());

    let too_late = serde_json::from_str::<TimeRange>(r#"{"start":0,"end":2000}"#);
    assert!(too_late.is_err());
}

#[test]
fn serializes_as_start_and_end() {
    let json = serde_json::to_string(&r(60, 120)).unwrap();
    assert_eq!(json, r#"{"start":60,"end":120}"#);
}

// ---------------------------------------------------------------------------
// Containment
// ---------------------------------------------------------------------------

#[test]
fn end_minute_is_not_contained() {
    let range = r(600, 630);
    assert!(range.contains_point(600));
    assert!(range.contains_point(629));
    assert!(!range.contains_point(630));
    assert!(!range.contains_point(599));
}

#[test]
fn empty_range_contains_nothing() {
    let empty = r(600, 600);
    assert!(!empty.contains_point(600));
    assert!(!empty.contains(&r(600, 600)));
}

#[test]
fn identical_ranges_contain_each_other() {
    let a = r(600, 630);
    let b = r(600, 630);
    assert!(a.contains(&b));
    assert!(b.contains(&a));
}

#[test]
fn nested_range_is_contained_one_way() {
    let outer = r(600, 700);
    let inner = r(620, 640);
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
}

#[test]
fn range_sharing_end_bound_is_contained() {
    assert!(r(600, 700).contains(&r(650, 700)));
    assert!(r(600, 700).contains(&r(600, 650)));
    assert!(!r(600, 700).contains(&r(650, 701)));
}

#[test]
fn empty_other_is_treated_as_a_point() {
    assert!(r(600, 700).contains(&r(650, 650)));
    assert!(!r(600, 700).contains(&r(700, 700)));
}

// ---------------------------------------------------------------------------
// Overlap
// ---------------------------------------------------------------------------

#[test]
fn touching_ranges_do_not_overlap() {
    let a = r(600, 630);
    let b = r(630, 700);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
    assert!(a.touches(&b));
    assert!(b.touches(&a));
}

#[test]
fn one_shared_minute_overlaps() {
    let a = r(600, 631);
    let b = r(630, 700);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.touches(&b));
}

#[test]
fn nested_and_identical_ranges_overlap() {
    assert!(r(600, 700).overlaps(&r(620, 640)));
    assert!(r(620, 640).overlaps(&r(600, 700)));
    assert!(r(600, 700).overlaps(&r(600, 700)));
}

#[test]
fn empty_ranges_overlap_nothing() {
    assert!(!r(650, 650).overlaps(&r(600, 700)));
    assert!(!r(600, 700).overlaps(&r(650, 650)));
}

#[test]
fn intersection_of_overlapping_ranges() {
    assert_eq!(r(600, 700).intersection(&r(650, 800)), Some(r(650, 700)));
    assert_eq!(r(600, 700).intersection(&r(620, 640)), Some(r(620, 640)));
    assert_eq!(r(600, 630).intersection(&r(630, 700)), None);
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn order_by_start_breaks_ties_by_end() {
    let mut ranges = vec![r(600, 700), r(500, 900), r(600, 630)];
    ranges.sort_by(TimeRange::order_by_start);
    assert_eq!(ranges, vec![r(500, 900), r(600, 630), r(600, 700)]);
}
