//! Busy periods: which events block a group of attendees, merged into
//! disjoint ranges.

use std::collections::BTreeSet;

use crate::event::Event;
use crate::range::TimeRange;

/// Collect the time range of every event attended by at least one of `attendees`.
///
/// Ranges come back in event order, unsorted and possibly overlapping. An
/// event with an empty range still counts: its attendees have something on
/// the calendar, even though no minute is blocked.
pub fn busy_ranges(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|e| e.involves_any(attendees))
        .map(Event::when)
        .collect()
}

/// Collapse overlapping or touching ranges in place.
///
/// `ranges` must already be sorted with [`TimeRange::order_by_start`]. Each
/// range is compared with its successor: when they overlap or touch, the current
/// range is widened to cover the successor (unless it already contains the
/// successor) and the successor is dropped. The result is sorted, pairwise
/// disjoint, and maximal.
pub fn merge_busy(ranges: &mut Vec<TimeRange>) {
    if ranges.len() < 2 {
        return;
    }

    let mut current = 0;
    for next in 1..ranges.len() {
        let successor = ranges[next];
        let merged = ranges[current];
        if merged.overlaps(&successor) || merged.touches(&successor) {
            if !merged.contains(&successor) {
                let widened = merged.span(&successor);
                tracing::trace!(%merged, %successor, %widened, "merged busy ranges");
                ranges[current] = widened;
            }
        } else {
            current += 1;
            ranges[current] = successor;
        }
    }
    ranges.truncate(current + 1);
}

/// Sort `ranges` by start (ties by end) and merge them into disjoint busy ranges.
pub fn normalize(mut ranges: Vec<TimeRange>) -> Vec<TimeRange> {
    ranges.sort_by(TimeRange::order_by_start);
    merge_busy(&mut ranges);
    ranges
}
