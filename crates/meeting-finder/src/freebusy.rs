//! Compute free ranges from a merged busy set.
//!
//! The free ranges are the gaps around the busy ranges within the day: from the
//! start of the day to the first busy range, between consecutive busy ranges,
//! and from the last busy range to midnight. Gaps shorter than the requested
//! duration are dropped.

use std::collections::BTreeSet;

use crate::busy::{busy_ranges, normalize};
use crate::event::Event;
use crate::range::{TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY, WHOLE_DAY};

/// Push the gap `[start, end)` (or `[start, end]` when `inclusive`) if it is at
/// least `duration` minutes long. An inverted gap holds no free time.
fn push_gap(free: &mut Vec<TimeRange>, start: u32, end: u32, inclusive: bool, duration: u32) {
    if let Ok(gap) = TimeRange::from_start_end(start, end, inclusive) {
        if gap.duration() >= duration {
            free.push(gap);
        }
    }
}

/// Find every free range of at least `duration` minutes around `busy`.
///
/// With no busy ranges the whole day is free, provided the meeting fits in a
/// day at all.
///
/// # Panics
///
/// `busy` must be sorted and pairwise disjoint, as produced by
/// [`normalize`](crate::busy::normalize). Debug builds panic otherwise; release
/// builds skip the gaps between out-of-order ranges, so the result is
/// meaningless.
pub fn free_ranges(busy: &[TimeRange], duration: u32) -> Vec<TimeRange> {
    debug_assert!(
        busy.windows(2).all(|pair| pair[0].end() <= pair[1].start()),
        "free_ranges needs normalized busy ranges"
    );

    let (Some(first), Some(last)) = (busy.first(), busy.last()) else {
        return if duration <= MINUTES_PER_DAY {
            vec![WHOLE_DAY]
        } else {
            Vec::new()
        };
    };

    let mut free = Vec::with_capacity(busy.len() + 1);

    if !first.contains_point(START_OF_DAY) {
        push_gap(&mut free, START_OF_DAY, first.start(), false, duration);
    }

    for pair in busy.windows(2) {
        push_gap(&mut free, pair[0].end(), pair[1].start(), false, duration);
    }

    // The trailing gap runs through the last minute of the day.
    if !last.contains_point(END_OF_DAY) {
        push_gap(&mut free, last.end(), END_OF_DAY, true, duration);
    }

    free
}

/// Free ranges of at least `duration` minutes for one group of attendees.
///
/// Runs the whole per-group pipeline: pick the events any of `attendees` is
/// in, merge them into busy ranges, and take the gaps.
pub fn available_ranges(
    events: &[Event],
    attendees: &BTreeSet<String>,
    duration: u32,
) -> Vec<TimeRange> {
    free_ranges(&normalize(busy_ranges(events, attendees)), duration)
}
