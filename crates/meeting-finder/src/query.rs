//! Find meeting slots for a request against a day's events.
//!
//! Mandatory and optional attendees are evaluated independently: each group's
//! events are merged into busy ranges and turned into free ranges. When both
//! groups have busy time, the slots that suit everyone are preferred, and the
//! mandatory attendees' slots are the fallback.

use serde::{Deserialize, Serialize};

use crate::busy::{busy_ranges, normalize};
use crate::event::{Event, MeetingRequest};
use crate::freebusy::free_ranges;
use crate::range::TimeRange;

/// Which rule produced a query's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryCase {
    /// Nobody in the request has any event; the whole day is open.
    Unconstrained,
    /// Only optional attendees have events, so their free time is the answer.
    OptionalOnly,
    /// Only mandatory attendees have events.
    MandatoryOnly,
    /// Slots that suit mandatory and optional attendees alike.
    Everyone,
    /// No slot suits everyone; mandatory attendees' slots are returned.
    MandatoryFallback,
}

/// The slots found for a request, with the rule that selected them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub case: QueryCase,
    /// Sorted by start, pairwise disjoint, each at least the requested duration.
    pub ranges: Vec<TimeRange>,
}

/// Find every slot in the day that can hold the requested meeting.
///
/// See [`query_with_outcome`] for the selection rules.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    query_with_outcome(events, request).ranges
}

/// Find every slot that can hold the requested meeting, reporting which rule
/// selected them.
///
/// - Nobody has events: the whole day, if the meeting fits in a day.
/// - Only optional attendees have events: their free ranges.
/// - Only mandatory attendees have events: their free ranges.
/// - Both groups have events: the ranges shared by both groups' free time, as
///   found by [`intersect_free_ranges`]; if there are none, the mandatory
///   attendees' free ranges.
pub fn query_with_outcome(events: &[Event], request: &MeetingRequest) -> QueryOutcome {
    let duration = request.duration();
    let mandatory_busy = normalize(busy_ranges(events, request.attendees()));
    let optional_busy = normalize(busy_ranges(events, request.optional_attendees()));

    tracing::debug!(
        events = events.len(),
        attendees = request.attendees().len(),
        optional_attendees = request.optional_attendees().len(),
        mandatory_busy = mandatory_busy.len(),
        optional_busy = optional_busy.len(),
        duration,
        "computed busy ranges"
    );

    let outcome = match (mandatory_busy.is_empty(), optional_busy.is_empty()) {
        (true, true) => QueryOutcome {
            case: QueryCase::Unconstrained,
            ranges: free_ranges(&[], duration),
        },
        (true, false) => QueryOutcome {
            case: QueryCase::OptionalOnly,
            ranges: free_ranges(&optional_busy, duration),
        },
        (false, true) => QueryOutcome {
            case: QueryCase::MandatoryOnly,
            ranges: free_ranges(&mandatory_busy, duration),
        },
        (false, false) => {
            let mandatory_free = free_ranges(&mandatory_busy, duration);
            let optional_free = free_ranges(&optional_busy, duration);
            let shared = intersect_free_ranges(&mandatory_free, &optional_free, duration);
            if shared.is_empty() {
                QueryOutcome {
                    case: QueryCase::MandatoryFallback,
                    ranges: mandatory_free,
                }
            } else {
                QueryOutcome {
                    case: QueryCase::Everyone,
                    ranges: shared,
                }
            }
        }
    };

    tracing::debug!(case = ?outcome.case, slots = outcome.ranges.len(), "query resolved");
    outcome
}

/// Intersect mandatory and optional free ranges, keeping overlaps of at least
/// `duration` minutes.
///
/// Both inputs must be sorted by start. The walk keeps one cursor per list:
/// when the current ranges overlap, their intersection is emitted (if long
/// enough) and only the optional cursor moves on; otherwise only the mandatory
/// cursor moves on. An optional range therefore contributes to at most one
/// mandatory range, and an optional range lying entirely before the current
/// mandatory range ends the useful part of the walk.
pub fn intersect_free_ranges(
    mandatory: &[TimeRange],
    optional: &[TimeRange],
    duration: u32,
) -> Vec<TimeRange> {
    let mut shared = Vec::new();
    let (mut m, mut o) = (0, 0);

    while m < mandatory.len() && o < optional.len() {
        match mandatory[m].intersection(&optional[o]) {
            Some(overlap) => {
                if overlap.duration() >= duration {
                    shared.push(overlap);
                }
                o += 1;
            }
            None => m += 1,
        }
    }

    shared
}
