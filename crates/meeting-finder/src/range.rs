//! Minute-of-day time ranges.
//!
//! A [`TimeRange`] is a half-open span `[start, end)` of minutes within a single
//! day. Both bounds lie in `0..=1440`; a range ending at `1440` runs to midnight.
//! Construction validates the bounds and never clamps.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulingError};

/// Number of minutes in a day, and the exclusive upper bound of every range.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day. Use it with `inclusive = true` to build a range that
/// ends at midnight.
pub const END_OF_DAY: u32 = MINUTES_PER_DAY - 1;

/// The whole day, `[0, 1440)`.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    end: MINUTES_PER_DAY,
};

/// A half-open span of minutes within one day.
///
/// Ordering (`Ord`) is by start, then by end, which is the order the
/// normalizer expects its input in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// Wire shape of a [`TimeRange`]; validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = SchedulingError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::from_start_end(raw.start, raw.end, false)
    }
}

impl From<TimeRange> for RawRange {
    fn from(range: TimeRange) -> Self {
        RawRange {
            start: range.start,
            end: range.end,
        }
    }
}

impl TimeRange {
    /// Build a range from its bounds.
    ///
    /// With `inclusive = true` the minute `end` itself belongs to the range, so
    /// `from_start_end(600, END_OF_DAY, true)` is `[600, 1440)`.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let end = if inclusive {
            end.checked_add(1)
                .ok_or(SchedulingError::OutOfDay { value: end })?
        } else {
            end
        };
        Self::checked(start, end)
    }

    /// Build a range that starts at `start` and lasts `duration` minutes.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        let end = start
            .checked_add(duration)
            .ok_or(SchedulingError::OutOfDay { value: start })?;
        Self::checked(start, end)
    }

    fn checked(start: u32, end: u32) -> Result<Self> {
        if start > MINUTES_PER_DAY {
            return Err(SchedulingError::OutOfDay { value: start });
        }
        if end > MINUTES_PER_DAY {
            return Err(SchedulingError::OutOfDay { value: end });
        }
        if start > end {
            return Err(SchedulingError::InvalidRange { start, end });
        }
        Ok(TimeRange { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end.
    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// A zero-length range holds no minute.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether minute `point` falls inside the range. The end bound is excluded.
    pub fn contains_point(&self, point: u32) -> bool {
        !self.is_empty() && self.start <= point && point < self.end
    }

    /// Whether every minute of `other` lies inside `self`.
    ///
    /// An empty `other` is treated as the single point `other.start`.
    pub fn contains(&self, other: &TimeRange) -> bool {
        if other.is_empty() {
            return self.contains_point(other.start);
        }
        self.contains_point(other.start) && self.contains_point(other.end - 1)
    }

    /// Whether the two ranges share at least one minute.
    ///
    /// Ranges that only touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.contains_point(other.start) || other.contains_point(self.start)
    }

    /// Whether one range ends exactly where the other starts.
    pub fn touches(&self, other: &TimeRange) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// The minutes both ranges share, or `None` when they do not overlap.
    pub fn intersection(&self, other: &TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(TimeRange {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// The smallest range covering both `self` and `other`.
    pub fn span(&self, other: &TimeRange) -> TimeRange {
        TimeRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Order by start, then by end.
    pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.cmp(b)
    }
}

impl PartialOrd for TimeRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeRange {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start, self.end).cmp(&(other.start, other.end))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
