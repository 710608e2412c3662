//! # meeting-finder
//!
//! Find every window in a day that can hold a meeting, given the day's existing
//! events and who has to attend.
//!
//! A [`MeetingRequest`] names mandatory attendees, optional attendees, and a
//! duration in minutes. [`query`] merges each group's events into busy ranges,
//! takes the gaps as free ranges, and prefers the slots that suit the optional
//! attendees too, falling back to the mandatory attendees' slots when none do.
//!
//! ```rust
//! use meeting_finder::{query, Event, MeetingRequest, TimeRange};
//!
//! let standup = TimeRange::from_start_end(600, 630, false).unwrap();
//! let events = vec![Event::new("Standup", standup, ["alice"])];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let slots = query(&events, &request);
//! assert_eq!(slots.len(), 2);
//! assert_eq!(slots[0].to_string(), "[0, 600)");
//! assert_eq!(slots[1].to_string(), "[630, 1440)");
//! ```
//!
//! ## Modules
//!
//! - [`range`] — `TimeRange` and the day bounds
//! - [`event`] — `Event` and `MeetingRequest`
//! - [`busy`] — Busy ranges per attendee group, sorting and merging
//! - [`freebusy`] — Free ranges around a merged busy set
//! - [`query`] — The slot search and its optional-attendee preference
//! - [`error`] — Error types

pub mod busy;
pub mod error;
pub mod event;
pub mod freebusy;
pub mod query;
pub mod range;

pub use busy::{busy_ranges, merge_busy, normalize};
pub use error::SchedulingError;
pub use event::{Event, MeetingRequest};
pub use freebusy::{available_ranges, free_ranges};
pub use query::{intersect_free_ranges, query, query_with_outcome, QueryCase, QueryOutcome};
pub use range::{TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY, WHOLE_DAY};
