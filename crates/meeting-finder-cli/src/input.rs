//! The JSON document `meetfind` reads, and the clock-time rendering it writes.
//!
//! Times may be written as minutes since midnight (`540`) or as `"HH:MM"`
//! strings (`"09:00"`). `"24:00"` is accepted as an end bound.

use anyhow::{bail, Context, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use meeting_finder::{Event, MeetingRequest, QueryCase, TimeRange, MINUTES_PER_DAY};

/// A point in the day, either as minutes or as a clock string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TimeOfDay {
    Minutes(u32),
    Clock(String),
}

impl TimeOfDay {
    pub fn to_minutes(&self) -> Result<u32> {
        match self {
            TimeOfDay::Minutes(m) => Ok(*m),
            TimeOfDay::Clock(s) if s.trim() == "24:00" => Ok(MINUTES_PER_DAY),
            TimeOfDay::Clock(s) => {
                let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
                    .with_context(|| format!("Invalid time '{}', expected HH:MM", s))?;
                Ok(t.hour() * 60 + t.minute())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub title: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    #[serde(default)]
    pub attendees: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RequestInput {
    pub duration: u32,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub optional_attendees: Vec<String>,
}

/// The whole input document: the day's events and, for `query`, the request.
#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub events: Vec<EventInput>,
    pub request: Option<RequestInput>,
}

impl Document {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid input JSON")
    }

    pub fn events(&self) -> Result<Vec<Event>> {
        self.events
            .iter()
            .enumerate()
            .map(|(i, input)| {
                let start = input.start.to_minutes()?;
                let end = input.end.to_minutes()?;
                let when = TimeRange::from_start_end(start, end, false)
                    .with_context(|| format!("Event #{} ('{}') has a bad time range", i, input.title))?;
                Ok(Event::new(input.title.clone(), when, input.attendees.iter().cloned()))
            })
            .collect()
    }

    pub fn request(&self) -> Result<MeetingRequest> {
        let Some(input) = &self.request else {
            bail!("Input has no \"request\" object");
        };
        Ok(MeetingRequest::new(input.attendees.iter().cloned(), input.duration)
            .with_optional(input.optional_attendees.iter().cloned()))
    }
}

/// A slot as written to JSON output.
#[derive(Debug, Serialize)]
pub struct SlotOutput {
    pub start: u32,
    pub end: u32,
    pub duration: u32,
}

impl From<&TimeRange> for SlotOutput {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: r.start(),
            end: r.end(),
            duration: r.duration(),
        }
    }
}

/// `query --explain` JSON output.
#[derive(Debug, Serialize)]
pub struct ExplainedOutput {
    pub case: QueryCase,
    pub slots: Vec<SlotOutput>,
}

/// Render a minute of the day as `HH:MM`; midnight at the end of the day is `24:00`.
pub fn clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Render a range as `HH:MM-HH:MM (N min)`.
pub fn clock_range(r: &TimeRange) -> String {
    format!("{}-{} ({} min)", clock(r.start()), clock(r.end()), r.duration())
}
