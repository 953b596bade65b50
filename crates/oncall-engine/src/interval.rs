//! Ownership intervals and schedule sequence helpers.
//!
//! All intervals are half-open `[start, end)`: an interval that ends exactly
//! when another starts does not overlap it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A span of time `[start, end)` owned by a single participant.
///
/// Serialized as `{"user", "start_at", "end_at"}` with RFC3339 timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    #[serde(rename = "user")]
    pub owner: String,
    #[serde(rename = "start_at")]
    pub start: DateTime<Utc>,
    #[serde(rename = "end_at")]
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Build an interval, rejecting degenerate (`start == end`) and inverted bounds.
    pub fn new(
        owner: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::validation(format!(
                "interval start {} must be before end {}",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }
        Ok(Self {
            owner: owner.into(),
            start,
            end,
        })
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `[start, end)` shares any instant with this interval.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.end && self.start < end
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// A manually requested ownership change, as read from an overrides document.
///
/// Unlike [`Interval`], an override may be degenerate: zero-length and
/// inverted overrides are accepted here and discarded by the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    #[serde(rename = "user")]
    pub owner: String,
    #[serde(rename = "start_at")]
    pub start: DateTime<Utc>,
    #[serde(rename = "end_at")]
    pub end: DateTime<Utc>,
}

impl Override {
    pub fn new(owner: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            owner: owner.into(),
            start,
            end,
        }
    }

    /// True when the override covers no time (`start >= end`).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Check the schedule sequence invariant: every interval has positive
/// duration, and intervals are sorted by start without overlapping.
pub fn is_well_formed(schedule: &[Interval]) -> bool {
    schedule.iter().all(|i| i.start < i.end)
        && schedule.windows(2).all(|pair| pair[0].end <= pair[1].start)
}

/// Return the participant on call at `instant`, if any.
pub fn owner_at(schedule: &[Interval], instant: DateTime<Utc>) -> Option<&str> {
    schedule
        .iter()
        .find(|i| i.contains(instant))
        .map(|i| i.owner.as_str())
}

/// Collapse a schedule into the spans of time it covers, ignoring ownership.
///
/// Adjacent intervals are joined, so a gap-free schedule yields a single span.
pub fn covered_spans(schedule: &[Interval]) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    let mut spans: Vec<(DateTime<Utc>, DateTime<Utc>)> =
        schedule.iter().map(|i| (i.start, i.end)).collect();
    spans.sort_by_key(|&(start, end)| (start, end));

    let mut merged: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::new();
    for (start, end) in spans {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}
