//! Window trimming -- clips a schedule to a `[from, until)` query window.

use chrono::{DateTime, Utc};

use crate::error::{Result, ScheduleError};
use crate::interval::Interval;

/// Keep the part of `schedule` that falls inside `[from, until)`.
///
/// Intervals ending at or before `from`, or starting at or after `until`, are
/// dropped. The first surviving interval is clipped to start at `from` and
/// the last to end at `until`; everything in between is returned untouched.
/// A window that misses the schedule entirely yields an empty result.
///
/// # Errors
/// Returns `ScheduleError::Validation` if `from >= until`.
pub fn trim(
    schedule: &[Interval],
    from: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Result<Vec<Interval>> {
    if from >= until {
        return Err(ScheduleError::validation(
            "from time must be before until time",
        ));
    }

    let mut first = None;
    let mut last = None;
    for (idx, interval) in schedule.iter().enumerate() {
        if first.is_none() && interval.end > from {
            first = Some(idx);
        }
        if interval.start < until {
            last = Some(idx);
        }
    }

    let (first, last) = match (first, last) {
        (Some(first), Some(last)) if first <= last => (first, last),
        _ => {
            tracing::debug!(
                from = %from.to_rfc3339(),
                until = %until.to_rfc3339(),
                "window does not overlap schedule"
            );
            return Ok(Vec::new());
        }
    };

    let mut trimmed = schedule[first..=last].to_vec();
    if let Some(head) = trimmed.first_mut() {
        head.start = head.start.max(from);
    }
    if let Some(tail) = trimmed.last_mut() {
        tail.end = tail.end.min(until);
    }

    Ok(trimmed)
}
