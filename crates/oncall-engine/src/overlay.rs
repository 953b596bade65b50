//! Override overlay -- layers manual ownership changes onto a schedule.
//!
//! Overrides are applied one at a time in ascending start order, each against
//! the result of the previous one. Where two overrides overlap each other, the
//! later-starting one therefore wins the contested region.

use crate::error::{Result, ScheduleError};
use crate::interval::{Interval, Override};

/// Apply `overrides` on top of `base`, splitting intervals at override boundaries.
///
/// The returned schedule covers exactly the time `base` covers; overrides only
/// change who owns it. Overrides reaching outside `base` are clipped to it.
/// Zero-length and inverted overrides are ignored, and an empty override
/// list returns `base` unchanged.
///
/// # Errors
/// Returns `ScheduleError::Validation` if `base` is empty while `overrides`
/// is not.
pub fn apply_overrides(base: &[Interval], overrides: &[Override]) -> Result<Vec<Interval>> {
    if overrides.is_empty() {
        return Ok(base.to_vec());
    }
    if base.is_empty() {
        return Err(ScheduleError::validation("base schedule must be defined"));
    }

    let mut pending: Vec<&Override> = overrides
        .iter()
        .filter(|o| !o.is_empty())
        .collect();
    let discarded = overrides.len() - pending.len();
    if discarded > 0 {
        tracing::debug!(discarded, "ignoring empty overrides");
    }
    if pending.is_empty() {
        return Ok(base.to_vec());
    }

    // Stable: overrides sharing a start keep their input order.
    pending.sort_by_key(|o| o.start);

    let mut schedule = base.to_vec();
    for ov in pending {
        schedule = overlay_one(&schedule, ov);
    }

    tracing::debug!(
        base = base.len(),
        result = schedule.len(),
        "applied overrides"
    );
    Ok(schedule)
}

/// Rebuild `schedule` with a single override layered on top.
fn overlay_one(schedule: &[Interval], ov: &Override) -> Vec<Interval> {
    let mut out = Vec::with_capacity(schedule.len() + 2);

    for interval in schedule {
        if !interval.overlaps(ov.start, ov.end) {
            out.push(interval.clone());
            continue;
        }

        if ov.start > interval.start {
            out.push(Interval {
                owner: interval.owner.clone(),
                start: interval.start,
                end: ov.start,
            });
        }

        out.push(Interval {
            owner: ov.owner.clone(),
            start: ov.start.max(interval.start),
            end: ov.end.min(interval.end),
        });

        if ov.end < interval.end {
            out.push(Interval {
                owner: interval.owner.clone(),
                start: ov.end,
                end: interval.end,
            });
        }
    }

    out
}
