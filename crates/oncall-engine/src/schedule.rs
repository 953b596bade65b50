//! End-to-end schedule computation: rotation, then overrides, then window.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::interval::{Interval, Override};
use crate::overlay::apply_overrides;
use crate::rotation::{generate, RotationPlan};
use crate::window::trim;

/// Compute the final on-call schedule for `[from, until)`.
///
/// The base rotation is generated from `from`, `overrides` are layered on
/// top, and the result is trimmed to the window. Fails on the first stage
/// that rejects its input; no partial schedule is returned.
pub fn build_schedule(
    plan: &RotationPlan,
    overrides: &[Override],
    from: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Result<Vec<Interval>> {
    let base = generate(plan, from, until)?;
    let layered = apply_overrides(&base, overrides)?;
    let schedule = trim(&layered, from, until)?;

    tracing::debug!(
        base = base.len(),
        layered = layered.len(),
        result = schedule.len(),
        "built schedule"
    );
    Ok(schedule)
}
