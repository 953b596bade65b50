//! Base rotation generation -- cycles participants through fixed-length shifts.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Result, ScheduleError};
use crate::interval::Interval;

/// Ordered participants handing over on-call duty every `period`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPlan {
    pub participants: Vec<String>,
    pub period: Duration,
}

impl RotationPlan {
    pub fn new<S: Into<String>>(
        participants: impl IntoIterator<Item = S>,
        period: Duration,
    ) -> Self {
        Self {
            participants: participants.into_iter().map(Into::into).collect(),
            period,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.period <= Duration::zero() {
            return Err(ScheduleError::validation(
                "handover period must be greater than zero",
            ));
        }
        if self.participants.is_empty() {
            return Err(ScheduleError::validation("users must be defined"));
        }
        Ok(())
    }
}

/// Generate the base rotation starting at `from` and covering `until`.
///
/// Shifts are contiguous, `period` long, and owned by `participants[i % n]`.
/// The last shift is not clipped to `until` and may run past it; clipping to
/// a query window is [`crate::window::trim`]'s job.
///
/// # Errors
/// Returns `ScheduleError::Validation` if the period is not positive, the
/// participant list is empty, `from >= until`, or a shift boundary falls
/// outside the representable time range.
pub fn generate(
    plan: &RotationPlan,
    from: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Result<Vec<Interval>> {
    plan.validate()?;
    if from >= until {
        return Err(ScheduleError::validation(
            "from time must be before until time",
        ));
    }

    let mut shifts = Vec::new();
    let mut cursor = from;
    for owner in plan.participants.iter().cycle() {
        if cursor >= until {
            break;
        }
        let next = cursor.checked_add_signed(plan.period).ok_or_else(|| {
            ScheduleError::validation("rotation extends past the representable time range")
        })?;
        shifts.push(Interval {
            owner: owner.clone(),
            start: cursor,
            end: next,
        });
        cursor = next;
    }

    tracing::debug!(
        shifts = shifts.len(),
        participants = plan.participants.len(),
        "generated base rotation"
    );
    Ok(shifts)
}
