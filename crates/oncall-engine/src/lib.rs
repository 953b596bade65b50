//! # oncall-engine
//!
//! Deterministic on-call schedule computation.
//!
//! A schedule is built in three pure steps: a cyclic base rotation is
//! generated from a participant list and a handover period, manual overrides
//! are layered on top of it, and the result is trimmed to a query window.
//! Every step works on half-open `[start, end)` intervals and returns a new,
//! sorted, non-overlapping sequence.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use oncall_engine::{build_schedule, Override, RotationPlan};
//!
//! let plan = RotationPlan::new(["alice", "bob"], Duration::days(7));
//! let from = Utc.with_ymd_and_hms(2025, 11, 7, 17, 0, 0).unwrap();
//! let until = Utc.with_ymd_and_hms(2025, 11, 21, 17, 0, 0).unwrap();
//! let cover = Override::new(
//!     "charlie",
//!     Utc.with_ymd_and_hms(2025, 11, 8, 17, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2025, 11, 9, 17, 0, 0).unwrap(),
//! );
//!
//! let schedule = build_schedule(&plan, &[cover], from, until).unwrap();
//! let owners: Vec<&str> = schedule.iter().map(|i| i.owner.as_str()).collect();
//! assert_eq!(owners, ["alice", "charlie", "alice", "bob"]);
//! ```
//!
//! ## Modules
//!
//! - [`rotation`] — Plan + window → contiguous base rotation
//! - [`overlay`] — Layer overrides onto a schedule
//! - [`window`] — Trim a schedule to a query window
//! - [`schedule`] — The three steps chained together
//! - [`interval`] — `Interval`, `Override`, and sequence helpers
//! - [`input`] — JSON document and timestamp decoding
//! - [`error`] — Error types

pub mod error;
pub mod input;
pub mod interval;
pub mod overlay;
pub mod rotation;
pub mod schedule;
pub mod window;

pub use error::ScheduleError;
pub use input::{parse_document, parse_overrides, parse_rotation_plan, DocumentKind, ParsedDocument};
pub use interval::{Interval, Override};
pub use overlay::apply_overrides;
pub use rotation::{generate, RotationPlan};
pub use schedule::build_schedule;
pub use window::trim;
