//! Decoding of rotation plan and override documents.
//!
//! Both documents are JSON. Callers name the document they expect with a
//! [`DocumentKind`] and get back a [`ParsedDocument`] of the matching variant,
//! or use the typed helpers [`parse_rotation_plan`] and [`parse_overrides`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Result, ScheduleError};
use crate::interval::Override;
use crate::rotation::RotationPlan;

/// Which document a byte buffer is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// `{"users": [...], "handover_interval_days": N}`
    Rotation,
    /// `[{"user": ..., "start_at": ..., "end_at": ...}, ...]`
    Overrides,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Rotation => "schedule",
            DocumentKind::Overrides => "overrides",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "schedule" | "rotation" => Ok(DocumentKind::Rotation),
            "overrides" => Ok(DocumentKind::Overrides),
            other => Err(ScheduleError::input(format!("unknown field name: {other}"))),
        }
    }
}

/// A decoded document, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDocument {
    Rotation(RotationPlan),
    Overrides(Vec<Override>),
}

/// Wire form of a rotation plan.
#[derive(Debug, Deserialize)]
struct RotationDocument {
    users: Vec<String>,
    handover_interval_days: i64,
}

impl TryFrom<RotationDocument> for RotationPlan {
    type Error = ScheduleError;

    fn try_from(doc: RotationDocument) -> Result<Self> {
        let period = Duration::try_days(doc.handover_interval_days).ok_or_else(|| {
            ScheduleError::input(format!(
                "handover_interval_days out of range: {}",
                doc.handover_interval_days
            ))
        })?;
        Ok(RotationPlan {
            participants: doc.users,
            period,
        })
    }
}

/// Decode `bytes` as the document named by `kind`.
///
/// Domain rules (non-empty users, positive period) are not checked here;
/// [`crate::rotation::generate`] enforces them. Unknown fields are ignored.
///
/// # Errors
/// Returns `ScheduleError::Input` if the buffer is empty or whitespace, is
/// not valid JSON of the expected shape, or holds a malformed timestamp.
pub fn parse_document(bytes: &[u8], kind: DocumentKind) -> Result<ParsedDocument> {
    match kind {
        DocumentKind::Rotation => parse_rotation_plan(bytes).map(ParsedDocument::Rotation),
        DocumentKind::Overrides => parse_overrides(bytes).map(ParsedDocument::Overrides),
    }
}

/// Decode a rotation plan document.
pub fn parse_rotation_plan(bytes: &[u8]) -> Result<RotationPlan> {
    let doc: RotationDocument = decode(bytes, DocumentKind::Rotation)?;
    doc.try_into()
}

/// Decode an overrides document.
pub fn parse_overrides(bytes: &[u8]) -> Result<Vec<Override>> {
    decode(bytes, DocumentKind::Overrides)
}

fn decode<T: DeserializeOwned>(bytes: &[u8], kind: DocumentKind) -> Result<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ScheduleError::input(format!("{kind} document is empty")));
    }
    serde_json::from_slice(bytes)
        .map_err(|e| ScheduleError::input(format!("invalid {kind} document: {e}")))
}

/// Parse an RFC3339 timestamp into UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ScheduleError::input(format!("invalid RFC3339 timestamp '{s}': {e}")))
}
