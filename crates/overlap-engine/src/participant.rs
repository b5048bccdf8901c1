//! Participant records and priority tiers.
//!
//! The engine only ever reads participant lists. Records are created and
//! validated upstream (name length, timezone membership, distinct window
//! endpoints) and treated as a value snapshot for the duration of any one
//! computation.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique participant identifier; the join key everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        ParticipantId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        ParticipantId(s.to_string())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Participant priority tier.
///
/// Required participants contribute a scoring bonus when they are available
/// for a whole candidate window and are reported separately in suggestion
/// summaries.
///
/// An absent field deserializes as [`Priority::Required`]. This mirrors the
/// historical behavior of the system and is the documented contract; whether
/// the more restrictive tier is the right default for new records is an open
/// product question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Required,
    Optional,
}

/// One attendee of the meeting being scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    /// Display name, non-empty (validated upstream).
    pub name: String,
    /// IANA zone identifier, e.g. `"America/New_York"`.
    pub timezone: String,
    /// Local availability window start, `"HH:MM"`.
    pub start: String,
    /// Local availability window end, `"HH:MM"`. An end earlier than the
    /// start wraps the window past midnight (22:00 to 06:00 means available
    /// overnight).
    pub end: String,
    #[serde(default)]
    pub priority: Priority,
    /// Display attribute, opaque to the engine and passed through unchanged.
    pub color: String,
}

impl Participant {
    /// Create a participant with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        timezone: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        priority: Priority,
        color: impl Into<String>,
    ) -> Self {
        Participant {
            id: ParticipantId::new(),
            name: name.into(),
            timezone: timezone.into(),
            start: start.into(),
            end: end.into(),
            priority,
            color: color.into(),
        }
    }

    pub fn is_required(&self) -> bool {
        self.priority == Priority::Required
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
