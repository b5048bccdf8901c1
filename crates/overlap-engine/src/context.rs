//! Immutable per-computation input snapshot.
//!
//! Every core operation takes a [`SchedulingContext`] value: the participant
//! list plus the settings bundle. The engine holds no state beyond the grid
//! cache; all participant and settings mutation happens in the surrounding
//! application layer between calls, so a computation can never observe a
//! half-mutated participant set.

use serde::{Deserialize, Serialize};

use crate::participant::{Participant, ParticipantId};

/// Clock style for rendered wall-clock labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    H12,
    #[default]
    #[serde(rename = "24h")]
    H24,
}

/// Settings bundle consumed at the library boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Meeting length in minutes, rounded up to whole 30-minute slots.
    pub duration_minutes: u32,
    /// Consecutive calendar days to scan, starting at the anchor day.
    pub days: u32,
    /// Cap on the number of ranked suggestions returned.
    pub max_suggestions: usize,
    /// Drop participants from slots falling in their local 12:00 to 13:00.
    pub exclude_lunch: bool,
    /// Clock style for local-time labels on suggestions.
    pub time_format: TimeFormat,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        SchedulerSettings {
            duration_minutes: 60,
            days: 3,
            max_suggestions: 5,
            exclude_lunch: false,
            time_format: TimeFormat::H24,
        }
    }
}

/// Immutable snapshot of participants plus settings for one computation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchedulingContext {
    pub participants: Vec<Participant>,
    pub settings: SchedulerSettings,
}

impl SchedulingContext {
    pub fn new(participants: Vec<Participant>, settings: SchedulerSettings) -> Self {
        SchedulingContext {
            participants,
            settings,
        }
    }

    /// Ordered id tuple; the participant component of the grid cache key.
    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id.clone()).collect()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::Priority;

    #[test]
    fn test_settings_defaults() {
        let settings = SchedulerSettings::default();
        assert_eq!(settings.duration_minutes, 60);
        assert_eq!(settings.days, 3);
        assert_eq!(settings.max_suggestions, 5);
        assert!(!settings.exclude_lunch);
        assert_eq!(settings.time_format, TimeFormat::H24);
    }

    #[test]
    fn test_time_format_serde_names() {
        assert_eq!(serde_json::to_string(&TimeFormat::H12).unwrap(), r#""12h""#);
        assert_eq!(serde_json::to_string(&TimeFormat::H24).unwrap(), r#""24h""#);
        let parsed: TimeFormat = serde_json::from_str(r#""12h""#).unwrap();
        assert_eq!(parsed, TimeFormat::H12);
    }

    #[test]
    fn test_partial_settings_fill_in_defaults() {
        let settings: SchedulerSettings =
            serde_json::from_str(r#"{"duration_minutes": 90, "exclude_lunch": true}"#).unwrap();
        assert_eq!(settings.duration_minutes, 90);
        assert!(settings.exclude_lunch);
        assert_eq!(settings.days, 3);
        assert_eq!(settings.max_suggestions, 5);
    }

    #[test]
    fn test_participant_ids_preserve_order() {
        let a = Participant::new("Ada", "UTC", "09:00", "17:00", Priority::Required, "#f00");
        let b = Participant::new("Ben", "UTC", "10:00", "18:00", Priority::Optional, "#0f0");
        let ctx = SchedulingContext::new(vec![a.clone(), b.clone()], SchedulerSettings::default());
        assert_eq!(ctx.participant_ids(), vec![a.id, b.id]);
    }
}
