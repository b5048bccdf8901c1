//! UTC slot-grid construction.
//!
//! One reference calendar day is divided into 48 half-hour slots indexed
//! 0 to 47 in UTC; slot `i` begins at UTC minute `i * 30`. Each slot carries
//! the participants whose local availability window contains the slot's
//! start instant, an aggregate count, and an inconvenient-hours flag.
//!
//! Builds are deterministic for identical inputs and timezone-database
//! state, never mutate the participant list, and cost O(participants x 48).
//! A participant whose timezone or window fails to resolve is logged and
//! treated as unavailable for the whole day; the build never aborts.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::participant::Participant;
use crate::projector::parse_timezone;
use crate::window::{is_within_window, parse_local_time};

/// Half-hour slots per UTC day.
pub const SLOTS_PER_DAY: usize = 48;

/// Width of one slot in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Local hours before this one count as inconvenient.
pub const EARLY_HOUR: u32 = 7;

/// Local hours from this one on count as inconvenient.
pub const LATE_HOUR: u32 = 22;

const LUNCH_START: u32 = 12 * 60;
const LUNCH_END: u32 = 13 * 60;

/// Grid construction options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridOptions {
    /// Drop participants from slots falling in their local 12:00 to 13:00,
    /// regardless of window membership.
    pub exclude_lunch: bool,
}

/// A participant's presence in one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotParticipant {
    pub name: String,
    pub color: String,
    /// True if this participant's local time falls in the inconvenient band.
    pub is_conflict: bool,
}

/// One half-hour interval of the reference day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Number of participants available in this slot.
    pub count: usize,
    /// Everyone available, in input order.
    pub participants: Vec<SlotParticipant>,
    /// True if any included participant sits in the inconvenient band.
    pub has_conflict: bool,
}

/// UTC instant at which slot `index` of `day` begins.
pub fn slot_start(day: NaiveDate, index: usize) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc() + chrono::Duration::minutes(index as i64 * SLOT_MINUTES)
}

/// True for wall-clock hours outside the comfortable 07:00 to 22:00 band.
pub fn is_inconvenient_hour(hour: u32) -> bool {
    hour < EARLY_HOUR || hour >= LATE_HOUR
}

/// Participant with its zone and window resolved once for all 48 slots.
struct Prepared<'a> {
    participant: &'a Participant,
    tz: Tz,
    window_start: u32,
    window_end: u32,
}

fn resolve(participant: &Participant) -> Result<Prepared<'_>> {
    Ok(Prepared {
        participant,
        tz: parse_timezone(&participant.timezone)?,
        window_start: parse_local_time(&participant.start)?,
        window_end: parse_local_time(&participant.end)?,
    })
}

fn prepare(participants: &[Participant]) -> Vec<Prepared<'_>> {
    participants
        .iter()
        .filter_map(|p| match resolve(p) {
            Ok(prepared) => Some(prepared),
            Err(err) => {
                warn!(participant = %p.name, %err, "participant excluded from grid");
                None
            }
        })
        .collect()
}

/// Build the 48-slot availability grid for one UTC calendar day.
///
/// For every slot, each participant's local wall clock at the slot's start
/// instant is tested against their `[start, end)` window (honoring
/// wraparound). With `exclude_lunch` set, a local minute in the 12:00 to
/// 13:00 band drops the participant from that slot regardless of window
/// membership.
pub fn build_day_grid(
    day: NaiveDate,
    participants: &[Participant],
    options: &GridOptions,
) -> Vec<Slot> {
    let prepared = prepare(participants);

    (0..SLOTS_PER_DAY)
        .map(|index| {
            let instant = slot_start(day, index);
            let mut slot = Slot::default();

            for entry in &prepared {
                let local = instant.with_timezone(&entry.tz);
                let minute_of_day = local.hour() * 60 + local.minute();

                if !is_within_window(minute_of_day, entry.window_start, entry.window_end) {
                    continue;
                }
                if options.exclude_lunch && (LUNCH_START..LUNCH_END).contains(&minute_of_day) {
                    continue;
                }

                let is_conflict = is_inconvenient_hour(local.hour());
                slot.has_conflict |= is_conflict;
                slot.participants.push(SlotParticipant {
                    name: entry.participant.name.clone(),
                    color: entry.participant.color.clone(),
                    is_conflict,
                });
            }

            slot.count = slot.participants.len();
            slot
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
