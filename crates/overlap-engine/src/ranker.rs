//! Candidate-window scoring and ranking.
//!
//! Slides a duration-sized window of slots across each scanned day's grid,
//! scores every position, and returns the top-N start times. A position's
//! score is the sum of per-slot availability counts plus [`REQUIRED_BONUS`]
//! per required participant available for the whole window; windows nobody
//! overlaps at all are discarded rather than ranked at zero.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::warn;

use crate::cache::GridCache;
use crate::context::SchedulingContext;
use crate::grid::{build_day_grid, slot_start, GridOptions, Slot, SLOTS_PER_DAY};
use crate::participant::Priority;
use crate::projector::local_label_at;

/// Score bonus per required participant covered by the whole window.
pub const REQUIRED_BONUS: u32 = 2;

/// One participant's rendering of a candidate start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalTimeEntry {
    pub name: String,
    /// Wall-clock label at the window start, in the participant's zone.
    pub time: String,
    /// True if this participant is available for the whole window.
    pub available: bool,
    pub color: String,
    pub priority: Priority,
}

/// A ranked candidate meeting start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// UTC instant at which the candidate window begins.
    pub start: DateTime<Utc>,
    /// Sum of slot counts across the window plus required bonuses.
    pub score: u32,
    /// Names of participants present in every slot of the window, in input
    /// order.
    pub available: Vec<String>,
    /// Per-participant local renderings of `start`, in input order.
    pub local_times: Vec<LocalTimeEntry>,
}

/// Whole 30-minute slots needed to fit a meeting of `duration_minutes`.
///
/// # Examples
///
/// ```
/// use overlap_engine::ranker::slots_needed;
///
/// assert_eq!(slots_needed(30), 1);
/// assert_eq!(slots_needed(31), 2);
/// assert_eq!(slots_needed(90), 3);
/// ```
pub fn slots_needed(duration_minutes: u32) -> usize {
    duration_minutes.div_ceil(30) as usize
}

/// Rank candidate start times across the scanned days.
///
/// Scans `ctx.settings.days` consecutive UTC days starting at `start_day`,
/// fetching each day's grid through the cache. Candidates are generated in
/// day-then-start-index order and sorted by descending score with a stable
/// sort, so ties keep generation order and the result is deterministic. At
/// most `ctx.settings.max_suggestions` survive.
///
/// A duration that does not fit in a single day (or a zero duration) yields
/// an empty result rather than an error.
pub fn find_best_times(
    start_day: NaiveDate,
    ctx: &SchedulingContext,
    cache: &mut GridCache,
) -> Vec<Suggestion> {
    let needed = slots_needed(ctx.settings.duration_minutes);
    if needed == 0 || needed > SLOTS_PER_DAY {
        return Vec::new();
    }

    let ids = ctx.participant_ids();
    let options = GridOptions {
        exclude_lunch: ctx.settings.exclude_lunch,
    };
    let mut candidates = Vec::new();

    for offset in 0..ctx.settings.days {
        let day = start_day + chrono::Duration::days(i64::from(offset));
        let grid = cache.get_or_build_with(day, &ids, || {
            build_day_grid(day, &ctx.participants, &options)
        });

        for index in 0..=(SLOTS_PER_DAY - needed) {
            let window = &grid[index..index + needed];
            if let Some(candidate) = score_window(day, index, window, ctx) {
                candidates.push(candidate);
            }
        }
    }

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(ctx.settings.max_suggestions);
    candidates
}

/// Score one candidate window, or `None` when its summed count is zero.
fn score_window(
    day: NaiveDate,
    index: usize,
    window: &[Slot],
    ctx: &SchedulingContext,
) -> Option<Suggestion> {
    let base: usize = window.iter().map(|slot| slot.count).sum();
    if base == 0 {
        return None;
    }

    // Participants present in every slot of the window.
    let mut covered: HashSet<&str> = window[0]
        .participants
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    for slot in &window[1..] {
        let names: HashSet<&str> = slot.participants.iter().map(|p| p.name.as_str()).collect();
        covered.retain(|name| names.contains(name));
    }

    let required_covered = ctx
        .participants
        .iter()
        .filter(|p| p.is_required() && covered.contains(p.name.as_str()))
        .count() as u32;

    let start = slot_start(day, index);
    let available: Vec<String> = ctx
        .participants
        .iter()
        .filter(|p| covered.contains(p.name.as_str()))
        .map(|p| p.name.clone())
        .collect();

    let local_times: Vec<LocalTimeEntry> = ctx
        .participants
        .iter()
        .filter_map(
            |p| match local_label_at(start, &p.timezone, ctx.settings.time_format) {
                Ok(time) => Some(LocalTimeEntry {
                    name: p.name.clone(),
                    time,
                    available: covered.contains(p.name.as_str()),
                    color: p.color.clone(),
                    priority: p.priority,
                }),
                Err(err) => {
                    warn!(participant = %p.name, %err, "no local-time label for suggestion");
                    None
                }
            },
        )
        .collect();

    Some(Suggestion {
        start,
        score: base as u32 + required_covered * REQUIRED_BONUS,
        available,
        local_times,
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────
