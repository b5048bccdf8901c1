//! Aggregate compatibility scoring and worst-pair detection.
//!
//! The compatibility score blends mean slot availability (60 points) with
//! the density of "golden" slots where at least 80% of participants are
//! available (40 points). Worst pairs are found from raw per-participant
//! window masks, independent of the full grid.

use std::cmp::Ordering;

use chrono::{NaiveDate, Timelike};

use serde::Serialize;
use tracing::warn;

use crate::cache::GridCache;
use crate::context::SchedulingContext;
use crate::error::Result;
use crate::grid::{build_day_grid, slot_start, GridOptions, SLOTS_PER_DAY};
use crate::participant::Participant;
use crate::projector::parse_timezone;
use crate::window::{is_within_window, parse_local_time};

/// Pairs overlapping fewer than this many hours are reported.
pub const LOW_OVERLAP_HOURS: f64 = 3.0;

/// At most this many worst pairs are returned.
pub const MAX_WORST_PAIRS: usize = 3;

/// A poorly-overlapping participant pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairOverlap {
    pub p1: String,
    pub p2: String,
    /// Hours of the reference day during which both raw windows are
    /// satisfied. Half-slot granularity keeps the value exact at one
    /// decimal.
    pub overlap_hours: f64,
}

/// Compatibility score in `[0, 100]` for the participant set on `day`.
///
/// `round(avg/n * 60 + golden/48 * 40)` where `avg` is the mean slot count,
/// `n` the participant count, and `golden` the number of slots whose count
/// reaches `ceil(n * 0.8)`. Returns 0 for fewer than two participants.
pub fn compatibility_score(day: NaiveDate, ctx: &SchedulingContext, cache: &mut GridCache) -> u32 {
    let count = ctx.participants.len();
    if count < 2 {
        return 0;
    }

    let ids = ctx.participant_ids();
    let options = GridOptions {
        exclude_lunch: ctx.settings.exclude_lunch,
    };
    let grid = cache.get_or_build_with(day, &ids, || {
        build_day_grid(day, &ctx.participants, &options)
    });

    let avg = grid.iter().map(|slot| slot.count).sum::<usize>() as f64 / SLOTS_PER_DAY as f64;
    let avg_score = avg / count as f64 * 60.0;

    let golden_threshold = (count as f64 * 0.8).ceil() as usize;
    let golden = grid
        .iter()
        .filter(|slot| slot.count >= golden_threshold)
        .count();
    let golden_score = golden as f64 / SLOTS_PER_DAY as f64 * 40.0;

    (avg_score + golden_score).round() as u32
}

/// Raw-window availability bitmask over the 48 slots of `day`. Bit `i` is
/// set when the participant's own window contains slot `i`'s start instant.
fn window_mask(day: NaiveDate, participant: &Participant) -> Result<u64> {
    let tz = parse_timezone(&participant.timezone)?;
    let start = parse_local_time(&participant.start)?;
    let end = parse_local_time(&participant.end)?;

    let mut mask = 0u64;
    for index in 0..SLOTS_PER_DAY {
        let local = slot_start(day, index).with_timezone(&tz);
        let minute_of_day = local.hour() * 60 + local.minute();
        if is_within_window(minute_of_day, start, end) {
            mask |= 1 << index;
        }
    }
    Ok(mask)
}

/// Up to [`MAX_WORST_PAIRS`] participant pairs sharing fewer than
/// [`LOW_OVERLAP_HOURS`] hours of raw window overlap on `day`, sorted
/// ascending by overlap.
///
/// Windows are compared raw: lunch exclusion does not apply here even when
/// the grid honors it. Participants whose zone or window fails to resolve
/// are warned and left out of the analysis.
pub fn find_worst_pairs(day: NaiveDate, participants: &[Participant]) -> Vec<PairOverlap> {
    let masks: Vec<(&Participant, u64)> = participants
        .iter()
        .filter_map(|p| match window_mask(day, p) {
            Ok(mask) => Some((p, mask)),
            Err(err) => {
                warn!(participant = %p.name, %err, "participant excluded from pair analysis");
                None
            }
        })
        .collect();

    let mut pairs = Vec::new();
    for (i, (a, mask_a)) in masks.iter().enumerate() {
        for (b, mask_b) in &masks[i + 1..] {
            let shared = (mask_a & mask_b).count_ones();
            let overlap_hours = f64::from(shared) * 0.5;
            if overlap_hours < LOW_OVERLAP_HOURS {
                pairs.push(PairOverlap {
                    p1: a.name.clone(),
                    p2: b.name.clone(),
                    overlap_hours,
                });
            }
        }
    }

    pairs.sort_by(|x, y| {
        x.overlap_hours
            .partial_cmp(&y.overlap_hours)
            .unwrap_or(Ordering::Equal)
    });
    pairs.truncate(MAX_WORST_PAIRS);
    pairs
}

// ── Tests ───────────────────────────────────────────────────────────────────
