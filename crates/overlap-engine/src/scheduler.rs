//! Stateful facade over the engine's pure operations.
//!
//! A [`Scheduler`] owns the one piece of state the engine keeps (the grid
//! cache) and runs the core operations against it. Computation functions
//! take an explicit reference day so results are reproducible; the
//! `*_today` conveniences anchor at the current UTC date and are the only
//! place the system clock is read.
//!
//! Methods take `&mut self` for the cache alone, which also enforces the
//! no-interleaving contract: a participant mutation cannot race an
//! in-flight computation on the same scheduler.

use chrono::{NaiveDate, Utc};

use crate::cache::GridCache;
use crate::compat::{self, PairOverlap};
use crate::context::SchedulingContext;
use crate::grid::{build_day_grid, GridOptions, Slot};
use crate::ranker::{self, Suggestion};

#[derive(Debug, Default)]
pub struct Scheduler {
    cache: GridCache,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler {
            cache: GridCache::new(),
        }
    }

    /// Cached 48-slot availability grid for one UTC calendar day.
    pub fn day_grid(&mut self, day: NaiveDate, ctx: &SchedulingContext) -> &[Slot] {
        let ids = ctx.participant_ids();
        let options = GridOptions {
            exclude_lunch: ctx.settings.exclude_lunch,
        };
        self.cache.get_or_build_with(day, &ids, || {
            build_day_grid(day, &ctx.participants, &options)
        })
    }

    /// Ranked suggestions scanning `ctx.settings.days` days from `start_day`.
    pub fn find_best_times(
        &mut self,
        start_day: NaiveDate,
        ctx: &SchedulingContext,
    ) -> Vec<Suggestion> {
        ranker::find_best_times(start_day, ctx, &mut self.cache)
    }

    /// Ranked suggestions scanning from the current UTC date.
    pub fn find_best_times_today(&mut self, ctx: &SchedulingContext) -> Vec<Suggestion> {
        self.find_best_times(Utc::now().date_naive(), ctx)
    }

    /// Compatibility score in `[0, 100]` for the given day.
    pub fn compatibility_score(&mut self, day: NaiveDate, ctx: &SchedulingContext) -> u32 {
        compat::compatibility_score(day, ctx, &mut self.cache)
    }

    /// Compatibility score for the current UTC date.
    pub fn compatibility_score_today(&mut self, ctx: &SchedulingContext) -> u32 {
        self.compatibility_score(Utc::now().date_naive(), ctx)
    }

    /// Worst-overlapping pairs for the given day. Raw-window comparison;
    /// does not touch the cache.
    pub fn worst_pairs(&self, day: NaiveDate, ctx: &SchedulingContext) -> Vec<PairOverlap> {
        compat::find_worst_pairs(day, &ctx.participants)
    }

    /// Worst-overlapping pairs for the current UTC date.
    pub fn worst_pairs_today(&self, ctx: &SchedulingContext) -> Vec<PairOverlap> {
        self.worst_pairs(Utc::now().date_naive(), ctx)
    }

    /// Drop all cached grids. Call after any participant edit or any
    /// settings change that affects grids (lunch exclusion, timezone data).
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Grid lookups served from the cache since construction.
    pub fn cache_hits(&self) -> u64 {
        self.cache.hits()
    }

    /// Grid lookups that required a build since construction.
    pub fn cache_misses(&self) -> u64 {
        self.cache.misses()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
