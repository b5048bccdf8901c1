//! Memoized slot grids keyed by day and participant identity.
//!
//! The key is structural: the calendar day plus the ordered tuple of
//! participant ids. Any add, remove, or reorder changes the tuple and
//! misses. An in-place edit (same ids, new window or timezone) and any
//! grid-affecting settings change do not move the key, so callers clear the
//! cache on those mutations. No TTL; growth is unbounded, which is
//! acceptable at this domain's scale (tens of participants, a handful of
//! days), and [`GridCache::clear`] exists for staleness, not memory
//! pressure.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::grid::Slot;
use crate::participant::ParticipantId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GridKey {
    day: NaiveDate,
    participant_ids: Vec<ParticipantId>,
}

impl GridKey {
    fn new(day: NaiveDate, participant_ids: &[ParticipantId]) -> Self {
        GridKey {
            day,
            participant_ids: participant_ids.to_vec(),
        }
    }
}

/// Memoization table for built day grids, with hit/miss counters so callers
/// and tests can observe whether a lookup recomputed.
#[derive(Debug, Default)]
pub struct GridCache {
    entries: HashMap<GridKey, Vec<Slot>>,
    hits: u64,
    misses: u64,
}

impl GridCache {
    pub fn new() -> Self {
        GridCache::default()
    }

    /// Look up a cached grid. Counts a hit or a miss.
    pub fn get(&mut self, day: NaiveDate, participant_ids: &[ParticipantId]) -> Option<&[Slot]> {
        match self.entries.get(&GridKey::new(day, participant_ids)) {
            Some(slots) => {
                self.hits += 1;
                Some(slots.as_slice())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert a freshly built grid, replacing any previous entry for the key.
    pub fn put(&mut self, day: NaiveDate, participant_ids: &[ParticipantId], slots: Vec<Slot>) {
        self.entries
            .insert(GridKey::new(day, participant_ids), slots);
    }

    /// Fetch the grid for a key, building and inserting it on a miss.
    pub fn get_or_build_with<F>(
        &mut self,
        day: NaiveDate,
        participant_ids: &[ParticipantId],
        build: F,
    ) -> &[Slot]
    where
        F: FnOnce() -> Vec<Slot>,
    {
        let key = GridKey::new(day, participant_ids);
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        self.entries.entry(key).or_insert_with(build).as_slice()
    }

    /// Drop every entry. Counters are not reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups served from memory since construction.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that found nothing cached.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
