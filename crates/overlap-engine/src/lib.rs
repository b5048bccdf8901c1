//! # overlap-engine
//!
//! Deterministic meeting-time computation across timezones.
//!
//! The engine converts each participant's local availability window into a
//! canonical per-day grid of 48 half-hour slots in UTC, aggregates per-slot
//! availability counts, scores duration-sized candidate windows with
//! priority bonuses, and ranks start times. A compatibility analyzer
//! derives an aggregate 0 to 100 score and the worst-overlapping pairs from
//! the same window primitives.
//!
//! # Design Principle
//!
//! Core operations take explicit inputs (no system clock access): the
//! caller provides the reference day and an immutable [`SchedulingContext`]
//! snapshot, keeping every computation reproducible and testable. The only
//! state the engine keeps is the grid cache owned by [`Scheduler`], whose
//! `*_today` conveniences are the single place "now" is read.
//!
//! Failures degrade instead of aborting: a participant whose timezone or
//! window cannot be resolved is logged and excluded from the affected
//! computation, and empty results are values, not errors.
//!
//! ## Modules
//!
//! - [`participant`]: participant records, ids, priority tiers
//! - [`context`]: immutable per-computation snapshot and settings
//! - [`window`]: local "HH:MM" parsing and wrap-aware interval membership
//! - [`projector`]: UTC-to-wall-clock projection and offsets (chrono-tz)
//! - [`grid`]: 48-slot UTC day grid construction
//! - [`cache`]: grid memoization keyed by day and participant identity
//! - [`ranker`]: candidate-window scoring and top-N ranking
//! - [`compat`]: compatibility score and worst-pair detection
//! - [`scheduler`]: stateful facade owning the cache
//! - [`error`]: error types

pub mod cache;
pub mod compat;
pub mod context;
pub mod error;
pub mod grid;
pub mod participant;
pub mod projector;
pub mod ranker;
pub mod scheduler;
pub mod window;

pub use cache::GridCache;
pub use compat::{compatibility_score, find_worst_pairs, PairOverlap};
pub use context::{SchedulerSettings, SchedulingContext, TimeFormat};
pub use error::ScheduleError;
pub use grid::{
    build_day_grid, is_inconvenient_hour, slot_start, GridOptions, Slot, SlotParticipant,
    SLOTS_PER_DAY,
};
pub use participant::{Participant, ParticipantId, Priority};
pub use projector::{
    current_offset_minutes, current_zone_info, is_known_timezone, local_clock_at, local_label_at,
    offset_minutes_at, zone_info_at, LocalClock, ZoneInfo,
};
pub use ranker::{find_best_times, slots_needed, LocalTimeEntry, Suggestion, REQUIRED_BONUS};
pub use scheduler::Scheduler;
pub use window::{is_within_window, parse_local_time};
