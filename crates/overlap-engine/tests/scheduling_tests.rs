//! End-to-end scheduling scenarios across the grid, ranker, cache, and
//! compatibility analyzer.
//!
//! Dates are fixed so timezone math is reproducible: March 16 2026 is a
//! Monday on which the US has already switched to DST (New York is UTC-4)
//! while the UK has not (London is UTC+0).

use chrono::{NaiveDate, TimeZone, Timelike, Utc};
use overlap_engine::{
    Participant, Priority, Scheduler, SchedulerSettings, SchedulingContext, TimeFormat,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

fn participant(name: &str, timezone: &str, start: &str, end: &str) -> Participant {
    Participant::new(name, timezone, start, end, Priority::Required, "#3b82f6")
}

fn ctx(participants: Vec<Participant>, settings: SchedulerSettings) -> SchedulingContext {
    SchedulingContext::new(participants, settings)
}

#[test]
fn new_york_and_london_meet_in_the_afternoon_utc() {
    let mut scheduler = Scheduler::new();
    let settings = SchedulerSettings {
        duration_minutes: 30,
        days: 1,
        max_suggestions: 5,
        ..SchedulerSettings::default()
    };
    let context = ctx(
        vec![
            participant("Ada", "America/New_York", "09:00", "17:00"),
            participant("Ben", "Europe/London", "08:30", "16:30"),
        ],
        settings,
    );

    let suggestions = scheduler.find_best_times(day(), &context);
    assert!(!suggestions.is_empty());

    // The top suggestions must cover both participants, inside the
    // 13:00 to 16:30 UTC overlap band of these two windows.
    let top = &suggestions[0];
    assert_eq!(top.available.len(), 2);
    assert!((13..17).contains(&top.start.hour()), "start: {}", top.start);
    // Base count 2 for the single slot, plus 2 per required participant.
    assert_eq!(top.score, 2 + 2 * 2);

    // Local labels render the same instant in each zone.
    let ada = top.local_times.iter().find(|e| e.name == "Ada").unwrap();
    let ben = top.local_times.iter().find(|e| e.name == "Ben").unwrap();
    assert!(ada.available && ben.available);
    let utc_minutes = top.start.hour() * 60 + top.start.minute();
    let expected_ada = {
        let local = utc_minutes as i32 - 4 * 60;
        format!("{:02}:{:02}", local / 60, local % 60)
    };
    assert_eq!(ada.time, expected_ada);
    assert_eq!(ben.time, format!("{:02}:{:02}", utc_minutes / 60, utc_minutes % 60));
}

#[test]
fn overnight_shift_shows_up_at_local_night_not_noon() {
    let mut scheduler = Scheduler::new();
    let context = ctx(
        vec![participant("Kei", "Asia/Tokyo", "22:00", "06:00")],
        SchedulerSettings::default(),
    );

    let grid = scheduler.day_grid(day(), &context);
    // Local 23:00 in Tokyo is 14:00 UTC, slot index 28.
    assert_eq!(grid[28].count, 1);
    // Local noon is 03:00 UTC, slot index 6.
    assert_eq!(grid[6].count, 0);
}

#[test]
fn empty_and_single_participant_inputs_degrade_to_empty_results() {
    let mut scheduler = Scheduler::new();

    let nobody = ctx(vec![], SchedulerSettings::default());
    assert!(scheduler.find_best_times(day(), &nobody).is_empty());
    assert_eq!(scheduler.compatibility_score(day(), &nobody), 0);
    assert!(scheduler.worst_pairs(day(), &nobody).is_empty());

    let loner = ctx(
        vec![participant("Ada", "Etc/UTC", "00:00", "23:59")],
        SchedulerSettings::default(),
    );
    assert_eq!(scheduler.compatibility_score(day(), &loner), 0);
    assert!(scheduler.worst_pairs(day(), &loner).is_empty());
}

#[test]
fn adding_a_covering_participant_never_lowers_a_suggestion_score() {
    let settings = SchedulerSettings {
        duration_minutes: 60,
        days: 1,
        max_suggestions: 1,
        ..SchedulerSettings::default()
    };

    let mut scheduler = Scheduler::new();
    let alone = ctx(
        vec![participant("Ada", "Etc/UTC", "09:00", "17:00")],
        settings.clone(),
    );
    let before = scheduler.find_best_times(day(), &alone);
    let top_before = &before[0];

    // Ben's window fully covers every candidate window of Ada's day.
    let mut scheduler = Scheduler::new();
    let joined = ctx(
        vec![
            participant("Ada", "Etc/UTC", "09:00", "17:00"),
            participant("Ben", "Etc/UTC", "00:00", "23:59"),
        ],
        settings,
    );
    let after = scheduler.find_best_times(day(), &joined);
    let same_start = after
        .iter()
        .find(|s| s.start == top_before.start)
        .expect("previous top start should still rank");

    assert!(same_start.score >= top_before.score);
}

#[test]
fn repeated_ranking_reuses_the_cached_grid() {
    let mut scheduler = Scheduler::new();
    let settings = SchedulerSettings {
        duration_minutes: 30,
        days: 1,
        max_suggestions: 5,
        ..SchedulerSettings::default()
    };
    let context = ctx(
        vec![participant("Ada", "Etc/UTC", "09:00", "17:00")],
        settings,
    );

    let first = scheduler.find_best_times(day(), &context);
    let second = scheduler.find_best_times(day(), &context);

    assert_eq!(first, second);
    assert_eq!(scheduler.cache_misses(), 1);
    assert_eq!(scheduler.cache_hits(), 1);
}

#[test]
fn participants_without_priority_field_count_as_required() {
    let json = r##"[
        {
            "id": "p1",
            "name": "Ada",
            "timezone": "Etc/UTC",
            "start": "09:00",
            "end": "17:00",
            "color": "#f00"
        },
        {
            "id": "p2",
            "name": "Ben",
            "timezone": "Etc/UTC",
            "start": "09:00",
            "end": "17:00",
            "color": "#0f0"
        }
    ]"##;
    let participants: Vec<Participant> = serde_json::from_str(json).unwrap();

    let mut scheduler = Scheduler::new();
    let settings = SchedulerSettings {
        duration_minutes: 30,
        days: 1,
        max_suggestions: 1,
        ..SchedulerSettings::default()
    };
    let context = ctx(participants, settings);
    let suggestions = scheduler.find_best_times(day(), &context);

    // Both absent priorities default to required: base 2 plus two bonuses.
    assert_eq!(suggestions[0].score, 2 + 2 * 2);
}

#[test]
fn twelve_hour_labels_render_am_pm() {
    let mut scheduler = Scheduler::new();
    let settings = SchedulerSettings {
        duration_minutes: 30,
        days: 1,
        max_suggestions: 1,
        time_format: TimeFormat::H12,
        ..SchedulerSettings::default()
    };
    let context = ctx(
        vec![participant("Ada", "America/New_York", "09:00", "17:00")],
        settings,
    );
    let suggestions = scheduler.find_best_times(day(), &context);
    // The earliest top-scoring window starts 13:00 UTC, 09:00 in New York.
    assert_eq!(
        suggestions[0].start,
        Utc.with_ymd_and_hms(2026, 3, 16, 13, 0, 0).unwrap()
    );
    assert_eq!(suggestions[0].local_times[0].time, "9:00 AM");
}
