//! Local-time window arithmetic.
//!
//! Availability windows are daily intervals in a participant's local
//! wall-clock time, expressed as minutes since local midnight. A window may
//! wrap past midnight (start later than end), e.g. 22:00 to 06:00 for an
//! overnight shift. Wrap handling lives here and nowhere else; every
//! component that tests slot membership goes through [`is_within_window`].

use crate::context::TimeFormat;
use crate::error::{Result, ScheduleError};

/// Minutes in one local day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a local `"HH:MM"` string into minutes since midnight.
///
/// Exactly two colon-separated integers are accepted, with the hour in
/// `[0, 23]` and the minute in `[0, 59]`.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidFormat`] for anything else, including
/// trailing seconds, out-of-range fields, and non-numeric input.
///
/// # Examples
///
/// ```
/// use overlap_engine::window::parse_local_time;
///
/// assert_eq!(parse_local_time("09:30").unwrap(), 570);
/// assert_eq!(parse_local_time("00:00").unwrap(), 0);
/// assert!(parse_local_time("24:00").is_err());
/// ```
pub fn parse_local_time(s: &str) -> Result<u32> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| ScheduleError::InvalidFormat(format!("'{s}': expected HH:MM")))?;
    let hour: u32 = h
        .parse()
        .map_err(|_| ScheduleError::InvalidFormat(format!("'{s}': hour is not a number")))?;
    let minute: u32 = m
        .parse()
        .map_err(|_| ScheduleError::InvalidFormat(format!("'{s}': minute is not a number")))?;
    if hour > 23 {
        return Err(ScheduleError::InvalidFormat(format!(
            "'{s}': hour out of range"
        )));
    }
    if minute > 59 {
        return Err(ScheduleError::InvalidFormat(format!(
            "'{s}': minute out of range"
        )));
    }
    Ok(hour * 60 + minute)
}

/// Test whether `minute` falls inside the `[start, end)` window.
///
/// Non-wrapping windows (`start <= end`) use plain half-open interval
/// membership. Wrapping windows (`start > end`) span midnight: the minute is
/// inside when it is at or after `start` or strictly before `end`.
///
/// # Examples
///
/// ```
/// use overlap_engine::window::is_within_window;
///
/// // 09:00 to 17:00
/// assert!(is_within_window(540, 540, 1020));
/// assert!(!is_within_window(1020, 540, 1020));
///
/// // 22:00 to 06:00, wrapping past midnight
/// assert!(is_within_window(1350, 1320, 360)); // 22:30
/// assert!(is_within_window(120, 1320, 360)); // 02:00
/// assert!(!is_within_window(420, 1320, 360)); // 07:00
/// ```
pub fn is_within_window(minute: u32, start: u32, end: u32) -> bool {
    if start <= end {
        start <= minute && minute < end
    } else {
        minute >= start || minute < end
    }
}

/// Render a minute-of-day as a wall-clock label in the requested style.
pub fn format_minute_of_day(minute: u32, format: TimeFormat) -> String {
    let minute = minute % MINUTES_PER_DAY;
    let (hour, min) = (minute / 60, minute % 60);
    match format {
        TimeFormat::H24 => format!("{hour:02}:{min:02}"),
        TimeFormat::H12 => {
            let period = if hour < 12 { "AM" } else { "PM" };
            let h12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{h12}:{min:02} {period}")
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
