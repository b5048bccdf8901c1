//! Timezone projection via the bundled IANA database.
//!
//! Projects reference instants (always UTC) into participant wall-clock
//! time and computes display offsets. Unknown zone identifiers are reported
//! as [`ScheduleError::UnknownTimezone`]; there is no silent fallback.
//! Callers that must not fail pre-validate with [`is_known_timezone`].

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::context::TimeFormat;
use crate::error::{Result, ScheduleError};
use crate::window::format_minute_of_day;

/// A wall-clock reading in some zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalClock {
    pub hour: u32,
    pub minute: u32,
}

impl LocalClock {
    /// Minutes since local midnight.
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Display information about a zone at an instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneInfo {
    /// Signed offset from UTC in minutes.
    pub offset_minutes: i32,
    /// The offset formatted as `"+HH:MM"` / `"-HH:MM"`.
    pub offset_label: String,
    /// Whether daylight saving is in effect at the instant.
    pub dst_active: bool,
}

/// Parse an IANA timezone identifier.
pub(crate) fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| ScheduleError::UnknownTimezone(format!("'{s}'")))
}

/// True if `s` names a zone in the bundled IANA database.
pub fn is_known_timezone(s: &str) -> bool {
    s.parse::<Tz>().is_ok()
}

/// Project a UTC instant into a zone's wall clock.
///
/// # Errors
///
/// Returns [`ScheduleError::UnknownTimezone`] if the identifier is not in
/// the database.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use overlap_engine::projector::local_clock_at;
///
/// let instant = Utc.with_ymd_and_hms(2026, 3, 15, 14, 0, 0).unwrap();
/// // March 15 2026 is EDT (UTC-4), so 14:00 UTC = 10:00 local.
/// let clock = local_clock_at(instant, "America/New_York").unwrap();
/// assert_eq!((clock.hour, clock.minute), (10, 0));
/// ```
pub fn local_clock_at(instant: DateTime<Utc>, timezone: &str) -> Result<LocalClock> {
    let tz = parse_timezone(timezone)?;
    let local = instant.with_timezone(&tz);
    Ok(LocalClock {
        hour: local.hour(),
        minute: local.minute(),
    })
}

/// Signed UTC offset in minutes at a specific instant.
pub fn offset_minutes_at(instant: DateTime<Utc>, timezone: &str) -> Result<i32> {
    let tz = parse_timezone(timezone)?;
    Ok(instant.with_timezone(&tz).offset().fix().local_minus_utc() / 60)
}

/// Signed UTC offset in minutes right now.
///
/// DST-sensitive at the moment of the call; use [`offset_minutes_at`] when a
/// deterministic instant is required.
pub fn current_offset_minutes(timezone: &str) -> Result<i32> {
    offset_minutes_at(Utc::now(), timezone)
}

/// Wall-clock label for an instant in a zone, in the requested style.
pub fn local_label_at(instant: DateTime<Utc>, timezone: &str, format: TimeFormat) -> Result<String> {
    let clock = local_clock_at(instant, timezone)?;
    Ok(format_minute_of_day(clock.minute_of_day(), format))
}

/// Zone display information at a specific instant.
pub fn zone_info_at(instant: DateTime<Utc>, timezone: &str) -> Result<ZoneInfo> {
    let tz = parse_timezone(timezone)?;
    let offset_secs = instant.with_timezone(&tz).offset().fix().local_minus_utc();
    Ok(ZoneInfo {
        offset_minutes: offset_secs / 60,
        offset_label: format_offset_label(offset_secs),
        dst_active: is_dst_active(instant, &tz),
    })
}

/// Zone display information right now.
pub fn current_zone_info(timezone: &str) -> Result<ZoneInfo> {
    zone_info_at(Utc::now(), timezone)
}

/// Determine if DST is active for an instant in a timezone.
///
/// The standard offset is the smaller of the January and July offsets for
/// the instant's year (DST always advances the clock, in either hemisphere).
fn is_dst_active(instant: DateTime<Utc>, tz: &Tz) -> bool {
    let year = instant.year();
    let jan = Utc
        .with_ymd_and_hms(year, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or(instant);
    let jul = Utc
        .with_ymd_and_hms(year, 7, 1, 12, 0, 0)
        .single()
        .unwrap_or(instant);

    let offset_at = |dt: DateTime<Utc>| dt.with_timezone(tz).offset().fix().local_minus_utc();
    let standard = offset_at(jan).min(offset_at(jul));

    offset_at(instant) != standard
}

/// Format an offset in seconds as `"+HH:MM"` / `"-HH:MM"`.
fn format_offset_label(offset_secs: i32) -> String {
    let sign = if offset_secs >= 0 { "+" } else { "-" };
    let abs_secs = offset_secs.unsigned_abs();
    let hours = abs_secs / 3600;
    let minutes = (abs_secs % 3600) / 60;
    format!("{sign}{hours:02}:{minutes:02}")
}

// ── Tests ───────────────────────────────────────────────────────────────────
