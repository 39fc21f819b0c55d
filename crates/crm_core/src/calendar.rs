use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::DateParseError;

/// Anything that can be reduced to a calendar day.
///
/// Time-of-day is discarded, so two instants on the same day compare equal.
/// Offset-bearing values are read on the local calendar; use
/// [`days_until_in`] to pin the zone.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.with_timezone(&Local).date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Whole calendar days from `now` until `target`. Negative when the target is
/// in the past, `None` when there is no target.
pub fn days_until<T, N>(target: Option<T>, now: &N) -> Option<i64>
where
    T: CalendarDay,
    N: CalendarDay + ?Sized,
{
    let target = target?.calendar_day();
    Some(target.signed_duration_since(now.calendar_day()).num_days())
}

/// [`days_until`] for instants, with both sides read on the calendar of
/// `zone` rather than the machine's.
pub fn days_until_in<T, N, Z>(
    target: Option<DateTime<T>>,
    now: &DateTime<N>,
    zone: &Z,
) -> Option<i64>
where
    T: TimeZone,
    N: TimeZone,
    Z: TimeZone,
{
    let target = target?.with_timezone(zone).date_naive();
    let now = now.with_timezone(zone).date_naive();
    Some(target.signed_duration_since(now).num_days())
}

pub fn days_until_today<T: CalendarDay>(target: Option<T>) -> Option<i64> {
    days_until(target, &today())
}

/// Like [`days_until`] for a raw API field. Absent, blank and unparsable
/// values all yield `None`.
pub fn days_until_raw<N>(raw: Option<&str>, now: &N) -> Option<i64>
where
    N: CalendarDay + ?Sized,
{
    let parsed = raw.and_then(|value| parse_temporal_target(value).ok());
    days_until(parsed, now)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an ISO-8601 value into a calendar day in the local zone.
pub fn parse_temporal_target(raw: &str) -> Result<NaiveDate, DateParseError> {
    parse_temporal_target_in(raw, &Local)
}

/// Parse an ISO-8601 value into a calendar day in `tz`.
///
/// Accepts `YYYY-MM-DD`, naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` (space separator
/// also allowed) and timestamps with an offset or `Z`, with or without
/// seconds. Only offset-bearing values are shifted into `tz`; naive values
/// already name a wall-clock day.
pub fn parse_temporal_target_in<Tz: TimeZone>(
    raw: &str,
    tz: &Tz,
) -> Result<NaiveDate, DateParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(tz).date_naive());
    }

    const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];
    let zulu = trimmed.strip_suffix('Z').map(|head| format!("{head}+00:00"));
    let with_offset = zulu.as_deref().unwrap_or(trimmed);
    if let Some(instant) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(with_offset, format).ok())
    {
        return Ok(instant.with_timezone(tz).date_naive());
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|datetime| datetime.date())
        .ok_or_else(|| DateParseError::Unrecognised(trimmed.to_string()))
}

/// Short human label for a day relative to `today`.
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = date.signed_duration_since(today).num_days();
    match diff {
        -1 => "Yesterday".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d if d < 0 => format!("{} days ago", -d),
        d => format!("In {} days", d),
    }
}
