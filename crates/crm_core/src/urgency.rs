use serde::{Deserialize, Serialize};

use chrono::{DateTime, TimeZone};

use crate::calendar::{days_until, days_until_in, CalendarDay};

/// Follow-ups due within this many days (and not today) are `Soon`.
pub const SOON_WINDOW_DAYS: i64 = 3;

/// How pressing a follow-up is relative to today. Variants are declared in
/// band order so sorting by urgency puts overdue work first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Overdue,
    Today,
    Soon,
    Upcoming,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::Overdue,
        Urgency::Today,
        Urgency::Soon,
        Urgency::Upcoming,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Overdue => "overdue",
            Urgency::Today => "today",
            Urgency::Soon => "soon",
            Urgency::Upcoming => "upcoming",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Overdue => "Overdue",
            Urgency::Today => "Due Today",
            Urgency::Soon => "Due Soon",
            Urgency::Upcoming => "Upcoming",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Urgency::Overdue => "red",
            Urgency::Today => "orange",
            Urgency::Soon => "yellow",
            Urgency::Upcoming => "green",
        }
    }
}

/// Map a day offset onto its band. First match wins.
pub fn classify_days(delta: i64) -> Urgency {
    if delta < 0 {
        Urgency::Overdue
    } else if delta == 0 {
        Urgency::Today
    } else if delta <= SOON_WINDOW_DAYS {
        Urgency::Soon
    } else {
        Urgency::Upcoming
    }
}

pub fn classify_urgency<T, N>(target: Option<T>, now: &N) -> Option<Urgency>
where
    T: CalendarDay,
    N: CalendarDay + ?Sized,
{
    days_until(target, now).map(classify_days)
}

/// [`classify_urgency`] with both instants read on the calendar of `zone`.
pub fn classify_urgency_in<T, N, Z>(
    target: Option<DateTime<T>>,
    now: &DateTime<N>,
    zone: &Z,
) -> Option<Urgency>
where
    T: TimeZone,
    N: TimeZone,
    Z: TimeZone,
{
    days_until_in(target, now, zone).map(classify_days)
}
