use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use crate::{
    calendar::{self, CalendarDay},
    error::DateParseError,
    lookup::{ActivityType, FollowUpStatus, Lookup},
    urgency::{classify_days, Urgency},
};

/// A follow-up as the backend returns it. Enum-like fields stay as raw
/// strings so values the tables do not know about survive the round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowUp {
    pub id: String,
    pub lead_name: String,
    #[serde(default)]
    pub activity_type: Option<String>,
    pub status: String,
    #[serde(default)]
    pub follow_up_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FollowUp {
    pub fn status(&self) -> Option<FollowUpStatus> {
        FollowUpStatus::from_key(&self.status)
    }

    pub fn activity(&self) -> Option<ActivityType> {
        self.activity_type.as_deref().and_then(ActivityType::from_key)
    }

    /// Unknown statuses count as open so stale records stay visible.
    pub fn is_open(&self) -> bool {
        self.status().map_or(true, FollowUpStatus::is_open)
    }

    /// The scheduled day, `Ok(None)` when no date was set.
    pub fn target_date(&self) -> Result<Option<NaiveDate>, DateParseError> {
        self.follow_up_date
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(calendar::parse_temporal_target)
            .transpose()
    }

    pub fn days_until<N: CalendarDay + ?Sized>(&self, now: &N) -> Option<i64> {
        calendar::days_until(self.target_date().ok().flatten(), now)
    }

    pub fn urgency<N: CalendarDay + ?Sized>(&self, now: &N) -> Option<Urgency> {
        self.days_until(now).map(classify_days)
    }
}

/// A dated open follow-up. Entries are identified, and ordered, by
/// date, lead name and id.
#[derive(Debug, Clone, Serialize)]
pub struct DigestEntry {
    pub follow_up: FollowUp,
    pub date: NaiveDate,
    pub days_until: i64,
    pub urgency: Urgency,
}

impl PartialEq for DigestEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DigestEntry {}

impl PartialOrd for DigestEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DigestEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.follow_up.lead_name.cmp(&other.follow_up.lead_name))
            .then_with(|| self.follow_up.id.cmp(&other.follow_up.id))
    }
}

/// Open follow-ups grouped by urgency as of `today`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FollowUpDigest {
    pub today: NaiveDate,
    pub overdue: Vec<DigestEntry>,
    pub due_today: Vec<DigestEntry>,
    pub soon: Vec<DigestEntry>,
    pub upcoming: Vec<DigestEntry>,
    /// Open follow-ups with no usable date.
    pub unscheduled: Vec<FollowUp>,
    /// Completed or cancelled follow-ups that were skipped.
    pub closed: usize,
}

impl FollowUpDigest {
    pub fn build<N: CalendarDay + ?Sized>(items: &[FollowUp], now: &N) -> Self {
        let today = now.calendar_day();
        let mut digest = Self {
            today,
            overdue: Vec::new(),
            due_today: Vec::new(),
            soon: Vec::new(),
            upcoming: Vec::new(),
            unscheduled: Vec::new(),
            closed: 0,
        };

        for item in items {
            if !item.is_open() {
                digest.closed += 1;
                continue;
            }

            let date = match item.target_date() {
                Ok(Some(date)) => date,
                Ok(None) => {
                    digest.unscheduled.push(item.clone());
                    continue;
                }
                Err(err) => {
                    debug!(id = %item.id, %err, "follow-up date not understood");
                    digest.unscheduled.push(item.clone());
                    continue;
                }
            };

            let days_until = date.signed_duration_since(today).num_days();
            let urgency = classify_days(days_until);
            digest.bucket_mut(urgency).push(DigestEntry {
                follow_up: item.clone(),
                date,
                days_until,
                urgency,
            });
        }

        for urgency in Urgency::ALL {
            digest.bucket_mut(urgency).sort();
        }
        digest
            .unscheduled
            .sort_by(|a, b| a.lead_name.cmp(&b.lead_name).then_with(|| a.id.cmp(&b.id)));
        digest
    }

    pub fn bucket(&self, urgency: Urgency) -> &[DigestEntry] {
        match urgency {
            Urgency::Overdue => &self.overdue,
            Urgency::Today => &self.due_today,
            Urgency::Soon => &self.soon,
            Urgency::Upcoming => &self.upcoming,
        }
    }

    fn bucket_mut(&mut self, urgency: Urgency) -> &mut Vec<DigestEntry> {
        match urgency {
            Urgency::Overdue => &mut self.overdue,
            Urgency::Today => &mut self.due_today,
            Urgency::Soon => &mut self.soon,
            Urgency::Upcoming => &mut self.upcoming,
        }
    }

    /// Every dated open follow-up, most urgent first.
    pub fn entries(&self) -> impl Iterator<Item = &DigestEntry> {
        Urgency::ALL
            .into_iter()
            .flat_map(move |urgency| self.bucket(urgency).iter())
    }

    pub fn open_count(&self) -> usize {
        self.entries().count() + self.unscheduled.len()
    }

    /// Follow-ups that need attention today: overdue plus due today.
    pub fn needs_attention(&self) -> usize {
        self.overdue.len() + self.due_today.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follow_up(id: &str, lead: &str, status: &str, date: Option<&str>) -> FollowUp {
        FollowUp {
            id: id.to_string(),
            lead_name: lead.to_string(),
            activity_type: Some("call".to_string()),
            status: status.to_string(),
            follow_up_date: date.map(str::to_string),
            notes: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn entries_with_the_same_key_are_equal() {
        let mut noted = follow_up("7", "Asha", "pending", Some("2025-06-12"));
        noted.notes = Some("bring PAN copy".to_string());
        let plain = follow_up("7", "Asha", "rescheduled", Some("2025-06-12"));
        let entry = |item: FollowUp| DigestEntry {
            days_until: item.days_until(&today()).unwrap(),
            urgency: item.urgency(&today()).unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            follow_up: item,
        };
        let (a, b) = (entry(noted), entry(plain));
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);

        let other = entry(follow_up("8", "Asha", "pending", Some("2025-06-12")));
        assert_eq!(a.cmp(&other), Ordering::Less);
        assert_ne!(a, other);
    }

    #[test]
    fn follow_up_urgency_uses_calendar_days() {
        let item = follow_up("1", "Asha", "pending", Some("2025-06-13T23:00:00"));
        let now = today().and_hms_opt(8, 0, 0).unwrap();
        assert_eq!(item.days_until(&now), Some(3));
        assert_eq!(item.urgency(&now), Some(Urgency::Soon));

        let later = follow_up("2", "Asha", "pending", Some("2025-06-14"));
        assert_eq!(later.urgency(&now), Some(Urgency::Upcoming));
    }

    #[test]
    fn missing_or_garbled_dates_have_no_urgency() {
        assert_eq!(follow_up("1", "A", "pending", None).urgency(&today()), None);
        assert_eq!(follow_up("2", "B", "pending", Some("")).urgency(&today()), None);
        assert_eq!(follow_up("3", "C", "pending", Some("soon-ish")).urgency(&today()), None);
    }

    #[test]
    fn unknown_status_is_treated_as_open() {
        assert!(follow_up("1", "A", "on_hold", None).is_open());
        assert!(!follow_up("2", "B", "completed", None).is_open());
        assert!(follow_up("3", "C", "rescheduled", None).is_open());
    }

    #[test]
    fn digest_buckets_and_sorts_open_items() {
        let items = vec![
            follow_up("1", "Zoya", "pending", Some("2025-06-09")),
            follow_up("2", "Arun", "pending", Some("2025-06-01")),
            follow_up("3", "Meera", "rescheduled", Some("2025-06-10T17:45:00")),
            follow_up("4", "Kabir", "pending", Some("2025-06-13")),
            follow_up("5", "Dev", "pending", Some("2025-06-14")),
            follow_up("6", "Ira", "completed", Some("2025-06-10")),
            follow_up("7", "Farah", "cancelled", None),
            follow_up("8", "Neil", "pending", None),
            follow_up("9", "Bina", "pending", Some("tomorrow")),
        ];

        let digest = FollowUpDigest::build(&items, &today());

        fn ids(bucket: &[DigestEntry]) -> Vec<&str> {
            bucket.iter().map(|e| e.follow_up.id.as_str()).collect()
        }
        assert_eq!(ids(&digest.overdue), vec!["2", "1"]);
        assert_eq!(ids(&digest.due_today), vec!["3"]);
        assert_eq!(ids(&digest.soon), vec!["4"]);
        assert_eq!(ids(&digest.upcoming), vec!["5"]);
        let unscheduled: Vec<_> = digest.unscheduled.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(unscheduled, vec!["9", "8"]);
        assert_eq!(digest.closed, 2);
        assert_eq!(digest.open_count(), 7);
        assert_eq!(digest.needs_attention(), 3);
        assert_eq!(digest.overdue[0].days_until, -9);
    }

    #[test]
    fn entries_walk_buckets_most_urgent_first() {
        let items = vec![
            follow_up("a", "A", "pending", Some("2025-06-20")),
            follow_up("b", "B", "pending", Some("2025-06-05")),
            follow_up("c", "C", "pending", Some("2025-06-11")),
        ];
        let digest = FollowUpDigest::build(&items, &today());
        let order: Vec<Urgency> = digest.entries().map(|entry| entry.urgency).collect();
        assert_eq!(order, vec![Urgency::Overdue, Urgency::Soon, Urgency::Upcoming]);
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "id": "fu-17",
            "lead_name": "Ravi Traders",
            "activity_type": "site_visit",
            "status": "pending",
            "follow_up_date": "2025-06-12"
        }"#;
        let item: FollowUp = serde_json::from_str(json).unwrap();
        assert_eq!(item.activity(), Some(ActivityType::SiteVisit));
        assert_eq!(item.status(), Some(FollowUpStatus::Pending));
        assert!(item.notes.is_none());
        assert_eq!(item.urgency(&today()), Some(Urgency::Soon));
    }
}
