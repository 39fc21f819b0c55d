use chrono::{Duration, NaiveDate};

use crm_core::{
    classify_score, classify_urgency, days_until, display_label, format_phone, resolve_config,
    lookup::{ActivityType, EntityType, FollowUpStatus, LeadPriority, LeadSource, LeadStage},
    Export, FollowUpDigest, LeadBoard, PhoneFormat, Temperature, Urgency,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
}

const EXPORT: &str = r#"{
  "follow_ups": [
    {"id": "f1", "lead_name": "Sharma & Sons", "activity_type": "call", "status": "pending", "follow_up_date": "2025-11-01"},
    {"id": "f2", "lead_name": "Patel Exports", "activity_type": "email", "status": "pending", "follow_up_date": "2025-11-03T18:30:00"},
    {"id": "f3", "lead_name": "Iyer Consulting", "activity_type": "meeting", "status": "rescheduled", "follow_up_date": "2025-11-06"},
    {"id": "f4", "lead_name": "Gupta Textiles", "activity_type": "fax", "status": "pending", "follow_up_date": "2025-11-07"},
    {"id": "f5", "lead_name": "Khan Logistics", "status": "completed", "follow_up_date": "2025-10-30"},
    {"id": "f6", "lead_name": "Rao Pharma", "status": "pending"}
  ],
  "leads": [
    {"id": "l1", "name": "Sharma & Sons", "score": 82, "stage": "negotiation", "priority": "high", "source": "referral", "entity_type": "partnership", "phone": "9876543210", "next_follow_up": "2025-11-01", "expected_value": 45000},
    {"id": "l2", "name": "Patel Exports", "score": 40, "stage": "qualified", "priority": "medium", "source": "website", "entity_type": "private_limited", "phone": "+91 98200 12345"},
    {"id": "l3", "name": "Khan Logistics", "score": 99, "stage": "won", "expected_value": 80000},
    {"id": "l4", "name": "Gupta Textiles", "score": 39, "stage": "legacy_stage", "priority": "p0", "source": "trade_fair", "phone": "12345"}
  ]
}"#;

#[test]
fn export_feeds_digest_and_board() {
    let export = Export::from_json(EXPORT).expect("export parses");
    let digest = FollowUpDigest::build(&export.follow_ups, &today());

    assert_eq!(digest.overdue.len(), 1);
    assert_eq!(digest.overdue[0].follow_up.id, "f1");
    assert_eq!(digest.due_today[0].follow_up.id, "f2");
    assert_eq!(digest.soon[0].follow_up.id, "f3");
    assert_eq!(digest.soon[0].days_until, 3);
    assert_eq!(digest.upcoming[0].follow_up.id, "f4");
    assert_eq!(digest.upcoming[0].days_until, 4);
    assert_eq!(digest.unscheduled[0].id, "f6");
    assert_eq!(digest.closed, 1);

    let stale = &digest.upcoming[0].follow_up;
    assert_eq!(stale.activity(), None);
    assert_eq!(
        display_label::<ActivityType>(stale.activity_type.as_deref().unwrap()),
        "fax"
    );

    let board = LeadBoard::build(&export.leads, &today());
    assert_eq!(board.closed, 1);
    let ids: Vec<&str> = board.active.iter().map(|e| e.lead.id.as_str()).collect();
    assert_eq!(ids, vec!["l1", "l2", "l4"]);
    assert_eq!(board.active[0].follow_up, Some(Urgency::Overdue));
    assert_eq!(board.active[1].temperature, Temperature::Warm);
    assert_eq!(board.active[2].temperature, Temperature::Cold);
    assert_eq!(board.pipeline_value, 45000.0);

    let phones: Vec<String> = export
        .leads
        .iter()
        .filter_map(|lead| lead.phone.as_deref())
        .map(|raw| format_phone(raw, &PhoneFormat::default()))
        .collect();
    assert_eq!(phones, vec!["98765 43210", "+91 98200 12345", "12345"]);
}

#[test]
fn urgency_partition_over_a_range_of_offsets() {
    let expected = [
        (-2, Urgency::Overdue),
        (-1, Urgency::Overdue),
        (0, Urgency::Today),
        (1, Urgency::Soon),
        (2, Urgency::Soon),
        (3, Urgency::Soon),
        (4, Urgency::Upcoming),
        (30, Urgency::Upcoming),
    ];
    for (offset, urgency) in expected {
        let target = today() + Duration::days(offset);
        assert_eq!(days_until(Some(target), &today()), Some(offset));
        assert_eq!(classify_urgency(Some(target), &today()), Some(urgency), "offset {offset}");
    }
    assert_eq!(classify_urgency(None::<NaiveDate>, &today()), None);
}

#[test]
fn score_bands_at_the_edges() {
    assert_eq!(classify_score(69), Temperature::Warm);
    assert_eq!(classify_score(70), Temperature::Hot);
    assert_eq!(classify_score(39), Temperature::Cold);
    assert_eq!(classify_score(40), Temperature::Warm);
}

#[test]
fn every_table_misses_gracefully() {
    let key = Some("not_a_real_key");
    assert!(resolve_config::<ActivityType>(key).is_none());
    assert!(resolve_config::<FollowUpStatus>(key).is_none());
    assert!(resolve_config::<EntityType>(key).is_none());
    assert!(resolve_config::<LeadStage>(key).is_none());
    assert!(resolve_config::<LeadPriority>(key).is_none());
    assert!(resolve_config::<LeadSource>(key).is_none());
}
