use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{
    calendar::{self, CalendarDay},
    lookup::{EntityType, LeadPriority, LeadSource, LeadStage, Lookup},
    temperature::{classify_score, Temperature},
    urgency::{classify_days, Urgency},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub score: i64,
    pub stage: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub next_follow_up: Option<String>,
    #[serde(default)]
    pub expected_value: Option<f64>,
}

impl Lead {
    pub fn temperature(&self) -> Temperature {
        classify_score(self.score)
    }

    pub fn stage(&self) -> Option<LeadStage> {
        LeadStage::from_key(&self.stage)
    }

    pub fn priority(&self) -> Option<LeadPriority> {
        self.priority.as_deref().and_then(LeadPriority::from_key)
    }

    pub fn source(&self) -> Option<LeadSource> {
        self.source.as_deref().and_then(LeadSource::from_key)
    }

    pub fn entity(&self) -> Option<EntityType> {
        self.entity_type.as_deref().and_then(EntityType::from_key)
    }

    /// Leads in an unknown stage stay on the board.
    pub fn is_active(&self) -> bool {
        self.stage().map_or(true, |stage| !stage.is_closed())
    }

    pub fn next_follow_up_date(&self) -> Option<NaiveDate> {
        self.next_follow_up
            .as_deref()
            .and_then(|raw| calendar::parse_temporal_target(raw).ok())
    }

    pub fn next_follow_up_urgency<N: CalendarDay + ?Sized>(&self, now: &N) -> Option<Urgency> {
        calendar::days_until(self.next_follow_up_date(), now).map(classify_days)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BoardEntry {
    pub lead: Lead,
    pub temperature: Temperature,
    pub follow_up: Option<Urgency>,
}

impl BoardEntry {
    /// Hot before warm before cold, then higher score, then name.
    fn board_order(&self, other: &Self) -> Ordering {
        self.temperature
            .cmp(&other.temperature)
            .then_with(|| other.lead.score.cmp(&self.lead.score))
            .then_with(|| self.lead.name.cmp(&other.lead.name))
            .then_with(|| self.lead.id.cmp(&other.lead.id))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeadBoard {
    pub active: Vec<BoardEntry>,
    pub hot: usize,
    pub warm: usize,
    pub cold: usize,
    pub closed: usize,
    /// Sum of expected value across active leads that carry one.
    pub pipeline_value: f64,
}

impl LeadBoard {
    pub fn build<N: CalendarDay + ?Sized>(leads: &[Lead], now: &N) -> Self {
        let mut board = Self {
            active: Vec::new(),
            hot: 0,
            warm: 0,
            cold: 0,
            closed: 0,
            pipeline_value: 0.0,
        };

        for lead in leads {
            if !lead.is_active() {
                board.closed += 1;
                continue;
            }
            let temperature = lead.temperature();
            match temperature {
                Temperature::Hot => board.hot += 1,
                Temperature::Warm => board.warm += 1,
                Temperature::Cold => board.cold += 1,
            }
            if let Some(value) = lead.expected_value.filter(|v| v.is_finite()) {
                board.pipeline_value += value;
            }
            board.active.push(BoardEntry {
                lead: lead.clone(),
                temperature,
                follow_up: lead.next_follow_up_urgency(now),
            });
        }

        board.active.sort_by(BoardEntry::board_order);
        board
    }

    pub fn count(&self, temperature: Temperature) -> usize {
        match temperature {
            Temperature::Hot => self.hot,
            Temperature::Warm => self.warm,
            Temperature::Cold => self.cold,
        }
    }
}
