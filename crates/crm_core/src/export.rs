use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::{follow_up::FollowUp, lead::Lead};

/// A dump of backend records, deserialized once at the boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Export {
    #[serde(default)]
    pub follow_ups: Vec<FollowUp>,
    #[serde(default)]
    pub leads: Vec<Lead>,
}

impl Export {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_section_may_be_missing() {
        let only_leads = Export::from_json(r#"{"leads":[{"id":"1","name":"A","stage":"new"}]}"#)
            .unwrap();
        assert!(only_leads.follow_ups.is_empty());
        assert_eq!(only_leads.leads.len(), 1);

        let empty = Export::from_json("{}").unwrap();
        assert_eq!(empty, Export::default());
    }

    #[test]
    fn rejects_records_missing_required_fields() {
        let err = Export::from_json(r#"{"follow_ups":[{"id":"1"}]}"#).unwrap_err();
        assert!(err.to_string().contains("lead_name"));
    }
}
