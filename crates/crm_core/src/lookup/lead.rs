use serde::{Deserialize, Serialize};

use super::{Descriptor, Lookup};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LeadStage {
    New,
    Contacted,
    Qualified,
    ProposalSent,
    Negotiation,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StageDescriptor {
    pub label: &'static str,
    pub color: &'static str,
    /// Position in the pipeline, left to right.
    pub order: u8,
    pub closed: bool,
}

impl LeadStage {
    pub fn is_closed(self) -> bool {
        self.descriptor().closed
    }
}

impl Lookup for LeadStage {
    type Record = StageDescriptor;

    const ALL: &'static [Self] = &[
        LeadStage::New,
        LeadStage::Contacted,
        LeadStage::Qualified,
        LeadStage::ProposalSent,
        LeadStage::Negotiation,
        LeadStage::Won,
        LeadStage::Lost,
    ];

    fn key(self) -> &'static str {
        match self {
            LeadStage::New => "new",
            LeadStage::Contacted => "contacted",
            LeadStage::Qualified => "qualified",
            LeadStage::ProposalSent => "proposal_sent",
            LeadStage::Negotiation => "negotiation",
            LeadStage::Won => "won",
            LeadStage::Lost => "lost",
        }
    }

    fn descriptor(self) -> &'static StageDescriptor {
        match self {
            LeadStage::New => &StageDescriptor {
                label: "New",
                color: "slate",
                order: 0,
                closed: false,
            },
            LeadStage::Contacted => &StageDescriptor {
                label: "Contacted",
                color: "blue",
                order: 1,
                closed: false,
            },
            LeadStage::Qualified => &StageDescriptor {
                label: "Qualified",
                color: "indigo",
                order: 2,
                closed: false,
            },
            LeadStage::ProposalSent => &StageDescriptor {
                label: "Proposal Sent",
                color: "purple",
                order: 3,
                closed: false,
            },
            LeadStage::Negotiation => &StageDescriptor {
                label: "Negotiation",
                color: "amber",
                order: 4,
                closed: false,
            },
            LeadStage::Won => &StageDescriptor {
                label: "Won",
                color: "green",
                order: 5,
                closed: true,
            },
            LeadStage::Lost => &StageDescriptor {
                label: "Lost",
                color: "red",
                order: 6,
                closed: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LeadPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PriorityDescriptor {
    pub label: &'static str,
    pub color: &'static str,
    /// Higher is more important.
    pub rank: u8,
}

impl Lookup for LeadPriority {
    type Record = PriorityDescriptor;

    const ALL: &'static [Self] = &[
        LeadPriority::Low,
        LeadPriority::Medium,
        LeadPriority::High,
        LeadPriority::Urgent,
    ];

    fn key(self) -> &'static str {
        match self {
            LeadPriority::Low => "low",
            LeadPriority::Medium => "medium",
            LeadPriority::High => "high",
            LeadPriority::Urgent => "urgent",
        }
    }

    fn descriptor(self) -> &'static PriorityDescriptor {
        match self {
            LeadPriority::Low => &PriorityDescriptor {
                label: "Low",
                color: "gray",
                rank: 1,
            },
            LeadPriority::Medium => &PriorityDescriptor {
                label: "Medium",
                color: "blue",
                rank: 2,
            },
            LeadPriority::High => &PriorityDescriptor {
                label: "High",
                color: "orange",
                rank: 3,
            },
            LeadPriority::Urgent => &PriorityDescriptor {
                label: "Urgent",
                color: "red",
                rank: 4,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Website,
    Referral,
    WalkIn,
    SocialMedia,
    ColdCall,
    Advertisement,
    Partner,
    Other,
}

impl Lookup for LeadSource {
    type Record = Descriptor;

    const ALL: &'static [Self] = &[
        LeadSource::Website,
        LeadSource::Referral,
        LeadSource::WalkIn,
        LeadSource::SocialMedia,
        LeadSource::ColdCall,
        LeadSource::Advertisement,
        LeadSource::Partner,
        LeadSource::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            LeadSource::Website => "website",
            LeadSource::Referral => "referral",
            LeadSource::WalkIn => "walk_in",
            LeadSource::SocialMedia => "social_media",
            LeadSource::ColdCall => "cold_call",
            LeadSource::Advertisement => "advertisement",
            LeadSource::Partner => "partner",
            LeadSource::Other => "other",
        }
    }

    fn descriptor(self) -> &'static Descriptor {
        match self {
            LeadSource::Website => &Descriptor {
                label: "Website",
                color: "blue",
                icon: "globe",
            },
            LeadSource::Referral => &Descriptor {
                label: "Referral",
                color: "green",
                icon: "user-plus",
            },
            LeadSource::WalkIn => &Descriptor {
                label: "Walk-in",
                color: "teal",
                icon: "door-open",
            },
            LeadSource::SocialMedia => &Descriptor {
                label: "Social Media",
                color: "pink",
                icon: "share-2",
            },
            LeadSource::ColdCall => &Descriptor {
                label: "Cold Call",
                color: "slate",
                icon: "phone-outgoing",
            },
            LeadSource::Advertisement => &Descriptor {
                label: "Advertisement",
                color: "amber",
                icon: "megaphone",
            },
            LeadSource::Partner => &Descriptor {
                label: "Partner",
                color: "indigo",
                icon: "handshake",
            },
            LeadSource::Other => &Descriptor {
                label: "Other",
                color: "gray",
                icon: "circle",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_order_follows_declaration_order() {
        let orders: Vec<u8> = LeadStage::ALL
            .iter()
            .map(|stage| stage.descriptor().order)
            .collect();
        assert_eq!(orders, (0..LeadStage::ALL.len() as u8).collect::<Vec<_>>());
    }

    #[test]
    fn won_and_lost_close_the_lead() {
        assert!(LeadStage::Won.is_closed());
        assert!(LeadStage::Lost.is_closed());
        assert!(!LeadStage::Negotiation.is_closed());
    }

    #[test]
    fn priority_rank_increases_with_importance() {
        let ranks: Vec<u8> = LeadPriority::ALL
            .iter()
            .map(|priority| priority.descriptor().rank)
            .collect();
        assert!(ranks.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
