use serde::{Deserialize, Serialize};

use super::Lookup;

/// Legal form of a client, as captured on onboarding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Individual,
    Huf,
    Proprietorship,
    Partnership,
    Llp,
    PrivateLimited,
    PublicLimited,
    Trust,
    Society,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub label: &'static str,
    pub abbreviation: &'static str,
    pub icon: &'static str,
    /// Whether the entity files as a company rather than a person or firm.
    pub corporate: bool,
}

impl Lookup for EntityType {
    type Record = EntityDescriptor;

    const ALL: &'static [Self] = &[
        EntityType::Individual,
        EntityType::Huf,
        EntityType::Proprietorship,
        EntityType::Partnership,
        EntityType::Llp,
        EntityType::PrivateLimited,
        EntityType::PublicLimited,
        EntityType::Trust,
        EntityType::Society,
    ];

    fn key(self) -> &'static str {
        match self {
            EntityType::Individual => "individual",
            EntityType::Huf => "huf",
            EntityType::Proprietorship => "proprietorship",
            EntityType::Partnership => "partnership",
            EntityType::Llp => "llp",
            EntityType::PrivateLimited => "private_limited",
            EntityType::PublicLimited => "public_limited",
            EntityType::Trust => "trust",
            EntityType::Society => "society",
        }
    }

    fn descriptor(self) -> &'static EntityDescriptor {
        match self {
            EntityType::Individual => &EntityDescriptor {
                label: "Individual",
                abbreviation: "IND",
                icon: "user",
                corporate: false,
            },
            EntityType::Huf => &EntityDescriptor {
                label: "Hindu Undivided Family",
                abbreviation: "HUF",
                icon: "home",
                corporate: false,
            },
            EntityType::Proprietorship => &EntityDescriptor {
                label: "Sole Proprietorship",
                abbreviation: "Prop.",
                icon: "store",
                corporate: false,
            },
            EntityType::Partnership => &EntityDescriptor {
                label: "Partnership Firm",
                abbreviation: "Firm",
                icon: "handshake",
                corporate: false,
            },
            EntityType::Llp => &EntityDescriptor {
                label: "Limited Liability Partnership",
                abbreviation: "LLP",
                icon: "briefcase",
                corporate: false,
            },
            EntityType::PrivateLimited => &EntityDescriptor {
                label: "Private Limited Company",
                abbreviation: "Pvt Ltd",
                icon: "building",
                corporate: true,
            },
            EntityType::PublicLimited => &EntityDescriptor {
                label: "Public Limited Company",
                abbreviation: "Ltd",
                icon: "building-2",
                corporate: true,
            },
            EntityType::Trust => &EntityDescriptor {
                label: "Trust",
                abbreviation: "Trust",
                icon: "landmark",
                corporate: false,
            },
            EntityType::Society => &EntityDescriptor {
                label: "Society",
                abbreviation: "Soc.",
                icon: "users",
                corporate: false,
            },
        }
    }
}
