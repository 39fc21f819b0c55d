use serde::{Deserialize, Serialize};

use super::{Descriptor, Lookup};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Call,
    Email,
    Meeting,
    Whatsapp,
    Sms,
    SiteVisit,
    Note,
}

impl Lookup for ActivityType {
    type Record = Descriptor;

    const ALL: &'static [Self] = &[
        ActivityType::Call,
        ActivityType::Email,
        ActivityType::Meeting,
        ActivityType::Whatsapp,
        ActivityType::Sms,
        ActivityType::SiteVisit,
        ActivityType::Note,
    ];

    fn key(self) -> &'static str {
        match self {
            ActivityType::Call => "call",
            ActivityType::Email => "email",
            ActivityType::Meeting => "meeting",
            ActivityType::Whatsapp => "whatsapp",
            ActivityType::Sms => "sms",
            ActivityType::SiteVisit => "site_visit",
            ActivityType::Note => "note",
        }
    }

    fn descriptor(self) -> &'static Descriptor {
        match self {
            ActivityType::Call => &Descriptor {
                label: "Phone Call",
                color: "blue",
                icon: "phone",
            },
            ActivityType::Email => &Descriptor {
                label: "Email",
                color: "purple",
                icon: "mail",
            },
            ActivityType::Meeting => &Descriptor {
                label: "Meeting",
                color: "green",
                icon: "users",
            },
            ActivityType::Whatsapp => &Descriptor {
                label: "WhatsApp",
                color: "emerald",
                icon: "message-circle",
            },
            ActivityType::Sms => &Descriptor {
                label: "SMS",
                color: "cyan",
                icon: "message-square",
            },
            ActivityType::SiteVisit => &Descriptor {
                label: "Site Visit",
                color: "orange",
                icon: "map-pin",
            },
            ActivityType::Note => &Descriptor {
                label: "Note",
                color: "gray",
                icon: "file-text",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpStatus {
    Pending,
    Rescheduled,
    Completed,
    Cancelled,
}

impl FollowUpStatus {
    /// Pending and rescheduled follow-ups still need someone to act on them.
    pub fn is_open(self) -> bool {
        matches!(self, FollowUpStatus::Pending | FollowUpStatus::Rescheduled)
    }
}

impl Lookup for FollowUpStatus {
    type Record = Descriptor;

    const ALL: &'static [Self] = &[
        FollowUpStatus::Pending,
        FollowUpStatus::Rescheduled,
        FollowUpStatus::Completed,
        FollowUpStatus::Cancelled,
    ];

    fn key(self) -> &'static str {
        match self {
            FollowUpStatus::Pending => "pending",
            FollowUpStatus::Rescheduled => "rescheduled",
            FollowUpStatus::Completed => "completed",
            FollowUpStatus::Cancelled => "cancelled",
        }
    }

    fn descriptor(self) -> &'static Descriptor {
        match self {
            FollowUpStatus::Pending => &Descriptor {
                label: "Pending",
                color: "yellow",
                icon: "clock",
            },
            FollowUpStatus::Rescheduled => &Descriptor {
                label: "Rescheduled",
                color: "blue",
                icon: "calendar-clock",
            },
            FollowUpStatus::Completed => &Descriptor {
                label: "Completed",
                color: "green",
                icon: "check-circle",
            },
            FollowUpStatus::Cancelled => &Descriptor {
                label: "Cancelled",
                color: "gray",
                icon: "x-circle",
            },
        }
    }
}
