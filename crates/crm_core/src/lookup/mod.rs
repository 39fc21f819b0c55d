//! Static display metadata for the closed enums the backend sends as strings.
//!
//! Every table follows the same shape: a `Copy` enum whose variants map 1:1 to
//! a `'static` record through an exhaustive `match`, and a case-sensitive
//! string lookup that returns `None` for keys the enum does not know about
//! (for example values written before a schema change).

pub mod activity;
pub mod entity;
pub mod lead;

pub use activity::{ActivityType, FollowUpStatus};
pub use entity::{EntityDescriptor, EntityType};
pub use lead::{LeadPriority, LeadSource, LeadStage, PriorityDescriptor, StageDescriptor};

use serde::Serialize;

/// Label, color and icon shared by most tables.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Descriptor {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

pub trait Lookup: Copy + Eq + Sized + 'static {
    type Record: 'static;

    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Wire name of the variant as the backend spells it.
    fn key(self) -> &'static str;

    fn descriptor(self) -> &'static Self::Record;

    fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.key() == raw)
    }
}

/// Resolve a raw key to its record. Unknown, empty and absent keys yield
/// `None`.
pub fn resolve_config<L: Lookup>(key: Option<&str>) -> Option<&'static L::Record> {
    key.and_then(L::from_key).map(L::descriptor)
}

/// Label for a raw key, echoing the key itself when the table has no entry.
pub fn display_label<L>(raw: &str) -> String
where
    L: Lookup<Record = Descriptor>,
{
    resolve_config::<L>(Some(raw))
        .map(|record| record.label.to_string())
        .unwrap_or_else(|| raw.to_string())
}
