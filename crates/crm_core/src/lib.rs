pub mod calendar;
pub mod config;
pub mod error;
pub mod export;
pub mod follow_up;
pub mod format;
pub mod lead;
pub mod lookup;
pub mod temperature;
pub mod urgency;

pub use crate::calendar::{
    days_until, days_until_in, days_until_raw, days_until_today, CalendarDay,
};
pub use crate::config::DisplayConfig;
pub use crate::export::Export;
pub use crate::follow_up::{FollowUp, FollowUpDigest};
pub use crate::format::{format_currency, format_phone, CurrencyFormat, PhoneFormat};
pub use crate::lead::{Lead, LeadBoard};
pub use crate::lookup::{display_label, resolve_config, Lookup};
pub use crate::temperature::{classify_score, Temperature};
pub use crate::urgency::{classify_urgency, classify_urgency_in, Urgency};
