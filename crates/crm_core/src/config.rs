use tracing::{info, warn};

use crate::format::{CurrencyFormat, Grouping, PhoneFormat};

pub const ENV_CURRENCY_SYMBOL: &str = "CRM_CURRENCY_SYMBOL";
pub const ENV_CURRENCY_GROUPING: &str = "CRM_CURRENCY_GROUPING";
pub const ENV_PHONE_COUNTRY_CODE: &str = "CRM_PHONE_COUNTRY_CODE";

/// Locale pairing used by the formatting helpers. Classification thresholds
/// are fixed constants and are not read from here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    pub currency: CurrencyFormat,
    pub phone: PhoneFormat,
}

impl DisplayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key/value source. Invalid values are reported
    /// and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            let symbol = symbol.trim();
            if !symbol.is_empty() {
                config.currency.symbol = symbol.to_string();
            }
        }

        if let Some(raw) = lookup(ENV_CURRENCY_GROUPING) {
            match raw.parse::<Grouping>() {
                Ok(grouping) => config.currency.grouping = grouping,
                Err(err) => warn!(%err, "ignoring currency grouping"),
            }
        }

        if let Some(raw) = lookup(ENV_PHONE_COUNTRY_CODE) {
            match PhoneFormat::new(&raw) {
                Ok(phone) => config.phone = phone,
                Err(err) => warn!(%err, "ignoring phone country code"),
            }
        }

        info!(
            symbol = %config.currency.symbol,
            grouping = ?config.currency.grouping,
            country_code = config.phone.country_code(),
            "display config resolved"
        );
        config
    }
}
