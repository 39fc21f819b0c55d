use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Shown in place of an amount that is missing or not a number.
pub const MISSING_AMOUNT: &str = "—";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    /// 12,34,56,789: a group of three, then groups of two.
    #[default]
    Indian,
    /// 123,456,789
    Western,
}

impl FromStr for Grouping {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indian" | "en-in" => Ok(Grouping::Indian),
            "western" | "en-us" => Ok(Grouping::Western),
            _ => Err(ConfigError::UnknownGrouping(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: Grouping,
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, grouping: Grouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    pub fn inr() -> Self {
        Self::new("₹", Grouping::Indian)
    }

    pub fn usd() -> Self {
        Self::new("$", Grouping::Western)
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::inr()
    }
}

/// Serialized as the bare country code; deserializing applies the same checks
/// as [`PhoneFormat::new`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneFormat {
    country_code: String,
}

impl PhoneFormat {
    pub fn new(country_code: &str) -> Result<Self, ConfigError> {
        let code = country_code.trim().trim_start_matches('+');
        if code.is_empty() || code.len() > 3 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidCountryCode(country_code.to_string()));
        }
        Ok(Self {
            country_code: code.to_string(),
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

impl TryFrom<String> for PhoneFormat {
    type Error = ConfigError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(&code)
    }
}

impl From<PhoneFormat> for String {
    fn from(format: PhoneFormat) -> Self {
        format.country_code
    }
}

impl Default for PhoneFormat {
    fn default() -> Self {
        Self {
            country_code: "91".to_string(),
        }
    }
}

/// Whole-unit currency string, e.g. `₹1,23,457` for `123456.7`.
///
/// Rounds half away from zero. Missing, NaN and infinite amounts render as
/// [`MISSING_AMOUNT`].
pub fn format_currency(amount: Option<f64>, format: &CurrencyFormat) -> String {
    let Some(amount) = amount.filter(|value| value.is_finite()) else {
        return MISSING_AMOUNT.to_string();
    };

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_digits(&digits, format.grouping);
    if rounded < 0.0 {
        format!("-{}{}", format.symbol, grouped)
    } else {
        format!("{}{}", format.symbol, grouped)
    }
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let width = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(width);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

/// Pretty-print a phone number.
///
/// Ten digits become `XXXXX XXXXX`; twelve digits led by the country code
/// become `+CC XXXXX XXXXX`. Anything else is returned exactly as given.
pub fn format_phone(raw: &str, format: &PhoneFormat) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let code = format.country_code();

    if digits.len() == 10 {
        return format!("{} {}", &digits[..5], &digits[5..]);
    }

    if digits.len() == code.len() + 10 && digits.starts_with(code) {
        let local = &digits[code.len()..];
        return format!("+{} {} {}", code, &local[..5], &local[5..]);
    }

    raw.to_string()
}
