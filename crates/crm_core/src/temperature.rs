use serde::{Deserialize, Serialize};

/// Lowest score that counts as a hot lead.
pub const HOT_THRESHOLD: i64 = 70;
/// Lowest score that counts as a warm lead.
pub const WARM_THRESHOLD: i64 = 40;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Hot,
    Warm,
    Cold,
}

impl Temperature {
    pub const ALL: [Temperature; 3] = [Temperature::Hot, Temperature::Warm, Temperature::Cold];

    pub fn as_str(self) -> &'static str {
        match self {
            Temperature::Hot => "hot",
            Temperature::Warm => "warm",
            Temperature::Cold => "cold",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Temperature::Hot => "Hot",
            Temperature::Warm => "Warm",
            Temperature::Cold => "Cold",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Temperature::Hot => "red",
            Temperature::Warm => "amber",
            Temperature::Cold => "blue",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Temperature::Hot => "flame",
            Temperature::Warm => "sun",
            Temperature::Cold => "snowflake",
        }
    }
}

/// Band a lead score. Scores outside 0..=100 are not rejected; they simply
/// fall into the nearest band.
pub fn classify_score(score: i64) -> Temperature {
    if score >= HOT_THRESHOLD {
        Temperature::Hot
    } else if score >= WARM_THRESHOLD {
        Temperature::Warm
    } else {
        Temperature::Cold
    }
}
