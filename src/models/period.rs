use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Aggregation window the backend computes statistics over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    #[default]
    Week,
    Month,
}

impl Period {
    pub fn all() -> [Period; 3] {
        [Period::Today, Period::Week, Period::Month]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    /// Translation key for the period selector label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Period::Today => "statistics.today",
            Period::Week => "statistics.week",
            Period::Month => "statistics.month",
        }
    }

    pub fn next(&self) -> Period {
        match self {
            Period::Today => Period::Week,
            Period::Week => Period::Month,
            Period::Month => Period::Today,
        }
    }

    pub fn prev(&self) -> Period {
        match self {
            Period::Today => Period::Month,
            Period::Week => Period::Today,
            Period::Month => Period::Week,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" | "day" => Ok(Period::Today),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            _ => Err(anyhow::anyhow!(
                "Unknown period '{}'. Use: today, week, month",
                s
            )),
        }
    }
}
