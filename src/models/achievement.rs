use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::nullable;

/// Achievement tier. Controls the display color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "COMMON",
            Rarity::Uncommon => "UNCOMMON",
            Rarity::Rare => "RARE",
            Rarity::Epic => "EPIC",
            Rarity::Legendary => "LEGENDARY",
        }
    }

    /// Unknown tiers fall back to `Common`.
    pub fn parse_or_common(s: &str) -> Rarity {
        Rarity::from_str(s).unwrap_or_default()
    }
}

impl FromStr for Rarity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "COMMON" => Ok(Rarity::Common),
            "UNCOMMON" => Ok(Rarity::Uncommon),
            "RARE" => Ok(Rarity::Rare),
            "EPIC" => Ok(Rarity::Epic),
            "LEGENDARY" => Ok(Rarity::Legendary),
            _ => Err(anyhow::anyhow!("Unknown rarity: {}", s)),
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub key: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub category: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub xp_reward: i64,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub rarity: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub progress: i64,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub max_progress: i64,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_date: Option<String>,
}

impl Achievement {
    pub fn rarity(&self) -> Rarity {
        Rarity::parse_or_common(&self.rarity)
    }

    /// The unlock date only matters once the achievement is unlocked.
    pub fn shown_unlock_date(&self) -> Option<&str> {
        if !self.unlocked {
            return None;
        }
        self.unlocked_date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_rarity_falls_back_to_common() {
        assert_eq!(Rarity::parse_or_common("MYTHIC"), Rarity::Common);
        assert_eq!(Rarity::parse_or_common(""), Rarity::Common);
        assert_eq!(Rarity::parse_or_common("epic"), Rarity::Epic);
    }

    #[test]
    fn decodes_camel_case_payload() {
        let json = r#"{
            "id": "a1",
            "key": "first_meal",
            "title": "First Bite",
            "description": "Log your first meal",
            "category": "MEALS",
            "xpReward": 25,
            "icon": "apple",
            "rarity": "RARE",
            "progress": 1,
            "maxProgress": 1,
            "unlocked": true,
            "unlockedDate": "2025-03-01T08:00:00.000Z"
        }"#;
        let a: Achievement = serde_json::from_str(json).unwrap();
        assert_eq!(a.xp_reward, 25);
        assert_eq!(a.max_progress, 1);
        assert_eq!(a.rarity(), Rarity::Rare);
        assert_eq!(a.shown_unlock_date(), Some("2025-03-01T08:00:00.000Z"));
    }

    #[test]
    fn locked_achievement_hides_unlock_date() {
        let a = Achievement {
            id: "x".into(),
            key: "x".into(),
            title: "X".into(),
            description: String::new(),
            category: String::new(),
            xp_reward: 0,
            icon: String::new(),
            rarity: String::new(),
            progress: 0,
            max_progress: 5,
            unlocked: false,
            unlocked_date: Some("2025-01-01".into()),
        };
        assert_eq!(a.shown_unlock_date(), None);
    }

    #[test]
    fn null_fields_fall_back() {
        let json = r#"{
            "id": "a2",
            "title": "Hydrated",
            "description": null,
            "icon": null,
            "rarity": null,
            "progress": null,
            "maxProgress": 8,
            "unlocked": null,
            "unlockedDate": null
        }"#;
        let a: Achievement = serde_json::from_str(json).unwrap();
        assert_eq!(a.progress, 0);
        assert_eq!(a.rarity(), Rarity::Common);
        assert!(!a.unlocked);
        assert!(a.icon.is_empty());
        assert_eq!(a.shown_unlock_date(), None);
    }
}
