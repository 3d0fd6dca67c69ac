use serde::{Deserialize, Serialize};

use super::achievement::Achievement;
use super::nullable;

/// Pre-aggregated statistics for one period, as returned by the backend.
/// Immutable once received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsSnapshot {
    #[serde(deserialize_with = "nullable::or_default")]
    pub level: i64,
    /// Cumulative; not reset when a level is gained.
    #[serde(rename = "currentXP", deserialize_with = "nullable::or_default")]
    pub current_xp: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub total_points: i64,

    #[serde(deserialize_with = "nullable::or_default")]
    pub current_streak: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub best_streak: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub total_complete_days: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub perfect_days: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub weekly_streak: i64,

    #[serde(deserialize_with = "nullable::or_default")]
    pub average_calories: f64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub average_protein: f64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub average_carbs: f64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub average_fats: f64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub average_fiber: f64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub average_sugar: f64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub average_sodium: f64,
    /// Milliliters.
    #[serde(deserialize_with = "nullable::or_default")]
    pub average_fluids: f64,

    #[serde(deserialize_with = "nullable::or_default")]
    pub successful_days: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub happy_days: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub high_energy_days: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub satisfied_days: i64,

    #[serde(deserialize_with = "nullable::or_default")]
    pub average_completion: f64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub average_meal_quality: f64,

    #[serde(deserialize_with = "nullable::or_default")]
    pub achievements: Vec<Achievement>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub daily_breakdown: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_field_names() {
        let json = r#"{
            "level": 4,
            "currentXP": 345,
            "totalPoints": 1200,
            "currentStreak": 3,
            "bestStreak": 9,
            "averageFluids": 2000,
            "averageCalories": 1834.6,
            "dailyBreakdown": [{"date": "2025-03-01"}]
        }"#;
        let s: StatisticsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(s.level, 4);
        assert_eq!(s.current_xp, 345);
        assert_eq!(s.total_points, 1200);
        assert_eq!(s.average_fluids, 2000.0);
        assert_eq!(s.daily_breakdown.len(), 1);
        assert!(s.achievements.is_empty());
    }

    #[test]
    fn null_fields_decode_as_zero() {
        let json = r#"{
            "level": 1,
            "currentXP": null,
            "averageFluids": null,
            "averageCalories": null,
            "successfulDays": null,
            "achievements": null
        }"#;
        let s: StatisticsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(s.level, 1);
        assert_eq!(s.current_xp, 0);
        assert_eq!(s.average_fluids, 0.0);
        assert_eq!(s.average_calories, 0.0);
        assert_eq!(s.successful_days, 0);
        assert!(s.achievements.is_empty());
    }
}
