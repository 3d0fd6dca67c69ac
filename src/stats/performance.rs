use serde::Serialize;

use crate::models::StatisticsSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    CurrentStreak,
    BestStreak,
    PerfectDays,
    SuccessRate,
    SuccessfulDays,
    HappyDays,
    HighEnergyDays,
    SatisfiedDays,
    MealQuality,
    CompleteDays,
    WeeklyStreak,
}

impl StatKind {
    pub fn label_key(&self) -> &'static str {
        match self {
            StatKind::CurrentStreak => "streak.current",
            StatKind::BestStreak => "streak.best",
            StatKind::PerfectDays => "streak.perfect_days",
            StatKind::SuccessRate => "streak.success_rate",
            StatKind::SuccessfulDays => "wellbeing.successful_days",
            StatKind::HappyDays => "wellbeing.happy_days",
            StatKind::HighEnergyDays => "wellbeing.high_energy_days",
            StatKind::SatisfiedDays => "wellbeing.satisfied_days",
            StatKind::MealQuality => "wellbeing.meal_quality",
            StatKind::CompleteDays => "wellbeing.complete_days",
            StatKind::WeeklyStreak => "wellbeing.weekly_streak",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            StatKind::SuccessRate | StatKind::MealQuality => "%",
            StatKind::WeeklyStreak => "weeks",
            _ => "days",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatKind::CurrentStreak => "flame",
            StatKind::BestStreak => "trophy",
            StatKind::PerfectDays => "star",
            StatKind::SuccessRate => "target",
            StatKind::SuccessfulDays => "check-circle",
            StatKind::HappyDays => "heart",
            StatKind::HighEnergyDays => "zap",
            StatKind::SatisfiedDays => "coffee",
            StatKind::MealQuality => "gem",
            StatKind::CompleteDays => "calendar",
            StatKind::WeeklyStreak => "activity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub kind: StatKind,
    pub value: i64,
}

impl StatCard {
    pub fn new(kind: StatKind, value: i64) -> Self {
        Self { kind, value }
    }
}

fn round_percent(value: f64) -> i64 {
    if value.is_finite() { value.round() as i64 } else { 0 }
}

/// The four "Streak & Performance" cards.
pub fn streak_cards(snapshot: &StatisticsSnapshot) -> Vec<StatCard> {
    vec![
        StatCard::new(StatKind::CurrentStreak, snapshot.current_streak),
        StatCard::new(StatKind::BestStreak, snapshot.best_streak),
        StatCard::new(StatKind::PerfectDays, snapshot.perfect_days),
        StatCard::new(StatKind::SuccessRate, round_percent(snapshot.average_completion)),
    ]
}

/// Mood and consistency counters that ride along in the payload.
pub fn wellbeing_cards(snapshot: &StatisticsSnapshot) -> Vec<StatCard> {
    vec![
        StatCard::new(StatKind::SuccessfulDays, snapshot.successful_days),
        StatCard::new(StatKind::HappyDays, snapshot.happy_days),
        StatCard::new(StatKind::HighEnergyDays, snapshot.high_energy_days),
        StatCard::new(StatKind::SatisfiedDays, snapshot.satisfied_days),
        StatCard::new(StatKind::MealQuality, round_percent(snapshot.average_meal_quality)),
        StatCard::new(StatKind::CompleteDays, snapshot.total_complete_days),
        StatCard::new(StatKind::WeeklyStreak, snapshot.weekly_streak),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_cards_round_success_rate() {
        let snapshot = StatisticsSnapshot {
            current_streak: 4,
            best_streak: 12,
            perfect_days: 2,
            average_completion: 87.6,
            ..Default::default()
        };
        let cards = streak_cards(&snapshot);
        let values: Vec<_> = cards.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![4, 12, 2, 88]);
        assert_eq!(cards[3].kind.unit(), "%");
        assert_eq!(cards[0].kind.unit(), "days");
    }

    #[test]
    fn wellbeing_survives_nan_quality() {
        let snapshot = StatisticsSnapshot {
            happy_days: 5,
            average_meal_quality: f64::NAN,
            ..Default::default()
        };
        let cards = wellbeing_cards(&snapshot);
        assert_eq!(cards[1].value, 5);
        assert_eq!(cards[4].value, 0);
    }
}
