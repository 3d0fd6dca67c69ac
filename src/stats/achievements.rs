use serde::Serialize;

use crate::models::{Achievement, StatisticsSnapshot};

/// `progress / max_progress * 100`; 0 when the ratio is undefined.
pub fn progress_ratio(progress: i64, max_progress: i64) -> f64 {
    if max_progress <= 0 {
        return 0.0;
    }
    let ratio = progress as f64 * 100.0 / max_progress as f64;
    if ratio.is_finite() { ratio } else { 0.0 }
}

/// The fill and the label deliberately clamp differently: the bar never
/// overflows, the label reports the true (rounded) ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementProgress {
    pub fill_percent: f64,
    pub label_percent: i64,
    pub count_label: String,
}

impl AchievementProgress {
    pub fn of(achievement: &Achievement) -> Self {
        let ratio = progress_ratio(achievement.progress, achievement.max_progress);
        Self {
            fill_percent: ratio.clamp(0.0, 100.0),
            label_percent: ratio.round() as i64,
            count_label: format!("{} / {}", achievement.progress, achievement.max_progress),
        }
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", self.label_percent)
    }
}

/// Unlocked and in-progress achievements, each in the backend's order.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementPartition<'a> {
    pub unlocked: Vec<&'a Achievement>,
    pub locked: Vec<&'a Achievement>,
}

impl<'a> AchievementPartition<'a> {
    pub fn new(achievements: &'a [Achievement]) -> Self {
        let (unlocked, locked) = achievements.iter().partition(|a| a.unlocked);
        Self { unlocked, locked }
    }

    pub fn from_snapshot(snapshot: &'a StatisticsSnapshot) -> Self {
        Self::new(&snapshot.achievements)
    }

    /// `(unlocked, total)` for the section header.
    pub fn tally(&self) -> (usize, usize) {
        (self.unlocked.len(), self.unlocked.len() + self.locked.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(id: &str, progress: i64, max_progress: i64, unlocked: bool) -> Achievement {
        Achievement {
            id: id.into(),
            key: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            category: "GENERAL".into(),
            xp_reward: 10,
            icon: "trophy".into(),
            rarity: "COMMON".into(),
            progress,
            max_progress,
            unlocked,
            unlocked_date: None,
        }
    }

    #[test]
    fn partial_progress() {
        let p = AchievementProgress::of(&achievement("a", 3, 10, false));
        assert_eq!(p.fill_percent, 30.0);
        assert_eq!(p.count_label, "3 / 10");
        assert_eq!(p.percent_label(), "30%");
    }

    #[test]
    fn overshoot_caps_fill_but_not_label() {
        let p = AchievementProgress::of(&achievement("a", 12, 10, true));
        assert_eq!(p.fill_percent, 100.0);
        assert_eq!(p.percent_label(), "120%");
    }

    #[test]
    fn zero_max_progress_is_zero_percent() {
        let p = AchievementProgress::of(&achievement("a", 5, 0, false));
        assert_eq!(p.fill_percent, 0.0);
        assert_eq!(p.label_percent, 0);
        assert!(!p.fill_percent.is_nan());
    }

    #[test]
    fn negative_progress_never_fills_below_zero() {
        let p = AchievementProgress::of(&achievement("a", -2, 10, false));
        assert_eq!(p.fill_percent, 0.0);
        assert_eq!(p.label_percent, -20);
    }

    #[test]
    fn partition_keeps_order_and_covers_everything() {
        let list = vec![
            achievement("a", 1, 1, true),
            achievement("b", 0, 5, false),
            achievement("c", 5, 5, true),
            achievement("d", 2, 5, false),
        ];
        let parts = AchievementPartition::new(&list);
        let unlocked: Vec<_> = parts.unlocked.iter().map(|a| a.id.as_str()).collect();
        let locked: Vec<_> = parts.locked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(unlocked, vec!["a", "c"]);
        assert_eq!(locked, vec!["b", "d"]);
        assert_eq!(parts.tally(), (2, 4));
    }
}
