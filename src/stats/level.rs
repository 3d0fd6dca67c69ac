use serde::Serialize;

use crate::models::StatisticsSnapshot;

/// Fixed leveling curve: every level costs the same amount of XP.
pub const XP_PER_LEVEL: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub level: i64,
    pub next_level: i64,
    /// XP earned inside the current level, in `[0, XP_PER_LEVEL)`.
    pub xp_into_level: i64,
    pub xp_to_next_level: i64,
    /// Lifetime counter, shown separately from the level bar.
    pub total_points: i64,
}

impl LevelProgress {
    pub fn from_snapshot(snapshot: &StatisticsSnapshot) -> Self {
        let xp_into_level = snapshot.current_xp.rem_euclid(XP_PER_LEVEL);
        Self {
            level: snapshot.level,
            next_level: snapshot.level + 1,
            xp_into_level,
            xp_to_next_level: XP_PER_LEVEL - xp_into_level,
            total_points: snapshot.total_points,
        }
    }

    /// Bar fill, 0-100. Equal to `xp_into_level` while a level costs 100 XP.
    pub fn percent(&self) -> f64 {
        self.xp_into_level as f64 * 100.0 / XP_PER_LEVEL as f64
    }
}
