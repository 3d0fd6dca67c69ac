//! Pure derivations applied to a snapshot before it is displayed.
//! Nothing here performs I/O or depends on the terminal.

pub mod achievements;
pub mod level;
pub mod nutrition;
pub mod performance;

pub use achievements::{AchievementPartition, AchievementProgress, progress_ratio};
pub use level::{LevelProgress, XP_PER_LEVEL};
pub use nutrition::{NutrientCard, NutrientKind, capped_percent, fluids_to_cups, nutrition_cards};
pub use performance::{StatCard, StatKind, streak_cards, wellbeing_cards};
