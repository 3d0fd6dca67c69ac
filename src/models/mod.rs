pub mod achievement;
mod nullable;
pub mod period;
pub mod stats;

pub use achievement::{Achievement, Rarity};
pub use period::Period;
pub use stats::StatisticsSnapshot;
