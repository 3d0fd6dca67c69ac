pub mod settings;

pub use settings::{AppConfig, DisplayConfig, NutritionTargets, ServerConfig};
