use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::i18n::{Locale, Translator};
use crate::models::Period;

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_calories() -> f64 {
    2000.0
}
fn default_protein() -> f64 {
    120.0
}
fn default_carbs() -> f64 {
    250.0
}
fn default_fat() -> f64 {
    67.0
}
fn default_fiber() -> f64 {
    25.0
}
fn default_water_cups() -> f64 {
    8.0
}
fn default_ml_per_cup() -> f64 {
    250.0
}
fn default_locale() -> String {
    "en".to_string()
}
fn default_theme() -> String {
    "dark".to_string()
}
fn default_tick_rate_ms() -> u64 {
    250
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as `Authorization: Bearer <token>` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Daily targets the nutrition cards are measured against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    #[serde(default = "default_calories")]
    pub calories: f64,
    #[serde(default = "default_protein")]
    pub protein: f64,
    #[serde(default = "default_carbs")]
    pub carbs: f64,
    #[serde(default = "default_fat")]
    pub fat: f64,
    #[serde(default = "default_fiber")]
    pub fiber: f64,
    #[serde(default = "default_water_cups")]
    pub water_cups: f64,
    /// Fluids arrive in milliliters; this converts them to cups.
    #[serde(default = "default_ml_per_cup")]
    pub ml_per_cup: f64,
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self {
            calories: default_calories(),
            protein: default_protein(),
            carbs: default_carbs(),
            fat: default_fat(),
            fiber: default_fiber(),
            water_cups: default_water_cups(),
            ml_per_cup: default_ml_per_cup(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_period: Period,
    /// `en` or `he`
    #[serde(default = "default_locale")]
    pub locale: String,
    /// `dark` or `light`
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl DisplayConfig {
    /// Errors on an unsupported `locale`; the rest of the config stays usable.
    pub fn translator(&self) -> Result<Translator> {
        let locale: Locale = self
            .locale
            .parse()
            .context("Invalid display.locale in config")?;
        Ok(Translator::new(locale))
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_period: Period::default(),
            locale: default_locale(),
            theme: default_theme(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub targets: NutritionTargets,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "nutristats")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }
}
