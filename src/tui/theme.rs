use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

use crate::models::Rarity;
use crate::stats::{NutrientKind, StatKind};

/// Palette handed to every widget. Nothing reads colors from global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_dim: Color,
    pub primary: Color,
    pub icon: Color,
    pub danger: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(18, 16, 14),
            surface: Color::Rgb(28, 25, 20),
            border: Color::Rgb(55, 48, 36),
            text: Color::Rgb(230, 218, 196),
            text_dim: Color::Rgb(130, 118, 96),
            primary: Color::Rgb(16, 185, 129),
            icon: Color::Rgb(110, 100, 84),
            danger: Color::Rgb(180, 82, 62),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(248, 250, 252),
            surface: Color::Rgb(255, 255, 255),
            border: Color::Rgb(226, 232, 240),
            text: Color::Rgb(15, 23, 42),
            text_dim: Color::Rgb(100, 116, 139),
            primary: Color::Rgb(5, 150, 105),
            icon: Color::Rgb(148, 163, 184),
            danger: Color::Rgb(220, 38, 38),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn bold(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn primary(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn danger(&self) -> Style {
        Style::default().fg(self.danger)
    }

    pub fn fg(&self, color: Color) -> Style {
        Style::default().fg(color)
    }

    /// `color` at ~40% opacity over the surface.
    pub fn faded(&self, color: Color) -> Color {
        blend(color, self.surface, 0.4)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::dark()),
            "light" => Ok(Theme::light()),
            _ => Err(anyhow::anyhow!("Unknown theme '{}'. Use: dark, light", s)),
        }
    }
}

pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Rgb(0xCD, 0x7F, 0x32),
        Rarity::Uncommon => Color::Rgb(0x16, 0xA0, 0x85),
        Rarity::Rare => Color::Rgb(0x34, 0x98, 0xDB),
        Rarity::Epic => Color::Rgb(0x9B, 0x59, 0xB6),
        Rarity::Legendary => Color::Rgb(0xF3, 0x9C, 0x12),
    }
}

pub fn nutrient_color(kind: NutrientKind) -> Color {
    match kind {
        NutrientKind::Calories => Color::Rgb(0xef, 0x44, 0x44),
        NutrientKind::Protein => Color::Rgb(0x3b, 0x82, 0xf6),
        NutrientKind::Carbs => Color::Rgb(0x10, 0xb9, 0x81),
        NutrientKind::Fat => Color::Rgb(0xf5, 0x9e, 0x0b),
        NutrientKind::Fiber => Color::Rgb(0x8b, 0x5c, 0xf6),
        NutrientKind::Water => Color::Rgb(0x06, 0xb6, 0xd4),
    }
}

pub fn stat_color(kind: StatKind) -> Color {
    match kind {
        StatKind::CurrentStreak => Color::Rgb(0xef, 0x44, 0x44),
        StatKind::BestStreak => Color::Rgb(0xf5, 0x9e, 0x0b),
        StatKind::PerfectDays | StatKind::MealQuality => Color::Rgb(0x8b, 0x5c, 0xf6),
        StatKind::SuccessRate | StatKind::SuccessfulDays => Color::Rgb(0x10, 0xb9, 0x81),
        StatKind::HappyDays => Color::Rgb(0xec, 0x48, 0x99),
        StatKind::HighEnergyDays => Color::Rgb(0xea, 0xb3, 0x08),
        StatKind::SatisfiedDays => Color::Rgb(0x06, 0xb6, 0xd4),
        StatKind::CompleteDays | StatKind::WeeklyStreak => Color::Rgb(0x3b, 0x82, 0xf6),
    }
}

fn blend(fg: Color, bg: Color, alpha: f64) -> Color {
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (f as f64 * alpha + b as f64 * (1.0 - alpha)).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => fg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_rarity_uses_bronze() {
        let fallback = rarity_color(Rarity::parse_or_common("SHINY"));
        assert_eq!(fallback, Color::Rgb(0xCD, 0x7F, 0x32));
    }

    #[test]
    fn faded_sits_between_color_and_surface() {
        let theme = Theme {
            surface: Color::Rgb(0, 0, 0),
            ..Theme::dark()
        };
        assert_eq!(theme.faded(Color::Rgb(200, 100, 50)), Color::Rgb(80, 40, 20));
        assert_eq!(theme.faded(Color::Red), Color::Red);
    }

    #[test]
    fn theme_names() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::light());
        assert!("neon".parse::<Theme>().is_err());
    }
}
