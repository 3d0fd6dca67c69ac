use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::io::{self, Write};

use crate::api::StatisticsSource;
use crate::config::{AppConfig, NutritionTargets};
use crate::i18n::Translator;
use crate::models::{Period, StatisticsSnapshot};
use crate::stats::{
    nutrition_cards, streak_cards, wellbeing_cards, AchievementPartition, AchievementProgress,
    LevelProgress, NutrientCard, StatCard, XP_PER_LEVEL,
};
use crate::utils::format::{fit_width, format_unlock_date, percent_bar, thousands};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! writeln_colored {
    ($out:expr, $color:expr, $($arg:tt)*) => {{
        write!($out, "{}", $color)?;
        write!($out, $($arg)*)?;
        writeln!($out, "\x1b[0m")?;
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const PRIMARY: &str = "\x1b[38;2;16;185;129m";

fn load(source: &dyn StatisticsSource, period: Period) -> Result<StatisticsSnapshot> {
    source.fetch(period).map_err(|e| anyhow!(e.message()))
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(
    source: &dyn StatisticsSource,
    config: &AppConfig,
    t: &Translator,
    period: Period,
) -> Result<()> {
    let snapshot = load(source, period)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &snapshot, &config.targets, t, period)?;
    Ok(())
}

pub fn write_report(
    out: &mut impl Write,
    snapshot: &StatisticsSnapshot,
    targets: &NutritionTargets,
    t: &Translator,
    period: Period,
) -> io::Result<()> {
    writeln!(out)?;
    writeln_colored!(
        out,
        PRIMARY,
        "  {} · {}",
        t.t("statistics.title"),
        t.t(period.label_key())
    );
    writeln!(out)?;

    // Level
    let progress = LevelProgress::from_snapshot(snapshot);
    writeln_colored!(out, BOLD, "  {}", t.t("section.progress"));
    writeln!(
        out,
        "  {} {}  ·  {} {}",
        t.t("level.level"),
        progress.level,
        thousands(progress.total_points),
        t.t("level.total_points")
    )?;
    writeln!(
        out,
        "  {}  {} / {} XP  ·  {} {} {}",
        percent_bar(progress.percent(), 20),
        progress.xp_into_level,
        XP_PER_LEVEL,
        progress.xp_to_next_level,
        t.t("level.xp_to"),
        progress.next_level
    )?;
    writeln!(out)?;

    // Nutrition
    writeln_colored!(out, BOLD, "  {}", t.t("section.nutrition"));
    for card in nutrition_cards(snapshot, targets) {
        write_nutrient(out, &card, t)?;
    }
    writeln!(out)?;

    // Streaks
    writeln_colored!(out, BOLD, "  {}", t.t("section.streak"));
    for card in streak_cards(snapshot) {
        write_stat(out, &card, t)?;
    }
    writeln_colored!(out, DIM, "  {}", t.t("section.wellbeing"));
    for card in wellbeing_cards(snapshot) {
        write_stat(out, &card, t)?;
    }
    writeln!(out)?;

    // Achievements
    let partition = AchievementPartition::from_snapshot(snapshot);
    let (unlocked, total) = partition.tally();
    writeln_colored!(
        out,
        BOLD,
        "  {} ({}/{})",
        t.t("section.achievements"),
        unlocked,
        total
    );
    let groups = [
        ("achievements.unlocked", &partition.unlocked),
        ("achievements.in_progress", &partition.locked),
    ];
    for (key, group) in groups {
        if group.is_empty() {
            continue;
        }
        writeln_colored!(out, DIM, "  {} ({})", t.t(key), group.len());
        for achievement in group.iter() {
            let p = AchievementProgress::of(achievement);
            let color = if achievement.unlocked { GREEN } else { AMBER };
            writeln_colored!(
                out,
                color,
                "    {} {}  +{} XP  [{}]",
                if achievement.unlocked { "●" } else { "○" },
                achievement.title,
                achievement.xp_reward,
                achievement.rarity
            );
            writeln!(
                out,
                "      {}  {}  {}",
                percent_bar(p.fill_percent, 16),
                p.count_label,
                p.percent_label()
            )?;
            if let Some(date) = achievement.shown_unlock_date() {
                writeln_colored!(out, DIM, "      Unlocked {}", format_unlock_date(date));
            }
        }
    }
    writeln!(out)?;
    Ok(())
}

fn write_nutrient(out: &mut impl Write, card: &NutrientCard, t: &Translator) -> io::Result<()> {
    writeln!(
        out,
        "  {} {:>6} {:<5} {} {:>3}%",
        fit_width(t.t(card.kind.label_key()), 10),
        card.display_value(),
        card.kind.unit(),
        percent_bar(card.percent, 12),
        card.display_percent()
    )
}

fn write_stat(out: &mut impl Write, card: &StatCard, t: &Translator) -> io::Result<()> {
    writeln!(
        out,
        "  {} {:>5} {}",
        fit_width(t.t(card.kind.label_key()), 18),
        card.value,
        card.kind.unit()
    )
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct AchievementSummary<'a> {
    id: &'a str,
    unlocked: bool,
    #[serde(flatten)]
    progress: AchievementProgress,
}

#[derive(Serialize)]
struct Derived<'a> {
    level: LevelProgress,
    nutrition: Vec<NutrientCard>,
    streaks: Vec<StatCard>,
    wellbeing: Vec<StatCard>,
    achievements_unlocked: usize,
    achievements_total: usize,
    achievements: Vec<AchievementSummary<'a>>,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    period: Period,
    snapshot: &'a StatisticsSnapshot,
    derived: Derived<'a>,
}

pub fn export_json(
    snapshot: &StatisticsSnapshot,
    targets: &NutritionTargets,
    period: Period,
) -> Result<String> {
    let partition = AchievementPartition::from_snapshot(snapshot);
    let (unlocked, total) = partition.tally();
    let document = ExportDocument {
        period,
        snapshot,
        derived: Derived {
            level: LevelProgress::from_snapshot(snapshot),
            nutrition: nutrition_cards(snapshot, targets),
            streaks: streak_cards(snapshot),
            wellbeing: wellbeing_cards(snapshot),
            achievements_unlocked: unlocked,
            achievements_total: total,
            achievements: snapshot
                .achievements
                .iter()
                .map(|a| AchievementSummary {
                    id: &a.id,
                    unlocked: a.unlocked,
                    progress: AchievementProgress::of(a),
                })
                .collect(),
        },
    };
    serde_json::to_string_pretty(&document).context("Serializing export")
}

pub fn handle_export(
    source: &dyn StatisticsSource,
    config: &AppConfig,
    period: Period,
) -> Result<()> {
    let snapshot = load(source, period)?;
    println!("{}", export_json(&snapshot, &config.targets, period)?);
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path()?;

    if init {
        if path.exists() {
            println!("  Config already exists at {:?}", path);
        } else {
            AppConfig::default().save()?;
            println!("  ✓ Wrote default config to {:?}", path);
        }
        return Ok(());
    }

    let mut shown = config.clone();
    if shown.server.auth_token.is_some() {
        shown.server.auth_token = Some("********".to_string());
    }

    println!();
    let mut out = io::stdout().lock();
    writeln_colored!(out, PRIMARY, "  {:?}", path);
    writeln!(out)?;
    write!(out, "{}", toml::to_string_pretty(&shown).context("Serializing config")?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Achievement;

    fn snapshot() -> StatisticsSnapshot {
        StatisticsSnapshot {
            level: 4,
            current_xp: 345,
            total_points: 12_500,
            average_fluids: 2000.0,
            average_calories: 1800.0,
            achievements: vec![
                Achievement {
                    id: "a1".into(),
                    key: "hydrated".into(),
                    title: "Hydrated".into(),
                    description: "Drink 8 cups".into(),
                    category: "WATER".into(),
                    xp_reward: 20,
                    icon: "droplets".into(),
                    rarity: "RARE".into(),
                    progress: 12,
                    max_progress: 10,
                    unlocked: true,
                    unlocked_date: Some("2025-03-01".into()),
                },
                Achievement {
                    id: "a2".into(),
                    key: "streak".into(),
                    title: "On Fire".into(),
                    description: "7 day streak".into(),
                    category: "STREAK".into(),
                    xp_reward: 50,
                    icon: "flame".into(),
                    rarity: "EPIC".into(),
                    progress: 3,
                    max_progress: 0,
                    unlocked: false,
                    unlocked_date: None,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn report_contains_every_section() {
        let mut buf = Vec::new();
        write_report(
            &mut buf,
            &snapshot(),
            &NutritionTargets::default(),
            &Translator::default(),
            Period::Week,
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Level 4"));
        assert!(text.contains("12,500 Total Points"));
        assert!(text.contains("45 / 100 XP"));
        assert!(text.contains("55 XP to Level 5"));
        assert!(text.contains("8 cups"));
        assert!(text.contains("Achievements (1/2)"));
        assert!(text.contains("12 / 10  120%"));
        assert!(text.contains("3 / 0  0%"));
        assert!(text.contains("Unlocked Mar 01, 2025"));
    }

    #[test]
    fn export_has_snapshot_and_derived_values() {
        let json = export_json(&snapshot(), &NutritionTargets::default(), Period::Month).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["period"], "month");
        assert_eq!(value["snapshot"]["currentXP"], 345);
        assert_eq!(value["derived"]["level"]["xp_to_next_level"], 55);
        assert_eq!(value["derived"]["achievements_unlocked"], 1);
        assert_eq!(value["derived"]["achievements"][0]["fill_percent"], 100.0);
        assert_eq!(value["derived"]["achievements"][0]["label_percent"], 120);
        assert_eq!(value["derived"]["nutrition"][5]["kind"], "water");
    }
}
