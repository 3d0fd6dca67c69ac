use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    He,
}

impl Locale {
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::He)
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "he" | "iw" | "hebrew" => Ok(Locale::He),
            _ => Err(anyhow::anyhow!("Unsupported locale '{}'. Use: en, he", s)),
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("statistics.title", "Statistics"),
    ("statistics.subtitle", "Track your nutrition journey"),
    ("statistics.today", "Today"),
    ("statistics.week", "Week"),
    ("statistics.month", "Month"),
    ("statistics.loading", "Loading statistics..."),
    ("statistics.error_title", "Error"),
    ("statistics.error_alert", "Failed to load statistics. Please try again."),
    ("statistics.retry", "Retry"),
    ("section.progress", "Your Progress"),
    ("section.nutrition", "Nutrition Overview"),
    ("section.streak", "Streak & Performance"),
    ("section.wellbeing", "Wellbeing"),
    ("section.achievements", "Achievements"),
    ("achievements.unlocked", "Unlocked"),
    ("achievements.in_progress", "In Progress"),
    ("level.level", "Level"),
    ("level.total_points", "Total Points"),
    ("level.xp_to", "XP to Level"),
    ("nutrition.calories", "Calories"),
    ("nutrition.protein", "Protein"),
    ("nutrition.carbs", "Carbs"),
    ("nutrition.fat", "Fat"),
    ("nutrition.fiber", "Fiber"),
    ("nutrition.water", "Water"),
    ("streak.current", "Current Streak"),
    ("streak.best", "Best Streak"),
    ("streak.perfect_days", "Perfect Days"),
    ("streak.success_rate", "Success Rate"),
    ("wellbeing.successful_days", "Successful Days"),
    ("wellbeing.happy_days", "Happy Days"),
    ("wellbeing.high_energy_days", "High Energy Days"),
    ("wellbeing.satisfied_days", "Satisfied Days"),
    ("wellbeing.meal_quality", "Meal Quality"),
    ("wellbeing.complete_days", "Complete Days"),
    ("wellbeing.weekly_streak", "Weekly Streak"),
    ("status.refreshing", "refreshing"),
];

const HE: &[(&str, &str)] = &[
    ("statistics.title", "סטטיסטיקות"),
    ("statistics.subtitle", "עקוב אחר מסע התזונה שלך"),
    ("statistics.today", "היום"),
    ("statistics.week", "שבוע"),
    ("statistics.month", "חודש"),
    ("statistics.loading", "טוען סטטיסטיקות..."),
    ("statistics.error_title", "שגיאה"),
    ("statistics.retry", "נסה שוב"),
    ("section.progress", "ההתקדמות שלך"),
    ("section.nutrition", "סקירת תזונה"),
    ("section.streak", "רצף וביצועים"),
    ("section.achievements", "הישגים"),
    ("achievements.unlocked", "נפתחו"),
    ("achievements.in_progress", "בתהליך"),
    ("level.level", "רמה"),
    ("nutrition.calories", "קלוריות"),
    ("nutrition.protein", "חלבון"),
    ("nutrition.carbs", "פחמימות"),
    ("nutrition.fat", "שומן"),
    ("nutrition.fiber", "סיבים"),
    ("nutrition.water", "מים"),
    ("streak.current", "רצף נוכחי"),
    ("streak.best", "הרצף הטוב ביותר"),
];

/// Locale-keyed string lookup handed to every view.
///
/// Missing keys fall back to English, then to the key itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn is_rtl(&self) -> bool {
        self.locale.is_rtl()
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.locale {
            Locale::En => EN,
            Locale::He => HE,
        };
        let found: Option<&'a str> = lookup(table, key).or_else(|| lookup(EN, key));
        found.unwrap_or(key)
    }
}

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hebrew_falls_back_to_english() {
        let t = Translator::new(Locale::He);
        assert_eq!(t.t("statistics.loading"), "טוען סטטיסטיקות...");
        assert_eq!(t.t("wellbeing.happy_days"), "Happy Days");
        assert!(t.is_rtl());
    }

    #[test]
    fn unknown_key_returns_key() {
        let t = Translator::default();
        assert_eq!(t.t("nope.missing"), "nope.missing");
        assert!(!t.is_rtl());
    }

    #[test]
    fn locale_parsing() {
        assert_eq!("HE".parse::<Locale>().unwrap(), Locale::He);
        assert!("fr".parse::<Locale>().is_err());
    }
}
