use serde::Serialize;

use crate::config::NutritionTargets;
use crate::models::StatisticsSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientKind {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Water,
}

impl NutrientKind {
    /// Display order of the nutrition grid.
    pub fn all() -> [NutrientKind; 6] {
        [
            NutrientKind::Calories,
            NutrientKind::Protein,
            NutrientKind::Carbs,
            NutrientKind::Fat,
            NutrientKind::Fiber,
            NutrientKind::Water,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            NutrientKind::Calories => "nutrition.calories",
            NutrientKind::Protein => "nutrition.protein",
            NutrientKind::Carbs => "nutrition.carbs",
            NutrientKind::Fat => "nutrition.fat",
            NutrientKind::Fiber => "nutrition.fiber",
            NutrientKind::Water => "nutrition.water",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            NutrientKind::Calories => "kcal",
            NutrientKind::Water => "cups",
            _ => "g",
        }
    }

    /// Glyph table key, see `tui::icons`.
    pub fn icon(&self) -> &'static str {
        match self {
            NutrientKind::Calories => "flame",
            NutrientKind::Protein => "dumbbell",
            NutrientKind::Carbs | NutrientKind::Fiber => "wheat",
            NutrientKind::Fat | NutrientKind::Water => "droplets",
        }
    }

    pub fn target(&self, targets: &NutritionTargets) -> f64 {
        match self {
            NutrientKind::Calories => targets.calories,
            NutrientKind::Protein => targets.protein,
            NutrientKind::Carbs => targets.carbs,
            NutrientKind::Fat => targets.fat,
            NutrientKind::Fiber => targets.fiber,
            NutrientKind::Water => targets.water_cups,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientCard {
    pub kind: NutrientKind,
    /// Average in display units (water already converted to whole cups).
    pub value: f64,
    pub target: f64,
    /// Fill, always within `[0, 100]`.
    pub percent: f64,
}

impl NutrientCard {
    pub fn display_value(&self) -> i64 {
        self.value.round() as i64
    }

    pub fn display_percent(&self) -> i64 {
        self.percent.round() as i64
    }
}

/// `value / target` as a percentage, capped at 100 and never negative.
/// A zero target or a non-finite ratio reads as 0.
pub fn capped_percent(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    let percent = value * 100.0 / target;
    if !percent.is_finite() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

pub fn fluids_to_cups(milliliters: f64, ml_per_cup: f64) -> f64 {
    if ml_per_cup <= 0.0 || !milliliters.is_finite() {
        return 0.0;
    }
    (milliliters / ml_per_cup).round()
}

pub fn nutrition_cards(
    snapshot: &StatisticsSnapshot,
    targets: &NutritionTargets,
) -> Vec<NutrientCard> {
    NutrientKind::all()
        .into_iter()
        .map(|kind| {
            let value = match kind {
                NutrientKind::Calories => snapshot.average_calories,
                NutrientKind::Protein => snapshot.average_protein,
                NutrientKind::Carbs => snapshot.average_carbs,
                NutrientKind::Fat => snapshot.average_fats,
                NutrientKind::Fiber => snapshot.average_fiber,
                NutrientKind::Water => fluids_to_cups(snapshot.average_fluids, targets.ml_per_cup),
            };
            let target = kind.target(targets);
            NutrientCard {
                kind,
                value,
                target,
                percent: capped_percent(value, target),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_liters_is_eight_cups() {
        assert_eq!(fluids_to_cups(2000.0, 250.0), 8.0);
        assert_eq!(fluids_to_cups(1870.0, 250.0), 7.0);
        assert_eq!(fluids_to_cups(1875.0, 250.0), 8.0);
        assert_eq!(fluids_to_cups(500.0, 0.0), 0.0);
    }

    #[test]
    fn percent_stays_in_range() {
        assert_eq!(capped_percent(1000.0, 2000.0), 50.0);
        assert_eq!(capped_percent(9000.0, 2000.0), 100.0);
        assert_eq!(capped_percent(-50.0, 2000.0), 0.0);
        assert_eq!(capped_percent(10.0, 0.0), 0.0);
        assert_eq!(capped_percent(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn cards_follow_grid_order_and_targets() {
        let snapshot = StatisticsSnapshot {
            average_calories: 2500.0,
            average_protein: 60.0,
            average_carbs: 125.0,
            average_fats: 33.5,
            average_fiber: 30.0,
            average_fluids: 2000.0,
            ..Default::default()
        };
        let cards = nutrition_cards(&snapshot, &NutritionTargets::default());

        let kinds: Vec<_> = cards.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, NutrientKind::all().to_vec());

        assert_eq!(cards[0].percent, 100.0);
        assert_eq!(cards[1].percent, 50.0);
        assert_eq!(cards[2].percent, 50.0);
        assert_eq!(cards[3].display_percent(), 50);
        assert_eq!(cards[4].percent, 100.0);

        let water = &cards[5];
        assert_eq!(water.display_value(), 8);
        assert_eq!(water.target, 8.0);
        assert_eq!(water.percent, 100.0);
        assert_eq!(water.kind.unit(), "cups");
    }
}
