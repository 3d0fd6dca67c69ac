/// Achievement/card icon names as sent by the backend, mapped to glyphs.
const GLYPHS: &[(&str, &str)] = &[
    // water
    ("droplets", "💧"),
    ("waves", "🌊"),
    ("mountain-snow", "🏔"),
    // meals
    ("camera", "🎯"),
    ("apple", "🍎"),
    ("dumbbell", "💪"),
    ("wheat", "🌾"),
    // time of day
    ("sunrise", "🌅"),
    ("moon", "🌙"),
    ("calendar", "📅"),
    // progress
    ("bar-chart-3", "📊"),
    ("target", "🎯"),
    ("gem", "💎"),
    ("scale", "⚖"),
    // general
    ("trophy", "🏆"),
    ("star", "⭐"),
    ("flame", "🔥"),
    ("award", "🏅"),
    ("crown", "👑"),
    ("zap", "⚡"),
    ("heart", "❤"),
    ("check-circle", "✅"),
    ("clock", "⏰"),
    ("activity", "📈"),
    ("shield", "🛡"),
    ("coffee", "☕"),
];

pub const DEFAULT_GLYPH: &str = "🏆";

pub fn glyph(name: &str) -> &'static str {
    GLYPHS
        .iter()
        .find(|(k, _)| *k == name)
        .map(|(_, g)| *g)
        .unwrap_or(DEFAULT_GLYPH)
}
