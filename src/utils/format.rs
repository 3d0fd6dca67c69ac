use chrono::{DateTime, NaiveDate};
use unicode_width::UnicodeWidthStr;

/// Fixed-width bar for a percentage. Input outside `[0, 100]` is clamped.
pub fn percent_bar(percent: f64, width: usize) -> String {
    let ratio = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// `1234567` -> `1,234,567`
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Format an unlock timestamp as "Mar 01, 2025".
/// Accepts RFC 3339 or a bare date; anything else is returned as given.
pub fn format_unlock_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %d, %Y").to_string();
    }
    let date_part = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%b %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Pad or truncate to an exact display width (wide glyphs count double).
pub fn fit_width(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current <= width {
        return format!("{}{}", s, " ".repeat(width - current));
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    format!("{}{}", out, " ".repeat(width.saturating_sub(used)))
}
