use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::ViewContext;
use crate::models::Achievement;
use crate::stats::{AchievementPartition, AchievementProgress};
use crate::tui::icons::glyph;
use crate::tui::theme::rarity_color;
use crate::utils::format::{format_unlock_date, percent_bar};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    ctx: ViewContext,
    partition: &AchievementPartition,
    scroll: u16,
) {
    let theme = ctx.theme;
    let (unlocked, total) = partition.tally();

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ({}/{}) ", ctx.t.t("section.achievements"), unlocked, total),
            theme.primary(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .style(theme.surface());

    let bar_width = (area.width.saturating_sub(8) as usize).min(48);
    let lines = lines(ctx, partition, bar_width);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(ctx.alignment())
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// All achievement lines, unlocked group first. Empty groups are skipped.
pub fn lines(
    ctx: ViewContext,
    partition: &AchievementPartition,
    bar_width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let groups = [
        ("achievements.unlocked", &partition.unlocked),
        ("achievements.in_progress", &partition.locked),
    ];
    for (key, group) in groups {
        if group.is_empty() {
            continue;
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ({})", ctx.t.t(key), group.len()),
            ctx.theme.dim().add_modifier(Modifier::BOLD),
        )));
        for achievement in group.iter() {
            lines.extend(card(ctx, achievement, bar_width));
        }
    }

    lines
}

fn card(ctx: ViewContext, achievement: &Achievement, bar_width: usize) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let color = rarity_color(achievement.rarity());
    let icon_style = if achievement.unlocked {
        theme.fg(color)
    } else {
        theme.fg(theme.icon)
    };
    let fill_style = if achievement.unlocked {
        theme.fg(color)
    } else {
        theme.fg(theme.faded(color))
    };
    let progress = AchievementProgress::of(achievement);

    let filled = percent_bar(progress.fill_percent, bar_width);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", glyph(&achievement.icon)), icon_style),
            Span::styled(achievement.title.clone(), theme.bold()),
            Span::styled(format!("   +{} XP ", achievement.xp_reward), theme.fg(color)),
            Span::styled(
                format!("[{}]", achievement.rarity),
                theme.fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("     {}", achievement.description),
            theme.dim(),
        )),
        Line::from(vec![
            Span::styled(format!("     {}", progress.count_label), theme.dim()),
            Span::styled(format!("  {}", progress.percent_label()), theme.fg(color)),
        ]),
        Line::from(vec![Span::raw("     "), Span::styled(filled, fill_style)]),
    ];

    if let Some(date) = achievement.shown_unlock_date() {
        lines.push(Line::from(vec![
            Span::styled(format!("     {} ", glyph("check-circle")), theme.fg(color)),
            Span::styled(format!("Unlocked {}", format_unlock_date(date)), theme.dim()),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translator;
    use crate::tui::theme::Theme;

    fn achievement(id: &str, unlocked: bool, date: Option<&str>) -> Achievement {
        Achievement {
            id: id.into(),
            key: id.into(),
            title: format!("Title {}", id),
            description: "desc".into(),
            category: "GENERAL".into(),
            xp_reward: 50,
            icon: "flame".into(),
            rarity: "EPIC".into(),
            progress: 12,
            max_progress: 10,
            unlocked,
            unlocked_date: date.map(String::from),
        }
    }

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn unlocked_card_shows_uncapped_percent_and_date() {
        let theme = Theme::dark();
        let t = Translator::default();
        let lines = card(
            ViewContext::new(&theme, &t),
            &achievement("a", true, Some("2025-03-01")),
            10,
        );
        let rendered = text(&lines);
        assert!(rendered.iter().any(|l| l.contains("12 / 10") && l.contains("120%")));
        assert!(rendered.iter().any(|l| l.contains("██████████")));
        assert!(rendered.iter().any(|l| l.contains("Unlocked Mar 01, 2025")));
    }

    #[test]
    fn missing_date_omits_unlock_line() {
        let theme = Theme::dark();
        let t = Translator::default();
        let lines = card(ViewContext::new(&theme, &t), &achievement("a", true, None), 10);
        assert!(!text(&lines).iter().any(|l| l.contains("Unlocked")));
    }

    #[test]
    fn empty_groups_have_no_heading() {
        let theme = Theme::dark();
        let t = Translator::default();
        let list = vec![achievement("a", false, None)];
        let partition = AchievementPartition::new(&list);
        let rendered = text(&lines(ViewContext::new(&theme, &t), &partition, 10));
        assert!(rendered.iter().any(|l| l.contains("In Progress (1)")));
        assert!(!rendered.iter().any(|l| l.contains("Unlocked (")));
    }
}
