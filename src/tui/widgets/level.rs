use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::ViewContext;
use crate::stats::{LevelProgress, XP_PER_LEVEL};
use crate::tui::icons::glyph;
use crate::utils::format::{percent_bar, thousands};

pub fn render(frame: &mut Frame, area: Rect, ctx: ViewContext, progress: &LevelProgress) {
    let theme = ctx.theme;
    let t = ctx.t;

    let block = Block::default()
        .title(Span::styled(format!(" {} ", t.t("section.progress")), theme.primary()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .style(theme.surface());

    let bar_width = (area.width.saturating_sub(6) as usize).min(40);

    let heading = Line::from(vec![
        Span::styled(format!("  {}  ", glyph("crown")), theme.primary()),
        Span::styled(
            format!("{} {}", t.t("level.level"), progress.level),
            theme.primary().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "   {} {}",
                thousands(progress.total_points),
                t.t("level.total_points")
            ),
            theme.dim(),
        ),
    ]);

    let xp_line = Line::from(vec![
        Span::styled(
            format!("  {} / {} XP", progress.xp_into_level, XP_PER_LEVEL),
            theme.dim(),
        ),
        Span::styled(
            format!(
                "   {} {} {}",
                progress.xp_to_next_level,
                t.t("level.xp_to"),
                progress.next_level
            ),
            theme.dim(),
        ),
    ]);

    let bar_line = Line::from(vec![
        Span::raw("  "),
        Span::styled(percent_bar(progress.percent(), bar_width), theme.primary()),
    ]);

    let paragraph = Paragraph::new(vec![heading, Line::from(""), xp_line, bar_line])
        .block(block)
        .alignment(ctx.alignment());
    frame.render_widget(paragraph, area);
}
