use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::ViewContext;
use crate::models::Period;

pub fn render(frame: &mut Frame, area: Rect, ctx: ViewContext, selected: Period) {
    let theme = ctx.theme;

    let title_line = Line::from(vec![Span::styled(
        ctx.t.t("statistics.title"),
        theme.primary().add_modifier(Modifier::BOLD),
    )]);
    let subtitle_line = Line::from(Span::styled(ctx.t.t("statistics.subtitle"), theme.dim()));

    let mut tabs = Vec::new();
    for (i, period) in Period::all().iter().enumerate() {
        let label = format!(" {} {} ", i + 1, ctx.t.t(period.label_key()));
        let style = if *period == selected {
            Style::default()
                .fg(theme.bg)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.dim()
        };
        tabs.push(Span::styled(label, style));
        tabs.push(Span::raw("  "));
    }
    tabs.pop();

    let text = vec![title_line, subtitle_line, Line::from(""), Line::from(tabs)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.primary())
        .style(theme.base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
