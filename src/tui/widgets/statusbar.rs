use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::ViewContext;

pub fn render(frame: &mut Frame, area: Rect, ctx: ViewContext, refreshing: bool) {
    let hints = [
        ("[1-3]", " period  "),
        ("[← →]", " cycle  "),
        ("[r]", " refresh  "),
        ("[↑ ↓]", " scroll  "),
        ("[q]", " quit"),
    ];

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, ctx.theme.primary()));
        spans.push(Span::styled(*label, ctx.theme.dim()));
    }
    if refreshing {
        spans.push(Span::styled(
            format!("  ⟳ {}", ctx.t.t("status.refreshing")),
            ctx.theme.primary(),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
