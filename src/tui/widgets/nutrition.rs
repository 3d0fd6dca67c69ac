use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::ViewContext;
use crate::stats::NutrientCard;
use crate::tui::icons::glyph;
use crate::tui::theme::nutrient_color;
use crate::utils::format::{fit_width, percent_bar};

pub fn render(frame: &mut Frame, area: Rect, ctx: ViewContext, cards: &[NutrientCard]) {
    let theme = ctx.theme;

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", ctx.t.t("section.nutrition")),
            theme.primary(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .style(theme.surface());

    // glyph + label + value + percent take roughly 34 columns
    let bar_width = (area.width.saturating_sub(38) as usize).clamp(4, 16);

    let mut lines = vec![Line::from("")];
    for card in cards {
        let accent = theme.fg(nutrient_color(card.kind));
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", glyph(card.kind.icon())), accent),
            Span::styled(fit_width(ctx.t.t(card.kind.label_key()), 9), theme.dim()),
            Span::styled(
                format!("{:>6} {:<5}", card.display_value(), card.kind.unit()),
                theme.bold(),
            ),
            Span::styled(percent_bar(card.percent, bar_width), accent),
            Span::styled(format!(" {:>3}%", card.display_percent()), accent),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(ctx.alignment());
    frame.render_widget(paragraph, area);
}
