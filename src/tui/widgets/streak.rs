use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::ViewContext;
use crate::stats::StatCard;
use crate::tui::icons::glyph;
use crate::tui::theme::stat_color;
use crate::utils::format::fit_width;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    ctx: ViewContext,
    streaks: &[StatCard],
    wellbeing: &[StatCard],
) {
    let theme = ctx.theme;

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", ctx.t.t("section.streak")),
            theme.primary(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .style(theme.surface());

    let mut lines = vec![Line::from("")];
    for card in streaks {
        lines.push(card_line(ctx, card, true));
    }

    if !wellbeing.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", ctx.t.t("section.wellbeing")),
            theme.dim().add_modifier(Modifier::ITALIC),
        )));
        for card in wellbeing {
            lines.push(card_line(ctx, card, false));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(ctx.alignment());
    frame.render_widget(paragraph, area);
}

fn card_line(ctx: ViewContext, card: &StatCard, emphasized: bool) -> Line<'static> {
    let accent = ctx.theme.fg(stat_color(card.kind));
    let value_style = if emphasized {
        ctx.theme.bold()
    } else {
        ctx.theme.dim()
    };
    Line::from(vec![
        Span::styled(format!("  {} ", glyph(card.kind.icon())), accent),
        Span::styled(fit_width(ctx.t.t(card.kind.label_key()), 17), ctx.theme.dim()),
        Span::styled(format!("{:>5}", card.value), value_style),
        Span::styled(format!(" {}", card.kind.unit()), ctx.theme.dim()),
    ])
}
