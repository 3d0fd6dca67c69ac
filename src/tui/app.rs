use anyhow::Result;
use crossterm::event::{KeyCode, KeyEventKind};
use log::{info, warn};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;

use crate::api::StatisticsSource;
use crate::config::NutritionTargets;
use crate::i18n::Translator;
use crate::models::{Period, StatisticsSnapshot};
use crate::stats::{
    nutrition_cards, streak_cards, wellbeing_cards, AchievementPartition, LevelProgress,
};
use crate::tui::events::{Event, EventHandler};
use crate::tui::fetcher::{spawn_fetch, FetchOutcome, RequestTicket};
use crate::tui::theme::Theme;
use crate::tui::widgets::{achievements, header, level, nutrition, statusbar, streak, ViewContext};

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Loading,
    Loaded(StatisticsSnapshot),
    Errored(String),
}

pub struct App {
    pub period: Period,
    pub state: ScreenState,
    /// Dismissible alert shown over the error screen.
    pub alert: Option<String>,
    pub refreshing: bool,
    pub scroll: u16,
    pub should_quit: bool,

    theme: Theme,
    translator: Translator,
    targets: NutritionTargets,
    next_seq: u64,
    in_flight: Option<RequestTicket>,
}

impl App {
    pub fn new(
        period: Period,
        theme: Theme,
        translator: Translator,
        targets: NutritionTargets,
    ) -> Self {
        App {
            period,
            state: ScreenState::Loading,
            alert: None,
            refreshing: false,
            scroll: 0,
            should_quit: false,
            theme,
            translator,
            targets,
            next_seq: 0,
            in_flight: None,
        }
    }

    /// Enter `Loading` and issue a ticket for the current period.
    /// Any earlier ticket is superseded.
    pub fn begin_load(&mut self) -> RequestTicket {
        self.next_seq += 1;
        let ticket = RequestTicket {
            seq: self.next_seq,
            period: self.period,
        };
        self.in_flight = Some(ticket);
        self.state = ScreenState::Loading;
        self.alert = None;
        self.scroll = 0;
        ticket
    }

    pub fn refresh(&mut self) -> RequestTicket {
        self.refreshing = true;
        self.begin_load()
    }

    /// Switch period; a no-op when it is already selected.
    pub fn select_period(&mut self, period: Period) -> Option<RequestTicket> {
        if period == self.period {
            return None;
        }
        self.period = period;
        Some(self.begin_load())
    }

    /// Apply a finished fetch. Returns `false` when the outcome was stale.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if self.in_flight != Some(outcome.ticket) {
            warn!(
                "Discarding stale statistics response #{} ({}); current period is {}",
                outcome.ticket.seq, outcome.ticket.period, self.period
            );
            return false;
        }

        self.in_flight = None;
        self.refreshing = false;
        match outcome.result {
            Ok(snapshot) => {
                info!("Statistics loaded successfully");
                self.state = ScreenState::Loaded(snapshot);
            }
            Err(e) => {
                let message = e.message();
                warn!("Error loading statistics: {}", message);
                self.alert = Some(self.translator.t("statistics.error_alert").to_string());
                self.state = ScreenState::Errored(message);
            }
        }
        true
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> Option<RequestTicket> {
        // Only handle actual key presses — ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Any key closes the alert
        if self.alert.is_some() {
            self.alert = None;
            return None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('1') | KeyCode::Char('t') => self.select_period(Period::Today),
            KeyCode::Char('2') | KeyCode::Char('w') => self.select_period(Period::Week),
            KeyCode::Char('3') | KeyCode::Char('m') => self.select_period(Period::Month),
            KeyCode::Left => self.select_period(self.period.prev()),
            KeyCode::Right | KeyCode::Tab => self.select_period(self.period.next()),
            KeyCode::Char('r') => Some(self.refresh()),
            KeyCode::Enter if matches!(self.state, ScreenState::Errored(_)) => {
                Some(self.begin_load())
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                None
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                None
            }
            KeyCode::Home => {
                self.scroll = 0;
                None
            }
            _ => None,
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let ctx = ViewContext::new(&self.theme, &self.translator);

        frame.render_widget(Block::default().style(self.theme.base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // header + period selector
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], ctx, self.period);
        statusbar::render(frame, outer_chunks[2], ctx, self.refreshing);

        match &self.state {
            ScreenState::Loading => self.draw_loading(frame, outer_chunks[1]),
            ScreenState::Errored(message) => self.draw_error(frame, outer_chunks[1], message),
            ScreenState::Loaded(snapshot) => self.draw_loaded(frame, outer_chunks[1], snapshot),
        }

        if let Some(alert) = &self.alert {
            self.draw_alert(frame, alert);
        }
    }

    fn draw_loaded(&self, frame: &mut Frame, body: Rect, snapshot: &StatisticsSnapshot) {
        let ctx = ViewContext::new(&self.theme, &self.translator);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(body);

        // Left column: level + nutrition + streaks
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),  // level
                Constraint::Length(9),  // nutrition
                Constraint::Min(0),     // streak & wellbeing
            ])
            .split(columns[0]);

        let progress = LevelProgress::from_snapshot(snapshot);
        level::render(frame, left_chunks[0], ctx, &progress);

        let cards = nutrition_cards(snapshot, &self.targets);
        nutrition::render(frame, left_chunks[1], ctx, &cards);

        streak::render(
            frame,
            left_chunks[2],
            ctx,
            &streak_cards(snapshot),
            &wellbeing_cards(snapshot),
        );

        // Right column: achievements
        let partition = AchievementPartition::from_snapshot(snapshot);
        achievements::render(frame, columns[1], ctx, &partition, self.scroll);
    }

    fn draw_loading(&self, frame: &mut Frame, body: Rect) {
        let text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled("⏳", self.theme.primary())),
            Line::from(""),
            Line::from(Span::styled(
                self.translator.t("statistics.loading"),
                self.theme.dim(),
            )),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(self.theme.base());
        frame.render_widget(paragraph, body);
    }

    fn draw_error(&self, frame: &mut Frame, body: Rect, message: &str) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(message.to_string(), self.theme.bold())),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!(" {} ", self.translator.t("statistics.retry")),
                    ratatui::style::Style::default()
                        .fg(self.theme.bg)
                        .bg(self.theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  [Enter]", self.theme.dim()),
            ]),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(self.theme.base());
        frame.render_widget(paragraph, body);
    }

    fn draw_alert(&self, frame: &mut Frame, alert: &str) {
        let area = frame.area();

        // Short terminals push the popup up rather than past the last row.
        let height = area.height.min(7);
        let popup_area = Rect {
            x: area.x + area.width / 4,
            y: area.y + (area.height / 3).min(area.height - height),
            width: area.width / 2,
            height,
        }
        .intersection(area);

        frame.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!("  ✗ {}", alert), self.theme.danger())),
            Line::from(""),
            Line::from(Span::styled("  [any key] close", self.theme.dim())),
        ];

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.translator.t("statistics.error_title")),
                self.theme.danger(),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.danger())
            .style(self.theme.surface());

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(
    source: Arc<dyn StatisticsSource>,
    mut app: App,
    tick_rate_ms: u64,
) -> Result<()> {
    let events = EventHandler::new(tick_rate_ms);

    let ticket = app.begin_load();
    spawn_fetch(Arc::clone(&source), ticket, events.sender());

    let mut terminal = ratatui::init();

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            match events.next()? {
                Event::Key(key) => {
                    if let Some(ticket) = app.handle_key(key) {
                        spawn_fetch(Arc::clone(&source), ticket, events.sender());
                    }
                    if app.should_quit {
                        break;
                    }
                }
                Event::Fetched(outcome) => {
                    app.apply(outcome);
                }
                Event::Tick => {}
            }
        }
        Ok(())
    })();

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        App::new(
            Period::Week,
            Theme::dark(),
            Translator::default(),
            NutritionTargets::default(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ok(ticket: RequestTicket, level: i64) -> FetchOutcome {
        FetchOutcome {
            ticket,
            result: Ok(StatisticsSnapshot {
                level,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn starts_loading_and_loads() {
        let mut app = app();
        assert_eq!(app.state, ScreenState::Loading);
        let ticket = app.begin_load();
        assert!(app.apply(ok(ticket, 3)));
        assert!(matches!(app.state, ScreenState::Loaded(ref s) if s.level == 3));
    }

    #[test]
    fn failure_shows_message_and_alert() {
        let mut app = app();
        let ticket = app.begin_load();
        app.apply(FetchOutcome {
            ticket,
            result: Err(FetchError::Api("X".into())),
        });
        assert_eq!(app.state, ScreenState::Errored("X".into()));
        assert!(app.alert.is_some());

        // first key dismisses the alert, the retry issues a fresh load
        assert_eq!(app.handle_key(press(KeyCode::Enter)), None);
        assert!(app.alert.is_none());
        let retry = app.handle_key(press(KeyCode::Enter)).expect("retry ticket");
        assert_eq!(retry.period, Period::Week);
        assert_eq!(app.state, ScreenState::Loading);
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut app = app();
        let week = app.begin_load();
        let month = app.select_period(Period::Month).expect("period changed");

        // month answers first, then the slow week response arrives
        assert!(app.apply(ok(month, 9)));
        assert!(!app.apply(ok(week, 1)));
        assert!(matches!(app.state, ScreenState::Loaded(ref s) if s.level == 9));
    }

    #[test]
    fn reselecting_current_period_does_nothing() {
        let mut app = app();
        assert_eq!(app.handle_key(press(KeyCode::Char('2'))), None);
        let ticket = app.handle_key(press(KeyCode::Char('1'))).expect("switch to today");
        assert_eq!(ticket.period, Period::Today);
    }

    #[test]
    fn refresh_reenters_loading() {
        let mut app = app();
        let first = app.begin_load();
        app.apply(ok(first, 2));

        let ticket = app.handle_key(press(KeyCode::Char('r'))).expect("refresh ticket");
        assert!(app.refreshing);
        assert_eq!(app.state, ScreenState::Loading);
        assert!(ticket.seq > first.seq);

        app.apply(ok(ticket, 5));
        assert!(!app.refreshing);
    }

    #[test]
    fn arrows_cycle_periods() {
        let mut app = app();
        let t = app.handle_key(press(KeyCode::Right)).unwrap();
        assert_eq!(t.period, Period::Month);
        let t = app.handle_key(press(KeyCode::Right)).unwrap();
        assert_eq!(t.period, Period::Today);
        let t = app.handle_key(press(KeyCode::Left)).unwrap();
        assert_eq!(t.period, Period::Month);
    }

    fn errored() -> App {
        let mut app = app();
        let ticket = app.begin_load();
        app.apply(FetchOutcome {
            ticket,
            result: Err(FetchError::Network("connection refused".into())),
        });
        assert!(app.alert.is_some());
        app
    }

    #[test]
    fn error_alert_fits_short_terminals() {
        let app = errored();
        for (width, height) in [(80, 9), (80, 4), (10, 10), (120, 40)] {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal.draw(|frame| app.draw(frame)).unwrap();
        }
    }

    #[test]
    fn error_alert_is_visible_at_80x9() {
        let app = errored();
        let mut terminal = Terminal::new(TestBackend::new(80, 9)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Error"));
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
