//! Ratatui-based terminal UI.
//!
//! Tabs switch between the four sections; the active [`ViewState`] is turned
//! into panels by the router on every frame, so forecast series are redrawn
//! with fresh values each time the screen refreshes.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Gauge, List, ListItem, ListState, Paragraph, Row, Table, Tabs, Wrap},
};

use crate::cli::picker::{discover_upload_files, pretty_path};
use crate::config::Settings;
use crate::data::RngSource;
use crate::data::series::HISTORY_LEN;
use crate::domain::{
    CostCategory, CostRecommendation, FlipCardSpec, Icon, Metric, NavSection, PredictionType,
    PredictiveDataPoint, RiskBadge, RiskMetric, RiskStatus,
};
use crate::error::AppError;
use crate::report::{fmt_change, fmt_currency, fmt_tick_date};
use crate::router::{Panel, ViewAction, ViewState, select_content};
use crate::upload::{FileSelectHandler, FileSelection, Toast, ToastQueue};

mod plotters_chart;

use plotters_chart::{ACTUAL_COLOR, ChartData, ForecastChart, PREDICTED_COLOR};

/// Start the TUI.
pub fn run(settings: Settings, section: NavSection) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(settings, section);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Modal file chooser standing in for the OS picker.
struct PickerOverlay {
    files: Vec<PathBuf>,
    cursor: usize,
}

struct ActiveToast {
    toast: Toast,
    shown_at: Instant,
}

impl ActiveToast {
    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.toast.duration
    }
}

struct App {
    state: ViewState,
    rng: RngSource<rand::rngs::StdRng>,
    option_cursor: usize,
    card_cursor: usize,
    flipped: [bool; 3],
    picker: Option<PickerOverlay>,
    uploads: FileSelectHandler<ToastQueue>,
    toasts: Vec<ActiveToast>,
    status: String,
}

impl App {
    fn new(settings: Settings, section: NavSection) -> Self {
        let uploads =
            FileSelectHandler::new(ToastQueue::default()).toast_duration(settings.toast_duration);
        Self {
            state: ViewState::default().set_active_section(section),
            rng: RngSource::from_seed_option(settings.seed),
            option_cursor: 0,
            card_cursor: 0,
            flipped: [false; 3],
            picker: None,
            uploads,
            toasts: Vec::new(),
            status: String::new(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                needs_redraw = self.expire_toasts(Instant::now());
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Drop expired toasts. Returns true when something changed on screen.
    fn expire_toasts(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.expired(now));
        before != self.toasts.len()
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.picker.is_some() {
            self.handle_picker_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Left => self.navigate(self.state.active_section.prev()),
            KeyCode::Right => self.navigate(self.state.active_section.next()),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = (c as usize) - ('1' as usize);
                self.navigate(NavSection::ALL[idx]);
            }
            KeyCode::Char('u') if self.state.active_section != NavSection::Dashboard => {
                self.open_picker();
            }
            _ if self.state.active_section == NavSection::Predictions => {
                self.handle_predictions_key(code);
            }
            _ => {}
        }

        false
    }

    fn navigate(&mut self, section: NavSection) {
        self.state = self.state.apply(ViewAction::Navigate(section));
        tracing::debug!(section = section.name(), "navigate");
    }

    fn handle_predictions_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                self.option_cursor = self.option_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.option_cursor + 1 < PredictionType::ALL.len() {
                    self.option_cursor += 1;
                }
            }
            KeyCode::Enter => {
                let option = PredictionType::ALL[self.option_cursor];
                self.state = self.state.apply(ViewAction::SelectPrediction(Some(option)));
                self.status = format!("prediction: {}", option.label());
                tracing::info!(prediction = option.label(), "prediction selected");
            }
            KeyCode::Tab if self.state.selected_prediction.is_some() => {
                self.card_cursor = (self.card_cursor + 1) % self.flipped.len();
            }
            KeyCode::Char('f') | KeyCode::Char(' ') if self.state.selected_prediction.is_some() => {
                self.flipped[self.card_cursor] = !self.flipped[self.card_cursor];
            }
            _ => {}
        }
    }

    fn open_picker(&mut self) {
        let files = discover_upload_files();
        if files.is_empty() {
            self.status = "No .csv, .xlsx or .json files found under the current directory.".to_string();
            return;
        }
        self.picker = Some(PickerOverlay { files, cursor: 0 });
    }

    fn handle_picker_key(&mut self, code: KeyCode) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };

        match code {
            KeyCode::Up => picker.cursor = picker.cursor.saturating_sub(1),
            KeyCode::Down => {
                if picker.cursor + 1 < picker.files.len() {
                    picker.cursor += 1;
                }
            }
            KeyCode::Enter => {
                let selection = picker.files.get(picker.cursor).map(FileSelection::from_path);
                self.picker = None;
                self.select_file(selection);
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.picker = None;
                self.select_file(None);
            }
            _ => {}
        }
    }

    fn select_file(&mut self, selection: Option<FileSelection>) {
        self.uploads.handle(selection);
        let shown_at = Instant::now();
        for toast in self.uploads.notifier_mut().drain() {
            self.toasts.push(ActiveToast { toast, shown_at });
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_tabs(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        if let Some(picker) = &self.picker {
            draw_picker(frame, size, picker);
        }
        self.draw_toasts(frame, size);
    }

    fn draw_tabs(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let titles: Vec<Line> = NavSection::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| Line::from(format!("{} {}", i + 1, s.label())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.state.active_section.index())
            .block(Block::default().title("AI Business Insights").borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, area);
    }

    fn draw_body(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let content = select_content(&self.state, Utc::now(), &mut self.rng);
        if content.is_empty() {
            return;
        }

        let constraints: Vec<Constraint> = content.panels().iter().map(panel_constraint).collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (panel, rect) in content.panels().iter().zip(chunks.iter()) {
            match panel {
                Panel::MetricCards(metrics) => draw_metrics(frame, *rect, metrics),
                Panel::ForecastChart(points) => draw_chart(frame, *rect, points),
                Panel::RiskAnalysis(risks) => draw_risks(frame, *rect, risks),
                Panel::Profitability {
                    categories,
                    recommendations,
                } => draw_profitability(frame, *rect, categories, recommendations),
                Panel::FileUpload => draw_upload(frame, *rect),
                Panel::PredictionOptions { selected } => {
                    self.draw_options(frame, *rect, *selected);
                }
                Panel::FlipCards(cards) => self.draw_cards(frame, *rect, cards),
            }
        }
    }

    fn draw_options(&self, frame: &mut ratatui::Frame<'_>, area: Rect, selected: Option<PredictionType>) {
        let items: Vec<ListItem> = PredictionType::ALL
            .iter()
            .map(|&option| {
                let marker = if selected == Some(option) { "●" } else { "○" };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{marker} ")),
                    Span::styled(option.label(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", option.description()), Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Prediction Options").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.option_cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_cards(&self, frame: &mut ratatui::Frame<'_>, area: Rect, cards: &[FlipCardSpec]) {
        let constraints = vec![Constraint::Ratio(1, cards.len().max(1) as u32); cards.len()];
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (i, (card, rect)) in cards.iter().zip(chunks.iter()).enumerate() {
            let focused = i == self.card_cursor;
            let flipped = self.flipped.get(i).copied().unwrap_or(false);
            draw_flip_card(frame, *rect, card, focused, flipped);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = match self.state.active_section {
            NavSection::Dashboard => "←/→ or 1-4 section  q quit",
            NavSection::Predictions => "←/→ section  ↑/↓ Enter choose  Tab/f flip card  u upload  q quit",
            NavSection::Analytics | NavSection::Settings => "←/→ or 1-4 section  u upload  q quit",
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_toasts(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        for (i, active) in self.toasts.iter().enumerate() {
            let text = format!("{} {}", active.toast.icon, active.toast.message);
            let width = (text.chars().count() as u16 + 4).min(area.width);
            let rect = Rect {
                x: area.x + area.width.saturating_sub(width + 1),
                y: area.y + 1 + (i as u16) * 3,
                width,
                height: 3,
            };
            if rect.y + rect.height > area.y + area.height {
                break;
            }
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(Color::Green))
                    .block(Block::default().borders(Borders::ALL)),
                rect,
            );
        }
    }
}

fn panel_constraint(panel: &Panel) -> Constraint {
    match panel {
        Panel::MetricCards(_) => Constraint::Length(5),
        Panel::ForecastChart(_) => Constraint::Min(12),
        Panel::RiskAnalysis(risks) => Constraint::Length(risks.len() as u16 + 2),
        Panel::Profitability { categories, .. } => Constraint::Length(categories.len() as u16 + 4),
        Panel::FileUpload => Constraint::Length(4),
        Panel::PredictionOptions { .. } => Constraint::Length(PredictionType::ALL.len() as u16 + 2),
        Panel::FlipCards(_) => Constraint::Length(9),
    }
}

fn metric_style(metric: &Metric) -> Style {
    if metric.is_positive() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}

fn draw_metrics(frame: &mut ratatui::Frame<'_>, area: Rect, metrics: &[Metric]) {
    let constraints = vec![Constraint::Ratio(1, metrics.len().max(1) as u32); metrics.len()];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (metric, rect) in metrics.iter().zip(chunks.iter()) {
        let arrow = if metric.is_positive() { "▲" } else { "▼" };
        let lines = vec![
            Line::from(Span::styled(
                metric.value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{arrow} {}", fmt_change(metric.change)),
                metric_style(metric),
            )),
        ];
        let p = Paragraph::new(Text::from(lines)).block(
            Block::default()
                .title(format!("{} {}", metric.icon.glyph(), metric.title))
                .borders(Borders::ALL),
        );
        frame.render_widget(p, *rect);
    }
}

fn draw_chart(frame: &mut ratatui::Frame<'_>, area: Rect, points: &[PredictiveDataPoint]) {
    let title = Line::from(vec![
        Span::raw("Revenue Forecast  "),
        Span::styled("━ Actual Revenue", Style::default().fg(ACTUAL_COLOR)),
        Span::raw("  "),
        Span::styled("━ Predicted Revenue", Style::default().fg(PREDICTED_COLOR)),
    ]);
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Clear, inner);

    let Some(first) = points.first() else {
        frame.render_widget(
            Paragraph::new("No data.").style(Style::default().fg(Color::Yellow)),
            inner,
        );
        return;
    };

    let data = ChartData::from_points(points);
    let widget = ForecastChart {
        actual: &data.actual,
        predicted: &data.predicted,
        start: first.date,
        x_bounds: data.x_bounds,
        y_bounds: data.y_bounds,
    };
    frame.render_widget(widget, inner);

    // Marks the boundary between observed history and forecast.
    if let Some(boundary) = points.get(HISTORY_LEN).filter(|_| !inner.is_empty()) {
        let label = format!("forecast from {}", fmt_tick_date(boundary.date));
        let width = (label.len() as u16).min(inner.width);
        frame.render_widget(
            Paragraph::new(label)
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::Gray)),
            Rect {
                x: inner.x + inner.width.saturating_sub(width),
                y: inner.y,
                width,
                height: 1,
            },
        );
    }
}

fn risk_color(status: RiskStatus) -> Color {
    match status {
        RiskStatus::High => Color::Red,
        RiskStatus::Medium => Color::Yellow,
        RiskStatus::Low => Color::Green,
    }
}

fn draw_risks(frame: &mut ratatui::Frame<'_>, area: Rect, risks: &[RiskMetric]) {
    let block = Block::default().title("Risk Analysis").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); risks.len()])
        .split(inner);

    for (risk, rect) in risks.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(risk_color(risk.status)))
            .percent(u16::from(risk.value.min(100)))
            .label(format!("{} {}%", risk.category, risk.value));
        frame.render_widget(gauge, *rect);
    }
}

fn draw_profitability(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    categories: &[CostCategory],
    recommendations: &[CostRecommendation],
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let header = Row::new(vec!["Category", "Current", "Previous", "Change", "Reduction", "Projected", "Eff."])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = categories
        .iter()
        .map(|c| {
            let change = c.change_pct();
            // Falling costs are good news.
            let change_style = if change <= 0.0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                Cell::from(c.name),
                Cell::from(fmt_currency(c.current_cost)),
                Cell::from(fmt_currency(c.previous_cost)),
                Cell::from(fmt_change(change)).style(change_style),
                Cell::from(fmt_currency(c.predicted_reduction)),
                Cell::from(fmt_currency(c.projected_cost())),
                Cell::from(format!("{:.0}%", c.efficiency)),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(5),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Profitability Optimization").borders(Borders::ALL));
    frame.render_widget(table, chunks[0]);

    let mut lines = Vec::new();
    for r in recommendations {
        lines.push(Line::from(vec![
            Span::styled(r.category, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" [{}] ", r.impact.label())),
            Span::styled(fmt_currency(r.potential_savings), Style::default().fg(Color::Green)),
        ]));
        lines.push(Line::from(Span::styled(r.description, Style::default().fg(Color::Gray))));
    }
    let p = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Recommendations").borders(Borders::ALL));
    frame.render_widget(p, chunks[1]);
}

fn draw_upload(frame: &mut ratatui::Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} Press u to upload", Icon::Upload.glyph()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" or pick a file from the current directory"),
        ]),
        Line::from(Span::styled("CSV, Excel, or JSON files", Style::default().fg(Color::Gray))),
    ];
    let p = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(p, area);
}

fn badge_style(badge: RiskBadge) -> Style {
    match badge {
        RiskBadge::High => Style::default().fg(Color::Red),
        RiskBadge::Medium => Style::default().fg(Color::Yellow),
        RiskBadge::Low => Style::default().fg(Color::Green),
    }
}

fn draw_flip_card(frame: &mut ratatui::Frame<'_>, area: Rect, card: &FlipCardSpec, focused: bool, flipped: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut title = vec![Span::raw(format!("{} {} ", card.icon.glyph(), card.title))];
    let mut lines = Vec::new();

    if flipped {
        lines.push(Line::from(Span::styled(card.back_content, Style::default().fg(Color::White))));
    } else {
        if let (Some(badge), Some(pct)) = (card.badge(), card.risk_percentage) {
            title.push(Span::styled(format!("{pct}% Risk"), badge_style(badge)));
        }
        lines.push(Line::from(card.front_content));
        if let Some(tip) = card.tip {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(format!("Tip: {tip}"), Style::default().fg(Color::Blue))));
        }
    }

    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);
    if flipped {
        block = block.style(Style::default().bg(Color::Blue));
    }

    let p = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(p, area);
}

fn draw_picker(frame: &mut ratatui::Frame<'_>, area: Rect, picker: &PickerOverlay) {
    let height = (picker.files.len() as u16 + 2)
        .min(area.height.saturating_sub(4))
        .max(3)
        .min(area.height);
    let width = (area.width * 2 / 3).max(20).min(area.width);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
    .intersection(area);
    if rect.is_empty() {
        return;
    }

    let items: Vec<ListItem> = picker
        .files
        .iter()
        .map(|p| ListItem::new(pretty_path(p)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title("Choose a file (Enter select, Esc cancel)")
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
        .highlight_symbol("» ");

    let mut state = ListState::default();
    state.select(Some(picker.cursor));
    frame.render_widget(Clear, rect);
    frame.render_stateful_widget(list, rect, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let settings = Settings {
            seed: Some(1),
            ..Settings::default()
        };
        App::new(settings, NavSection::Dashboard)
    }

    #[test]
    fn arrows_and_digits_navigate() {
        let mut app = app();
        app.handle_key(KeyCode::Right);
        assert_eq!(app.state.active_section, NavSection::Predictions);
        app.handle_key(KeyCode::Char('4'));
        assert_eq!(app.state.active_section, NavSection::Settings);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.state.active_section, NavSection::Dashboard);
    }

    #[test]
    fn choosing_an_option_survives_navigation() {
        let mut app = app();
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.state.selected_prediction, Some(PredictionType::Demand));

        app.handle_key(KeyCode::Char('3'));
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.state.selected_prediction, Some(PredictionType::Demand));
    }

    #[test]
    fn cards_flip_only_after_selection() {
        let mut app = app();
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Char('f'));
        assert_eq!(app.flipped, [false; 3]);

        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char('f'));
        assert_eq!(app.flipped, [false, true, false]);
    }

    #[test]
    fn picker_dismissal_raises_no_toast() {
        let mut app = app();
        app.picker = Some(PickerOverlay {
            files: vec![PathBuf::from("sales.csv")],
            cursor: 0,
        });
        app.handle_key(KeyCode::Esc);
        assert!(app.picker.is_none());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn picker_selection_raises_toast_that_expires() {
        let mut app = app();
        app.picker = Some(PickerOverlay {
            files: vec![PathBuf::from("sales.csv"), PathBuf::from("q3.json")],
            cursor: 0,
        });
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.toasts.len(), 1);

        let later = app.toasts[0].shown_at + Duration::from_secs(4);
        assert!(app.expire_toasts(later));
        assert!(app.toasts.is_empty());
    }

    fn draw_on(app: &mut App, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn picker_fits_short_terminals() {
        for (width, height) in [(10, 2), (10, 1), (1, 1), (40, 3), (40, 6)] {
            let mut app = app();
            app.navigate(NavSection::Analytics);
            app.picker = Some(PickerOverlay {
                files: vec![PathBuf::from("sales.csv"), PathBuf::from("q3.json")],
                cursor: 1,
            });
            draw_on(&mut app, width, height);
        }
    }

    #[test]
    fn every_section_draws_at_small_and_normal_sizes() {
        for (width, height) in [(10, 2), (30, 8), (80, 24)] {
            let mut app = app();
            app.handle_key(KeyCode::Char('2'));
            app.handle_key(KeyCode::Enter);
            for section in NavSection::ALL {
                app.navigate(section);
                draw_on(&mut app, width, height);
            }
        }
    }

    #[test]
    fn picker_overlay_lists_files() {
        let mut app = app();
        app.navigate(NavSection::Settings);
        app.picker = Some(PickerOverlay {
            files: vec![PathBuf::from("sales.csv")],
            cursor: 0,
        });
        let text = buffer_text(&draw_on(&mut app, 80, 24));
        assert!(text.contains("Choose a file"));
        assert!(text.contains("sales.csv"));
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert!(app.handle_key(KeyCode::Char('q')));
    }
}
