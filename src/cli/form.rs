//! Interactive calculator form
//!
//! Two numeric fields, a calculate action, and a results pane showing the
//! metrics, SDG contributions and share links. `d` saves the markdown report
//! once results are on screen.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::ProjectConfig;
use crate::impact::{self, ImpactError};
use crate::models::{DocumentCounts, ImpactReport, Sdg};
use crate::reporters::{metric_rows, DOWNLOAD_FILE_NAME};
use crate::share::share_links;

/// Longest accepted field; keeps the value well inside u64
const MAX_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Total,
    Signed,
}

impl Field {
    fn label(&self) -> &'static str {
        match self {
            Field::Total => "Total Documents Produced Annually",
            Field::Signed => "Documents Needing Signature and Seal",
        }
    }

    fn toggle(self) -> Self {
        match self {
            Field::Total => Field::Signed,
            Field::Signed => Field::Total,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Report(ImpactReport),
    Warning(ImpactError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Continue,
    Quit,
}

pub struct App {
    total: String,
    signed: String,
    focus: Field,
    outcome: Option<Outcome>,
    status: Option<String>,
    config: ProjectConfig,
    download_dir: PathBuf,
}

impl App {
    pub fn new(config: ProjectConfig, download_dir: PathBuf) -> Self {
        Self {
            total: String::new(),
            signed: String::new(),
            focus: Field::Total,
            outcome: None,
            status: None,
            config,
            download_dir,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Total => &mut self.total,
            Field::Signed => &mut self.signed,
        }
    }

    fn field(&self, field: Field) -> &str {
        match field {
            Field::Total => &self.total,
            Field::Signed => &self.signed,
        }
    }

    /// Empty fields count as zero
    fn counts(&self) -> DocumentCounts {
        let parse = |s: &str| s.parse::<u64>().unwrap_or(0);
        DocumentCounts::new(parse(&self.total), parse(&self.signed))
    }

    fn step(&mut self, up: bool) {
        let current = self.field(self.focus).parse::<u64>().unwrap_or(0);
        let next = if up {
            current.saturating_add(1)
        } else {
            current.saturating_sub(1)
        };
        let text = next.to_string();
        if text.len() <= MAX_DIGITS {
            *self.field_mut(self.focus) = text;
            self.clear_results();
        }
    }

    /// Results always belong to the values on screen
    fn clear_results(&mut self) {
        self.outcome = None;
        self.status = None;
    }

    fn calculate(&mut self) {
        let counts = self.counts();
        self.status = None;
        self.outcome = Some(match impact::calculate(&counts) {
            Ok(report) => Outcome::Report(report),
            Err(err) => Outcome::Warning(err),
        });
    }

    fn download(&mut self) {
        let Some(Outcome::Report(report)) = &self.outcome else {
            self.status = Some("Calculate the impact before downloading.".to_string());
            return;
        };
        let path = self.download_dir.join(DOWNLOAD_FILE_NAME);
        self.status = Some(match super::calculate::download_markdown(report, &path) {
            Ok(path) => format!("Saved {}", path.display()),
            Err(e) => {
                warn!("Download failed: {:#}", e);
                format!("Download failed: {}", e)
            }
        });
    }

    fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let focus = self.focus;
                let field = self.field_mut(focus);
                if field.len() < MAX_DIGITS {
                    // Drop a leading zero so "0" then "5" reads as "5"
                    if field.as_str() == "0" {
                        field.clear();
                    }
                    field.push(c);
                    self.clear_results();
                }
            }
            KeyCode::Char('+') => self.step(true),
            KeyCode::Char('-') => self.step(false),
            KeyCode::Backspace => {
                let focus = self.focus;
                if self.field_mut(focus).pop().is_some() {
                    self.clear_results();
                }
            }
            KeyCode::Enter => self.calculate(),
            KeyCode::Char('d') => self.download(),
            _ => {}
        }
        Action::Continue
    }
}

pub fn run(config: ProjectConfig) -> Result<()> {
    let download_dir = std::env::current_dir()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, download_dir);
    let res = run_app(&mut terminal, &mut app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, E>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: E) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = next_event()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code) == Action::Quit {
                debug!("Form closed");
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            " 🌍 Digital Approval Impact Calculator",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(Span::styled(
            " Environmental and operational impact of moving to digital approvals and sealing.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    render_inputs(f, chunks[1], app);
    render_results(f, chunks[2], app);

    let status = Paragraph::new(app.status.clone().unwrap_or_default())
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(status, chunks[3]);

    let help = " Tab:Switch field  0-9/+/-:Edit  Enter:Calculate  d:Download  q:Quit";
    let footer = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[4]);
}

fn render_inputs(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = [Field::Total, Field::Signed]
        .iter()
        .map(|&field| {
            let focused = app.focus == field;
            let marker = if focused { "> " } else { "  " };
            let value = app.field(field);
            let shown = if value.is_empty() { "0" } else { value };
            let value_style = if focused {
                Style::default().bg(Color::DarkGray).fg(Color::White).bold()
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<38}", field.label()), Style::default().bold()),
                Span::styled(format!(" {:>15} ", shown), value_style),
            ])
        })
        .collect();

    let inputs = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" 📊 Enter Your Data "));
    f.render_widget(inputs, area);
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 🌱 Our Contribution to Sustainability ");

    let text: Vec<Line> = match &app.outcome {
        None => vec![Line::from(Span::styled(
            "Enter both values and press Enter to calculate.",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(Outcome::Warning(err)) => vec![Line::from(Span::styled(
            format!("⚠ {}", err),
            Style::default().fg(Color::Yellow).bold(),
        ))],
        Some(Outcome::Report(report)) => report_lines(report, &app.config),
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn report_lines(report: &ImpactReport, config: &ProjectConfig) -> Vec<Line<'static>> {
    let m = report.display();
    let mut text = Vec::new();

    for row in metric_rows(&m) {
        text.push(Line::from(vec![
            Span::raw(format!("{} ", row.emoji)),
            Span::styled(format!("{:<22}", row.label), Style::default().bold()),
            Span::styled(row.value, Style::default().fg(Color::Green).bold()),
        ]));
    }

    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "📈 SDG Contributions",
        Style::default().bold(),
    )));
    for sdg in Sdg::ALL {
        text.push(Line::from(vec![
            Span::styled(format!("  {}: ", sdg.heading()), Style::default().bold()),
            Span::raw(sdg.contribution(&m)),
        ]));
    }

    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "📢 Share Your Impact",
        Style::default().bold(),
    )));
    for link in share_links(report, &config.share) {
        text.push(Line::from(vec![
            Span::styled(
                format!("  {} {}: ", link.target.name(), link.target.emoji()),
                Style::default().bold(),
            ),
            Span::styled(link.url, Style::default().fg(Color::Cyan)),
        ]));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(ProjectConfig::default(), std::env::temp_dir())
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = app();
        type_str(&mut app, "5000");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "1000");
        assert_eq!(app.counts(), DocumentCounts::new(5000, 1000));
    }

    #[test]
    fn test_non_digits_ignored_and_backspace() {
        let mut app = app();
        type_str(&mut app, "12x3");
        assert_eq!(app.total, "123");
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.total, "12");
    }

    #[test]
    fn test_enter_with_empty_field_warns() {
        let mut app = app();
        type_str(&mut app, "100");
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.outcome, Some(Outcome::Warning(ImpactError::MissingInput)));
    }

    #[test]
    fn test_enter_computes_report() {
        let mut app = app();
        type_str(&mut app, "10");
        app.handle_key(KeyCode::Down);
        type_str(&mut app, "1000");
        app.handle_key(KeyCode::Enter);
        match &app.outcome {
            Some(Outcome::Report(report)) => assert_eq!(report.display().cost_usd, "550.00"),
            other => panic!("expected a report, got {other:?}"),
        }
    }

    #[test]
    fn test_step_keys_saturate_at_zero() {
        let mut app = app();
        app.handle_key(KeyCode::Char('-'));
        assert_eq!(app.total, "0");
        app.handle_key(KeyCode::Char('+'));
        app.handle_key(KeyCode::Char('+'));
        assert_eq!(app.total, "2");
        type_str(&mut app, "7");
        assert_eq!(app.total, "27");
    }

    #[test]
    fn test_field_length_is_capped() {
        let mut app = app();
        type_str(&mut app, &"9".repeat(MAX_DIGITS + 5));
        assert_eq!(app.total.len(), MAX_DIGITS);
    }

    #[test]
    fn test_download_requires_results() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(ProjectConfig::default(), dir.path().to_path_buf());
        app.handle_key(KeyCode::Char('d'));
        assert!(app.status.as_deref().unwrap().contains("before downloading"));
        assert!(!dir.path().join(DOWNLOAD_FILE_NAME).exists());

        type_str(&mut app, "1");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "1000");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('d'));
        let saved = std::fs::read_to_string(dir.path().join(DOWNLOAD_FILE_NAME)).unwrap();
        assert!(saved.contains("4.71 kg of CO₂"));
    }

    #[test]
    fn test_editing_after_calculate_hides_stale_results() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(ProjectConfig::default(), dir.path().to_path_buf());
        type_str(&mut app, "10");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "1000");
        app.handle_key(KeyCode::Enter);
        assert!(matches!(app.outcome, Some(Outcome::Report(_))));

        for _ in 0..4 {
            app.handle_key(KeyCode::Backspace);
        }
        assert_eq!(app.signed, "");
        assert!(app.outcome.is_none());

        app.handle_key(KeyCode::Char('d'));
        assert_eq!(
            app.status.as_deref(),
            Some("Calculate the impact before downloading.")
        );
        assert!(!dir.path().join(DOWNLOAD_FILE_NAME).exists());
    }

    #[test]
    fn test_step_and_digit_clear_results() {
        let mut app = app();
        type_str(&mut app, "5");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "5");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('+'));
        assert!(app.outcome.is_none());

        app.handle_key(KeyCode::Enter);
        type_str(&mut app, "0");
        assert!(app.outcome.is_none());
        assert_eq!(app.signed, "60");
    }

    #[test]
    fn test_navigation_keeps_results() {
        let mut app = app();
        type_str(&mut app, "5");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "5");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Up);
        assert!(matches!(app.outcome, Some(Outcome::Report(_))));
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_event_loop_computes_and_quits() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = app();
        let mut events = vec![
            key('5'),
            Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            key('8'),
            Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            key('q'),
        ]
        .into_iter();

        run_app(&mut terminal, &mut app, || {
            events.next().ok_or_else(|| io::Error::other("out of events"))
        })
        .unwrap();

        assert_eq!(app.counts(), DocumentCounts::new(5, 8));
        assert!(matches!(app.outcome, Some(Outcome::Report(_))));
    }

    #[test]
    fn test_event_read_failure_is_returned() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = app();
        let err = run_app(&mut terminal, &mut app, || {
            Err(io::Error::other("terminal went away"))
        })
        .unwrap_err();
        assert!(err.to_string().contains("terminal went away"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Action::Quit);
        assert_eq!(app.handle_key(KeyCode::Enter), Action::Continue);
    }

    #[test]
    fn test_report_lines_include_share_links() {
        let report = impact::savings_for(1000);
        let lines = report_lines(&report, &ProjectConfig::default());
        let rendered: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(rendered.contains("https://twitter.com/intent/tweet?text="));
        assert!(rendered.contains("SDG 13 (Climate Action)"));
    }
}
