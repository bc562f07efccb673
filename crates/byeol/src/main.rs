use std::time::{Duration, Instant};

use byeol_core::{DownloadFormat, DownloadPhase};
use byeol_fonts::build_title_art;
use byeol_scene::SceneState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};

mod config;
mod download;

use config::Config;
use download::DownloadMonitor;

/// Width of the centered form and status cards.
const CARD_WIDTH: u16 = 56;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// URL input buffer.
    url: String,
    /// Selected output format.
    format: DownloadFormat,
    /// Download lifecycle tracker.
    monitor: DownloadMonitor,
    /// Background starfield scene.
    scene: SceneState,
    /// Start instant, driving the animation clock.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            url: String::new(),
            format: DownloadFormat::default(),
            monitor: DownloadMonitor::new(config.backend_url, config.download_dir),
            scene: SceneState::new(config.scene),
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let phase = self.monitor.phase();

        // The scene fills the whole frame; everything else paints over it.
        self.scene.render(frame, elapsed_ms);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Loading bar
            Constraint::Fill(1),   // Top padding
            Constraint::Length(7), // Title art
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Spacing
            Constraint::Length(8), // Form card
            Constraint::Length(1), // Spacing
            Constraint::Length(3), // Status box
            Constraint::Fill(1),   // Bottom padding
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        if phase.is_busy() {
            self.render_loading_bar(frame, chunks[0], elapsed_ms);
        }
        self.render_title(frame, chunks[2], chunks[3]);
        self.render_form(frame, chunks[5], &phase);
        self.render_status(frame, chunks[7], &phase);
        self.render_help(frame, chunks[9]);
    }

    /// Indeterminate sweep across the top row while a request is in flight.
    fn render_loading_bar(&self, frame: &mut Frame, area: Rect, elapsed_ms: u64) {
        let width = area.width as i32;
        let sweep_width = (width / 4).max(1);

        // One full crossing every 2 seconds, entering and leaving offscreen.
        let phase = (elapsed_ms % 2000) as f32 / 2000.0;
        let head = (phase * (width + sweep_width) as f32) as i32 - sweep_width;

        let spans: Vec<Span> = (0..width)
            .map(|x| {
                let color = if x >= head && x < head + sweep_width {
                    Color::Rgb(220, 230, 255)
                } else {
                    Color::Rgb(0, 30, 80)
                };
                Span::styled("█", Style::new().fg(color))
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Large title art with the plain subtitle beneath it.
    fn render_title(&self, frame: &mut Frame, art_area: Rect, subtitle_area: Rect) {
        let title_text: Vec<Line> = build_title_art()
            .into_iter()
            .map(|s| Line::from(s).style(Style::new().fg(Color::White)))
            .collect();

        let title = Paragraph::new(title_text).alignment(Alignment::Center);
        frame.render_widget(title, art_area);

        let subtitle = Paragraph::new("YouTube Downloader")
            .style(Style::new().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(subtitle, subtitle_area);
    }

    /// The form card: URL input, format selector, submit control.
    fn render_form(&self, frame: &mut Frame, area: Rect, phase: &DownloadPhase) {
        let card = center_card(area);
        frame.render_widget(Clear, card);

        let url_line = if self.url.is_empty() {
            Line::from(vec![
                Span::raw(" "),
                "https://www.youtube.com/watch?v=...".dark_gray(),
            ])
        } else {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(self.url.as_str(), Style::new().fg(Color::White)),
                "▏".dark_gray(),
            ])
        };

        let format_line = Line::from(vec![
            Span::raw(" Format  "),
            radio(DownloadFormat::Mp4, self.format),
            Span::raw("   "),
            radio(DownloadFormat::Mp3, self.format),
        ]);

        let button = if phase.is_busy() {
            Span::styled(
                "[ Downloading... ]",
                Style::new().fg(Color::White).bg(Color::DarkGray),
            )
        } else {
            Span::styled(
                "[ Download ]",
                Style::new().fg(Color::White).bg(Color::Rgb(255, 73, 73)),
            )
        };

        let lines = vec![
            Line::from(" YouTube URL (Video or Playlist)".bold()),
            url_line,
            Line::raw(""),
            format_line,
            Line::raw(""),
            Line::from(button).centered(),
        ];

        let form = Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::new().fg(Color::Gray)),
        );
        frame.render_widget(form, card);
    }

    /// The status box under the form, colored by the phase variant.
    fn render_status(&self, frame: &mut Frame, area: Rect, phase: &DownloadPhase) {
        let Some(message) = phase.message() else {
            return;
        };

        let card = center_card(area);
        frame.render_widget(Clear, card);

        let status = Paragraph::new(message)
            .style(Style::new().fg(phase.color()))
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().fg(phase.color())),
            );
        frame.render_widget(status, card);
    }

    /// Render help text.
    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help = Line::from(vec![
            "enter".bold().fg(Color::Cyan),
            " download  ".dark_gray(),
            "tab".bold().fg(Color::Cyan),
            " format  ".dark_gray(),
            "esc".bold().fg(Color::Cyan),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout to keep the animation moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Enter) => self.submit(),
            (_, KeyCode::Tab | KeyCode::Left | KeyCode::Right) => self.toggle_format(),
            (_, KeyCode::Backspace) => {
                self.url.pop();
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => self.url.push(c),
            _ => {}
        }
    }

    /// Submit the form. Ignored while a request is in flight or while the
    /// URL is empty (the required-field rule; no request is issued).
    fn submit(&mut self) {
        if self.url.is_empty() || self.monitor.is_busy() {
            return;
        }
        self.monitor.submit(self.url.clone(), self.format);
    }

    /// Toggle the selected output format.
    fn toggle_format(&mut self) {
        self.format = self.format.toggle();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// A radio-style selector span for one format choice.
fn radio(choice: DownloadFormat, selected: DownloadFormat) -> Span<'static> {
    if choice == selected {
        Span::styled(
            format!("(•) {}", choice.label()),
            Style::new().fg(Color::Cyan).bold(),
        )
    } else {
        Span::styled(
            format!("( ) {}", choice.label()),
            Style::new().fg(Color::DarkGray),
        )
    }
}

/// Center a fixed-width card horizontally within the given area.
fn center_card(area: Rect) -> Rect {
    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(CARD_WIDTH),
        Constraint::Fill(1),
    ])
    .split(area);
    chunks[1]
}
