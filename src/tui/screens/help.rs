//! Help screen: scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::screens::input_test::DEFAULT_AREA;

static INPUT_TEST_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev widget"),
    ("Click", "focus widget / press control"),
    ("←/→", "adjust range, radio, select, date, color"),
    ("Shift+←/→", "adjust range by 10"),
    ("Space", "toggle checkbox"),
    ("↑/↓ / PgUp/PgDn", "scroll vertical region"),
    ("←/→ (horizontal)", "scroll horizontal region"),
    ("Wheel", "scroll region under pointer"),
    ("Drag", "move the drag element"),
    ("Arrows (drag)", "nudge the drag element"),
    ("t (date)", "pick today"),
    ("Ctrl+K", "show / hide virtual keyboard"),
    ("Enter (submit)", "submit and view report"),
    ("Ctrl+S", "submit and view report"),
    ("F2", "view report"),
    ("Esc", "hide keyboard / quit"),
    ("F1 / ?", "help"),
];

static REPORT_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "scroll"),
    ("n", "start new test"),
    ("e", "export report as JSON"),
    ("q / Esc", "back to form"),
    ("F1 / ?", "help"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Screen,
    viewport: u16,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a new [`HelpState`] with scroll position at the top and origin [`Screen::InputTest`].
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Screen::InputTest,
            viewport: help_viewport(DEFAULT_AREA),
        }
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the origin screen that opened help.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    /// Sets the origin screen to return to when help is dismissed.
    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
    }

    /// Sets how many content lines fit on screen, pulling the scroll offset
    /// back if it now points past the end.
    pub fn set_viewport(&mut self, viewport: u16) {
        self.viewport = viewport;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    fn max_scroll(&self) -> u16 {
        let total = u16::try_from(help_content(self.origin).len()).unwrap_or(u16::MAX);
        total.saturating_sub(self.viewport)
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::InputTest => "Input Test",
        Screen::Report => "Report",
        Screen::Help => "Help",
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

/// Keys of the screen help was opened from, then the help screen's own keys.
fn help_content(origin: Screen) -> Vec<Line<'static>> {
    let mut lines = match origin {
        Screen::InputTest => build_section("Input Test", INPUT_TEST_KEYS),
        Screen::Report => build_section("Report", REPORT_KEYS),
        Screen::Help => Vec::new(),
    };
    lines.extend(build_section("Help", HELP_KEYS));
    lines
}

fn help_block(origin: Screen) -> Block<'static> {
    Block::default()
        .title(format!(" Help – {} ", screen_name(origin)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Splits the help screen into its scrolling content and footer line.
fn help_areas(area: Rect) -> [Rect; 2] {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner)
}

/// Number of help lines visible when the screen is drawn in `area`.
pub fn help_viewport(area: Rect) -> u16 {
    help_areas(area)[0].height
}

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    frame.render_widget(help_block(state.origin()), area);
    let [content_area, footer_area] = help_areas(area);

    let content_lines = help_content(state.origin());
    let total = content_lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
