//! Report screen: per-widget summary of the last submitted test.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{FieldStatus, StatusRecord, WidgetId};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::{StatusBarContext, draw_status_bar};

/// Outcome of the last export attempt, shown under the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Saved(String),
    Failed(String),
}

/// State for the report screen.
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    scroll: u16,
    max_scroll: u16,
    export_status: Option<ExportStatus>,
}

impl ReportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the outcome of the last export, if any.
    pub fn export_status(&self) -> Option<&ExportStatus> {
        self.export_status.as_ref()
    }

    /// Records the outcome of an export attempt.
    pub fn set_export_status(&mut self, status: ExportStatus) {
        self.export_status = Some(status);
    }

    /// Sets the scroll range from the report length and the lines visible.
    pub fn set_bounds(&mut self, content_len: usize, viewport: u16) {
        let total = u16::try_from(content_len).unwrap_or(u16::MAX);
        self.max_scroll = total.saturating_sub(viewport);
        self.scroll = self.scroll.min(self.max_scroll);
    }

    /// Clears scroll and export status, ready for a newly submitted report.
    pub fn reset(&mut self) {
        self.scroll = 0;
        self.export_status = None;
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll);
                Action::None
            }
            KeyCode::Char('n') => Action::StartNewTest,
            KeyCode::Char('e') => Action::ExportReport,
            KeyCode::Char('?') => Action::Navigate(Screen::Help),
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::InputTest),
            _ => Action::None,
        }
    }
}

fn section_header(title: &'static str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

/// A widget's status line, followed by its details once it has been tested.
fn entry(widget: WidgetId, status: &FieldStatus, value_label: &str) -> Vec<Line<'static>> {
    let (mark, color) = if status.tested() {
        ("Tested", Color::Green)
    } else {
        ("Not Tested", Color::Red)
    };
    let heading = Line::from(vec![
        Span::styled(format!("  {:<20}", widget.label()), Style::default()),
        Span::styled(mark, Style::default().fg(color)),
    ]);
    if !status.tested() {
        return vec![heading];
    }
    let dim = Style::default().fg(Color::DarkGray);
    vec![
        heading,
        Line::from(Span::styled(
            format!("    Last tested: {}", status.display_time()),
            dim,
        )),
        Line::from(Span::styled(
            format!(
                "    {value_label}: {}",
                status.display_value().replace('\n', " ")
            ),
            dim,
        )),
    ]
}

/// The report body: "Input Elements" then "Scroll Tests".
pub fn report_lines(record: &StatusRecord) -> Vec<Line<'static>> {
    let mut lines = section_header("Input Elements");
    for (widget, status) in record.standard() {
        lines.extend(entry(widget, status, "Value"));
    }
    lines.extend(section_header("Scroll Tests"));
    for (widget, status) in record.scroll() {
        lines.extend(entry(widget, status, "Progress"));
    }
    lines
}

/// Splits the report screen into status bar, body, message line and footer.
fn report_areas(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

fn report_block() -> Block<'static> {
    Block::default()
        .title(" Test Report ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Number of report lines visible when the screen is drawn in `area`.
pub fn report_viewport(area: Rect) -> u16 {
    report_block().inner(report_areas(area)[1]).height
}

/// Renders the report screen. Draws nothing when there is no report.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_report(
    state: &ReportState,
    record: Option<&StatusRecord>,
    frame: &mut Frame,
    area: Rect,
) {
    let Some(record) = record else {
        return;
    };

    let [status_area, body_area, message_area, footer_area] = report_areas(area);

    let ctx = StatusBarContext {
        title: "Touchscreen Test Report".into(),
        tested: record.tested_count(),
        total: WidgetId::COUNT,
    };
    draw_status_bar(&ctx, frame, status_area);

    let block = report_block();
    let inner = block.inner(body_area);
    frame.render_widget(block, body_area);

    let lines = report_lines(record);
    let total = lines.len() as u16;
    let capped_scroll = state.scroll().min(total.saturating_sub(inner.height));
    frame.render_widget(Paragraph::new(lines).scroll((capped_scroll, 0)), inner);

    if let Some(status) = state.export_status() {
        let line = match status {
            ExportStatus::Saved(path) => Span::styled(
                format!("Report saved to {path}"),
                Style::default().fg(Color::Green),
            ),
            ExportStatus::Failed(err) => Span::styled(
                format!("Export failed: {err}"),
                Style::default().fg(Color::Red),
            ),
        };
        frame.render_widget(Paragraph::new(line), message_area);
    }

    let footer = Paragraph::new("n: new test  e: export JSON  ↑/↓: scroll  q/Esc: form  ?: help")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use chrono::Local;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::FieldValue;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn sample_record() -> StatusRecord {
        let mut record = StatusRecord::new();
        record.mark(WidgetId::Text, "hello".into(), Local::now());
        record.mark(
            WidgetId::VerticalScroll,
            "Scrolled 40%".into(),
            Local::now(),
        );
        record.mark(WidgetId::Number, FieldValue::Number(42.0), Local::now());
        record
    }

    mod handle_key {
        use super::*;

        #[test]
        fn n_starts_new_test() {
            let mut state = ReportState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('n'))),
                Action::StartNewTest
            );
        }

        #[test]
        fn e_exports() {
            let mut state = ReportState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('e'))),
                Action::ExportReport
            );
        }

        #[test]
        fn q_and_esc_return_to_form() {
            let mut state = ReportState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('q'))),
                Action::Navigate(Screen::InputTest)
            );
            assert_eq!(
                state.handle_key(press(KeyCode::Esc)),
                Action::Navigate(Screen::InputTest)
            );
        }

        #[test]
        fn question_mark_opens_help() {
            let mut state = ReportState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('?'))),
                Action::Navigate(Screen::Help)
            );
        }

        #[test]
        fn arrows_scroll_and_saturate() {
            let mut state = ReportState::new();
            state.set_bounds(30, 10);
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 0);
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.scroll(), 2);
        }

        #[test]
        fn down_stops_at_last_page() {
            let mut state = ReportState::new();
            state.set_bounds(30, 10);
            for _ in 0..500 {
                state.handle_key(press(KeyCode::Down));
            }
            assert_eq!(state.scroll(), 20);
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 19);
        }

        #[test]
        fn down_does_nothing_when_report_fits() {
            let mut state = ReportState::new();
            state.set_bounds(8, 10);
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn shrinking_bounds_pulls_scroll_back() {
            let mut state = ReportState::new();
            state.set_bounds(30, 10);
            for _ in 0..15 {
                state.handle_key(press(KeyCode::Down));
            }
            state.set_bounds(30, 25);
            assert_eq!(state.scroll(), 5);
        }

        #[test]
        fn unknown_key_returns_none() {
            let mut state = ReportState::new();
            assert_eq!(state.handle_key(press(KeyCode::Char('x'))), Action::None);
        }
    }

    mod export_status {
        use super::*;

        #[test]
        fn reset_clears_status_and_scroll() {
            let mut state = ReportState::new();
            state.set_export_status(ExportStatus::Saved("/tmp/r.json".into()));
            state.set_bounds(30, 10);
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.scroll(), 1);
            state.reset();
            assert_eq!(state.export_status(), None);
            assert_eq!(state.scroll(), 0);
        }
    }

    mod lines {
        use super::*;

        fn text(record: &StatusRecord) -> String {
            report_lines(record)
                .into_iter()
                .map(|l| {
                    l.spans
                        .into_iter()
                        .map(|s| s.content.into_owned())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        }

        #[test]
        fn input_elements_come_before_scroll_tests() {
            let output = text(&StatusRecord::new());
            let inputs = output.find("Input Elements").unwrap();
            let scrolls = output.find("Scroll Tests").unwrap();
            assert!(inputs < scrolls);
            let vertical = output.find("Vertical Scroll").unwrap();
            let horizontal = output.find("Horizontal Scroll").unwrap();
            assert!(scrolls < vertical);
            assert!(vertical < horizontal);
        }

        #[test]
        fn scroll_values_are_labelled_progress() {
            let output = text(&sample_record());
            assert!(output.contains("Progress: Scrolled 40%"));
            assert!(output.contains("Value: hello"));
        }

        #[test]
        fn numbers_drop_trailing_zero() {
            let output = text(&sample_record());
            assert!(output.contains("Value: 42"));
            assert!(!output.contains("42.0"));
        }

        #[test]
        fn untested_entries_show_only_status() {
            let output = text(&StatusRecord::new());
            assert!(output.contains("Not Tested"));
            assert!(!output.contains("Value:"));
            assert!(!output.contains("Progress:"));
            assert!(!output.contains("Last tested"));
        }

        #[test]
        fn tested_entries_show_time_and_value() {
            let output = text(&sample_record());
            assert_eq!(output.matches("Last tested: ").count(), 3);
            assert!(!output.contains("Last tested: -"));
        }

        #[test]
        fn entry_length_depends_on_tested_state() {
            let mut status = FieldStatus::untested();
            assert_eq!(entry(WidgetId::Text, &status, "Value").len(), 1);
            status.mark_tested("hi".into(), Local::now());
            assert_eq!(entry(WidgetId::Text, &status, "Value").len(), 3);
        }

        #[test]
        fn report_length_counts_detail_lines_of_tested_widgets() {
            let untested = report_lines(&StatusRecord::new()).len();
            let tested = report_lines(&sample_record()).len();
            assert_eq!(untested, 4 + WidgetId::COUNT);
            assert_eq!(tested, untested + 2 * 3);
        }

        #[test]
        fn every_widget_has_an_entry() {
            let output = text(&StatusRecord::new());
            for widget in WidgetId::all() {
                assert!(output.contains(widget.label()), "missing {widget:?}");
            }
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render(state: &ReportState, record: Option<&StatusRecord>) -> String {
            let backend = TestBackend::new(80, 60);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_report(state, record, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn empty_store_renders_nothing() {
            let output = render(&ReportState::new(), None);
            assert!(output.trim().is_empty());
        }

        #[test]
        fn shows_submitted_values() {
            let record = sample_record();
            let output = render(&ReportState::new(), Some(&record));
            assert!(output.contains("Test Report"));
            assert!(output.contains("Value: hello"));
            assert!(output.contains("Progress: Scrolled 40%"));
            assert!(output.contains("3/13 tested"));
        }

        #[test]
        fn shows_export_outcome() {
            let record = sample_record();
            let mut state = ReportState::new();
            state.set_export_status(ExportStatus::Failed("disk full".into()));
            let output = render(&state, Some(&record));
            assert!(output.contains("Export failed: disk full"));
        }

        #[test]
        fn viewport_excludes_bars_and_borders() {
            assert_eq!(report_viewport(Rect::new(0, 0, 80, 60)), 55);
            assert_eq!(report_viewport(Rect::new(0, 0, 80, 4)), 0);
        }

        #[test]
        fn clamped_scroll_shows_last_entry() {
            let record = sample_record();
            let area = Rect::new(0, 0, 80, 20);
            let mut state = ReportState::new();
            state.set_bounds(report_lines(&record).len(), report_viewport(area));
            for _ in 0..500 {
                state.handle_key(press(KeyCode::Down));
            }
            let backend = TestBackend::new(area.width, area.height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_report(&state, Some(&record), frame, frame.area()))
                .unwrap();
            let output = buffer_to_string(terminal.backend().buffer());
            assert!(output.contains("Horizontal Scroll"));
        }

        #[test]
        fn footer_lists_keys() {
            let record = StatusRecord::new();
            let output = render(&ReportState::new(), Some(&record));
            assert!(output.contains("n: new test"));
            assert!(output.contains("e: export JSON"));
        }
    }
}
