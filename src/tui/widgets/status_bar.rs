//! Status bar widget: persistent one-line test progress display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from `StatusRecord` so
/// the report screen can show the submitted snapshot's counts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Name of the current screen.
    pub title: String,
    /// Number of widgets exercised so far.
    pub tested: usize,
    /// Number of tracked widgets.
    pub total: usize,
}

impl StatusBarContext {
    /// Returns the spans making up the bar.
    ///
    /// Display format: `Touchscreen Testing  7/13 tested`, with the count in
    /// Green once every widget has been tested.
    pub fn spans(&self) -> Vec<Span<'static>> {
        let cyan = Style::default().fg(Color::Cyan);
        let count_style = if self.total > 0 && self.tested == self.total {
            Style::default().fg(Color::Green)
        } else {
            cyan
        };
        vec![
            Span::styled(self.title.clone(), cyan),
            Span::styled("  ", cyan),
            Span::styled(format!("{}/{} tested", self.tested, self.total), count_style),
        ]
    }
}

/// Renders a one-line status bar.
///
/// Renders nothing if `ctx.title` is empty.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.title.is_empty() {
        return;
    }
    frame.render_widget(Paragraph::new(Line::from(ctx.spans())), area);
}
