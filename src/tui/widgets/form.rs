//! Row layout shared by the input-test form's drawing and mouse hit-testing.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{FieldStatus, WidgetId};

/// Width of the label column.
pub const LABEL_WIDTH: u16 = 20;
/// Width of the status column.
pub const STATUS_WIDTH: u16 = 30;
/// Height of the vertical scroll region's viewport.
pub const VERTICAL_VIEWPORT: u16 = 5;
/// Height of the drag-and-drop container.
pub const DRAG_HEIGHT: u16 = 6;
/// Height of the virtual keyboard panel, including its top border.
pub const KEYBOARD_HEIGHT: u16 = 7;

/// Caption of the control that shows a hidden keyboard.
pub const SHOW_KEYBOARD: &str = "[Show Keyboard]";

/// Screen regions of the input-test form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    /// One-line status bar above the form.
    pub status: Rect,
    /// Bordered box around all widget rows.
    pub body: Rect,
    /// One row per widget, in [`WidgetId::all`] order.
    pub rows: [Rect; WidgetId::COUNT],
    /// Keyboard panel; zero height when hidden.
    pub keyboard: Rect,
    /// One-line footer below the keyboard.
    pub footer: Rect,
}

impl FormLayout {
    /// Returns the row of `widget`.
    pub fn row(&self, widget: WidgetId) -> Rect {
        self.rows[widget.index()]
    }

    /// Returns the control column of `widget`'s row.
    pub fn control(&self, widget: WidgetId) -> Rect {
        control_area(self.row(widget))
    }

    /// Returns the widget whose row contains `pos`.
    pub fn widget_at(&self, pos: Position) -> Option<WidgetId> {
        WidgetId::all()
            .iter()
            .copied()
            .find(|w| self.row(*w).contains(pos))
    }

    /// Returns the area of the show-keyboard control at the right of the footer.
    pub fn show_keyboard_button(&self) -> Rect {
        let width = (SHOW_KEYBOARD.chars().count() as u16).min(self.footer.width);
        Rect {
            x: self.footer.right().saturating_sub(width),
            y: self.footer.y,
            width,
            height: self.footer.height,
        }
    }
}

/// Number of terminal rows a widget occupies.
pub fn row_height(widget: WidgetId) -> u16 {
    match widget {
        WidgetId::Textarea => 3,
        WidgetId::VerticalScroll => VERTICAL_VIEWPORT,
        WidgetId::Drag => DRAG_HEIGHT,
        _ => 1,
    }
}

/// Splits `area` into the form's regions.
pub fn form_layout(area: Rect, keyboard_visible: bool) -> FormLayout {
    let keyboard_height = if keyboard_visible { KEYBOARD_HEIGHT } else { 0 };
    let [status, body, keyboard, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(keyboard_height),
        Constraint::Length(1),
    ])
    .areas(area);

    let inner = Rect {
        x: body.x.saturating_add(1),
        y: body.y.saturating_add(1),
        width: body.width.saturating_sub(2),
        height: body.height.saturating_sub(2),
    };
    let constraints: Vec<Constraint> = WidgetId::all()
        .iter()
        .map(|w| Constraint::Length(row_height(*w)))
        .collect();
    let split = Layout::vertical(constraints).flex(Flex::Start).split(inner);
    let rows = std::array::from_fn(|i| split[i]);

    FormLayout {
        status,
        body,
        rows,
        keyboard,
        footer,
    }
}

/// The control column of a row: between the label and the status.
pub fn control_area(row: Rect) -> Rect {
    let [_, control, _] = Layout::horizontal([
        Constraint::Length(LABEL_WIDTH),
        Constraint::Min(0),
        Constraint::Length(STATUS_WIDTH),
    ])
    .areas(row);
    control
}

/// Clock format of the last-tested time in the status column.
const STATUS_TIME_FORMAT: &str = "%H:%M:%S";

/// One-line status text for a widget: `Not Tested` or `Tested (<time> - <value>)`.
pub fn status_text(status: &FieldStatus) -> String {
    match status.last_tested_at() {
        Some(at) if status.tested() => format!(
            "Tested ({} - {})",
            at.format(STATUS_TIME_FORMAT),
            status.display_value()
        ),
        _ => "Not Tested".to_string(),
    }
}

/// Draws a row's label and status columns; the caller draws the control.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_row_frame(
    widget: WidgetId,
    status: &FieldStatus,
    focused: bool,
    frame: &mut Frame,
    row: Rect,
) {
    let [label_area, _, status_area] = Layout::horizontal([
        Constraint::Length(LABEL_WIDTH),
        Constraint::Min(0),
        Constraint::Length(STATUS_WIDTH),
    ])
    .areas(row);

    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if focused { "> " } else { "  " };
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{marker}{}", widget.label()), label_style)),
        label_area,
    );

    let color = if status.tested() {
        Color::Green
    } else {
        Color::Red
    };
    let line = Line::from(Span::styled(
        format!(" {}", status_text(status).replace('\n', " ")),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), status_area);
}
