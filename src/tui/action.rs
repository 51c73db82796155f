//! Actions returned by screen event handlers.

use crate::model::StatusRecord;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update global state and navigate between
/// screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Store the submitted record as the current report and show it.
    Submit(StatusRecord),
    /// Discard the form session and start over with a fresh form.
    StartNewTest,
    /// Write the stored report to a JSON file.
    ExportReport,
    /// Quit the application.
    Quit,
}
