//! TUI screen implementations.

pub mod help;
pub mod report;

pub use help::{HelpState, draw_help};
pub use input_test::{InputTestState, draw_input_test};
pub use report::{ReportState, draw_report};
