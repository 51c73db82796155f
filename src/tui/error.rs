use crate::report::ReportError;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be exported.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}
