/// Errors that can occur while exporting a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// An I/O error occurred while writing the report file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The report could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a home directory.
    #[error("could not determine home directory")]
    NoHomeDir,
}
