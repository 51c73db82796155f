use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::error::ReportError;
use crate::model::StatusRecord;

/// Writes `record` to `path` as pretty-printed JSON.
pub fn export_report(record: &StatusRecord, path: &Path) -> Result<(), ReportError> {
    let content = serde_json::to_string_pretty(record)?;
    fs::write(path, content)?;
    Ok(())
}

/// Returns the default export path for a report generated at `now`.
///
/// Format: `{dir}/touchtest-report-{YYYYMMDD-HHMMSS}.json`, where `dir` is
/// `report_dir` if given, otherwise the home directory.
///
/// Returns `ReportError::NoHomeDir` if no directory is given and the home
/// directory cannot be determined.
pub fn default_export_path(
    report_dir: Option<&Path>,
    now: DateTime<Local>,
) -> Result<PathBuf, ReportError> {
    let filename = format!("touchtest-report-{}.json", now.format("%Y%m%d-%H%M%S"));
    let dir = match report_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::home_dir().ok_or(ReportError::NoHomeDir)?,
    };
    Ok(dir.join(filename))
}
