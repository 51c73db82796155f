use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Format used when showing a last-tested timestamp on screen.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The value a widget held when it was last exercised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Renders `42.0` as `42`, booleans as `true`/`false` and empty text as `No value`.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) if s.is_empty() => f.write_str("No value"),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Tested/timestamp/value triple for one widget.
///
/// An untested status carries no timestamp and no value. Once tested, a
/// status stays tested and its timestamp never moves backwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStatus {
    tested: bool,
    last_tested_at: Option<DateTime<Local>>,
    value: Option<FieldValue>,
}

impl FieldStatus {
    /// Creates an untested status.
    pub fn untested() -> Self {
        Self::default()
    }

    /// Records an interaction with `value` at time `at`.
    ///
    /// If `at` is earlier than the previous timestamp (clock stepped back),
    /// the previous timestamp is kept.
    pub fn mark_tested(&mut self, value: FieldValue, at: DateTime<Local>) {
        let at = match self.last_tested_at {
            Some(prev) if prev > at => prev,
            _ => at,
        };
        self.tested = true;
        self.last_tested_at = Some(at);
        self.value = Some(value);
    }

    /// Returns `true` once the widget has been exercised.
    pub fn tested(&self) -> bool {
        self.tested
    }

    /// Returns the time of the most recent interaction.
    pub fn last_tested_at(&self) -> Option<DateTime<Local>> {
        self.last_tested_at
    }

    /// Returns the value recorded by the most recent interaction.
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    /// Returns the recorded value formatted for display, or `No value`.
    pub fn display_value(&self) -> String {
        self.value
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "No value".to_string())
    }

    /// Returns the last-tested timestamp formatted for display, or `-`.
    pub fn display_time(&self) -> String {
        self.last_tested_at
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
