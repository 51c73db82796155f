//! Report store and JSON report export.
//!
//! The store is a single slot owned by the [`App`](crate::tui::App) and
//! passed by reference to the views that need it. Export writes a stored
//! record to a pretty-printed JSON file on request.

mod error;
mod export;
mod store;

pub use error::ReportError;
pub use export::{default_export_path, export_report};
pub use store::ReportStore;
