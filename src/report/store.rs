use crate::model::StatusRecord;

/// Single-slot holder for the last submitted [`StatusRecord`].
///
/// Empty until the first submission; each write replaces the previous
/// snapshot wholesale.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    snapshot: Option<StatusRecord>,
}

impl ReportStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored snapshot.
    pub fn write(&mut self, record: StatusRecord) {
        self.snapshot = Some(record);
    }

    /// Returns the stored snapshot, if any.
    pub fn read(&self) -> Option<&StatusRecord> {
        self.snapshot.as_ref()
    }

    /// Returns `true` if nothing has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_none()
    }
}
