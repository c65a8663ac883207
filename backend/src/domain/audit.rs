//! Store-managed audit timestamps.

use chrono::{DateTime, Utc};

/// Creation and last-modification instants maintained by the persistence
/// layer.
///
/// Callers never supply these; they are read back from the store after
/// every insert and update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditStamps {
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl AuditStamps {
    /// Build stamps from stored values.
    pub const fn new(created_at: DateTime<Utc>, modified_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            modified_at,
        }
    }

    /// Instant the row was inserted.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Instant of the most recent update.
    pub const fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }
}
