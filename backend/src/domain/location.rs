//! Location data model.

use super::{AuditStamps, LocationId};

/// Caller-owned location fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDetails {
    pub name: String,
    pub description: Option<String>,
}

/// Input for create and update operations; `id` is only read on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPayload {
    pub id: Option<LocationId>,
    pub details: LocationDetails,
}

/// A stored location where mugs are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: LocationId,
    details: LocationDetails,
    audit: AuditStamps,
}

impl Location {
    pub fn new(id: LocationId, details: LocationDetails, audit: AuditStamps) -> Self {
        Self { id, details, audit }
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn description(&self) -> Option<&str> {
        self.details.description.as_deref()
    }

    pub fn details(&self) -> &LocationDetails {
        &self.details
    }

    pub fn audit(&self) -> AuditStamps {
        self.audit
    }
}
