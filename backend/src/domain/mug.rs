//! Mug data model and the eager aggregates built around it.

use super::{Location, LocationId, MugId, User, UserId};

/// Caller-owned mug fields.
///
/// The referenced user and location are not checked here; the store's
/// foreign keys reject dangling references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MugDetails {
    pub display_name: String,
    pub user_id: UserId,
    pub location_id: LocationId,
}

/// Input for create and update operations; `id` is only read on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MugPayload {
    pub id: Option<MugId>,
    pub details: MugDetails,
}

/// A stored mug with its owner and location embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mug {
    id: MugId,
    display_name: String,
    user: User,
    location: Location,
}

impl Mug {
    pub fn new(id: MugId, display_name: impl Into<String>, user: User, location: Location) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            user,
            location,
        }
    }

    pub fn id(&self) -> MugId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The owning user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Where the mug is kept.
    pub fn location(&self) -> &Location {
        &self.location
    }
}

/// A user together with every mug they own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithMugs {
    pub user: User,
    pub mugs: Vec<Mug>,
}

/// A location together with every mug stored there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationWithMugs {
    pub location: Location,
    pub mugs: Vec<Mug>,
}
