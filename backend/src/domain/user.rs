//! User data model.
//!
//! A [`User`] is an immutable snapshot of a stored row. Writes go through
//! [`UserPayload`], which carries only the fields a caller may set.

use super::{AuditStamps, UserId};

/// Caller-owned user fields, overwritten in full on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

/// Input for create and update operations.
///
/// `id` is ignored on create and required on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPayload {
    pub id: Option<UserId>,
    pub details: UserDetails,
}

/// A stored user.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use mugs::domain::{AuditStamps, User, UserDetails, UserId};
///
/// let now = Utc::now();
/// let user = User::new(
///     UserId::random(),
///     UserDetails {
///         first_name: "Ann".into(),
///         last_name: "Lee".into(),
///         email: Some("ann@x.io".into()),
///     },
///     AuditStamps::new(now, now),
/// );
/// assert_eq!(user.first_name(), "Ann");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    details: UserDetails,
    audit: AuditStamps,
}

impl User {
    pub fn new(id: UserId, details: UserDetails, audit: AuditStamps) -> Self {
        Self { id, details, audit }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.details.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.details.last_name
    }

    pub fn email(&self) -> Option<&str> {
        self.details.email.as_deref()
    }

    pub fn details(&self) -> &UserDetails {
        &self.details
    }

    pub fn audit(&self) -> AuditStamps {
        self.audit
    }
}
