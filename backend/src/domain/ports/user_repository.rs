//! Port for user persistence.
//!
//! Adapters store users and answer the eager "user with mugs" lookup in a
//! single round trip.

use async_trait::async_trait;

use crate::domain::{User, UserDetails, UserId, UserWithMugs};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
        /// A unique constraint (the email column) rejected the write.
        UniqueViolation { constraint: String } =>
            "user violates unique constraint {constraint}",
    }
}

/// Port for user storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user in store order.
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch one user; `None` when absent.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch one user with all owned mugs and their locations.
    async fn find_by_id_with_mugs(
        &self,
        id: UserId,
    ) -> Result<Option<UserWithMugs>, UserRepositoryError>;

    /// Insert a new row. The store assigns the id and timestamps.
    async fn insert(&self, details: &UserDetails) -> Result<User, UserRepositoryError>;

    /// Overwrite every mutable field and refresh `modified_at`.
    ///
    /// Returns `None` when no row matched `id`.
    async fn update(
        &self,
        id: UserId,
        details: &UserDetails,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Remove the row and, through cascading foreign keys, its mugs.
    /// Deleting a missing id succeeds.
    async fn delete_by_id(&self, id: UserId) -> Result<(), UserRepositoryError>;
}
