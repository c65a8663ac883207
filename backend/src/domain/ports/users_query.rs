//! Driving port for user reads.
//!
//! Inbound adapters depend on this trait rather than on the service so
//! handler tests can substitute doubles.

use async_trait::async_trait;

use crate::domain::{Error, Mug, User, UserId, UserWithMugs};

/// Read operations on users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user in store order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// One user, or a `not_found` error.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;

    /// One user with every owned mug and its location.
    async fn get_user_with_mugs(&self, id: UserId) -> Result<UserWithMugs, Error>;

    /// Mugs owned by the user; empty when there are none.
    async fn list_mugs_for_user(&self, id: UserId) -> Result<Vec<Mug>, Error>;
}
