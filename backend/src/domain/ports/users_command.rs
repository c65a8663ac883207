//! Driving port for user writes.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserPayload};

/// Mutating operations on users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user. Any id in the payload is discarded.
    async fn create_user(&self, payload: UserPayload) -> Result<User, Error>;

    /// Replace every mutable field of an existing user.
    ///
    /// Fails with `not_found` when `payload.id` is absent or unknown.
    async fn update_user(&self, payload: UserPayload) -> Result<User, Error>;

    /// Delete a user and their mugs. Unknown ids succeed.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
