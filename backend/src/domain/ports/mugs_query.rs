//! Driving port for mug reads.

use async_trait::async_trait;

use crate::domain::{Error, Mug, MugId, UserId};

/// Read operations on mugs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MugsQuery: Send + Sync {
    async fn list_mugs(&self) -> Result<Vec<Mug>, Error>;

    async fn get_mug(&self, id: MugId) -> Result<Mug, Error>;

    /// Mugs owned by `user_id`, loaded with their locations in one query.
    async fn list_mugs_for_user(&self, user_id: UserId) -> Result<Vec<Mug>, Error>;
}
