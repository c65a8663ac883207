//! Port for mug persistence.
//!
//! Every read joins the owning user and the location so a [`Mug`] is always
//! returned fully populated.

use async_trait::async_trait;

use crate::domain::{Mug, MugDetails, MugId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by mug repository adapters.
    pub enum MugRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "mug repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "mug repository query failed: {message}",
        /// The referenced user or location does not exist.
        MissingReference { constraint: String } =>
            "mug references a missing row ({constraint})",
    }
}

/// Port for mug storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MugRepository: Send + Sync {
    /// Every stored mug with user and location embedded.
    async fn list_all(&self) -> Result<Vec<Mug>, MugRepositoryError>;

    /// Fetch one mug; `None` when absent.
    async fn find_by_id(&self, id: MugId) -> Result<Option<Mug>, MugRepositoryError>;

    /// Mugs owned by `user_id`, each with its location. Empty when the user
    /// owns none or does not exist.
    async fn list_by_user_id(&self, user_id: UserId) -> Result<Vec<Mug>, MugRepositoryError>;

    /// Insert a new row and reload it with its references.
    async fn insert(&self, details: &MugDetails) -> Result<Mug, MugRepositoryError>;

    /// Overwrite every mutable field; `None` when no row matched `id`.
    async fn update(
        &self,
        id: MugId,
        details: &MugDetails,
    ) -> Result<Option<Mug>, MugRepositoryError>;

    /// Remove the row; a missing id is a no-op.
    async fn delete_by_id(&self, id: MugId) -> Result<(), MugRepositoryError>;
}
