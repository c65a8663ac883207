//! Port for location persistence.

use async_trait::async_trait;

use crate::domain::{Location, LocationDetails, LocationId, LocationWithMugs};

use super::define_port_error;

define_port_error! {
    /// Errors raised by location repository adapters.
    pub enum LocationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "location repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "location repository query failed: {message}",
    }
}

/// Port for location storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Location>, LocationRepositoryError>;

    async fn find_by_id(&self, id: LocationId) -> Result<Option<Location>, LocationRepositoryError>;

    /// Fetch one location with every mug stored there in a single query.
    async fn find_by_id_with_mugs(
        &self,
        id: LocationId,
    ) -> Result<Option<LocationWithMugs>, LocationRepositoryError>;

    async fn insert(&self, details: &LocationDetails) -> Result<Location, LocationRepositoryError>;

    /// Overwrite every mutable field; `None` when no row matched `id`.
    async fn update(
        &self,
        id: LocationId,
        details: &LocationDetails,
    ) -> Result<Option<Location>, LocationRepositoryError>;

    /// Remove the row and its mugs; a missing id is a no-op.
    async fn delete_by_id(&self, id: LocationId) -> Result<(), LocationRepositoryError>;
}
