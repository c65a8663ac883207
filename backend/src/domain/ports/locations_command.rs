//! Driving port for location writes.

use async_trait::async_trait;

use crate::domain::{Error, Location, LocationId, LocationPayload};

/// Mutating operations on locations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationsCommand: Send + Sync {
    /// Store a new location, ignoring any supplied id.
    async fn create_location(&self, payload: LocationPayload) -> Result<Location, Error>;

    /// Replace every mutable field of an existing location.
    async fn update_location(&self, payload: LocationPayload) -> Result<Location, Error>;

    /// Delete a location and the mugs kept there. Unknown ids succeed.
    async fn delete_location(&self, id: LocationId) -> Result<(), Error>;
}
