//! Driving port for location reads.

use async_trait::async_trait;

use crate::domain::{Error, Location, LocationId, LocationWithMugs};

/// Read operations on locations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationsQuery: Send + Sync {
    async fn list_locations(&self) -> Result<Vec<Location>, Error>;

    async fn get_location(&self, id: LocationId) -> Result<Location, Error>;

    /// One location with every mug stored there.
    async fn get_location_with_mugs(&self, id: LocationId) -> Result<LocationWithMugs, Error>;
}
