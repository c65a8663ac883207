//! Location domain service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    LocationRepository, LocationRepositoryError, LocationsCommand, LocationsQuery,
};
use crate::domain::{Error, Location, LocationId, LocationPayload, LocationWithMugs};

/// Location service implementing [`LocationsQuery`] and [`LocationsCommand`].
#[derive(Clone)]
pub struct LocationService<R> {
    locations_repo: Arc<R>,
}

impl<R> LocationService<R> {
    pub fn new(locations_repo: Arc<R>) -> Self {
        Self { locations_repo }
    }
}

fn location_not_found(id: LocationId) -> Error {
    Error::not_found(format!("location {id} not found")).with_details(json!({
        "resource": "location",
        "id": id.to_string(),
    }))
}

fn map_location_repository_error(error: LocationRepositoryError) -> Error {
    match error {
        LocationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("location repository unavailable: {message}"))
        }
        LocationRepositoryError::Query { message } => {
            Error::internal(format!("location repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> LocationsQuery for LocationService<R>
where
    R: LocationRepository,
{
    async fn list_locations(&self) -> Result<Vec<Location>, Error> {
        info!("listing locations");
        self.locations_repo
            .list_all()
            .await
            .map_err(map_location_repository_error)
    }

    async fn get_location(&self, id: LocationId) -> Result<Location, Error> {
        info!(location_id = %id, "fetching location");
        self.locations_repo
            .find_by_id(id)
            .await
            .map_err(map_location_repository_error)?
            .ok_or_else(|| location_not_found(id))
    }

    async fn get_location_with_mugs(&self, id: LocationId) -> Result<LocationWithMugs, Error> {
        info!(location_id = %id, "fetching location with mugs");
        self.locations_repo
            .find_by_id_with_mugs(id)
            .await
            .map_err(map_location_repository_error)?
            .ok_or_else(|| location_not_found(id))
    }
}

#[async_trait]
impl<R> LocationsCommand for LocationService<R>
where
    R: LocationRepository,
{
    async fn create_location(&self, payload: LocationPayload) -> Result<Location, Error> {
        let LocationPayload { id, details } = payload;
        info!(ignored_id = ?id, "creating location");
        self.locations_repo
            .insert(&details)
            .await
            .map_err(map_location_repository_error)
    }

    async fn update_location(&self, payload: LocationPayload) -> Result<Location, Error> {
        let LocationPayload { id, details } = payload;
        let Some(id) = id else {
            return Err(Error::not_found("location id is required for update"));
        };
        info!(location_id = %id, "updating location");

        if self
            .locations_repo
            .find_by_id(id)
            .await
            .map_err(map_location_repository_error)?
            .is_none()
        {
            return Err(location_not_found(id));
        }

        self.locations_repo
            .update(id, &details)
            .await
            .map_err(map_location_repository_error)?
            .ok_or_else(|| location_not_found(id))
    }

    async fn delete_location(&self, id: LocationId) -> Result<(), Error> {
        info!(location_id = %id, "deleting location");
        self.locations_repo
            .delete_by_id(id)
            .await
            .map_err(map_location_repository_error)
    }
}

#[cfg(test)]
#[path = "location_service_tests.rs"]
mod tests;
