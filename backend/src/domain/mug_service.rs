//! Mug domain service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{MugRepository, MugRepositoryError, MugsCommand, MugsQuery};
use crate::domain::{Error, Mug, MugId, MugPayload, UserId};

/// Mug service implementing [`MugsQuery`] and [`MugsCommand`].
#[derive(Clone)]
pub struct MugService<R> {
    mugs_repo: Arc<R>,
}

impl<R> MugService<R> {
    pub fn new(mugs_repo: Arc<R>) -> Self {
        Self { mugs_repo }
    }
}

fn mug_not_found(id: MugId) -> Error {
    Error::not_found(format!("mug {id} not found")).with_details(json!({
        "resource": "mug",
        "id": id.to_string(),
    }))
}

fn map_mug_repository_error(error: MugRepositoryError) -> Error {
    match error {
        MugRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("mug repository unavailable: {message}"))
        }
        MugRepositoryError::Query { message } => {
            Error::internal(format!("mug repository error: {message}"))
        }
        MugRepositoryError::MissingReference { constraint } => {
            Error::invalid_request("mug references a user or location that does not exist")
                .with_details(json!({
                    "constraint": constraint,
                    "code": "missing_reference",
                }))
        }
    }
}

#[async_trait]
impl<R> MugsQuery for MugService<R>
where
    R: MugRepository,
{
    async fn list_mugs(&self) -> Result<Vec<Mug>, Error> {
        info!("listing mugs");
        self.mugs_repo
            .list_all()
            .await
            .map_err(map_mug_repository_error)
    }

    async fn get_mug(&self, id: MugId) -> Result<Mug, Error> {
        info!(mug_id = %id, "fetching mug");
        self.mugs_repo
            .find_by_id(id)
            .await
            .map_err(map_mug_repository_error)?
            .ok_or_else(|| mug_not_found(id))
    }

    async fn list_mugs_for_user(&self, user_id: UserId) -> Result<Vec<Mug>, Error> {
        info!(user_id = %user_id, "listing mugs for user");
        self.mugs_repo
            .list_by_user_id(user_id)
            .await
            .map_err(map_mug_repository_error)
    }
}

#[async_trait]
impl<R> MugsCommand for MugService<R>
where
    R: MugRepository,
{
    async fn create_mug(&self, payload: MugPayload) -> Result<Mug, Error> {
        let MugPayload { id, details } = payload;
        info!(
            ignored_id = ?id,
            user_id = %details.user_id,
            location_id = %details.location_id,
            "creating mug"
        );
        self.mugs_repo
            .insert(&details)
            .await
            .map_err(map_mug_repository_error)
    }

    async fn update_mug(&self, payload: MugPayload) -> Result<Mug, Error> {
        let MugPayload { id, details } = payload;
        let Some(id) = id else {
            return Err(Error::not_found("mug id is required for update"));
        };
        info!(mug_id = %id, "updating mug");

        if self
            .mugs_repo
            .find_by_id(id)
            .await
            .map_err(map_mug_repository_error)?
            .is_none()
        {
            return Err(mug_not_found(id));
        }

        self.mugs_repo
            .update(id, &details)
            .await
            .map_err(map_mug_repository_error)?
            .ok_or_else(|| mug_not_found(id))
    }

    async fn delete_mug(&self, id: MugId) -> Result<(), Error> {
        info!(mug_id = %id, "deleting mug");
        self.mugs_repo
            .delete_by_id(id)
            .await
            .map_err(map_mug_repository_error)
    }
}

#[cfg(test)]
#[path = "mug_service_tests.rs"]
mod tests;
