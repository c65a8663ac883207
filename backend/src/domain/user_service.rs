//! User domain service.
//!
//! Implements the user driving ports on top of [`UserRepository`]. Listing a
//! user's mugs is delegated to the mug side through [`MugsQuery`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{MugsQuery, UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use crate::domain::{Error, Mug, User, UserId, UserPayload, UserWithMugs};

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R, M> {
    users_repo: Arc<R>,
    mugs: Arc<M>,
}

impl<R, M> UserService<R, M> {
    pub fn new(users_repo: Arc<R>, mugs: Arc<M>) -> Self {
        Self { users_repo, mugs }
    }
}

fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found")).with_details(json!({
        "resource": "user",
        "id": id.to_string(),
    }))
}

fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserRepositoryError::UniqueViolation { constraint } => {
            Error::conflict("a user with this email already exists").with_details(json!({
                "field": "email",
                "constraint": constraint,
                "code": "duplicate_email",
            }))
        }
    }
}

#[async_trait]
impl<R, M> UsersQuery for UserService<R, M>
where
    R: UserRepository,
    M: MugsQuery,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        info!("listing users");
        self.users_repo
            .list_all()
            .await
            .map_err(map_user_repository_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        info!(user_id = %id, "fetching user");
        self.users_repo
            .find_by_id(id)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }

    async fn get_user_with_mugs(&self, id: UserId) -> Result<UserWithMugs, Error> {
        info!(user_id = %id, "fetching user with mugs");
        self.users_repo
            .find_by_id_with_mugs(id)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }

    async fn list_mugs_for_user(&self, id: UserId) -> Result<Vec<Mug>, Error> {
        self.mugs.list_mugs_for_user(id).await
    }
}

#[async_trait]
impl<R, M> UsersCommand for UserService<R, M>
where
    R: UserRepository,
    M: MugsQuery,
{
    async fn create_user(&self, payload: UserPayload) -> Result<User, Error> {
        let UserPayload { id, details } = payload;
        info!(ignored_id = ?id, "creating user");
        self.users_repo
            .insert(&details)
            .await
            .map_err(map_user_repository_error)
    }

    async fn update_user(&self, payload: UserPayload) -> Result<User, Error> {
        let UserPayload { id, details } = payload;
        let Some(id) = id else {
            return Err(Error::not_found("user id is required for update"));
        };
        info!(user_id = %id, "updating user");

        // Check and write are separate statements; a concurrent delete
        // between them surfaces as `None` from `update`.
        if self
            .users_repo
            .find_by_id(id)
            .await
            .map_err(map_user_repository_error)?
            .is_none()
        {
            return Err(user_not_found(id));
        }

        self.users_repo
            .update(id, &details)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        info!(user_id = %id, "deleting user");
        self.users_repo
            .delete_by_id(id)
            .await
            .map_err(map_user_repository_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
