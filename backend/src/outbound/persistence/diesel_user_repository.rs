//! PostgreSQL-backed [`UserRepository`] using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserDetails, UserId, UserWithMugs};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, classify_pool_error};
use super::mappers::{new_user_row, user_changeset, user_from_row, user_with_mugs_from_rows};
use super::models::{LocationRow, MugRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{locations, mugs, users};

/// Diesel implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    UserRepositoryError::connection(classify_pool_error(error))
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => UserRepositoryError::connection(message),
        DieselFailure::UniqueViolation(constraint) => {
            UserRepositoryError::unique_violation(constraint)
        }
        DieselFailure::Query(message) => UserRepositoryError::query(message),
        DieselFailure::ForeignKeyViolation(constraint) => {
            UserRepositoryError::query(format!("unexpected foreign key violation on {constraint}"))
        }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(user_from_row).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(*id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(user_from_row))
    }

    async fn find_by_id_with_mugs(
        &self,
        id: UserId,
    ) -> Result<Option<UserWithMugs>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(UserRow, Option<MugRow>, Option<LocationRow>)> = users::table
            .left_join(mugs::table)
            .left_join(locations::table.on(locations::id.eq(mugs::location_id)))
            .filter(users::id.eq(id.as_uuid()))
            .select((
                UserRow::as_select(),
                Option::<MugRow>::as_select(),
                Option::<LocationRow>::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(user_with_mugs_from_rows(rows))
    }

    async fn insert(&self, details: &UserDetails) -> Result<User, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_user_row(details))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(user_from_row(row))
    }

    async fn update(
        &self,
        id: UserId,
        details: &UserDetails,
    ) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = diesel::update(users::table.find(*id.as_uuid()))
            .set((
                user_changeset(details),
                users::modified_at.eq(diesel::dsl::now),
            ))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(user_from_row))
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(users::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
