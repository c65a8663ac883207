//! PostgreSQL-backed [`LocationRepository`] using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LocationRepository, LocationRepositoryError};
use crate::domain::{Location, LocationDetails, LocationId, LocationWithMugs};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, classify_pool_error};
use super::mappers::{
    location_changeset, location_from_row, location_with_mugs_from_rows, new_location_row,
};
use super::models::{LocationRow, MugRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{locations, mugs, users};

/// Diesel implementation of the location repository port.
#[derive(Clone)]
pub struct DieselLocationRepository {
    pool: DbPool,
}

impl DieselLocationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> LocationRepositoryError {
    LocationRepositoryError::connection(classify_pool_error(error))
}

fn map_diesel_error(error: diesel::result::Error) -> LocationRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => LocationRepositoryError::connection(message),
        DieselFailure::Query(message) => LocationRepositoryError::query(message),
        DieselFailure::UniqueViolation(constraint)
        | DieselFailure::ForeignKeyViolation(constraint) => {
            LocationRepositoryError::query(format!("unexpected constraint violation on {constraint}"))
        }
    }
}

#[async_trait]
impl LocationRepository for DieselLocationRepository {
    async fn list_all(&self) -> Result<Vec<Location>, LocationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<LocationRow> = locations::table
            .select(LocationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(location_from_row).collect())
    }

    async fn find_by_id(&self, id: LocationId) -> Result<Option<Location>, LocationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<LocationRow> = locations::table
            .find(*id.as_uuid())
            .select(LocationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(location_from_row))
    }

    async fn find_by_id_with_mugs(
        &self,
        id: LocationId,
    ) -> Result<Option<LocationWithMugs>, LocationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(LocationRow, Option<MugRow>, Option<UserRow>)> = locations::table
            .left_join(mugs::table)
            .left_join(users::table.on(users::id.eq(mugs::user_id)))
            .filter(locations::id.eq(id.as_uuid()))
            .select((
                LocationRow::as_select(),
                Option::<MugRow>::as_select(),
                Option::<UserRow>::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(location_with_mugs_from_rows(rows))
    }

    async fn insert(&self, details: &LocationDetails) -> Result<Location, LocationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: LocationRow = diesel::insert_into(locations::table)
            .values(&new_location_row(details))
            .returning(LocationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(location_from_row(row))
    }

    async fn update(
        &self,
        id: LocationId,
        details: &LocationDetails,
    ) -> Result<Option<Location>, LocationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<LocationRow> = diesel::update(locations::table.find(*id.as_uuid()))
            .set((
                location_changeset(details),
                locations::modified_at.eq(diesel::dsl::now),
            ))
            .returning(LocationRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(location_from_row))
    }

    async fn delete_by_id(&self, id: LocationId) -> Result<(), LocationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(locations::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
