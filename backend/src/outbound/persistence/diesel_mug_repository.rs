//! PostgreSQL-backed [`MugRepository`] using Diesel.
//!
//! Every read joins `users` and `locations` so embedded references are
//! loaded in the same statement. Writes reload the joined row inside the
//! writing transaction.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{MugRepository, MugRepositoryError};
use crate::domain::{Mug, MugDetails, MugId, UserId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, classify_pool_error};
use super::mappers::{mug_from_rows, mug_write_row};
use super::models::{LocationRow, MugRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{locations, mugs, users};

type JoinedMugRow = (MugRow, UserRow, LocationRow);

/// Diesel implementation of the mug repository port.
#[derive(Clone)]
pub struct DieselMugRepository {
    pool: DbPool,
}

impl DieselMugRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MugRepositoryError {
    MugRepositoryError::connection(classify_pool_error(error))
}

fn map_diesel_error(error: diesel::result::Error) -> MugRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => MugRepositoryError::connection(message),
        DieselFailure::ForeignKeyViolation(constraint) => {
            MugRepositoryError::missing_reference(constraint)
        }
        DieselFailure::Query(message) => MugRepositoryError::query(message),
        DieselFailure::UniqueViolation(constraint) => {
            MugRepositoryError::query(format!("unexpected unique violation on {constraint}"))
        }
    }
}

/// `mugs INNER JOIN users INNER JOIN locations` projected onto the three
/// row structs.
macro_rules! joined_mugs {
    () => {
        mugs::table
            .inner_join(users::table)
            .inner_join(locations::table)
            .select((
                MugRow::as_select(),
                UserRow::as_select(),
                LocationRow::as_select(),
            ))
    };
}

async fn load_joined(
    conn: &mut AsyncPgConnection,
    id: Uuid,
) -> Result<Option<JoinedMugRow>, diesel::result::Error> {
    joined_mugs!()
        .filter(mugs::id.eq(id))
        .first(conn)
        .await
        .optional()
}

fn into_mugs(rows: Vec<JoinedMugRow>) -> Vec<Mug> {
    rows.into_iter()
        .map(|(mug, user, location)| mug_from_rows(mug, user, location))
        .collect()
}

#[async_trait]
impl MugRepository for DieselMugRepository {
    async fn list_all(&self) -> Result<Vec<Mug>, MugRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<JoinedMugRow> = joined_mugs!()
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(into_mugs(rows))
    }

    async fn find_by_id(&self, id: MugId) -> Result<Option<Mug>, MugRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = load_joined(&mut conn, *id.as_uuid())
            .await
            .map_err(map_diesel_error)?;

        Ok(row.map(|(mug, user, location)| mug_from_rows(mug, user, location)))
    }

    async fn list_by_user_id(&self, user_id: UserId) -> Result<Vec<Mug>, MugRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<JoinedMugRow> = joined_mugs!()
            .filter(mugs::user_id.eq(user_id.as_uuid()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(into_mugs(rows))
    }

    async fn insert(&self, details: &MugDetails) -> Result<Mug, MugRepositoryError> {
        let mut pooled = self.pool.get().await.map_err(map_pool_error)?;
        let conn: &mut AsyncPgConnection = &mut pooled;
        let row = mug_write_row(details);

        let joined = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    let id: Uuid = diesel::insert_into(mugs::table)
                        .values(&row)
                        .returning(mugs::id)
                        .get_result(conn)
                        .await?;
                    load_joined(conn, id)
                        .await?
                        .ok_or(diesel::result::Error::NotFound)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        let (mug, user, location) = joined;
        Ok(mug_from_rows(mug, user, location))
    }

    async fn update(
        &self,
        id: MugId,
        details: &MugDetails,
    ) -> Result<Option<Mug>, MugRepositoryError> {
        let mut pooled = self.pool.get().await.map_err(map_pool_error)?;
        let conn: &mut AsyncPgConnection = &mut pooled;
        let row = mug_write_row(details);
        let target = *id.as_uuid();

        let joined = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    let touched = diesel::update(mugs::table.find(target))
                        .set(&row)
                        .execute(conn)
                        .await?;
                    if touched == 0 {
                        return Ok(None);
                    }
                    load_joined(conn, target).await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(joined.map(|(mug, user, location)| mug_from_rows(mug, user, location)))
    }

    async fn delete_by_id(&self, id: MugId) -> Result<(), MugRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(mugs::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
