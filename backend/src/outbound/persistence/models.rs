//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer. Insert and changeset rows
//! deliberately have no `id` or timestamp fields: the store generates ids
//! and `modified_at` is set by the update statement itself.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{locations, mugs, users};

/// Row read from `users`.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
}

/// Full overwrite of the mutable user columns; `None` clears the email.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserChangeset<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
}

/// Row read from `locations`.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LocationRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = locations)]
pub(crate) struct NewLocationRow<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = locations)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct LocationChangeset<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

/// Row read from `mugs`.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = mugs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MugRow {
    pub id: Uuid,
    pub display_name: String,
    pub user_id: Uuid,
    pub location_id: Uuid,
}

/// Used for both insert and full-overwrite update of a mug.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = mugs)]
pub(crate) struct MugWriteRow<'a> {
    pub display_name: &'a str,
    pub user_id: Uuid,
    pub location_id: Uuid,
}
