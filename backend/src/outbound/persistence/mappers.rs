//! Conversions between Diesel rows and domain models.
//!
//! Row to model conversions are lossless and infallible. Model to row
//! conversions borrow from the domain value and carry no id or timestamps.

use tracing::warn;

use crate::domain::{
    AuditStamps, Location, LocationDetails, LocationId, LocationWithMugs, Mug, MugDetails, MugId,
    User, UserDetails, UserId, UserWithMugs,
};

use super::models::{
    LocationChangeset, LocationRow, MugRow, MugWriteRow, NewLocationRow, NewUserRow,
    UserChangeset, UserRow,
};

pub(crate) fn user_from_row(row: UserRow) -> User {
    User::new(
        UserId::from_uuid(row.id),
        UserDetails {
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        },
        AuditStamps::new(row.created_at, row.modified_at),
    )
}

pub(crate) fn location_from_row(row: LocationRow) -> Location {
    Location::new(
        LocationId::from_uuid(row.id),
        LocationDetails {
            name: row.name,
            description: row.description,
        },
        AuditStamps::new(row.created_at, row.modified_at),
    )
}

pub(crate) fn mug_from_rows(mug: MugRow, user: UserRow, location: LocationRow) -> Mug {
    mug_with(mug, user_from_row(user), location_from_row(location))
}

fn mug_with(mug: MugRow, user: User, location: Location) -> Mug {
    Mug::new(MugId::from_uuid(mug.id), mug.display_name, user, location)
}

pub(crate) fn new_user_row(details: &UserDetails) -> NewUserRow<'_> {
    NewUserRow {
        first_name: &details.first_name,
        last_name: &details.last_name,
        email: details.email.as_deref(),
    }
}

pub(crate) fn user_changeset(details: &UserDetails) -> UserChangeset<'_> {
    UserChangeset {
        first_name: &details.first_name,
        last_name: &details.last_name,
        email: details.email.as_deref(),
    }
}

pub(crate) fn new_location_row(details: &LocationDetails) -> NewLocationRow<'_> {
    NewLocationRow {
        name: &details.name,
        description: details.description.as_deref(),
    }
}

pub(crate) fn location_changeset(details: &LocationDetails) -> LocationChangeset<'_> {
    LocationChangeset {
        name: &details.name,
        description: details.description.as_deref(),
    }
}

pub(crate) fn mug_write_row(details: &MugDetails) -> MugWriteRow<'_> {
    MugWriteRow {
        display_name: &details.display_name,
        user_id: *details.user_id.as_uuid(),
        location_id: *details.location_id.as_uuid(),
    }
}

/// Fold `users LEFT JOIN mugs LEFT JOIN locations` rows for one user.
///
/// Returns `None` for an empty result (unknown user). A user without mugs
/// yields a single row whose right-hand side is all null.
pub(crate) fn user_with_mugs_from_rows(
    rows: Vec<(UserRow, Option<MugRow>, Option<LocationRow>)>,
) -> Option<UserWithMugs> {
    let mut rows = rows.into_iter();
    let (user_row, first_mug, first_location) = rows.next()?;
    let user = user_from_row(user_row);

    let mugs = std::iter::once((first_mug, first_location))
        .chain(rows.map(|(_, mug, location)| (mug, location)))
        .filter_map(|pair| match pair {
            (Some(mug), Some(location)) => {
                Some(mug_with(mug, user.clone(), location_from_row(location)))
            }
            (Some(mug), None) => {
                warn!(mug_id = %mug.id, "mug row joined without its location");
                None
            }
            (None, _) => None,
        })
        .collect();

    Some(UserWithMugs { user, mugs })
}

/// Fold `locations LEFT JOIN mugs LEFT JOIN users` rows for one location.
pub(crate) fn location_with_mugs_from_rows(
    rows: Vec<(LocationRow, Option<MugRow>, Option<UserRow>)>,
) -> Option<LocationWithMugs> {
    let mut rows = rows.into_iter();
    let (location_row, first_mug, first_user) = rows.next()?;
    let location = location_from_row(location_row);

    let mugs = std::iter::once((first_mug, first_user))
        .chain(rows.map(|(_, mug, user)| (mug, user)))
        .filter_map(|pair| match pair {
            (Some(mug), Some(user)) => Some(mug_with(mug, user_from_row(user), location.clone())),
            (Some(mug), None) => {
                warn!(mug_id = %mug.id, "mug row joined without its owner");
                None
            }
            (None, _) => None,
        })
        .collect();

    Some(LocationWithMugs { location, mugs })
}
