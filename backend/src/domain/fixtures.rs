//! Sample domain values shared by unit tests.

use chrono::{TimeZone, Utc};

use super::{
    AuditStamps, Location, LocationDetails, LocationId, Mug, MugDetails, MugId, User, UserDetails,
    UserId,
};

pub(crate) fn stamps() -> AuditStamps {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).single().expect("valid instant");
    let modified = Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).single().expect("valid instant");
    AuditStamps::new(created, modified)
}

pub(crate) fn ann_details() -> UserDetails {
    UserDetails {
        first_name: "Ann".to_owned(),
        last_name: "Lee".to_owned(),
        email: Some("ann@x.io".to_owned()),
    }
}

pub(crate) fn ann() -> User {
    User::new(UserId::random(), ann_details(), stamps())
}

pub(crate) fn kitchen_details() -> LocationDetails {
    LocationDetails {
        name: "Kitchen".to_owned(),
        description: Some("Top shelf".to_owned()),
    }
}

pub(crate) fn kitchen() -> Location {
    Location::new(LocationId::random(), kitchen_details(), stamps())
}

pub(crate) fn blue_mug_details(user: &User, location: &Location) -> MugDetails {
    MugDetails {
        display_name: "Blue Mug".to_owned(),
        user_id: user.id(),
        location_id: location.id(),
    }
}

pub(crate) fn blue_mug(user: User, location: Location) -> Mug {
    Mug::new(MugId::random(), "Blue Mug", user, location)
}
