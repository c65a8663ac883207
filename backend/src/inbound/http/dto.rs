//! Request and response bodies shared by the entity handlers.
//!
//! Request bodies accept the full JSON model. Every field is optional at the
//! serde level so a missing value is reported as `missing_field` with its
//! camelCase name. Store-managed fields (`createdAt`, `modifiedAt`, reverse
//! `mugs` collections) are accepted but ignored.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    AuditStamps, Error, Location, LocationDetails, LocationPayload, LocationWithMugs, Mug,
    MugDetails, MugPayload, User, UserDetails, UserPayload, UserWithMugs,
};
use crate::inbound::http::validation::{
    FieldName, parse_optional_id, parse_required_id, require,
};

const ID: FieldName = FieldName::new("id");

/// User create/update body.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequestBody {
    /// Ignored on create; required on update.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Option<String>,
    #[schema(example = "Ann")]
    pub first_name: Option<String>,
    #[schema(example = "Lee")]
    pub last_name: Option<String>,
    #[schema(example = "ann@example.com")]
    pub email: Option<String>,
}

impl TryFrom<UserRequestBody> for UserPayload {
    type Error = Error;

    fn try_from(body: UserRequestBody) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_optional_id(body.id.as_deref(), ID)?,
            details: UserDetails {
                first_name: require(body.first_name, FieldName::new("firstName"))?,
                last_name: require(body.last_name, FieldName::new("lastName"))?,
                email: body.email,
            },
        })
    }
}

/// Location create/update body.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequestBody {
    /// Ignored on create; required on update.
    pub id: Option<String>,
    #[schema(example = "Kitchen")]
    pub name: Option<String>,
    #[schema(example = "Top shelf")]
    pub description: Option<String>,
}

impl TryFrom<LocationRequestBody> for LocationPayload {
    type Error = Error;

    fn try_from(body: LocationRequestBody) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_optional_id(body.id.as_deref(), ID)?,
            details: LocationDetails {
                name: require(body.name, FieldName::new("name"))?,
                description: body.description,
            },
        })
    }
}

/// Reference to an owning entity inside a mug body. Only `id` is read.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
pub struct EntityRefBody {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Option<String>,
}

/// Mug create/update body.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MugRequestBody {
    /// Ignored on create; required on update.
    pub id: Option<String>,
    #[schema(example = "Blue Mug")]
    pub display_name: Option<String>,
    pub user: Option<EntityRefBody>,
    pub location: Option<EntityRefBody>,
}

impl TryFrom<MugRequestBody> for MugPayload {
    type Error = Error;

    fn try_from(body: MugRequestBody) -> Result<Self, Self::Error> {
        let user = body.user.and_then(|reference| reference.id);
        let location = body.location.and_then(|reference| reference.id);
        Ok(Self {
            id: parse_optional_id(body.id.as_deref(), ID)?,
            details: MugDetails {
                display_name: require(body.display_name, FieldName::new("displayName"))?,
                user_id: parse_required_id(user.as_deref(), FieldName::new("user.id"))?,
                location_id: parse_required_id(
                    location.as_deref(),
                    FieldName::new("location.id"),
                )?,
            },
        })
    }
}

fn rfc3339_pair(audit: AuditStamps) -> (String, String) {
    (
        audit.created_at().to_rfc3339(),
        audit.modified_at().to_rfc3339(),
    )
}

/// Stored user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    /// RFC 3339 creation instant.
    pub created_at: String,
    /// RFC 3339 instant of the last update.
    pub modified_at: String,
}

impl From<&User> for UserBody {
    fn from(user: &User) -> Self {
        let (created_at, modified_at) = rfc3339_pair(user.audit());
        Self {
            id: user.id().to_string(),
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
            email: user.email().map(str::to_owned),
            created_at,
            modified_at,
        }
    }
}

/// Stored location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationBody {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub modified_at: String,
}

impl From<&Location> for LocationBody {
    fn from(location: &Location) -> Self {
        let (created_at, modified_at) = rfc3339_pair(location.audit());
        Self {
            id: location.id().to_string(),
            name: location.name().to_owned(),
            description: location.description().map(str::to_owned),
            created_at,
            modified_at,
        }
    }
}

/// Stored mug with its owner and location embedded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MugBody {
    pub id: String,
    pub display_name: String,
    pub user: UserBody,
    pub location: LocationBody,
}

impl From<&Mug> for MugBody {
    fn from(mug: &Mug) -> Self {
        Self {
            id: mug.id().to_string(),
            display_name: mug.display_name().to_owned(),
            user: UserBody::from(mug.user()),
            location: LocationBody::from(mug.location()),
        }
    }
}

/// User with every mug they own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct UserWithMugsBody {
    #[serde(flatten)]
    pub user: UserBody,
    pub mugs: Vec<MugBody>,
}

impl From<&UserWithMugs> for UserWithMugsBody {
    fn from(aggregate: &UserWithMugs) -> Self {
        Self {
            user: UserBody::from(&aggregate.user),
            mugs: aggregate.mugs.iter().map(MugBody::from).collect(),
        }
    }
}

/// Location with every mug stored there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct LocationWithMugsBody {
    #[serde(flatten)]
    pub location: LocationBody,
    pub mugs: Vec<MugBody>,
}

impl From<&LocationWithMugs> for LocationWithMugsBody {
    fn from(aggregate: &LocationWithMugs) -> Self {
        Self {
            location: LocationBody::from(&aggregate.location),
            mugs: aggregate.mugs.iter().map(MugBody::from).collect(),
        }
    }
}

/// Map a list of domain values into response bodies.
pub(crate) fn bodies<'a, T: 'a, B: From<&'a T>>(items: &'a [T]) -> Vec<B> {
    items.iter().map(B::from).collect()
}
