//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler in the inbound HTTP layer together
//! with the request/response bodies and the error envelope wrappers. The
//! document is served by Swagger UI in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::dto::{
    EntityRefBody, LocationBody, LocationRequestBody, LocationWithMugsBody, MugBody,
    MugRequestBody, UserBody, UserRequestBody, UserWithMugsBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mugs backend API",
        description = "CRUD management of users, their mugs and the locations where mugs are kept."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::get_user_with_mugs,
        crate::inbound::http::users::list_user_mugs,
        crate::inbound::http::users::list_user_mugs_alias,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::mugs::list_mugs,
        crate::inbound::http::mugs::get_mug,
        crate::inbound::http::mugs::create_mug,
        crate::inbound::http::mugs::update_mug,
        crate::inbound::http::mugs::delete_mug,
        crate::inbound::http::locations::list_locations,
        crate::inbound::http::locations::get_location,
        crate::inbound::http::locations::get_location_with_mugs,
        crate::inbound::http::locations::create_location,
        crate::inbound::http::locations::update_location,
        crate::inbound::http::locations::delete_location,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserBody,
        UserRequestBody,
        UserWithMugsBody,
        LocationBody,
        LocationRequestBody,
        LocationWithMugsBody,
        MugBody,
        MugRequestBody,
        EntityRefBody,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "users", description = "Users and the mugs they own"),
        (name = "mugs", description = "Mugs with their owner and location"),
        (name = "locations", description = "Places where mugs are kept"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
