//! Locations API handlers.
//!
//! ```text
//! GET    /locations
//! GET    /location/{id}
//! GET    /location/{id}/with-mugs
//! POST   /location
//! PUT    /location
//! DELETE /location/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Error, LocationId, LocationPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{LocationBody, LocationRequestBody, LocationWithMugsBody, bodies};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

fn location_id(raw: &str) -> Result<LocationId, Error> {
    parse_uuid(raw, FieldName::new("id")).map(LocationId::from_uuid)
}

#[utoipa::path(
    get,
    path = "/locations",
    responses(
        (status = 200, description = "Locations", body = [LocationBody]),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["locations"],
    operation_id = "listLocations"
)]
#[get("/locations")]
pub async fn list_locations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<LocationBody>>> {
    let locations = state.locations.list_locations().await?;
    Ok(web::Json(bodies(&locations)))
}

#[utoipa::path(
    get,
    path = "/location/{id}",
    params(("id" = String, Path, description = "Location identifier")),
    responses(
        (status = 200, description = "Location", body = LocationBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown location", body = ErrorSchema)
    ),
    tags = ["locations"],
    operation_id = "getLocation"
)]
#[get("/location/{id}")]
pub async fn get_location(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<LocationBody>> {
    let location = state.locations.get_location(location_id(&path)?).await?;
    Ok(web::Json(LocationBody::from(&location)))
}

/// Fetch a location with the mugs stored there.
#[utoipa::path(
    get,
    path = "/location/{id}/with-mugs",
    params(("id" = String, Path, description = "Location identifier")),
    responses(
        (status = 200, description = "Location with mugs", body = LocationWithMugsBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown location", body = ErrorSchema)
    ),
    tags = ["locations"],
    operation_id = "getLocationWithMugs"
)]
#[get("/location/{id}/with-mugs")]
pub async fn get_location_with_mugs(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<LocationWithMugsBody>> {
    let aggregate = state
        .locations
        .get_location_with_mugs(location_id(&path)?)
        .await?;
    Ok(web::Json(LocationWithMugsBody::from(&aggregate)))
}

#[utoipa::path(
    post,
    path = "/location",
    request_body = LocationRequestBody,
    responses(
        (status = 200, description = "Created location", body = LocationBody),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["locations"],
    operation_id = "createLocation"
)]
#[post("/location")]
pub async fn create_location(
    state: web::Data<HttpState>,
    payload: web::Json<LocationRequestBody>,
) -> ApiResult<web::Json<LocationBody>> {
    let payload = LocationPayload::try_from(payload.into_inner())?;
    let location = state.locations_command.create_location(payload).await?;
    Ok(web::Json(LocationBody::from(&location)))
}

#[utoipa::path(
    put,
    path = "/location",
    request_body = LocationRequestBody,
    responses(
        (status = 200, description = "Updated location", body = LocationBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown location", body = ErrorSchema)
    ),
    tags = ["locations"],
    operation_id = "updateLocation"
)]
#[put("/location")]
pub async fn update_location(
    state: web::Data<HttpState>,
    payload: web::Json<LocationRequestBody>,
) -> ApiResult<web::Json<LocationBody>> {
    let payload = LocationPayload::try_from(payload.into_inner())?;
    let location = state.locations_command.update_location(payload).await?;
    Ok(web::Json(LocationBody::from(&location)))
}

/// Delete a location and the mugs stored there.
#[utoipa::path(
    delete,
    path = "/location/{id}",
    params(("id" = String, Path, description = "Location identifier")),
    responses(
        (status = 200, description = "Deleted, or already absent"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema)
    ),
    tags = ["locations"],
    operation_id = "deleteLocation"
)]
#[delete("/location/{id}")]
pub async fn delete_location(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state
        .locations_command
        .delete_location(location_id(&path)?)
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "locations_tests.rs"]
mod tests;
