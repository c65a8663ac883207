//! Mugs API handlers.
//!
//! ```text
//! GET    /mugs
//! GET    /mug/{id}
//! POST   /mug
//! PUT    /mug
//! DELETE /mug/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Error, MugId, MugPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{MugBody, MugRequestBody, bodies};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

fn mug_id(raw: &str) -> Result<MugId, Error> {
    parse_uuid(raw, FieldName::new("id")).map(MugId::from_uuid)
}

#[utoipa::path(
    get,
    path = "/mugs",
    responses(
        (status = 200, description = "Mugs with owner and location", body = [MugBody]),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["mugs"],
    operation_id = "listMugs"
)]
#[get("/mugs")]
pub async fn list_mugs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<MugBody>>> {
    let mugs = state.mugs.list_mugs().await?;
    Ok(web::Json(bodies(&mugs)))
}

#[utoipa::path(
    get,
    path = "/mug/{id}",
    params(("id" = String, Path, description = "Mug identifier")),
    responses(
        (status = 200, description = "Mug", body = MugBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown mug", body = ErrorSchema)
    ),
    tags = ["mugs"],
    operation_id = "getMug"
)]
#[get("/mug/{id}")]
pub async fn get_mug(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MugBody>> {
    let mug = state.mugs.get_mug(mug_id(&path)?).await?;
    Ok(web::Json(MugBody::from(&mug)))
}

/// Create a mug for an existing user and location.
///
/// Only `user.id` and `location.id` are read from the nested objects. A
/// reference to a missing row is rejected with `400 invalid_request`.
#[utoipa::path(
    post,
    path = "/mug",
    request_body = MugRequestBody,
    responses(
        (status = 200, description = "Created mug", body = MugBody),
        (status = 400, description = "Invalid request or unknown reference", body = ErrorSchema)
    ),
    tags = ["mugs"],
    operation_id = "createMug"
)]
#[post("/mug")]
pub async fn create_mug(
    state: web::Data<HttpState>,
    payload: web::Json<MugRequestBody>,
) -> ApiResult<web::Json<MugBody>> {
    let payload = MugPayload::try_from(payload.into_inner())?;
    let mug = state.mugs_command.create_mug(payload).await?;
    Ok(web::Json(MugBody::from(&mug)))
}

#[utoipa::path(
    put,
    path = "/mug",
    request_body = MugRequestBody,
    responses(
        (status = 200, description = "Updated mug", body = MugBody),
        (status = 400, description = "Invalid request or unknown reference", body = ErrorSchema),
        (status = 404, description = "Unknown mug", body = ErrorSchema)
    ),
    tags = ["mugs"],
    operation_id = "updateMug"
)]
#[put("/mug")]
pub async fn update_mug(
    state: web::Data<HttpState>,
    payload: web::Json<MugRequestBody>,
) -> ApiResult<web::Json<MugBody>> {
    let payload = MugPayload::try_from(payload.into_inner())?;
    let mug = state.mugs_command.update_mug(payload).await?;
    Ok(web::Json(MugBody::from(&mug)))
}

#[utoipa::path(
    delete,
    path = "/mug/{id}",
    params(("id" = String, Path, description = "Mug identifier")),
    responses(
        (status = 200, description = "Deleted, or already absent"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema)
    ),
    tags = ["mugs"],
    operation_id = "deleteMug"
)]
#[delete("/mug/{id}")]
pub async fn delete_mug(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.mugs_command.delete_mug(mug_id(&path)?).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "mugs_tests.rs"]
mod tests;
