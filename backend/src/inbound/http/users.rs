//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /user/{id}
//! GET    /user/{id}/with-mugs
//! GET    /users/{userId}/mugs
//! GET    /user/{userId}/mugs
//! POST   /user
//! PUT    /user
//! DELETE /user/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Error, UserId, UserPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{MugBody, UserBody, UserRequestBody, UserWithMugsBody, bodies};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

fn user_id(raw: &str, field: &'static str) -> Result<UserId, Error> {
    parse_uuid(raw, FieldName::new(field)).map(UserId::from_uuid)
}

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use mugs::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserBody]),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserBody>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(bodies(&users)))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserBody>> {
    let id = user_id(&path, "id")?;
    let user = state.users.get_user(id).await?;
    Ok(web::Json(UserBody::from(&user)))
}

/// Fetch a user together with every mug they own and where it is kept.
#[utoipa::path(
    get,
    path = "/user/{id}/with-mugs",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User with mugs", body = UserWithMugsBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserWithMugs"
)]
#[get("/user/{id}/with-mugs")]
pub async fn get_user_with_mugs(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserWithMugsBody>> {
    let id = user_id(&path, "id")?;
    let aggregate = state.users.get_user_with_mugs(id).await?;
    Ok(web::Json(UserWithMugsBody::from(&aggregate)))
}

async fn mugs_for_user(state: &HttpState, raw: &str) -> ApiResult<web::Json<Vec<MugBody>>> {
    let id = user_id(raw, "userId")?;
    let mugs = state.users.list_mugs_for_user(id).await?;
    Ok(web::Json(bodies(&mugs)))
}

/// List the mugs owned by a user. An unknown user yields an empty list.
#[utoipa::path(
    get,
    path = "/users/{userId}/mugs",
    params(("userId" = String, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Mugs owned by the user", body = [MugBody]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUserMugs"
)]
#[get("/users/{userId}/mugs")]
pub async fn list_user_mugs(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<MugBody>>> {
    mugs_for_user(&state, &path).await
}

/// Singular alias of [`list_user_mugs`].
#[utoipa::path(
    get,
    path = "/user/{userId}/mugs",
    params(("userId" = String, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Mugs owned by the user", body = [MugBody]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUserMugsAlias"
)]
#[get("/user/{userId}/mugs")]
pub async fn list_user_mugs_alias(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<MugBody>>> {
    mugs_for_user(&state, &path).await
}

/// Create a user. Any supplied `id` is discarded.
#[utoipa::path(
    post,
    path = "/user",
    request_body = UserRequestBody,
    responses(
        (status = 200, description = "Created user", body = UserBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already in use", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequestBody>,
) -> ApiResult<web::Json<UserBody>> {
    let payload = UserPayload::try_from(payload.into_inner())?;
    let user = state.users_command.create_user(payload).await?;
    Ok(web::Json(UserBody::from(&user)))
}

/// Overwrite every mutable field of an existing user.
#[utoipa::path(
    put,
    path = "/user",
    request_body = UserRequestBody,
    responses(
        (status = 200, description = "Updated user", body = UserBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 409, description = "Email already in use", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/user")]
pub async fn update_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequestBody>,
) -> ApiResult<web::Json<UserBody>> {
    let payload = UserPayload::try_from(payload.into_inner())?;
    let user = state.users_command.update_user(payload).await?;
    Ok(web::Json(UserBody::from(&user)))
}

/// Delete a user and, through the store, every mug they own.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deleted, or already absent"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = user_id(&path, "id")?;
    state.users_command.delete_user(id).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
