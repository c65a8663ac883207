//! HTTP inbound adapter exposing the users, mugs and locations endpoints.

pub mod dto;
pub mod error;
pub mod health;
pub mod locations;
pub mod mugs;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every entity handler plus the JSON extractor configuration.
///
/// Callers provide `web::Data<HttpState>` at the application level.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(users::list_users)
        .service(users::list_user_mugs)
        .service(users::get_user_with_mugs)
        .service(users::list_user_mugs_alias)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(mugs::list_mugs)
        .service(mugs::get_mug)
        .service(mugs::create_mug)
        .service(mugs::update_mug)
        .service(mugs::delete_mug)
        .service(locations::list_locations)
        .service(locations::get_location_with_mugs)
        .service(locations::get_location)
        .service(locations::create_location)
        .service(locations::update_location)
        .service(locations::delete_location);
}
