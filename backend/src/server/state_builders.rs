//! Wiring of Diesel repositories into the domain services behind `HttpState`.

use std::sync::Arc;

use mugs::domain::{LocationService, MugService, UserService};
use mugs::inbound::http::state::HttpState;
use mugs::outbound::persistence::{
    DbPool, DieselLocationRepository, DieselMugRepository, DieselUserRepository,
};

/// Build the handler state with every port backed by `pool`.
///
/// The user service reuses the mug service for `list_mugs_for_user`.
pub(super) fn build_http_state(pool: &DbPool) -> HttpState {
    let mugs = Arc::new(MugService::new(Arc::new(DieselMugRepository::new(
        pool.clone(),
    ))));
    let users = Arc::new(UserService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::clone(&mugs),
    ));
    let locations = Arc::new(LocationService::new(Arc::new(
        DieselLocationRepository::new(pool.clone()),
    )));
    HttpState::from_services(users, mugs, locations)
}
