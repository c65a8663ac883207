//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    LocationsCommand, LocationsQuery, MugsCommand, MugsQuery, UsersCommand, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub mugs: Arc<dyn MugsQuery>,
    pub mugs_command: Arc<dyn MugsCommand>,
    pub locations: Arc<dyn LocationsQuery>,
    pub locations_command: Arc<dyn LocationsCommand>,
}

impl HttpState {
    /// Build state from one implementation per entity serving both the query
    /// and the command side.
    ///
    /// # Examples
    /// ```ignore
    /// let state = HttpState::from_services(users, mugs, locations);
    /// ```
    pub fn from_services<U, M, L>(users: Arc<U>, mugs: Arc<M>, locations: Arc<L>) -> Self
    where
        U: UsersQuery + UsersCommand + 'static,
        M: MugsQuery + MugsCommand + 'static,
        L: LocationsQuery + LocationsCommand + 'static,
    {
        Self {
            users: users.clone(),
            users_command: users,
            mugs: mugs.clone(),
            mugs_command: mugs,
            locations: locations.clone(),
            locations_command: locations,
        }
    }
}
