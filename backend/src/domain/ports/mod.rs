//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by persistence adapters.
//! Driving ports (`*Query` / `*Command`) are implemented by the domain
//! services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod location_repository;
mod locations_command;
mod locations_query;
mod mug_repository;
mod mugs_command;
mod mugs_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use location_repository::MockLocationRepository;
pub use location_repository::{LocationRepository, LocationRepositoryError};
#[cfg(test)]
pub use locations_command::MockLocationsCommand;
pub use locations_command::LocationsCommand;
#[cfg(test)]
pub use locations_query::MockLocationsQuery;
pub use locations_query::LocationsQuery;
#[cfg(test)]
pub use mug_repository::MockMugRepository;
pub use mug_repository::{MugRepository, MugRepositoryError};
#[cfg(test)]
pub use mugs_command::MockMugsCommand;
pub use mugs_command::MugsCommand;
#[cfg(test)]
pub use mugs_query::MockMugsQuery;
pub use mugs_query::MugsQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
