//! PostgreSQL persistence adapters using Diesel.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types; the row structs and table definitions stay private to this module.
//!
//! # Example
//!
//! ```no_run
//! use mugs::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), mugs::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/mugs")).await?;
//! let users = DieselUserRepository::new(pool);
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_location_repository;
mod diesel_mug_repository;
mod diesel_user_repository;
mod mappers;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_location_repository::DieselLocationRepository;
pub use diesel_mug_repository::DieselMugRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
