//! Domain primitives, services and ports.
//!
//! Purpose: define the immutable entities (users, locations, mugs), the
//! ports that separate them from adapters, and the services implementing
//! the driving ports. Nothing here depends on HTTP or Diesel.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `User`, `Location`, `Mug` and their `*Payload` write inputs.
//! - `UserWithMugs`, `LocationWithMugs`: eagerly loaded aggregates.
//! - `UserService`, `MugService`, `LocationService`.

mod audit;
pub mod error;
mod ids;
mod location;
mod location_service;
mod mug;
mod mug_service;
pub mod ports;
mod trace_id;
mod user;
mod user_service;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::audit::AuditStamps;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{LocationId, MugId, UserId};
pub use self::location::{Location, LocationDetails, LocationPayload};
pub use self::location_service::LocationService;
pub use self::mug::{LocationWithMugs, Mug, MugDetails, MugPayload, UserWithMugs};
pub use self::mug_service::MugService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDetails, UserPayload};
pub use self::user_service::UserService;
