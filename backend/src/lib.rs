//! Mugs backend library.
//!
//! Users own mugs, mugs are kept at locations. The crate is laid out
//! hexagonally: `domain` holds entities, services and ports; `inbound::http`
//! exposes them over actix-web; `outbound::persistence` stores them in
//! PostgreSQL through Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
