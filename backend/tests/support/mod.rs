//! Shared helper utilities for integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! small helpers live here instead of being copied into each suite.

pub mod cluster_skip;
pub mod embedded_postgres;

#[allow(unused_imports, reason = "not every suite needs every helper")]
pub use cluster_skip::handle_cluster_setup_failure;
#[allow(unused_imports, reason = "not every suite needs every helper")]
pub use embedded_postgres::{migrated_database, reset_database};

/// Render a `postgres` error with its SQLSTATE and detail.
///
/// `postgres::Error`'s `Display` collapses server errors to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}
