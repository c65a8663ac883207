//! Database provisioning on an embedded cluster.
//!
//! Database creation goes through the `postgres` client so Diesel's
//! transaction handling never wraps `DROP DATABASE`. Schemas come from the
//! crate's own embedded migrations.

use mugs::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

use super::format_postgres_error;

/// Drop and recreate `name` on `cluster`.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!(
            "DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE); CREATE DATABASE \"{name}\";"
        ))
        .map_err(|err| format_postgres_error(&err))
}

/// Fresh database with every migration applied. Returns its URL.
///
/// Must run outside a Tokio runtime: the migration harness blocks.
pub fn migrated_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    reset_database(cluster, name)?;
    let url = cluster.connection().database_url(name);
    run_pending_migrations(&url).map_err(|err| err.to_string())?;
    Ok(url)
}
