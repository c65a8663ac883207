//! `mugs` server entry point: loads settings, migrates, serves.

mod server;

use std::net::SocketAddr;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use mugs::inbound::http::health::HealthState;
use mugs::outbound::persistence::{DbPool, run_pending_migrations};
use mugs::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServerSettings::load().map_err(|err| eyre!("failed to load server settings: {err}"))?;
    let pool_config = settings
        .pool_config()
        .ok_or_else(|| eyre!("MUGS_DATABASE_URL must be set"))?;
    let bind_addr: SocketAddr = settings
        .bind_addr()
        .parse()
        .wrap_err_with(|| format!("invalid bind address {}", settings.bind_addr()))?;

    if settings.run_migrations() {
        let url = pool_config.database_url().to_owned();
        let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
            .await
            .wrap_err("migration task panicked")??;
        info!(count = applied.len(), "database schema up to date");
    }

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to build database pool")?;

    let config = ServerConfig::new(bind_addr, pool);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::make_metrics());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await.wrap_err("server terminated with an error")
}
