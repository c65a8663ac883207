//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `MUGS_*` environment variables and an optional
//! configuration file, in increasing order of precedence as defined by
//! OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_IDLE: u32 = 2;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the `mugs` server binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MUGS")]
pub struct ServerSettings {
    /// Socket address to bind, for example `127.0.0.1:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Required to start the server.
    pub database_url: Option<String>,
    pub db_max_connections: Option<u32>,
    pub db_min_idle: Option<u32>,
    pub db_connection_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving. Defaults to `true`.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Whether embedded migrations run at start-up, `true` unless disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Pool configuration for `database_url`, or `None` when it is unset.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url()?;
        Some(
            PoolConfig::new(url)
                .with_max_size(self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS))
                .with_min_idle(Some(self.db_min_idle.unwrap_or(DEFAULT_MIN_IDLE)))
                .with_connection_timeout(Duration::from_secs(
                    self.db_connection_timeout_secs
                        .unwrap_or(DEFAULT_CONNECTION_TIMEOUT_SECS),
                )),
        )
    }
}
