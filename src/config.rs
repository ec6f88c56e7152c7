//! Server configuration loaded from environment variables.
//!
//! Every setting has a default so the server starts against a local
//! Postgres with no configuration at all.

use std::net::{IpAddr, SocketAddr};

use tracing::warn;

use crate::error::Result;
use crate::store::StoreConfig;

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Socket address for the HTTP API.
    /// Env: `SERVER_ADDRESS` + `SERVER_PORT`
    /// Default: `0.0.0.0:8080`
    pub http_addr: SocketAddr,

    /// Chat store connection settings.
    /// Env: `DATABASE_URL`, or `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`,
    /// plus `DB_MAX_CONNECTIONS` and `DB_COMMAND_TIMEOUT_MS`
    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], 8080).into(),
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Malformed values are logged and replaced by their defaults, except
    /// `DATABASE_URL`, which must parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("SERVER_ADDRESS") {
            match addr.parse::<IpAddr>() {
                Ok(ip) => config.http_addr.set_ip(ip),
                Err(_) => warn!(value = %addr, "Invalid SERVER_ADDRESS, using default"),
            }
        }

        if let Some(port) = lookup("SERVER_PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.http_addr.set_port(port),
                Err(_) => warn!(value = %port, "Invalid SERVER_PORT, using default"),
            }
        }

        if let Some(url) = lookup("DATABASE_URL") {
            config.store = StoreConfig::from_connection_string(&url)?;
        } else {
            if let Some(host) = lookup("DB_HOST") {
                config.store.host = host;
            }
            if let Some(port) = lookup("DB_PORT") {
                match port.parse::<u16>() {
                    Ok(port) => config.store.port = port,
                    Err(_) => warn!(value = %port, "Invalid DB_PORT, using default"),
                }
            }
            if let Some(user) = lookup("DB_USER") {
                config.store.user = user;
            }
            if let Some(password) = lookup("DB_PASSWORD") {
                config.store.password = password;
            }
            if let Some(name) = lookup("DB_NAME") {
                config.store.database = name;
            }
        }

        if let Some(val) = lookup("DB_MAX_CONNECTIONS") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.store.max_pool_size = n,
                _ => warn!(value = %val, "Invalid DB_MAX_CONNECTIONS, using default"),
            }
        }

        if let Some(val) = lookup("DB_COMMAND_TIMEOUT_MS") {
            match val.parse::<u64>() {
                Ok(ms) if ms > 0 => config.store.command_timeout_ms = ms,
                _ => warn!(value = %val, "Invalid DB_COMMAND_TIMEOUT_MS, using default"),
            }
        }

        // RUST_LOG is read by tracing-subscriber's EnvFilter directly.

        Ok(config)
    }
}
