//! config/server_config.rs
//! Configuración del servidor, leída del entorno (o de un .env).

use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Seed alternativo en JSON; si es None se usa el embebido.
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            workers: 1,
            seed_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env`, pero con una fuente de variables inyectable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let host = lookup("MOCK_HOST").unwrap_or(defaults.host);
        let port = match lookup("MOCK_PORT") {
            Some(v) => v
                .parse()
                .with_context(|| format!("MOCK_PORT must be a port number, got '{}'", v))?,
            None => defaults.port,
        };
        let workers = match lookup("MOCK_WORKERS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("MOCK_WORKERS must be a positive integer, got '{}'", v))?,
            None => defaults.workers,
        };
        let seed_file = lookup("MOCK_SEED_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(ServerConfig {
            host,
            port,
            workers: workers.max(1),
            seed_file,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
