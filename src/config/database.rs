//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de PostgreSQL con SQLx.

use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;
use std::time::Duration;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }

    /// Leer `DATABASE_URL` y los tamaños del pool del entorno
    pub fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL")
            .context("DATABASE_URL must be set in environment variables")?;
        let mut config = Self::new(url);

        if let Ok(value) = env::var("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = value
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?;
        }
        if let Ok(value) = env::var("DATABASE_MIN_CONNECTIONS") {
            config.min_connections = value
                .parse()
                .context("DATABASE_MIN_CONNECTIONS must be a valid number")?;
        }

        Ok(config)
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_pool_defaults() {
        let config = DatabaseConfig::new("postgres://localhost/vehicles");
        assert_eq!(config.url, "postgres://localhost/vehicles");
        assert_eq!(config.max_connections, 20);
        assert!(config.min_connections <= config.max_connections);
    }
}
