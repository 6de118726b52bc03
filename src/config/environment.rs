//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas tienen un valor por defecto salvo `DATABASE_URL` con almacenamiento
//! PostgreSQL.

use anyhow::{bail, Context, Result};
use std::env;

/// Motor de almacenamiento del repositorio de vehículos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => bail!("STORAGE_BACKEND must be 'postgres' or 'memory', got '{}'", other),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub storage_backend: StorageBackend,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            storage_backend: StorageBackend::Postgres,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", port))?,
            None => defaults.port,
        };

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => StorageBackend::parse(&value)?,
            None => defaults.storage_backend,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            cors_origins,
            storage_backend,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
