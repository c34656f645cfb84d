//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Las variables ausentes
//! toman un valor por defecto; los valores inválidos devuelven error.

use crate::utils::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use tracing::Level;

/// Configuración del entorno
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub log_level: Level,
    pub seed_file: Option<PathBuf>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: Level::INFO,
            seed_file: None,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Leer la configuración con una función de búsqueda arbitraria
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();

        let environment = lookup("ENVIRONMENT")
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.environment);

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value.trim().parse::<Level>().map_err(|_| {
                AppError::Config(format!("LOG_LEVEL inválido: '{}'", value))
            })?,
            None => defaults.log_level,
        };

        let seed_file = lookup("VEHICLE_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            log_level,
            seed_file,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
