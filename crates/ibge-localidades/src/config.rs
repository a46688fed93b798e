use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::localidades::{DISTRITOS_API_URL, ESTADOS_API_URL};

/// Application configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. config.yaml file (if exists)
/// 3. Environment variables with IBGE_ prefix (always wins)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub localidades: LocalidadesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalidadesConfig {
    /// Base URL for the states (estados) endpoint.
    #[serde(default = "default_estados_url")]
    pub estados_url: String,

    /// Base URL for the districts (distritos) endpoint.
    #[serde(default = "default_distritos_url")]
    pub distritos_url: String,

    /// Optional per-request timeout in seconds. When unset, the HTTP
    /// client's default behavior applies (no timeout).
    pub timeout_secs: Option<u64>,
}

impl Default for LocalidadesConfig {
    fn default() -> Self {
        Self {
            estados_url: default_estados_url(),
            distritos_url: default_distritos_url(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_estados_url() -> String {
    ESTADOS_API_URL.to_string()
}

fn default_distritos_url() -> String {
    DISTRITOS_API_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. config.yaml file (if exists)
    /// 3. Environment variables with IBGE_ prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("IBGE_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base_url("localidades.estados_url", &self.localidades.estados_url)?;
        validate_base_url("localidades.distritos_url", &self.localidades.distritos_url)?;

        if self.localidades.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "localidades.timeout_secs cannot be 0".into(),
            ));
        }

        Ok(())
    }
}

fn validate_base_url(key: &str, url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::Validation(format!("{key} is required")));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{key} must start with http:// or https://, got: '{url}'"
        )));
    }

    Ok(())
}
