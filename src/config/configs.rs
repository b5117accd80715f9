use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub app_name: String,
    pub app_version: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    /// Comma separated list of allowed CORS origins.
    pub cors_origins: String,
}

impl GeneralConfig {
    pub fn cors_origins(&self) -> Vec<&str> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            app_name: defaults::DEFAULT_APP_NAME.to_string(),
            app_version: defaults::DEFAULT_APP_VERSION.to_string(),
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
            debug: defaults::DEFAULT_DEBUG,
            cors_origins: defaults::DEFAULT_CORS_ORIGINS.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_idle: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_DATABASE_URL.to_string(),
            max_connections: defaults::DEFAULT_DB_MAX_CONNECTIONS,
            min_idle: defaults::DEFAULT_DB_MIN_IDLE,
        }
    }
}
