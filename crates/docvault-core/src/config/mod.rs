//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod logging;
pub mod share;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;
pub use self::share::{RedemptionPolicy, ShareConfig, TTL_CEILING_MINUTES};

use crate::error::AppError;

/// Root application configuration.
///
/// Deserialization target for the merged configuration sources: base file,
/// environment overlay, then `DOCVAULT__*` environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Share link settings.
    #[serde(default)]
    pub share: ShareConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    #[serde(default)]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges the base file at `path` (extension optional), an optional
    /// `config/{env}` overlay, and environment variables prefixed with
    /// `DOCVAULT__`, then validates the result.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let base = path.trim_end_matches(".toml");
        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DOCVAULT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        let share = &self.share;
        if share.max_ttl_minutes <= 0 || share.max_ttl_minutes > TTL_CEILING_MINUTES {
            return Err(AppError::configuration(format!(
                "share.max_ttl_minutes must be within 1..={TTL_CEILING_MINUTES}"
            )));
        }
        if !(0..=TTL_CEILING_MINUTES).contains(&share.sweep_retention_minutes) {
            return Err(AppError::configuration(format!(
                "share.sweep_retention_minutes must be within 0..={TTL_CEILING_MINUTES}"
            )));
        }
        if share.default_ttl_minutes <= 0 || share.default_ttl_minutes > share.max_ttl_minutes {
            return Err(AppError::configuration(format!(
                "share.default_ttl_minutes must be within 1..={}",
                share.max_ttl_minutes
            )));
        }
        if share.max_token_attempts == 0 {
            return Err(AppError::configuration(
                "share.max_token_attempts must be at least 1",
            ));
        }
        if share.public_base_url.trim().is_empty() {
            return Err(AppError::configuration("share.public_base_url must be set"));
        }
        if self.auth.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must be set"));
        }
        Ok(())
    }
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    2
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_ttl_above_max_is_rejected() {
        let mut config = AppConfig::default();
        config.share.default_ttl_minutes = config.share.max_ttl_minutes + 1;
        let err = config.validate().unwrap_err();
        assert!(err.is(crate::error::ErrorKind::Configuration));
    }

    #[test]
    fn test_ttl_and_retention_ceiling() {
        let mut config = AppConfig::default();
        config.share.max_ttl_minutes = i64::MAX / 2;
        assert!(config.validate().is_err());

        config.share.max_ttl_minutes = TTL_CEILING_MINUTES;
        assert!(config.validate().is_ok());

        config.share.sweep_retention_minutes = i64::MAX;
        assert!(config.validate().is_err());
        config.share.sweep_retention_minutes = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_token_attempts_rejected() {
        let mut config = AppConfig::default();
        config.share.max_token_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml", "nonexistent-env").expect("load");
        assert_eq!(config.share.default_ttl_minutes, 60);
        assert_eq!(config.server.port, 8080);
    }
}
