use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::auth::ShieldMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Catalog
    pub catalog_path: PathBuf,
    pub per_page: usize,

    // Static assets
    pub assets_dir: PathBuf,

    // Sessions
    pub session_ttl: Duration,

    // Shield
    pub shield_mode: ShieldMode,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,

            // Catalog
            catalog_path: PathBuf::from(env_or_default("CATALOG_PATH", "./data/catalog.json")),
            per_page: parse_env_usize("PER_PAGE", 20)?,

            // Static assets
            assets_dir: PathBuf::from(env_or_default("ASSETS_DIR", "./assets")),

            // Sessions
            session_ttl: Duration::from_secs(parse_env_u64("SESSION_TTL_SECS", 3600)?),

            // Shield
            shield_mode: parse_shield_mode(&env_or_default("SHIELD_MODE", "live"))?,
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::InvalidValue {
                name: "PER_PAGE".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.session_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "SESSION_TTL_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_shield_mode(value: &str) -> Result<ShieldMode, ConfigError> {
    match value.to_lowercase().as_str() {
        "live" => Ok(ShieldMode::Live),
        "dry-run" | "dryrun" => Ok(ShieldMode::DryRun),
        _ => Err(ConfigError::InvalidValue {
            name: "SHIELD_MODE".to_string(),
            message: format!("expected 'live' or 'dry-run', got '{value}'"),
        }),
    }
}
