use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

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
    #[error("failed to parse {name} as boolean: {value}")]
    ParseBool { name: String, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_path: PathBuf,

    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // ASP slug backfill
    pub backfill_on_start: bool,
    pub backfill_batch_size: i64,
    pub backfill_batch_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Database
            database_path: PathBuf::from(env_or_default(
                "DATABASE_PATH",
                "./data/catalog.sqlite",
            )),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,

            // ASP slug backfill
            backfill_on_start: parse_env_bool("BACKFILL_ON_START", true)?,
            backfill_batch_size: parse_env_i64("BACKFILL_BATCH_SIZE", 500)?,
            backfill_batch_delay: Duration::from_millis(parse_env_u64(
                "BACKFILL_BATCH_DELAY_MS",
                200,
            )?),
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backfill_batch_size <= 0 {
            return Err(ConfigError::InvalidValue {
                name: "BACKFILL_BATCH_SIZE".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.web_host.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "WEB_HOST".to_string(),
                message: "cannot be empty".to_string(),
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

fn parse_env_i64(name: &str, default: i64) -> Result<i64, ConfigError> {
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

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::ParseBool {
                name: name.to_string(),
                value: val,
            }),
        },
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "DATABASE_PATH",
        "WEB_HOST",
        "WEB_PORT",
        "BACKFILL_ON_START",
        "BACKFILL_BATCH_SIZE",
        "BACKFILL_BATCH_DELAY_MS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.database_path, PathBuf::from("./data/catalog.sqlite"));
        assert_eq!(config.web_host, "0.0.0.0");
        assert_eq!(config.web_port, 8080);
        assert!(config.backfill_on_start);
        assert_eq!(config.backfill_batch_size, 500);
        assert_eq!(config.backfill_batch_delay, Duration::from_millis(200));
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("WEB_PORT", "9000");
        std::env::set_var("BACKFILL_ON_START", "off");
        std::env::set_var("BACKFILL_BATCH_SIZE", "25");
        let config = Config::from_env().unwrap();
        assert_eq!(config.web_port, 9000);
        assert!(!config.backfill_on_start);
        assert_eq!(config.backfill_batch_size, 25);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_bool() {
        clear_env();
        std::env::set_var("BACKFILL_ON_START", "maybe");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ParseBool { .. }));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env();
        std::env::set_var("WEB_PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::ParseInt { .. })
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_zero_batch() {
        clear_env();
        std::env::set_var("BACKFILL_BATCH_SIZE", "0");
        let config = Config::from_env().unwrap();
        assert!(config.validate().is_err());
        clear_env();
    }
}
