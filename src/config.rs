//! Configuration management for the Cedula MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! Nothing here writes to stdout, which MCP uses for communication.

use crate::error::{ConfigError, ConfigResult};
use crate::locale::Locale;
use std::env;

/// Upper bound accepted for `CEDULA_MAX_BATCH_SIZE`.
pub const MAX_BATCH_SIZE_LIMIT: usize = 10_000;

/// Configuration for the Cedula MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Language for user-facing rejection messages (default: es)
    pub locale: Locale,

    /// Maximum number of cedulas per batch request (default: 100)
    pub max_batch_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CEDULA_LOCALE`: Message locale, `es` or `en` (default: es)
    /// - `CEDULA_MAX_BATCH_SIZE`: Batch limit, 1-10000 (default: 100)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let locale = match env::var("CEDULA_LOCALE") {
            Ok(val) => val
                .parse::<Locale>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CEDULA_LOCALE".to_string(),
                    reason,
                })?,
            Err(_) => Locale::default(),
        };

        let max_batch_size = Self::parse_env_usize("CEDULA_MAX_BATCH_SIZE", 100)?;
        if max_batch_size == 0 || max_batch_size > MAX_BATCH_SIZE_LIMIT {
            return Err(ConfigError::InvalidValue {
                var: "CEDULA_MAX_BATCH_SIZE".to_string(),
                reason: format!("Must be between 1 and {}", MAX_BATCH_SIZE_LIMIT),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            locale,
            max_batch_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: Locale::default(),
            max_batch_size: 100,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["CEDULA_LOCALE", "CEDULA_MAX_BATCH_SIZE", "LOG_LEVEL"];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.max_batch_size, 100);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.max_batch_size, 100);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CEDULA_LOCALE", "en-US");
        guard.set("CEDULA_MAX_BATCH_SIZE", "250");
        guard.set("LOG_LEVEL", "debug");

        let result = Config::from_env();
        assert!(result.is_ok(), "Config should be valid: {:?}", result);

        let config = result.unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.max_batch_size, 250);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_locale() {
        let mut guard = EnvGuard::new();
        guard.set("CEDULA_LOCALE", "fr");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "CEDULA_LOCALE");
                assert!(reason.contains("fr"));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_batch_size_out_of_range() {
        for value in ["0", "10001"] {
            let mut guard = EnvGuard::new();
            guard.set("CEDULA_MAX_BATCH_SIZE", value);

            match Config::from_env() {
                Err(ConfigError::InvalidValue { var, .. }) => {
                    assert_eq!(var, "CEDULA_MAX_BATCH_SIZE");
                }
                other => panic!("Expected InvalidValue for {}, got: {:?}", value, other),
            }
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_usize() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_CEDULA_USIZE", "42");

        let result = Config::parse_env_usize("TEST_CEDULA_USIZE", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_usize("NONEXISTENT_CEDULA_VAR", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_usize_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_CEDULA_USIZE_INVALID", "not-a-number");

        let result = Config::parse_env_usize("TEST_CEDULA_USIZE_INVALID", 10);
        assert!(result.is_err());
    }
}
