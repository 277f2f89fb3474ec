//! Error types for the Cedula MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation failures themselves are not errors at this level: they are data, see
//! [`crate::domain::CedulaError`].

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors returned by the validation service for malformed requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Batch request had no items
    #[error("Batch must contain at least one cedula")]
    EmptyBatch,

    /// Batch request exceeded the configured limit
    #[error("Batch too large: {size} items (max {max})")]
    BatchTooLarge { size: usize, max: usize },
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "CEDULA_LOCALE".to_string(),
            reason: "Unsupported locale: fr".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CEDULA_LOCALE: Unsupported locale: fr"
        );

        let err = ServiceError::EmptyBatch;
        assert_eq!(err.to_string(), "Batch must contain at least one cedula");
    }

    #[test]
    fn test_batch_too_large_variant() {
        let err = ServiceError::BatchTooLarge { size: 150, max: 100 };
        assert!(err.to_string().contains("150"));
        assert!(err.to_string().contains("100"));
    }
}
