//! Cedula MCP Server - Ecuadorian national ID (cédula) validation.
//!
//! This library provides a pure validator for the ten-digit Ecuadorian
//! identity number, the province table it depends on, and an MCP server
//! that exposes both to AI assistants.
//!
//! # Architecture
//!
//! - **domain**: `Cedula` value object, check-digit algorithm, province table
//! - **locale**: Localized user-facing rejection messages
//! - **adapters**: Boolean predicate and field-message wrappers for forms
//! - **services**: Validation service with logging and metrics
//! - **metrics**: Accepted/rejected counters
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **server**: MCP protocol server
//!
//! # Example
//!
//! ```
//! use cedula_mcp_server::domain::{validate, RejectionReason};
//!
//! let cedula = validate("1710034065").unwrap();
//! assert_eq!(cedula.province_name(), "Pichincha");
//!
//! let err = validate("171003406A").unwrap_err();
//! assert_eq!(err.reason(), RejectionReason::NonNumeric);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod locale;
pub mod metrics;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Cedula, CedulaError, Province, RejectionReason};
pub use error::{ConfigError, ServiceError};
pub use locale::Locale;
pub use metrics::{Metrics, MetricsSummary};
pub use server::CedulaMcpServer;
pub use services::{BatchReport, CedulaService, CedulaServiceImpl, ProvinceLookup, ValidationReport};
