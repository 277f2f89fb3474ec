//! Application service layer.
//!
//! Services sit between the MCP handlers and the pure domain: they apply
//! configuration (locale, batch limits), log, and record metrics.

mod validation_service;

pub use validation_service::{
    BatchReport, CedulaService, CedulaServiceImpl, ProvinceLookup, ValidationReport,
};
