//! Domain value objects and types.
//!
//! This module contains the cédula value object, its validation errors and
//! the province table. Everything here is pure: no I/O, no shared state.

pub mod cedula;
pub mod errors;
pub mod province;

pub use cedula::{compute_check_digit, mask, validate, validate_value, Cedula, CEDULA_LENGTH};
pub use errors::{CedulaError, RejectionReason};
pub use province::{all_provinces, is_valid_code, name_for_code, Province, UNKNOWN_PROVINCE};
