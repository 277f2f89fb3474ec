//! Call-site wrappers for form and UI layers.
//!
//! The validator returns a full `Result`; these adapters reduce it to the
//! shapes form libraries and field renderers expect.

pub mod form;

pub use form::{field_error, field_error_value, is_valid, is_valid_value};
