//! Predicate and field-message adapters.

use crate::domain::Cedula;
use crate::locale::Locale;

/// `true` if `candidate` is a valid cédula.
///
/// # Example
///
/// ```
/// use cedula_mcp_server::adapters::is_valid;
///
/// assert!(is_valid("1710034065"));
/// assert!(!is_valid("1710034064"));
/// ```
pub fn is_valid(candidate: &str) -> bool {
    Cedula::new(candidate).is_ok()
}

/// `true` if `value` is a string holding a valid cédula.
pub fn is_valid_value(value: &serde_json::Value) -> bool {
    Cedula::from_value(value).is_ok()
}

/// Message to render under a form field, or `None` when valid.
pub fn field_error(candidate: &str, locale: Locale) -> Option<String> {
    Cedula::new(candidate).err().map(|e| e.message(locale))
}

/// Like [`field_error`] for dynamically typed input.
pub fn field_error_value(value: &serde_json::Value, locale: Locale) -> Option<String> {
    Cedula::from_value(value).err().map(|e| e.message(locale))
}
