//! User-facing message localization.
//!
//! Rejection reasons are locale-independent codes; this module turns them
//! into text for display under a form field or in a tool response.

use crate::domain::CedulaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language for user-facing messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish (default, the language of the platform's users)
    #[default]
    Es,
    /// English
    En,
}

impl Locale {
    /// Localized message for a validation error.
    pub fn message_for(self, err: &CedulaError) -> String {
        match (self, err) {
            (Self::Es, CedulaError::NotAString) => "La cédula debe ser un texto".to_string(),
            (Self::Es, CedulaError::InvalidLength { .. }) => {
                "La cédula debe tener exactamente 10 dígitos".to_string()
            }
            (Self::Es, CedulaError::NonNumeric) => {
                "La cédula solo debe contener números".to_string()
            }
            (Self::Es, CedulaError::InvalidProvince { code }) => {
                format!("Código de provincia inválido: {}", code)
            }
            (Self::Es, CedulaError::InvalidThirdDigit { .. }) => {
                "El tercer dígito debe ser menor a 6".to_string()
            }
            (Self::Es, CedulaError::CheckDigitMismatch { .. }) => {
                "Cédula inválida: dígito verificador incorrecto".to_string()
            }
            (Self::En, CedulaError::NotAString) => "The ID number must be text".to_string(),
            (Self::En, CedulaError::InvalidLength { .. }) => {
                "The ID number must have exactly 10 digits".to_string()
            }
            (Self::En, CedulaError::NonNumeric) => {
                "The ID number must contain only digits".to_string()
            }
            (Self::En, CedulaError::InvalidProvince { code }) => {
                format!("Invalid province code: {}", code)
            }
            (Self::En, CedulaError::InvalidThirdDigit { .. }) => {
                "The third digit must be less than 6".to_string()
            }
            (Self::En, CedulaError::CheckDigitMismatch { .. }) => {
                "Invalid ID number: incorrect check digit".to_string()
            }
        }
    }

    /// Localized placeholder for an unknown province.
    pub fn unknown_province(self) -> &'static str {
        match self {
            Self::Es => "Provincia desconocida",
            Self::En => crate::domain::UNKNOWN_PROVINCE,
        }
    }

    /// The primary language subtag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Parse a language tag. Only the primary subtag is considered, so
    /// `es-EC` and `en_US` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
