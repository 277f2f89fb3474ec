//! Cédula validation errors.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Machine-readable reason a candidate was rejected.
///
/// Codes are locale-independent and stable; use them for tests, logs and
/// metrics. For user-facing text see [`CedulaError::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    NotAString,
    InvalidLength,
    NonNumeric,
    InvalidProvince,
    InvalidThirdDigit,
    CheckDigitMismatch,
}

impl RejectionReason {
    /// Every reason, in the order the checks run.
    pub const ALL: [RejectionReason; 6] = [
        Self::NotAString,
        Self::InvalidLength,
        Self::NonNumeric,
        Self::InvalidProvince,
        Self::InvalidThirdDigit,
        Self::CheckDigitMismatch,
    ];

    /// The reason code as it appears on the wire.
    pub fn code(self) -> &'static str {
        match self {
            Self::NotAString => "NOT_A_STRING",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::NonNumeric => "NON_NUMERIC",
            Self::InvalidProvince => "INVALID_PROVINCE",
            Self::InvalidThirdDigit => "INVALID_THIRD_DIGIT",
            Self::CheckDigitMismatch => "CHECK_DIGIT_MISMATCH",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::NotAString => 0,
            Self::InvalidLength => 1,
            Self::NonNumeric => 2,
            Self::InvalidProvince => 3,
            Self::InvalidThirdDigit => 4,
            Self::CheckDigitMismatch => 5,
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A failed cédula validation.
///
/// Each variant carries the detail that triggered it. `Display` gives an
/// English message suitable for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CedulaError {
    /// Input was not text (null, number, array, ...)
    #[error("Cedula must be a string")]
    NotAString,

    /// Trimmed input did not have exactly 10 characters
    #[error("Cedula must have exactly 10 digits, got {length} characters")]
    InvalidLength { length: usize },

    /// Input contained a character other than `0`-`9`
    #[error("Cedula must contain only digits")]
    NonNumeric,

    /// The two-digit prefix is not an issuing province
    #[error("Invalid province code: {code}")]
    InvalidProvince { code: String },

    /// The third digit marks a non-natural-person identifier
    #[error("Invalid third digit: {digit} (must be less than 6)")]
    InvalidThirdDigit { digit: u8 },

    /// Check digit does not match the first nine digits
    #[error("Check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch { expected: u8, found: u8 },
}

impl CedulaError {
    /// The machine-readable reason for this error.
    pub fn reason(&self) -> RejectionReason {
        match self {
            Self::NotAString => RejectionReason::NotAString,
            Self::InvalidLength { .. } => RejectionReason::InvalidLength,
            Self::NonNumeric => RejectionReason::NonNumeric,
            Self::InvalidProvince { .. } => RejectionReason::InvalidProvince,
            Self::InvalidThirdDigit { .. } => RejectionReason::InvalidThirdDigit,
            Self::CheckDigitMismatch { .. } => RejectionReason::CheckDigitMismatch,
        }
    }

    /// A user-facing message in the given locale.
    pub fn message(&self, locale: Locale) -> String {
        locale.message_for(self)
    }
}
