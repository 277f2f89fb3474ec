//! Cedula value object and check-digit validation.

use super::errors::CedulaError;
use super::province::Province;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of characters in a cédula.
pub const CEDULA_LENGTH: usize = 10;

/// Weights applied to the first nine digits.
const COEFFICIENTS: [u8; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

/// A validated Ecuadorian national identity number.
///
/// Holds exactly ten ASCII digits with a known province prefix, a third
/// digit below 6 and a matching check digit. Leading zeros are preserved.
///
/// # Example
///
/// ```
/// use cedula_mcp_server::domain::Cedula;
///
/// let cedula = Cedula::new(" 1710034065 ").unwrap();
/// assert_eq!(cedula.as_str(), "1710034065");
/// assert_eq!(cedula.province_name(), "Pichincha");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cedula {
    digits: String,
    province: &'static Province,
}

impl Cedula {
    /// Validate `candidate` and build a Cedula.
    ///
    /// Surrounding whitespace is trimmed first. Checks run in order and
    /// stop at the first failure: length, charset, province, third digit,
    /// check digit.
    ///
    /// # Errors
    ///
    /// Returns the [`CedulaError`] for the first failing check.
    pub fn new(candidate: &str) -> Result<Self, CedulaError> {
        let trimmed = candidate.trim();

        let length = trimmed.chars().count();
        if length != CEDULA_LENGTH {
            return Err(CedulaError::InvalidLength { length });
        }

        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CedulaError::NonNumeric);
        }

        // All ASCII from here on, so byte offsets are char offsets.
        let digits: Vec<u8> = trimmed.bytes().map(|b| b - b'0').collect();

        let code = &trimmed[..2];
        let province = Province::from_code(code).ok_or_else(|| CedulaError::InvalidProvince {
            code: code.to_string(),
        })?;

        let third = digits[2];
        if third >= 6 {
            return Err(CedulaError::InvalidThirdDigit { digit: third });
        }

        let mut first_nine = [0u8; 9];
        first_nine.copy_from_slice(&digits[..9]);
        let expected = compute_check_digit(&first_nine);
        let found = digits[9];
        if expected != found {
            return Err(CedulaError::CheckDigitMismatch { expected, found });
        }

        Ok(Self {
            digits: trimmed.to_string(),
            province,
        })
    }

    /// Validate a dynamically typed value.
    ///
    /// Anything other than a JSON string fails with
    /// [`CedulaError::NotAString`]; strings go through [`Cedula::new`].
    pub fn from_value(value: &serde_json::Value) -> Result<Self, CedulaError> {
        match value {
            serde_json::Value::String(s) => Self::new(s),
            _ => Err(CedulaError::NotAString),
        }
    }

    /// The ten digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.digits
    }

    /// The issuing province.
    pub fn province(&self) -> &'static Province {
        self.province
    }

    /// Two-digit province code.
    pub fn province_code(&self) -> &'static str {
        self.province.code
    }

    /// Province display name.
    pub fn province_name(&self) -> &'static str {
        self.province.name
    }

    /// The tenth digit.
    pub fn check_digit(&self) -> u8 {
        self.digits.as_bytes()[CEDULA_LENGTH - 1] - b'0'
    }

    /// Form suitable for logs: province prefix and last two digits only.
    pub fn masked(&self) -> String {
        mask(&self.digits)
    }
}

/// Compute the check digit for the first nine digits of a cédula.
///
/// Each digit is multiplied by its coefficient (2,1,2,...); products of 10
/// or more have 9 subtracted. The check digit is `10 - (sum % 10)`, or 0
/// when the sum is a multiple of 10.
///
/// # Example
///
/// ```
/// use cedula_mcp_server::domain::compute_check_digit;
///
/// assert_eq!(compute_check_digit(&[1, 7, 1, 0, 0, 3, 4, 0, 6]), 5);
/// ```
pub fn compute_check_digit(first_nine: &[u8; 9]) -> u8 {
    let total: u32 = first_nine
        .iter()
        .zip(COEFFICIENTS.iter())
        .map(|(&d, &c)| {
            let p = u32::from(d) * u32::from(c);
            if p >= 10 {
                p - 9
            } else {
                p
            }
        })
        .sum();

    match total % 10 {
        0 => 0,
        r => (10 - r) as u8,
    }
}

/// Validate a candidate string.
///
/// Shorthand for [`Cedula::new`].
pub fn validate(candidate: &str) -> Result<Cedula, CedulaError> {
    Cedula::new(candidate)
}

/// Validate a dynamically typed candidate.
///
/// Shorthand for [`Cedula::from_value`].
pub fn validate_value(value: &serde_json::Value) -> Result<Cedula, CedulaError> {
    Cedula::from_value(value)
}

/// Mask arbitrary input for logging, keeping at most the first and last
/// two characters.
pub fn mask(input: &str) -> String {
    let chars: Vec<char> = input.trim().chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let mut out = String::with_capacity(chars.len());
    out.extend(&chars[..2]);
    out.extend(std::iter::repeat('*').take(chars.len() - 4));
    out.extend(&chars[chars.len() - 2..]);
    out
}

impl FromStr for Cedula {
    type Err = CedulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Cedula {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

// Serde support - serialize as string
impl Serialize for Cedula {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.digits.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Cedula {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cedula::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cedula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}
