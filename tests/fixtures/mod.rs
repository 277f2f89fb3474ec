//! Shared fixtures for cédula integration tests.
//!
//! Builds synthetic but well-formed identifiers so tests do not depend on
//! real people's ID numbers.

#![allow(dead_code)]

use cedula_mcp_server::domain::compute_check_digit;

/// Golden vector from the published algorithm.
pub const PICHINCHA_CEDULA: &str = "1710034065";

/// Parse nine ASCII digits into an array.
pub fn digits9(prefix: &str) -> [u8; 9] {
    assert_eq!(prefix.len(), 9, "prefix must have 9 digits: {:?}", prefix);
    let mut out = [0u8; 9];
    for (slot, b) in out.iter_mut().zip(prefix.bytes()) {
        assert!(b.is_ascii_digit(), "prefix must be numeric: {:?}", prefix);
        *slot = b - b'0';
    }
    out
}

/// Append the correct check digit to a nine-digit prefix.
pub fn with_check_digit(prefix: &str) -> String {
    format!("{}{}", prefix, compute_check_digit(&digits9(prefix)))
}

/// A valid cédula issued in `province_code` (two digits).
pub fn valid_cedula_for(province_code: &str) -> String {
    with_check_digit(&format!("{}1234567", province_code))
}

/// Deterministic spread of nine-digit prefixes with a valid province and
/// a third digit below 6.
pub fn sample_prefixes() -> Vec<String> {
    let codes: Vec<String> = (1..=24)
        .map(|n| format!("{:02}", n))
        .chain(std::iter::once("30".to_string()))
        .collect();

    let mut prefixes = Vec::new();
    for (i, code) in codes.iter().enumerate() {
        for third in 0..6u32 {
            // Vary the tail so products >= 10 get exercised
            let tail = (i as u32 * 7919 + third * 104_729) % 1_000_000;
            prefixes.push(format!("{}{}{:06}", code, third, tail));
        }
    }
    prefixes
}
