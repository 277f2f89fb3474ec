//! Province table for cédula prefixes.

use serde::Serialize;
use std::fmt;

/// Name returned by [`name_for_code`] when a code is not in the table.
pub const UNKNOWN_PROVINCE: &str = "Unknown province";

/// A province entry: the two-digit prefix and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Province {
    /// Two-digit code, zero-padded (`"01"`..`"24"`, `"30"`)
    pub code: &'static str,

    /// Display name
    pub name: &'static str,
}

/// All issuing provinces, in enumeration order.
///
/// Code `30` is not a geographic province: it is assigned to Ecuadorians
/// registered abroad and always comes last.
static PROVINCES: [Province; 25] = [
    Province { code: "01", name: "Azuay" },
    Province { code: "02", name: "Bolívar" },
    Province { code: "03", name: "Cañar" },
    Province { code: "04", name: "Carchi" },
    Province { code: "05", name: "Cotopaxi" },
    Province { code: "06", name: "Chimborazo" },
    Province { code: "07", name: "El Oro" },
    Province { code: "08", name: "Esmeraldas" },
    Province { code: "09", name: "Guayas" },
    Province { code: "10", name: "Imbabura" },
    Province { code: "11", name: "Loja" },
    Province { code: "12", name: "Los Ríos" },
    Province { code: "13", name: "Manabí" },
    Province { code: "14", name: "Morona Santiago" },
    Province { code: "15", name: "Napo" },
    Province { code: "16", name: "Pastaza" },
    Province { code: "17", name: "Pichincha" },
    Province { code: "18", name: "Tungurahua" },
    Province { code: "19", name: "Zamora Chinchipe" },
    Province { code: "20", name: "Galápagos" },
    Province { code: "21", name: "Sucumbíos" },
    Province { code: "22", name: "Orellana" },
    Province { code: "23", name: "Santo Domingo de los Tsáchilas" },
    Province { code: "24", name: "Santa Elena" },
    Province { code: "30", name: "Ecuatorianos en el Exterior" },
];

impl Province {
    /// Look up a province by its two-digit code.
    ///
    /// The code must match exactly: `"1"` or `" 17"` are not found.
    pub fn from_code(code: &str) -> Option<&'static Province> {
        PROVINCES.iter().find(|p| p.code == code)
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Resolve a province code to its name, or [`UNKNOWN_PROVINCE`].
///
/// # Example
///
/// ```
/// use cedula_mcp_server::domain::province::{name_for_code, UNKNOWN_PROVINCE};
///
/// assert_eq!(name_for_code("17"), "Pichincha");
/// assert_eq!(name_for_code("27"), UNKNOWN_PROVINCE);
/// ```
pub fn name_for_code(code: &str) -> &'static str {
    Province::from_code(code).map_or(UNKNOWN_PROVINCE, |p| p.name)
}

/// Whether `code` is one of the 25 issuing codes.
pub fn is_valid_code(code: &str) -> bool {
    Province::from_code(code).is_some()
}

/// The full province table, `01` through `24` followed by `30`.
pub fn all_provinces() -> &'static [Province] {
    &PROVINCES
}
