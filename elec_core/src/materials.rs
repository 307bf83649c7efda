//! # Conductor Materials
//!
//! Conductor metals accepted by the wire-sizing and voltage-drop
//! calculators, with the resistivity constants each one uses.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::materials::ConductorMaterial;
//!
//! let cu = ConductorMaterial::from_str_flexible("Cu").unwrap();
//! assert_eq!(cu, ConductorMaterial::Copper);
//! assert_eq!(cu.resistivity_cmil_per_ft(), 10.371);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Conductor metal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConductorMaterial {
    #[default]
    Copper,
    Aluminum,
}

impl ConductorMaterial {
    /// All conductor materials for UI selection
    pub const ALL: [ConductorMaterial; 2] = [ConductorMaterial::Copper, ConductorMaterial::Aluminum];

    /// Resistivity in ohm·circular-mil per foot, used for voltage drop
    pub fn resistivity_cmil_per_ft(&self) -> f64 {
        match self {
            ConductorMaterial::Copper => 10.371,
            ConductorMaterial::Aluminum => 17.0,
        }
    }

    /// Relative resistivity (copper = 1.0), used by the wire-size area estimate
    pub fn relative_resistivity(&self) -> f64 {
        match self {
            ConductorMaterial::Copper => 1.0,
            ConductorMaterial::Aluminum => 1.68,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "copper" | "cu" => Ok(ConductorMaterial::Copper),
            "aluminum" | "aluminium" | "al" => Ok(ConductorMaterial::Aluminum),
            _ => Err(CalcError::unknown_material(s)),
        }
    }

    /// Interpret a free-form material string the way the calculator screens
    /// do: only "copper" selects copper, anything else is treated as aluminum.
    pub fn from_screen_value(s: &str) -> Self {
        if s == "copper" {
            ConductorMaterial::Copper
        } else {
            ConductorMaterial::Aluminum
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConductorMaterial::Copper => "Copper",
            ConductorMaterial::Aluminum => "Aluminum",
        }
    }
}

impl std::fmt::Display for ConductorMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(ConductorMaterial::from_str_flexible("COPPER").unwrap(), ConductorMaterial::Copper);
        assert_eq!(ConductorMaterial::from_str_flexible(" al ").unwrap(), ConductorMaterial::Aluminum);
        assert_eq!(
            ConductorMaterial::from_str_flexible("aluminium").unwrap(),
            ConductorMaterial::Aluminum
        );
        assert!(ConductorMaterial::from_str_flexible("gold").is_err());
    }

    #[test]
    fn test_screen_value_fallback() {
        assert_eq!(ConductorMaterial::from_screen_value("copper"), ConductorMaterial::Copper);
        assert_eq!(ConductorMaterial::from_screen_value("silver"), ConductorMaterial::Aluminum);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ConductorMaterial::Aluminum).unwrap();
        assert_eq!(json, "\"aluminum\"");
        let roundtrip: ConductorMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, ConductorMaterial::Aluminum);
    }
}
