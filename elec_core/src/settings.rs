//! # Calculator Settings
//!
//! User defaults applied by front ends when an entry is left blank. Stored as
//! a small JSON file; see [`crate::file_io`] for loading and saving.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::settings::CalculatorSettings;
//!
//! let settings: CalculatorSettings = serde_json::from_str(r#"{ "decimal_places": 4 }"#).unwrap();
//! assert_eq!(settings.decimal_places, 4);
//! assert_eq!(settings.voltage_drop_limit_percent, 3.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::ConductorMaterial;

/// Calculator-wide defaults.
///
/// Missing keys in a settings file take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Decimal places for printed results
    pub decimal_places: usize,

    /// Conductor material for wire calculations
    pub default_material: ConductorMaterial,

    /// Body resistance used by the touch-current check (Ω)
    pub body_resistance_ohms: f64,

    /// Tolerance used when encoding a resistor without one (%)
    pub default_tolerance_percent: f64,

    /// Largest acceptable voltage drop (%)
    pub voltage_drop_limit_percent: f64,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            decimal_places: 2,
            default_material: ConductorMaterial::Copper,
            body_resistance_ohms: 1000.0,
            default_tolerance_percent: 5.0,
            voltage_drop_limit_percent: 3.0,
        }
    }
}

impl CalculatorSettings {
    /// Reject values no calculator can use
    pub fn validate(&self) -> CalcResult<()> {
        if self.body_resistance_ohms <= 0.0 {
            return Err(CalcError::invalid_input(
                "body_resistance_ohms",
                self.body_resistance_ohms.to_string(),
                "Body resistance must be positive",
            ));
        }
        if self.voltage_drop_limit_percent <= 0.0 {
            return Err(CalcError::invalid_input(
                "voltage_drop_limit_percent",
                self.voltage_drop_limit_percent.to_string(),
                "Voltage drop limit must be positive",
            ));
        }
        if self.decimal_places > 12 {
            return Err(CalcError::invalid_input(
                "decimal_places",
                self.decimal_places.to_string(),
                "At most 12 decimal places are supported",
            ));
        }
        Ok(())
    }

    /// Format a value with the configured precision
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimal_places, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalculatorSettings::default();
        assert_eq!(settings.decimal_places, 2);
        assert_eq!(settings.default_material, ConductorMaterial::Copper);
        assert_eq!(settings.body_resistance_ohms, 1000.0);
        assert_eq!(settings.default_tolerance_percent, 5.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: CalculatorSettings =
            serde_json::from_str(r#"{ "default_material": "aluminum" }"#).unwrap();
        assert_eq!(settings.default_material, ConductorMaterial::Aluminum);
        assert_eq!(settings.decimal_places, 2);
    }

    #[test]
    fn test_invalid_body_resistance() {
        let settings = CalculatorSettings {
            body_resistance_ohms: 0.0,
            ..Default::default()
        };
        assert_eq!(settings.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_format_value() {
        let settings = CalculatorSettings {
            decimal_places: 3,
            ..Default::default()
        };
        assert_eq!(settings.format_value(1.23456), "1.235");
        assert_eq!(CalculatorSettings::default().format_value(10.0), "10.00");
    }
}
