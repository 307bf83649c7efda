//! # Voltage Drop Calculation
//!
//! Two-way voltage drop along a single-phase run, expressed in volts and as
//! a percentage of the system voltage, checked against an allowed limit.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::voltage_drop::{calculate, VoltageDropInput};
//! use elec_core::materials::ConductorMaterial;
//!
//! let input = VoltageDropInput {
//!     label: "Shed feed".to_string(),
//!     current: 20.0,
//!     length_ft: 100.0,
//!     wire_size: "AWG 12".to_string(),
//!     material: ConductorMaterial::Copper,
//!     system_voltage: 120.0,
//!     limit_percent: 3.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.within_limit);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};
use crate::materials::ConductorMaterial;
use crate::wire::{calculate_voltage_drop, find_gauge, voltage_drop_percent, DEFAULT_GAUGE};

/// Allowed drop when the input does not name one (%)
pub const DEFAULT_LIMIT_PERCENT: f64 = 3.0;

fn default_limit_percent() -> f64 {
    DEFAULT_LIMIT_PERCENT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoltageDropInput {
    #[serde(default)]
    pub label: String,
    /// Load current (A)
    pub current: f64,
    /// One-way run length (ft)
    pub length_ft: f64,
    /// AWG designation ("12", "AWG 12", "1/0", ...)
    pub wire_size: String,
    #[serde(default)]
    pub material: ConductorMaterial,
    /// Nominal system voltage (V)
    pub system_voltage: f64,
    /// Allowed drop (%)
    #[serde(default = "default_limit_percent")]
    pub limit_percent: f64,
}

impl VoltageDropInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.current < 0.0 {
            return Err(CalcError::invalid_input(
                "current",
                self.current.to_string(),
                "Current cannot be negative",
            ));
        }
        if self.length_ft < 0.0 {
            return Err(CalcError::invalid_input(
                "length_ft",
                self.length_ft.to_string(),
                "Length cannot be negative",
            ));
        }
        if self.wire_size.trim().is_empty() {
            return Err(CalcError::missing_field("wire_size"));
        }
        if self.system_voltage <= 0.0 {
            return Err(CalcError::invalid_input(
                "system_voltage",
                self.system_voltage.to_string(),
                "System voltage must be positive",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageDropResult {
    /// Gauge actually used, "AWG 10" when the entered size was not found
    pub wire_size: String,
    /// Drop (V)
    pub voltage_drop: f64,
    /// Drop as a share of system voltage (%)
    pub drop_percent: f64,
    /// Voltage at the load (V)
    pub load_voltage: f64,
    pub within_limit: bool,
}

pub fn calculate(input: &VoltageDropInput) -> CalcResult<VoltageDropResult> {
    input.validate()?;

    let voltage_drop = calculate_voltage_drop(input.current, input.length_ft, &input.wire_size, input.material);
    let drop_percent = voltage_drop_percent(voltage_drop, input.system_voltage);
    let wire_size = match find_gauge(&input.wire_size) {
        Some(gauge) => gauge.label(),
        None => format!("AWG {}", DEFAULT_GAUGE),
    };

    let within_limit = drop_percent <= input.limit_percent;
    if !within_limit {
        warn!(label = %input.label, drop_percent, limit = input.limit_percent, "voltage drop exceeds limit");
    }
    debug!(label = %input.label, voltage_drop, drop_percent, "voltage drop");

    Ok(VoltageDropResult {
        wire_size,
        voltage_drop,
        drop_percent,
        load_voltage: input.system_voltage - voltage_drop,
        within_limit,
    })
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    fn test_run() -> VoltageDropInput {
        VoltageDropInput {
            label: "Run".to_string(),
            current: 20.0,
            length_ft: 100.0,
            wire_size: "12".to_string(),
            material: ConductorMaterial::Copper,
            system_voltage: 120.0,
            limit_percent: DEFAULT_LIMIT_PERCENT,
        }
    }

    #[test]
    fn test_copper_run() {
        let result = calculate(&test_run()).unwrap();
        assert_eq!(result.wire_size, "AWG 12");
        assert!(approx_eq(result.voltage_drop, 0.0063528, 1e-6));
        assert!(approx_eq(result.drop_percent, 0.005294, 1e-5));
        assert!(approx_eq(result.load_voltage, 119.99365, 1e-4));
        assert!(result.within_limit);
    }

    #[test]
    fn test_unknown_gauge_reports_fallback() {
        let mut input = test_run();
        input.wire_size = "AWG 22".to_string();
        let result = calculate(&input).unwrap();
        assert_eq!(result.wire_size, "AWG 10");
    }

    #[test]
    fn test_limit_exceeded() {
        let mut input = test_run();
        input.limit_percent = 0.001;
        assert!(!calculate(&input).unwrap().within_limit);
    }

    #[test]
    fn test_non_positive_system_voltage_rejected() {
        let mut input = test_run();
        input.current = 100.0;
        input.length_ft = 500.0;
        input.wire_size = "14".to_string();
        input.system_voltage = 0.0;
        assert!(matches!(
            calculate(&input),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "system_voltage"
        ));

        input.system_voltage = -120.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_limit_defaults_when_omitted() {
        let json = r#"{ "current": 15.0, "length_ft": 50.0, "wire_size": "14", "system_voltage": 240.0 }"#;
        let input: VoltageDropInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.limit_percent, DEFAULT_LIMIT_PERCENT);
        assert_eq!(input.material, ConductorMaterial::Copper);
    }

    #[test]
    fn test_blank_wire_size() {
        let mut input = test_run();
        input.wire_size = "  ".to_string();
        assert_eq!(calculate(&input).unwrap_err(), CalcError::missing_field("wire_size"));
    }
}
