//! # Power Triangle Calculation
//!
//! Given real power plus either apparent power or power factor, complete the
//! power triangle (P, Q, S, PF).
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::power_factor::{calculate, PowerTriangleInput, PowerTriangleTarget};
//!
//! let input = PowerTriangleInput {
//!     label: "Motor".to_string(),
//!     solve_for: PowerTriangleTarget::PowerFactor,
//!     real_power: 800.0,
//!     apparent_power: Some(1000.0),
//!     power_factor: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.power_factor - 0.8).abs() < 1e-12);
//! assert!((result.reactive_power - 600.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::{apparent_power, power_factor, reactive_power};
use crate::errors::{CalcError, CalcResult};

use super::require;

/// Quantity to solve for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerTriangleTarget {
    #[default]
    PowerFactor,
    ReactivePower,
    ApparentPower,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerTriangleInput {
    #[serde(default)]
    pub label: String,
    pub solve_for: PowerTriangleTarget,
    /// Real power P (W)
    pub real_power: f64,
    /// Apparent power S (VA), required when solving for power factor
    #[serde(default)]
    pub apparent_power: Option<f64>,
    /// Power factor (0 to 1), required when solving for Q or S
    #[serde(default)]
    pub power_factor: Option<f64>,
}

impl PowerTriangleInput {
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(pf) = self.power_factor {
            if !(0.0..=1.0).contains(&pf) {
                return Err(CalcError::invalid_input(
                    "power_factor",
                    pf.to_string(),
                    "Power factor must be between 0 and 1",
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerTriangleResult {
    /// P (W)
    pub real_power: f64,
    /// Q (VAR)
    pub reactive_power: f64,
    /// S (VA)
    pub apparent_power: f64,
    pub power_factor: f64,
}

pub fn calculate(input: &PowerTriangleInput) -> CalcResult<PowerTriangleResult> {
    input.validate()?;

    let (s, pf) = match input.solve_for {
        PowerTriangleTarget::PowerFactor => {
            let s = require("apparent_power", input.apparent_power)?;
            let pf = power_factor(input.real_power, s);
            if !(0.0..=1.0).contains(&pf) {
                return Err(CalcError::invalid_input(
                    "real_power",
                    input.real_power.to_string(),
                    "Real power must be between 0 and the apparent power",
                ));
            }
            (s, pf)
        }
        PowerTriangleTarget::ReactivePower | PowerTriangleTarget::ApparentPower => {
            let pf = require("power_factor", input.power_factor)?;
            (apparent_power(input.real_power, pf), pf)
        }
    };

    let result = PowerTriangleResult {
        real_power: input.real_power,
        reactive_power: reactive_power(s, pf),
        apparent_power: s,
        power_factor: pf,
    };

    debug!(label = %input.label, solve_for = ?input.solve_for, pf, "power triangle");
    Ok(result)
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

    #[test]
    fn test_solve_apparent_from_pf() {
        let input = PowerTriangleInput {
            label: "Load".to_string(),
            solve_for: PowerTriangleTarget::ApparentPower,
            real_power: 1500.0,
            apparent_power: None,
            power_factor: Some(0.75),
        };
        let result = calculate(&input).unwrap();
        assert!(approx_eq(result.apparent_power, 2000.0, 1e-9));
        assert!(approx_eq(result.reactive_power, 1322.876, 0.001));
    }

    #[test]
    fn test_unity_power_factor_has_no_reactive_power() {
        let input = PowerTriangleInput {
            solve_for: PowerTriangleTarget::ReactivePower,
            real_power: 500.0,
            power_factor: Some(1.0),
            ..Default::default()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.apparent_power, 500.0);
        assert_eq!(result.reactive_power, 0.0);
    }

    #[test]
    fn test_zero_apparent_power_gives_zero_pf() {
        let input = PowerTriangleInput {
            solve_for: PowerTriangleTarget::PowerFactor,
            real_power: 100.0,
            apparent_power: Some(0.0),
            ..Default::default()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.power_factor, 0.0);
    }

    #[test]
    fn test_real_power_above_apparent_rejected() {
        let input = PowerTriangleInput {
            solve_for: PowerTriangleTarget::PowerFactor,
            real_power: 1200.0,
            apparent_power: Some(1000.0),
            ..Default::default()
        };
        assert!(matches!(
            calculate(&input),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "real_power"
        ));
    }

    #[test]
    fn test_missing_power_factor() {
        let input = PowerTriangleInput {
            solve_for: PowerTriangleTarget::ApparentPower,
            real_power: 100.0,
            ..Default::default()
        };
        assert_eq!(calculate(&input).unwrap_err(), CalcError::missing_field("power_factor"));
    }

    #[test]
    fn test_power_factor_out_of_range() {
        let input = PowerTriangleInput {
            solve_for: PowerTriangleTarget::ReactivePower,
            real_power: 100.0,
            power_factor: Some(1.2),
            ..Default::default()
        };
        assert!(calculate(&input).is_err());
    }
}
