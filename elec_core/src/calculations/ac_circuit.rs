//! # Series RLC Circuit
//!
//! Reactances, impedance and phase angle of a series R-L-C branch at a
//! single frequency. A capacitance or inductance of zero means the component
//! is absent and contributes no reactance.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::ac_circuit::{calculate, AcCircuitInput};
//! use elec_core::units::{CapacitanceUnit, InductanceUnit};
//!
//! let input = AcCircuitInput {
//!     label: "Filter".to_string(),
//!     resistance: 100.0,
//!     capacitance: 0.0,
//!     capacitance_unit: CapacitanceUnit::Microfarad,
//!     inductance: 0.0,
//!     inductance_unit: InductanceUnit::Millihenry,
//!     frequency: 60.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.impedance, 100.0);
//! assert_eq!(result.phase_angle_deg, 0.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::{capacitive_reactance, impedance, inductive_reactance, phase_angle};
use crate::errors::{CalcError, CalcResult};
use crate::units::{CapacitanceUnit, InductanceUnit};

/// Input parameters for a series RLC branch
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Filter",
///   "resistance": 100.0,
///   "capacitance": 10.0,
///   "capacitance_unit": "μF",
///   "inductance": 100.0,
///   "inductance_unit": "mH",
///   "frequency": 60.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcCircuitInput {
    #[serde(default)]
    pub label: String,
    /// Resistance (Ω)
    pub resistance: f64,
    #[serde(default)]
    pub capacitance: f64,
    #[serde(default)]
    pub capacitance_unit: CapacitanceUnit,
    #[serde(default)]
    pub inductance: f64,
    #[serde(default)]
    pub inductance_unit: InductanceUnit,
    /// Frequency (Hz)
    pub frequency: f64,
}

impl AcCircuitInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.frequency < 0.0 {
            return Err(CalcError::invalid_input(
                "frequency",
                self.frequency.to_string(),
                "Frequency cannot be negative",
            ));
        }
        if self.capacitance < 0.0 {
            return Err(CalcError::invalid_input(
                "capacitance",
                self.capacitance.to_string(),
                "Capacitance cannot be negative",
            ));
        }
        if self.inductance < 0.0 {
            return Err(CalcError::invalid_input(
                "inductance",
                self.inductance.to_string(),
                "Inductance cannot be negative",
            ));
        }
        Ok(())
    }

    /// Capacitance in farads
    pub fn capacitance_farads(&self) -> f64 {
        self.capacitance_unit.to_base(self.capacitance)
    }

    /// Inductance in henries
    pub fn inductance_henries(&self) -> f64 {
        self.inductance_unit.to_base(self.inductance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcCircuitResult {
    /// Xc (Ω), 0 when no capacitor
    pub capacitive_reactance: f64,
    /// Xl (Ω), 0 when no inductor
    pub inductive_reactance: f64,
    /// Xl - Xc (Ω); positive is inductive
    pub net_reactance: f64,
    /// |Z| (Ω)
    pub impedance: f64,
    /// Phase angle (degrees)
    pub phase_angle_deg: f64,
}

pub fn calculate(input: &AcCircuitInput) -> CalcResult<AcCircuitResult> {
    input.validate()?;

    let xc = if input.capacitance != 0.0 {
        capacitive_reactance(input.frequency, input.capacitance_farads())
    } else {
        0.0
    };
    let xl = if input.inductance != 0.0 {
        inductive_reactance(input.frequency, input.inductance_henries())
    } else {
        0.0
    };

    let result = AcCircuitResult {
        capacitive_reactance: xc,
        inductive_reactance: xl,
        net_reactance: xl - xc,
        impedance: impedance(input.resistance, xc, xl),
        phase_angle_deg: phase_angle(input.resistance, xc, xl),
    };

    debug!(label = %input.label, xc, xl, impedance = result.impedance, "ac circuit");
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

    fn test_circuit() -> AcCircuitInput {
        AcCircuitInput {
            label: "RLC".to_string(),
            resistance: 100.0,
            capacitance: 10.0,
            capacitance_unit: CapacitanceUnit::Microfarad,
            inductance: 100.0,
            inductance_unit: InductanceUnit::Millihenry,
            frequency: 60.0,
        }
    }

    #[test]
    fn test_rlc_at_60hz() {
        let result = calculate(&test_circuit()).unwrap();
        // Xc = 1 / (2π · 60 · 10e-6) ≈ 265.26 Ω, Xl = 2π · 60 · 0.1 ≈ 37.70 Ω
        assert!(approx_eq(result.capacitive_reactance, 265.258, 0.01));
        assert!(approx_eq(result.inductive_reactance, 37.699, 0.01));
        assert!(result.net_reactance < 0.0);
        assert!(approx_eq(result.impedance, 248.56, 0.05));
        // Capacitive circuit: current leads
        assert!(result.phase_angle_deg < 0.0);
    }

    #[test]
    fn test_absent_components() {
        let mut input = test_circuit();
        input.capacitance = 0.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.capacitive_reactance, 0.0);
        assert!(result.phase_angle_deg > 0.0);

        input.inductance = 0.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.impedance, 100.0);
    }

    #[test]
    fn test_units_scale_values() {
        let mut input = test_circuit();
        input.capacitance = 10_000.0;
        input.capacitance_unit = CapacitanceUnit::Nanofarad;
        input.inductance = 0.1;
        input.inductance_unit = InductanceUnit::Henry;
        let scaled = calculate(&input).unwrap();
        let reference = calculate(&test_circuit()).unwrap();
        assert!(approx_eq(scaled.impedance, reference.impedance, 1e-6));
    }

    #[test]
    fn test_negative_frequency_rejected() {
        let mut input = test_circuit();
        input.frequency = -1.0;
        assert!(matches!(
            calculate(&input),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "frequency"
        ));
    }

    #[test]
    fn test_units_default_when_omitted() {
        let json = r#"{ "resistance": 10.0, "capacitance": 4.7, "frequency": 1000.0 }"#;
        let input: AcCircuitInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.capacitance_unit, CapacitanceUnit::Microfarad);
        assert_eq!(input.inductance_unit, InductanceUnit::Millihenry);
        assert_eq!(input.inductance, 0.0);
    }
}
