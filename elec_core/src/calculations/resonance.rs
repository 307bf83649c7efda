//! # LC Resonance Calculation
//!
//! Resonant frequency and bandwidth of a series RLC tank, plus the impedance
//! seen at any other frequency.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::{bandwidth, impedance_at_frequency, resonant_frequency};
use crate::errors::{CalcError, CalcResult};
use crate::units::{format_frequency, CapacitanceUnit, InductanceUnit};

/// Input parameters for a resonance calculation
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Tank",
///   "inductance": 100.0,
///   "inductance_unit": "mH",
///   "capacitance": 10.0,
///   "capacitance_unit": "μF",
///   "resistance": 10.0,
///   "quality_factor": 10.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResonanceInput {
    #[serde(default)]
    pub label: String,
    pub inductance: f64,
    #[serde(default)]
    pub inductance_unit: InductanceUnit,
    pub capacitance: f64,
    #[serde(default)]
    pub capacitance_unit: CapacitanceUnit,
    /// Series resistance (Ω)
    #[serde(default)]
    pub resistance: f64,
    /// Quality factor Q
    pub quality_factor: f64,
}

impl ResonanceInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.inductance <= 0.0 {
            return Err(CalcError::invalid_input(
                "inductance",
                self.inductance.to_string(),
                "Inductance must be positive",
            ));
        }
        if self.capacitance <= 0.0 {
            return Err(CalcError::invalid_input(
                "capacitance",
                self.capacitance.to_string(),
                "Capacitance must be positive",
            ));
        }
        if self.quality_factor <= 0.0 {
            return Err(CalcError::invalid_input(
                "quality_factor",
                self.quality_factor.to_string(),
                "Quality factor must be positive",
            ));
        }
        Ok(())
    }

    pub fn inductance_henries(&self) -> f64 {
        self.inductance_unit.to_base(self.inductance)
    }

    pub fn capacitance_farads(&self) -> f64 {
        self.capacitance_unit.to_base(self.capacitance)
    }

    /// Series impedance magnitude at `frequency` (Hz)
    pub fn impedance_at(&self, frequency: f64) -> f64 {
        impedance_at_frequency(
            self.resistance,
            self.inductance_henries(),
            self.capacitance_farads(),
            frequency,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonanceResult {
    /// f0 (Hz)
    pub resonant_frequency: f64,
    /// f0 / Q (Hz)
    pub bandwidth: f64,
    /// Impedance at f0, equal to the series resistance (Ω)
    pub impedance_at_resonance: f64,
    /// f0 scaled to Hz, kHz or MHz for display
    pub formatted_frequency: String,
}

/// Calculate the resonant point of the tank
///
/// # Example
///
/// ```rust
/// use elec_core::calculations::resonance::{calculate, ResonanceInput};
/// use elec_core::units::{CapacitanceUnit, InductanceUnit};
///
/// let input = ResonanceInput {
///     label: "Tank".to_string(),
///     inductance: 100.0,
///     inductance_unit: InductanceUnit::Millihenry,
///     capacitance: 10.0,
///     capacitance_unit: CapacitanceUnit::Microfarad,
///     resistance: 10.0,
///     quality_factor: 10.0,
/// };
///
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.formatted_frequency, "159.15 Hz");
/// assert_eq!(result.impedance_at_resonance, 10.0);
/// ```
pub fn calculate(input: &ResonanceInput) -> CalcResult<ResonanceResult> {
    input.validate()?;

    let f0 = resonant_frequency(input.inductance_henries(), input.capacitance_farads());
    let result = ResonanceResult {
        resonant_frequency: f0,
        bandwidth: bandwidth(f0, input.quality_factor),
        impedance_at_resonance: input.resistance,
        formatted_frequency: format_frequency(f0),
    };

    debug!(label = %input.label, f0, bandwidth = result.bandwidth, "resonance");
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

    fn test_tank() -> ResonanceInput {
        ResonanceInput {
            label: "Tank".to_string(),
            inductance: 100.0,
            inductance_unit: InductanceUnit::Millihenry,
            capacitance: 10.0,
            capacitance_unit: CapacitanceUnit::Microfarad,
            resistance: 10.0,
            quality_factor: 10.0,
        }
    }

    #[test]
    fn test_resonant_frequency_and_bandwidth() {
        let result = calculate(&test_tank()).unwrap();
        assert!(approx_eq(result.resonant_frequency, 159.155, 0.001));
        assert!(approx_eq(result.bandwidth, 15.9155, 0.001));
    }

    #[test]
    fn test_impedance_minimum_at_resonance() {
        let tank = test_tank();
        let f0 = calculate(&tank).unwrap().resonant_frequency;
        assert!(approx_eq(tank.impedance_at(f0), 10.0, 1e-6));
        assert!(tank.impedance_at(f0 * 2.0) > 10.0);
        assert!(tank.impedance_at(f0 / 2.0) > 10.0);
    }

    #[test]
    fn test_high_frequency_formatting() {
        let mut tank = test_tank();
        tank.inductance = 1.0;
        tank.inductance_unit = InductanceUnit::Microhenry;
        tank.capacitance = 100.0;
        tank.capacitance_unit = CapacitanceUnit::Picofarad;
        let result = calculate(&tank).unwrap();
        // 1 / (2π√(1e-6 · 1e-10)) ≈ 15.92 MHz
        assert_eq!(result.formatted_frequency, "15.92 MHz");
    }

    #[test]
    fn test_zero_capacitance_rejected() {
        let mut tank = test_tank();
        tank.capacitance = 0.0;
        assert!(matches!(
            calculate(&tank),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "capacitance"
        ));
    }
}
