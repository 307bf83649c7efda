//! # Circuit Calculations
//!
//! Each calculator screen is backed by a calculation record following the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Records validate what the screens would reject (missing values, negative
//! lengths) and then delegate to the formulas in [`crate::equations`] and
//! [`crate::wire`], which never fail.
//!
//! ## Available Calculations
//!
//! - [`ohms_law`] - Solve V, I, R or P
//! - [`dc_circuit`] - Series and parallel resistor networks
//! - [`ac_circuit`] - Series RLC reactance and impedance
//! - [`power_factor`] - Power triangle
//! - [`resonance`] - LC resonant frequency and bandwidth
//! - [`voltage_drop`] - Conductor voltage drop against a limit
//! - [`wire_size`] - AWG selection by ampacity

pub mod ac_circuit;
pub mod dc_circuit;
pub mod ohms_law;
pub mod power_factor;
pub mod resonance;
pub mod voltage_drop;
pub mod wire_size;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// Re-export commonly used types
pub use ac_circuit::{AcCircuitInput, AcCircuitResult};
pub use dc_circuit::{ParallelCircuitInput, ParallelCircuitResult, SeriesCircuitInput, SeriesCircuitResult};
pub use ohms_law::{OhmsLawInput, OhmsLawResult, OhmsLawTarget};
pub use power_factor::{PowerTriangleInput, PowerTriangleResult, PowerTriangleTarget};
pub use resonance::{ResonanceInput, ResonanceResult};
pub use voltage_drop::{VoltageDropInput, VoltageDropResult};
pub use wire_size::{WireSizeInput, WireSizeResult};

/// Unwrap an optional entry or report it as missing
pub(crate) fn require(field: &str, value: Option<f64>) -> CalcResult<f64> {
    value.ok_or_else(|| CalcError::missing_field(field))
}

/// Enum wrapper for all calculation types.
///
/// Lets a batch of heterogeneous calculations live in one JSON array.
///
/// ## JSON Example
///
/// ```json
/// [
///   { "type": "OhmsLaw", "solve_for": "current", "voltage": 12.0, "resistance": 4.0 },
///   { "type": "WireSize", "current": 20.0, "length_ft": 100.0 }
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    OhmsLaw(OhmsLawInput),
    SeriesCircuit(SeriesCircuitInput),
    ParallelCircuit(ParallelCircuitInput),
    AcCircuit(AcCircuitInput),
    PowerTriangle(PowerTriangleInput),
    Resonance(ResonanceInput),
    VoltageDrop(VoltageDropInput),
    WireSize(WireSizeInput),
}

/// Result counterpart of [`CalculationItem`], tagged the same way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    OhmsLaw(OhmsLawResult),
    SeriesCircuit(SeriesCircuitResult),
    ParallelCircuit(ParallelCircuitResult),
    AcCircuit(AcCircuitResult),
    PowerTriangle(PowerTriangleResult),
    Resonance(ResonanceResult),
    VoltageDrop(VoltageDropResult),
    WireSize(WireSizeResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::OhmsLaw(c) => &c.label,
            CalculationItem::SeriesCircuit(c) => &c.label,
            CalculationItem::ParallelCircuit(c) => &c.label,
            CalculationItem::AcCircuit(c) => &c.label,
            CalculationItem::PowerTriangle(c) => &c.label,
            CalculationItem::Resonance(c) => &c.label,
            CalculationItem::VoltageDrop(c) => &c.label,
            CalculationItem::WireSize(c) => &c.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::OhmsLaw(_) => "Ohm's Law",
            CalculationItem::SeriesCircuit(_) => "Series Circuit",
            CalculationItem::ParallelCircuit(_) => "Parallel Circuit",
            CalculationItem::AcCircuit(_) => "AC Circuit",
            CalculationItem::PowerTriangle(_) => "Power Factor",
            CalculationItem::Resonance(_) => "Resonance",
            CalculationItem::VoltageDrop(_) => "Voltage Drop",
            CalculationItem::WireSize(_) => "Wire Size",
        }
    }

    /// Run the wrapped calculation
    pub fn calculate(&self) -> CalcResult<CalculationOutput> {
        Ok(match self {
            CalculationItem::OhmsLaw(c) => CalculationOutput::OhmsLaw(ohms_law::calculate(c)?),
            CalculationItem::SeriesCircuit(c) => CalculationOutput::SeriesCircuit(dc_circuit::calculate_series(c)?),
            CalculationItem::ParallelCircuit(c) => {
                CalculationOutput::ParallelCircuit(dc_circuit::calculate_parallel(c)?)
            }
            CalculationItem::AcCircuit(c) => CalculationOutput::AcCircuit(ac_circuit::calculate(c)?),
            CalculationItem::PowerTriangle(c) => CalculationOutput::PowerTriangle(power_factor::calculate(c)?),
            CalculationItem::Resonance(c) => CalculationOutput::Resonance(resonance::calculate(c)?),
            CalculationItem::VoltageDrop(c) => CalculationOutput::VoltageDrop(voltage_drop::calculate(c)?),
            CalculationItem::WireSize(c) => CalculationOutput::WireSize(wire_size::calculate(c)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_from_json() {
        let json = r#"[
            { "type": "OhmsLaw", "label": "Lamp", "solve_for": "current", "voltage": 12.0, "resistance": 4.0 },
            { "type": "WireSize", "current": 20.0, "length_ft": 100.0 }
        ]"#;
        let items: Vec<CalculationItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label(), "Lamp");
        assert_eq!(items[0].calc_type(), "Ohm's Law");
        assert_eq!(items[1].calc_type(), "Wire Size");

        match items[0].calculate().unwrap() {
            CalculationOutput::OhmsLaw(r) => assert_eq!(r.current, Some(3.0)),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_output_is_tagged() {
        let item = CalculationItem::WireSize(WireSizeInput {
            label: String::new(),
            current: 15.0,
            length_ft: 10.0,
            material: Default::default(),
        });
        let json = serde_json::to_value(item.calculate().unwrap()).unwrap();
        assert_eq!(json["type"], "WireSize");
        assert_eq!(json["wire_size"], "AWG 14");
    }

    #[test]
    fn test_errors_propagate() {
        let item = CalculationItem::OhmsLaw(OhmsLawInput {
            solve_for: OhmsLawTarget::Voltage,
            ..Default::default()
        });
        assert_eq!(item.calculate().unwrap_err(), CalcError::missing_field("current"));
    }
}
