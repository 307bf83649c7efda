//! # DC Series and Parallel Circuits
//!
//! A single source driving a list of resistors, either in series or in
//! parallel. Zero-ohm entries are treated as absent in the parallel case.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::dc_circuit::{calculate_series, SeriesCircuitInput};
//!
//! let input = SeriesCircuitInput {
//!     label: "Divider".to_string(),
//!     voltage: 12.0,
//!     resistors: vec![100.0, 200.0],
//! };
//!
//! let result = calculate_series(&input).unwrap();
//! assert_eq!(result.total_resistance, 300.0);
//! assert!((result.current - 0.04).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::{ohms_law, parallel_resistance, series_resistance};
use crate::errors::{CalcError, CalcResult};

fn validate_resistors(resistors: &[f64]) -> CalcResult<()> {
    if resistors.is_empty() {
        return Err(CalcError::missing_field("resistors"));
    }
    if let Some(r) = resistors.iter().find(|r| **r < 0.0 || !r.is_finite()) {
        return Err(CalcError::invalid_input(
            "resistors",
            r.to_string(),
            "Resistance must be a non-negative number",
        ));
    }
    Ok(())
}

// ============================================================================
// Series
// ============================================================================

/// Resistors in series across a source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesCircuitInput {
    #[serde(default)]
    pub label: String,
    /// Source voltage (V)
    pub voltage: f64,
    /// Resistor values (Ω)
    pub resistors: Vec<f64>,
}

impl SeriesCircuitInput {
    pub fn validate(&self) -> CalcResult<()> {
        validate_resistors(&self.resistors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesCircuitResult {
    /// Total resistance (Ω)
    pub total_resistance: f64,
    /// Loop current (A)
    pub current: f64,
    /// Voltage across each resistor, in input order (V)
    pub voltage_drops: Vec<f64>,
    /// Total power (W)
    pub power: f64,
}

pub fn calculate_series(input: &SeriesCircuitInput) -> CalcResult<SeriesCircuitResult> {
    input.validate()?;

    let total_resistance = series_resistance(&input.resistors);
    let current = ohms_law::current(input.voltage, total_resistance);
    let voltage_drops = input
        .resistors
        .iter()
        .map(|r| ohms_law::voltage(current, *r))
        .collect();

    debug!(label = %input.label, total_resistance, current, "series circuit");

    Ok(SeriesCircuitResult {
        total_resistance,
        current,
        voltage_drops,
        power: ohms_law::power(input.voltage, current),
    })
}

// ============================================================================
// Parallel
// ============================================================================

/// Resistors in parallel across a source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelCircuitInput {
    #[serde(default)]
    pub label: String,
    /// Source voltage (V)
    pub voltage: f64,
    /// Resistor values (Ω)
    pub resistors: Vec<f64>,
}

impl ParallelCircuitInput {
    pub fn validate(&self) -> CalcResult<()> {
        validate_resistors(&self.resistors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelCircuitResult {
    /// Equivalent resistance (Ω)
    pub total_resistance: f64,
    /// Source current (A)
    pub total_current: f64,
    /// Current through each branch, in input order (A). A zero-ohm branch
    /// reports 0.
    pub branch_currents: Vec<f64>,
    /// Total power (W)
    pub power: f64,
}

pub fn calculate_parallel(input: &ParallelCircuitInput) -> CalcResult<ParallelCircuitResult> {
    input.validate()?;

    let total_resistance = parallel_resistance(&input.resistors);
    let total_current = ohms_law::current(input.voltage, total_resistance);
    let branch_currents = input
        .resistors
        .iter()
        .map(|r| ohms_law::current(input.voltage, *r))
        .collect();

    debug!(label = %input.label, total_resistance, total_current, "parallel circuit");

    Ok(ParallelCircuitResult {
        total_resistance,
        total_current,
        branch_currents,
        power: ohms_law::power(input.voltage, total_current),
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

    #[test]
    fn test_series_voltage_drops_sum_to_source() {
        let input = SeriesCircuitInput {
            label: "Chain".to_string(),
            voltage: 9.0,
            resistors: vec![100.0, 200.0, 150.0],
        };
        let result = calculate_series(&input).unwrap();
        assert_eq!(result.total_resistance, 450.0);
        assert!(approx_eq(result.current, 0.02, 1e-12));
        assert_eq!(result.voltage_drops.len(), 3);
        assert!(approx_eq(result.voltage_drops.iter().sum::<f64>(), 9.0, 1e-9));
        assert!(approx_eq(result.power, 0.18, 1e-12));
    }

    #[test]
    fn test_parallel_branch_currents() {
        let input = ParallelCircuitInput {
            label: "Bank".to_string(),
            voltage: 12.0,
            resistors: vec![100.0, 100.0],
        };
        let result = calculate_parallel(&input).unwrap();
        assert!(approx_eq(result.total_resistance, 50.0, 1e-9));
        assert!(approx_eq(result.total_current, 0.24, 1e-9));
        assert_eq!(result.branch_currents, vec![0.12, 0.12]);
        assert!(approx_eq(result.power, 2.88, 1e-9));
    }

    #[test]
    fn test_parallel_zero_branch_is_ignored() {
        let input = ParallelCircuitInput {
            label: String::new(),
            voltage: 10.0,
            resistors: vec![0.0, 10.0],
        };
        let result = calculate_parallel(&input).unwrap();
        assert!(approx_eq(result.total_resistance, 10.0, 1e-12));
        assert_eq!(result.branch_currents[0], 0.0);
    }

    #[test]
    fn test_empty_resistor_list() {
        let input = SeriesCircuitInput {
            label: String::new(),
            voltage: 5.0,
            resistors: vec![],
        };
        assert_eq!(calculate_series(&input).unwrap_err(), CalcError::missing_field("resistors"));
    }

    #[test]
    fn test_negative_resistor_rejected() {
        let input = ParallelCircuitInput {
            label: String::new(),
            voltage: 5.0,
            resistors: vec![10.0, -1.0],
        };
        let err = calculate_parallel(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
