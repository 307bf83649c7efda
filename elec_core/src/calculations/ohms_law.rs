//! # Ohm's Law Calculation
//!
//! Solve for one of voltage, current, resistance or power from the other
//! known values, and report the power drawn alongside.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::ohms_law::{calculate, OhmsLawInput, OhmsLawTarget};
//!
//! let input = OhmsLawInput {
//!     label: "Heater".to_string(),
//!     solve_for: OhmsLawTarget::Current,
//!     voltage: Some(120.0),
//!     current: None,
//!     resistance: Some(12.0),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.current, Some(10.0));
//! assert_eq!(result.power, 1200.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::ohms_law;
use crate::errors::CalcResult;

use super::require;

/// Quantity to solve for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OhmsLawTarget {
    #[default]
    Voltage,
    Current,
    Resistance,
    Power,
}

/// Input parameters for an Ohm's law solve.
///
/// Values that are not entered are `None`, which is distinct from `0.0`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Heater",
///   "solve_for": "current",
///   "voltage": 120.0,
///   "resistance": 12.0
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OhmsLawInput {
    #[serde(default)]
    pub label: String,
    pub solve_for: OhmsLawTarget,
    #[serde(default)]
    pub voltage: Option<f64>,
    #[serde(default)]
    pub current: Option<f64>,
    #[serde(default)]
    pub resistance: Option<f64>,
}

/// Results of an Ohm's law solve.
///
/// `resistance` stays `None` when solving for power without a resistance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhmsLawResult {
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub resistance: Option<f64>,
    /// Power (W)
    pub power: f64,
}

/// Solve the requested quantity.
///
/// # Errors
/// * `MissingField` - one of the two required values was not entered
pub fn calculate(input: &OhmsLawInput) -> CalcResult<OhmsLawResult> {
    let result = match input.solve_for {
        OhmsLawTarget::Voltage => {
            let current = require("current", input.current)?;
            let resistance = require("resistance", input.resistance)?;
            let voltage = ohms_law::voltage(current, resistance);
            OhmsLawResult {
                voltage: Some(voltage),
                current: Some(current),
                resistance: Some(resistance),
                power: ohms_law::power(voltage, current),
            }
        }
        OhmsLawTarget::Current => {
            let voltage = require("voltage", input.voltage)?;
            let resistance = require("resistance", input.resistance)?;
            let current = ohms_law::current(voltage, resistance);
            OhmsLawResult {
                voltage: Some(voltage),
                current: Some(current),
                resistance: Some(resistance),
                power: ohms_law::power(voltage, current),
            }
        }
        OhmsLawTarget::Resistance => {
            let voltage = require("voltage", input.voltage)?;
            let current = require("current", input.current)?;
            OhmsLawResult {
                voltage: Some(voltage),
                current: Some(current),
                resistance: Some(ohms_law::resistance(voltage, current)),
                power: ohms_law::power(voltage, current),
            }
        }
        OhmsLawTarget::Power => {
            let voltage = require("voltage", input.voltage)?;
            let current = require("current", input.current)?;
            OhmsLawResult {
                voltage: Some(voltage),
                current: Some(current),
                resistance: input.resistance,
                power: ohms_law::power(voltage, current),
            }
        }
    };

    debug!(label = %input.label, solve_for = ?input.solve_for, power = result.power, "ohms law");
    Ok(result)
}
