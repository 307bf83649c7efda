//! # Wire Size Selection
//!
//! Pick the smallest AWG conductor whose ampacity covers the load current.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::materials::ConductorMaterial;
use crate::wire::{calculate_wire_size, estimated_area, select_gauge};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireSizeInput {
    #[serde(default)]
    pub label: String,
    /// Load current (A)
    pub current: f64,
    /// One-way run length (ft)
    pub length_ft: f64,
    #[serde(default)]
    pub material: ConductorMaterial,
}

impl WireSizeInput {
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
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSizeResult {
    /// "AWG n", or the too-large message above the table
    pub wire_size: String,
    /// Ampacity of the selected gauge (A)
    pub max_amps: Option<f64>,
    /// Cross-section of the selected gauge (mm²)
    pub area_mm2: Option<f64>,
    /// Resistivity-weighted area estimate, informational only
    pub estimated_area: f64,
}

/// Select a conductor for the load
///
/// # Example
///
/// ```rust
/// use elec_core::calculations::wire_size::{calculate, WireSizeInput};
/// use elec_core::materials::ConductorMaterial;
///
/// let input = WireSizeInput {
///     label: "Kitchen".to_string(),
///     current: 20.0,
///     length_ft: 100.0,
///     material: ConductorMaterial::Copper,
/// };
///
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.wire_size, "AWG 12");
/// assert_eq!(result.max_amps, Some(20.0));
/// ```
pub fn calculate(input: &WireSizeInput) -> CalcResult<WireSizeResult> {
    input.validate()?;

    let gauge = select_gauge(input.current);
    let result = WireSizeResult {
        wire_size: calculate_wire_size(input.current, input.length_ft, input.material),
        max_amps: gauge.map(|g| g.max_amps),
        area_mm2: gauge.map(|g| g.area_mm2),
        estimated_area: estimated_area(input.current, input.length_ft, input.material),
    };

    debug!(label = %input.label, wire_size = %result.wire_size, "wire size selected");
    Ok(result)
}
