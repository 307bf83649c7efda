//! # Wire Sizing and Voltage Drop
//!
//! Simplified American Wire Gauge (AWG) selection by ampacity, and
//! single-phase two-way voltage drop from conductor cross-section.
//!
//! Real-world sizing also depends on insulation temperature rating,
//! installation method, bundling and ambient temperature; none of that is
//! modelled here.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::materials::ConductorMaterial;
//! use elec_core::wire::{calculate_voltage_drop, calculate_wire_size};
//!
//! assert_eq!(calculate_wire_size(20.0, 100.0, ConductorMaterial::Copper), "AWG 12");
//!
//! let vd = calculate_voltage_drop(20.0, 100.0, "AWG 12", ConductorMaterial::Copper);
//! assert!((vd - 0.006353).abs() < 1e-6);
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::materials::ConductorMaterial;

/// Returned by [`calculate_wire_size`] when no table entry carries the current
pub const WIRE_TOO_LARGE: &str = "Wire size too large for calculator";

/// Gauge used when a voltage-drop lookup does not match any table entry
pub const DEFAULT_GAUGE: &str = "10";

/// One row of the AWG table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WireGauge {
    /// AWG designation without prefix (e.g., "12", "1/0")
    pub awg: &'static str,
    /// Maximum carry current (A)
    pub max_amps: f64,
    /// Nominal cross-section (mm²)
    pub area_mm2: f64,
    /// Cross-section in circular mils
    pub circular_mils: f64,
}

impl WireGauge {
    /// Display label (e.g., "AWG 12")
    pub fn label(&self) -> String {
        format!("AWG {}", self.awg)
    }
}

/// AWG table ordered from smallest to largest conductor
pub const AWG_TABLE: [WireGauge; 12] = [
    WireGauge { awg: "14", max_amps: 15.0, area_mm2: 2.08, circular_mils: 4110.0 },
    WireGauge { awg: "12", max_amps: 20.0, area_mm2: 3.31, circular_mils: 6530.0 },
    WireGauge { awg: "10", max_amps: 30.0, area_mm2: 5.26, circular_mils: 10380.0 },
    WireGauge { awg: "8", max_amps: 40.0, area_mm2: 8.37, circular_mils: 16510.0 },
    WireGauge { awg: "6", max_amps: 55.0, area_mm2: 13.3, circular_mils: 26240.0 },
    WireGauge { awg: "4", max_amps: 70.0, area_mm2: 21.2, circular_mils: 41740.0 },
    WireGauge { awg: "2", max_amps: 95.0, area_mm2: 33.6, circular_mils: 66360.0 },
    WireGauge { awg: "1", max_amps: 110.0, area_mm2: 42.4, circular_mils: 83690.0 },
    WireGauge { awg: "1/0", max_amps: 125.0, area_mm2: 53.5, circular_mils: 105600.0 },
    WireGauge { awg: "2/0", max_amps: 145.0, area_mm2: 67.4, circular_mils: 133100.0 },
    WireGauge { awg: "3/0", max_amps: 165.0, area_mm2: 85.0, circular_mils: 167800.0 },
    WireGauge { awg: "4/0", max_amps: 195.0, area_mm2: 107.2, circular_mils: 211600.0 },
];

/// Look up a gauge by designation, with or without the "AWG " prefix
pub fn find_gauge(designation: &str) -> Option<&'static WireGauge> {
    let awg = designation.strip_prefix("AWG ").unwrap_or(designation);
    AWG_TABLE.iter().find(|g| g.awg == awg)
}

/// Smallest gauge whose ampacity is at least `current`
pub fn select_gauge(current: f64) -> Option<&'static WireGauge> {
    AWG_TABLE.iter().find(|g| current <= g.max_amps)
}

/// Resistivity-weighted cross-section estimate
///
/// # Formula
/// A = I × L × ρ_rel / 12
///
/// Not used by [`calculate_wire_size`]; selection is by ampacity only.
pub fn estimated_area(current: f64, length: f64, material: ConductorMaterial) -> f64 {
    current * length * material.relative_resistivity() / 12.0
}

/// Select a wire size for the given load current
///
/// Returns `"AWG <n>"` for the first table entry (smallest to largest) whose
/// ampacity covers `current`, or [`WIRE_TOO_LARGE`] above 195 A.
pub fn calculate_wire_size(current: f64, length: f64, material: ConductorMaterial) -> String {
    let area = estimated_area(current, length, material);
    debug!(current, length, %material, estimated_area = area, "wire size");

    match select_gauge(current) {
        Some(gauge) => gauge.label(),
        None => WIRE_TOO_LARGE.to_string(),
    }
}

/// Two-way voltage drop for a single-phase run
///
/// # Formula
/// VD = 2 × I × L × ρ / (CM × 1000)
///
/// where `ρ` is the material resistivity in Ω·cmil/ft and `CM` the
/// conductor area in circular mils. Unknown sizes fall back to AWG 10.
///
/// # Arguments
/// * `current` - Load current (A)
/// * `length` - One-way run length (ft)
/// * `wire_size` - AWG designation, e.g. "12", "AWG 12" or "1/0"
/// * `material` - Conductor material
pub fn calculate_voltage_drop(current: f64, length: f64, wire_size: &str, material: ConductorMaterial) -> f64 {
    let circular_mils = match find_gauge(wire_size) {
        Some(gauge) => gauge.circular_mils,
        None => {
            warn!(wire_size, fallback = DEFAULT_GAUGE, "unknown wire size, using fallback gauge");
            find_gauge(DEFAULT_GAUGE).map_or(10380.0, |g| g.circular_mils)
        }
    };

    (2.0 * current * length * material.resistivity_cmil_per_ft()) / (circular_mils * 1000.0)
}

/// Voltage drop as a percentage of the system voltage, 0 when the system
/// voltage is 0
pub fn voltage_drop_percent(voltage_drop: f64, system_voltage: f64) -> f64 {
    if system_voltage == 0.0 {
        0.0
    } else {
        voltage_drop / system_voltage * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_by_ampacity() {
        for pair in AWG_TABLE.windows(2) {
            assert!(pair[0].max_amps < pair[1].max_amps);
            assert!(pair[0].circular_mils < pair[1].circular_mils);
        }
    }

    #[test]
    fn test_wire_size_selection() {
        assert_eq!(calculate_wire_size(15.0, 50.0, ConductorMaterial::Copper), "AWG 14");
        assert_eq!(calculate_wire_size(20.0, 100.0, ConductorMaterial::Copper), "AWG 12");
        assert_eq!(calculate_wire_size(120.0, 10.0, ConductorMaterial::Copper), "AWG 1/0");
        assert_eq!(calculate_wire_size(195.0, 10.0, ConductorMaterial::Copper), "AWG 4/0");
    }

    #[test]
    fn test_material_does_not_change_selection() {
        assert_eq!(
            calculate_wire_size(35.0, 300.0, ConductorMaterial::Aluminum),
            calculate_wire_size(35.0, 300.0, ConductorMaterial::Copper)
        );
    }

    #[test]
    fn test_wire_size_too_large() {
        assert_eq!(calculate_wire_size(500.0, 100.0, ConductorMaterial::Copper), WIRE_TOO_LARGE);
        assert_eq!(WIRE_TOO_LARGE, "Wire size too large for calculator");
    }

    #[test]
    fn test_find_gauge_prefix_handling() {
        assert_eq!(find_gauge("AWG 1/0").map(|g| g.circular_mils), Some(105600.0));
        assert_eq!(find_gauge("8").map(|g| g.max_amps), Some(40.0));
        assert!(find_gauge("AWG 18").is_none());
    }

    #[test]
    fn test_voltage_drop_copper_vs_aluminum() {
        // 2 * 20 * 100 * 10.371 / (6530 * 1000) = 0.0063528
        let cu = calculate_voltage_drop(20.0, 100.0, "12", ConductorMaterial::Copper);
        assert!((cu - 0.0063528).abs() < 1e-6, "VD = {}", cu);

        let al = calculate_voltage_drop(20.0, 100.0, "12", ConductorMaterial::Aluminum);
        assert!(al > cu);
    }

    #[test]
    fn test_unknown_gauge_defaults_to_awg_10() {
        let unknown = calculate_voltage_drop(10.0, 50.0, "AWG 22", ConductorMaterial::Copper);
        let awg10 = calculate_voltage_drop(10.0, 50.0, "AWG 10", ConductorMaterial::Copper);
        assert_eq!(unknown, awg10);
    }

    #[test]
    fn test_voltage_drop_percent() {
        assert!((voltage_drop_percent(3.6, 120.0) - 3.0).abs() < 1e-9);
        assert_eq!(voltage_drop_percent(3.6, 0.0), 0.0);
    }

    #[test]
    fn test_estimated_area_uses_material() {
        let cu = estimated_area(12.0, 10.0, ConductorMaterial::Copper);
        let al = estimated_area(12.0, 10.0, ConductorMaterial::Aluminum);
        assert!((cu - 10.0).abs() < 1e-12);
        assert!((al - 16.8).abs() < 1e-9);
    }
}
