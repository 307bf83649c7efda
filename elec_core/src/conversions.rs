//! # Electrical Unit Conversion
//!
//! Direct unit-scale conversions per physical quantity. Only the edges listed
//! in [`UNIT_CONVERSIONS`] succeed; there is no chaining through a base unit
//! (kV → mV is not listed, so it returns the input unchanged rather than
//! composing kV → V → mV).
//!
//! ## Example
//!
//! ```rust
//! use elec_core::conversions::convert_unit;
//!
//! assert_eq!(convert_unit(1000.0, "V", "kV", "voltage"), 1.0);
//! assert_eq!(convert_unit(5.0, "X", "Y", "unknown_category"), 5.0);
//! ```

use serde::Serialize;
use tracing::warn;

/// A directed conversion edge: `value_in_to = value_in_from × factor`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitConversion {
    pub from: &'static str,
    pub to: &'static str,
    pub factor: f64,
}

const fn edge(from: &'static str, to: &'static str, factor: f64) -> UnitConversion {
    UnitConversion { from, to, factor }
}

const VOLTAGE: &[UnitConversion] = &[
    edge("V", "kV", 0.001),
    edge("V", "mV", 1000.0),
    edge("kV", "V", 1000.0),
    edge("mV", "V", 0.001),
];

const CURRENT: &[UnitConversion] = &[
    edge("A", "mA", 1000.0),
    edge("A", "kA", 0.001),
    edge("mA", "A", 0.001),
    edge("kA", "A", 1000.0),
];

const POWER: &[UnitConversion] = &[
    edge("W", "kW", 0.001),
    edge("W", "MW", 0.000001),
    edge("kW", "W", 1000.0),
    edge("kW", "MW", 0.001),
    edge("MW", "W", 1000000.0),
    edge("MW", "kW", 1000.0),
];

const RESISTANCE: &[UnitConversion] = &[
    edge("Ω", "kΩ", 0.001),
    edge("Ω", "MΩ", 0.000001),
    edge("kΩ", "Ω", 1000.0),
    edge("kΩ", "MΩ", 0.001),
    edge("MΩ", "Ω", 1000000.0),
    edge("MΩ", "kΩ", 1000.0),
];

const CAPACITANCE: &[UnitConversion] = &[
    edge("F", "mF", 1000.0),
    edge("F", "μF", 1.0e6),
    edge("mF", "F", 0.001),
    edge("μF", "F", 1.0e-6),
    edge("μF", "nF", 1000.0),
    edge("nF", "μF", 0.001),
    edge("nF", "pF", 1000.0),
    edge("pF", "nF", 0.001),
];

const INDUCTANCE: &[UnitConversion] = &[
    edge("H", "mH", 1000.0),
    edge("H", "μH", 1.0e6),
    edge("mH", "H", 0.001),
    edge("mH", "μH", 1000.0),
    edge("μH", "mH", 0.001),
    edge("μH", "H", 1.0e-6),
];

const FREQUENCY: &[UnitConversion] = &[
    edge("Hz", "kHz", 0.001),
    edge("Hz", "MHz", 1.0e-6),
    edge("kHz", "Hz", 1000.0),
    edge("kHz", "MHz", 0.001),
    edge("MHz", "Hz", 1.0e6),
    edge("MHz", "kHz", 1000.0),
    edge("MHz", "GHz", 0.001),
    edge("GHz", "MHz", 1000.0),
];

/// Conversion edges keyed by category name, in lookup order
pub const UNIT_CONVERSIONS: &[(&str, &[UnitConversion])] = &[
    ("voltage", VOLTAGE),
    ("current", CURRENT),
    ("power", POWER),
    ("resistance", RESISTANCE),
    ("capacitance", CAPACITANCE),
    ("inductance", INDUCTANCE),
    ("frequency", FREQUENCY),
];

/// Edges for a category, or `None` for an unknown category
pub fn conversions_for(category: &str) -> Option<&'static [UnitConversion]> {
    UNIT_CONVERSIONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, edges)| *edges)
}

/// The directly listed edge for `from → to` in `category`
pub fn find_conversion(from: &str, to: &str, category: &str) -> Option<&'static UnitConversion> {
    conversions_for(category)?
        .iter()
        .find(|c| c.from == from && c.to == to)
}

/// Distinct unit symbols of a category, in first-seen order
pub fn units_for(category: &str) -> Vec<&'static str> {
    let mut units = Vec::new();
    for edge in conversions_for(category).unwrap_or_default() {
        for unit in [edge.from, edge.to] {
            if !units.contains(&unit) {
                units.push(unit);
            }
        }
    }
    units
}

/// Convert `value` from one unit to another within a category
///
/// Returns `value` unchanged when `from == to`, when the category is
/// unknown, or when no direct edge is listed.
pub fn convert_unit(value: f64, from: &str, to: &str, category: &str) -> f64 {
    if from == to {
        return value;
    }

    match find_conversion(from, to, category) {
        Some(conversion) => value * conversion.factor,
        None => {
            warn!(from, to, category, "no direct conversion listed, value unchanged");
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_conversions() {
        assert_eq!(convert_unit(1000.0, "V", "kV", "voltage"), 1.0);
        assert_eq!(convert_unit(2.5, "A", "mA", "current"), 2500.0);
        assert_eq!(convert_unit(3.0, "MW", "kW", "power"), 3000.0);
        assert_eq!(convert_unit(4.7, "kΩ", "Ω", "resistance"), 4700.0);
        assert_eq!(convert_unit(100.0, "nF", "pF", "capacitance"), 100_000.0);
        assert_eq!(convert_unit(2.0, "GHz", "MHz", "frequency"), 2000.0);
    }

    #[test]
    fn test_unlisted_pairs_are_unchanged() {
        // No chaining through V
        assert_eq!(convert_unit(1.0, "kV", "mV", "voltage"), 1.0);
        assert_eq!(convert_unit(5.0, "X", "Y", "unknown_category"), 5.0);
        // Units from another category
        assert_eq!(convert_unit(5.0, "A", "mA", "voltage"), 5.0);
    }

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(convert_unit(42.0, "W", "W", "power"), 42.0);
        assert_eq!(convert_unit(42.0, "Q", "Q", "nonsense"), 42.0);
    }

    #[test]
    fn test_edges_come_in_inverse_pairs() {
        for (category, edges) in UNIT_CONVERSIONS {
            for e in edges.iter() {
                let inverse = find_conversion(e.to, e.from, category)
                    .unwrap_or_else(|| panic!("{}: {} -> {} has no inverse", category, e.from, e.to));
                let product = e.factor * inverse.factor;
                assert!((product - 1.0).abs() < 1e-12, "{}: {} <-> {}", category, e.from, e.to);
            }
        }
    }

    #[test]
    fn test_units_for_category() {
        assert_eq!(units_for("voltage"), vec!["V", "kV", "mV"]);
        assert_eq!(units_for("resistance"), vec!["Ω", "kΩ", "MΩ"]);
        assert!(units_for("torque").is_empty());
    }
}
