//! # Unit Prefixes and Display Formatting
//!
//! The formula library works in base SI units only. This module holds the
//! caller-side helpers the calculator screens need around it:
//!
//! - Prefix scaling for component values entered as μF, nF, mH, ...
//! - Auto-scaled display strings for resistance, frequency and energy
//!
//! ## Example
//!
//! ```rust
//! use elec_core::units::{format_frequency, CapacitanceUnit, InductanceUnit};
//! use elec_core::equations::resonant_frequency;
//!
//! let l = InductanceUnit::Millihenry.to_base(100.0);
//! let c = CapacitanceUnit::Microfarad.to_base(10.0);
//! assert_eq!(format_frequency(resonant_frequency(l, c)), "159.15 Hz");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Capacitance
// ============================================================================

/// Capacitance entry unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CapacitanceUnit {
    #[serde(rename = "pF")]
    Picofarad,
    #[serde(rename = "nF")]
    Nanofarad,
    #[default]
    #[serde(rename = "μF", alias = "uF")]
    Microfarad,
    #[serde(rename = "mF")]
    Millifarad,
    #[serde(rename = "F")]
    Farad,
}

impl CapacitanceUnit {
    pub const ALL: [CapacitanceUnit; 5] = [
        CapacitanceUnit::Picofarad,
        CapacitanceUnit::Nanofarad,
        CapacitanceUnit::Microfarad,
        CapacitanceUnit::Millifarad,
        CapacitanceUnit::Farad,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            CapacitanceUnit::Picofarad => "pF",
            CapacitanceUnit::Nanofarad => "nF",
            CapacitanceUnit::Microfarad => "μF",
            CapacitanceUnit::Millifarad => "mF",
            CapacitanceUnit::Farad => "F",
        }
    }

    /// Farads per one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            CapacitanceUnit::Picofarad => 1e-12,
            CapacitanceUnit::Nanofarad => 1e-9,
            CapacitanceUnit::Microfarad => 1e-6,
            CapacitanceUnit::Millifarad => 1e-3,
            CapacitanceUnit::Farad => 1.0,
        }
    }

    /// Parse a unit symbol. Unknown symbols fall back to μF.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "pF" => CapacitanceUnit::Picofarad,
            "nF" => CapacitanceUnit::Nanofarad,
            "mF" => CapacitanceUnit::Millifarad,
            "F" => CapacitanceUnit::Farad,
            _ => CapacitanceUnit::Microfarad,
        }
    }

    /// Convert a value in this unit to farads
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Convert farads to a value in this unit
    pub fn from_base(&self, farads: f64) -> f64 {
        farads / self.factor()
    }
}

// ============================================================================
// Inductance
// ============================================================================

/// Inductance entry unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InductanceUnit {
    #[serde(rename = "μH", alias = "uH")]
    Microhenry,
    #[default]
    #[serde(rename = "mH")]
    Millihenry,
    #[serde(rename = "H")]
    Henry,
}

impl InductanceUnit {
    pub const ALL: [InductanceUnit; 3] = [
        InductanceUnit::Microhenry,
        InductanceUnit::Millihenry,
        InductanceUnit::Henry,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            InductanceUnit::Microhenry => "μH",
            InductanceUnit::Millihenry => "mH",
            InductanceUnit::Henry => "H",
        }
    }

    /// Henries per one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            InductanceUnit::Microhenry => 1e-6,
            InductanceUnit::Millihenry => 1e-3,
            InductanceUnit::Henry => 1.0,
        }
    }

    /// Parse a unit symbol. Unknown symbols fall back to mH.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "μH" | "uH" => InductanceUnit::Microhenry,
            "H" => InductanceUnit::Henry,
            _ => InductanceUnit::Millihenry,
        }
    }

    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor()
    }

    pub fn from_base(&self, henries: f64) -> f64 {
        henries / self.factor()
    }
}

// ============================================================================
// Display formatting
// ============================================================================

/// Format a resistance as Ω, kΩ or MΩ with two decimals
pub fn format_resistance(ohms: f64) -> String {
    if ohms >= 1e6 {
        format!("{:.2} MΩ", ohms / 1e6)
    } else if ohms >= 1e3 {
        format!("{:.2} kΩ", ohms / 1e3)
    } else {
        format!("{:.2} Ω", ohms)
    }
}

/// Format a frequency as Hz, kHz or MHz with two decimals
pub fn format_frequency(hertz: f64) -> String {
    if hertz >= 1e6 {
        format!("{:.2} MHz", hertz / 1e6)
    } else if hertz >= 1e3 {
        format!("{:.2} kHz", hertz / 1e3)
    } else {
        format!("{:.2} Hz", hertz)
    }
}

/// Format stored energy: μJ below 1 mJ, mJ below 1 J, otherwise J (4 decimals)
pub fn format_energy(joules: f64) -> String {
    if joules < 0.001 {
        format!("{:.2} μJ", joules * 1e6)
    } else if joules < 1.0 {
        format!("{:.2} mJ", joules * 1e3)
    } else {
        format!("{:.4} J", joules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacitance_scaling() {
        assert!((CapacitanceUnit::Microfarad.to_base(10.0) - 1e-5).abs() < 1e-18);
        assert!((CapacitanceUnit::Nanofarad.from_base(4.7e-8) - 47.0).abs() < 1e-9);
        assert_eq!(CapacitanceUnit::Farad.to_base(2.0), 2.0);
    }

    #[test]
    fn test_unknown_symbols_use_defaults() {
        assert_eq!(CapacitanceUnit::from_symbol("kF"), CapacitanceUnit::Microfarad);
        assert_eq!(InductanceUnit::from_symbol("nH"), InductanceUnit::Millihenry);
        assert_eq!(InductanceUnit::from_symbol("uH"), InductanceUnit::Microhenry);
    }

    #[test]
    fn test_unit_serialization() {
        let json = serde_json::to_string(&CapacitanceUnit::Microfarad).unwrap();
        assert_eq!(json, "\"μF\"");
        let parsed: CapacitanceUnit = serde_json::from_str("\"uF\"").unwrap();
        assert_eq!(parsed, CapacitanceUnit::Microfarad);
        let parsed: InductanceUnit = serde_json::from_str("\"mH\"").unwrap();
        assert_eq!(parsed, InductanceUnit::Millihenry);
    }

    #[test]
    fn test_format_resistance() {
        assert_eq!(format_resistance(470.0), "470.00 Ω");
        assert_eq!(format_resistance(1000.0), "1.00 kΩ");
        assert_eq!(format_resistance(2_200_000.0), "2.20 MΩ");
    }

    #[test]
    fn test_format_frequency() {
        assert_eq!(format_frequency(60.0), "60.00 Hz");
        assert_eq!(format_frequency(15_916.0), "15.92 kHz");
        assert_eq!(format_frequency(2.45e9), "2450.00 MHz");
    }

    #[test]
    fn test_format_energy() {
        assert_eq!(format_energy(0.0005), "500.00 μJ");
        assert_eq!(format_energy(0.072), "72.00 mJ");
        assert_eq!(format_energy(2.5), "2.5000 J");
    }
}
