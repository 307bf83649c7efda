//! # Resistor Colour Code
//!
//! Decode 3- to 6-band resistor markings into a value, and encode a value
//! plus tolerance into a 4-band marking.
//!
//! ## Band layout
//!
//! ```text
//! 3 bands:  d d m        (tolerance ±20%)
//! 4 bands:  d d m t
//! 5 bands:  d d d m t
//! 6 bands:  d d d m t tc (temperature coefficient, ppm/°C)
//! ```
//!
//! Encode always produces the two-significant-digit form, so decoding an
//! arbitrary 5/6-band part and re-encoding it does not reproduce the
//! original band count.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::color_code::{decode, encode};
//!
//! let decoded = decode(&["brown", "black", "red", "gold"]).unwrap();
//! assert_eq!(decoded.value_ohms, 1000.0);
//! assert_eq!(decoded.formatted, "1.00 kΩ ±5%");
//!
//! assert_eq!(encode(1000.0, 5.0), vec!["brown", "black", "red", "gold"]);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{CalcError, CalcResult};
use crate::units::format_resistance;

/// Tolerance assumed when the marking has no tolerance band
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 20.0;

/// Tolerance band used by [`encode`] when no colour matches exactly
pub const FALLBACK_TOLERANCE_COLOR: &str = "silver";

/// Multiplier band used by [`encode`] when no colour matches the exponent
pub const FALLBACK_MULTIPLIER_COLOR: &str = "black";

/// Lowest power of ten the multiplier bands can express (silver, ×0.01)
const MIN_EXPONENT: i32 = -2;

/// One entry of the standard colour table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResistorBand {
    /// Colour name, unique key (lowercase)
    pub color: &'static str,
    /// Digit value 0-9, or -1 (gold) / -2 (silver) for multiplier-only bands
    pub digit: i8,
    /// Multiplier as a power-of-ten factor
    pub multiplier: f64,
    /// Tolerance (%), `None` for colours without a tolerance meaning
    pub tolerance: Option<f64>,
    /// Temperature coefficient (ppm/°C)
    pub temp_coefficient: Option<u32>,
    /// Display colour
    pub color_hex: &'static str,
}

impl ResistorBand {
    /// Whether this colour can appear in a significant-digit position
    pub fn is_digit(&self) -> bool {
        (0..=9).contains(&self.digit)
    }

    /// Power of ten represented by the multiplier
    pub fn exponent(&self) -> i32 {
        self.multiplier.log10().round() as i32
    }
}

/// Standard resistor colour table
pub const RESISTOR_BANDS: [ResistorBand; 12] = [
    ResistorBand { color: "black", digit: 0, multiplier: 1.0, tolerance: None, temp_coefficient: Some(250), color_hex: "#000000" },
    ResistorBand { color: "brown", digit: 1, multiplier: 10.0, tolerance: Some(1.0), temp_coefficient: Some(100), color_hex: "#8B4513" },
    ResistorBand { color: "red", digit: 2, multiplier: 100.0, tolerance: Some(2.0), temp_coefficient: Some(50), color_hex: "#FF0000" },
    ResistorBand { color: "orange", digit: 3, multiplier: 1.0e3, tolerance: None, temp_coefficient: Some(15), color_hex: "#FFA500" },
    ResistorBand { color: "yellow", digit: 4, multiplier: 1.0e4, tolerance: None, temp_coefficient: Some(25), color_hex: "#FFFF00" },
    ResistorBand { color: "green", digit: 5, multiplier: 1.0e5, tolerance: Some(0.5), temp_coefficient: Some(20), color_hex: "#008000" },
    ResistorBand { color: "blue", digit: 6, multiplier: 1.0e6, tolerance: Some(0.25), temp_coefficient: Some(10), color_hex: "#0000FF" },
    ResistorBand { color: "violet", digit: 7, multiplier: 1.0e7, tolerance: Some(0.1), temp_coefficient: Some(5), color_hex: "#8A2BE2" },
    ResistorBand { color: "grey", digit: 8, multiplier: 1.0e8, tolerance: Some(0.05), temp_coefficient: Some(1), color_hex: "#808080" },
    ResistorBand { color: "white", digit: 9, multiplier: 1.0e9, tolerance: None, temp_coefficient: None, color_hex: "#FFFFFF" },
    ResistorBand { color: "gold", digit: -1, multiplier: 0.1, tolerance: Some(5.0), temp_coefficient: None, color_hex: "#FFD700" },
    ResistorBand { color: "silver", digit: -2, multiplier: 0.01, tolerance: Some(10.0), temp_coefficient: None, color_hex: "#C0C0C0" },
];

static BANDS_BY_COLOR: Lazy<HashMap<&'static str, &'static ResistorBand>> =
    Lazy::new(|| RESISTOR_BANDS.iter().map(|b| (b.color, b)).collect());

/// Look up a band by colour name (case-insensitive, "gray" accepted)
pub fn find_band(color: &str) -> CalcResult<&'static ResistorBand> {
    let key = color.trim().to_lowercase();
    let key = if key == "gray" { "grey".to_string() } else { key };
    BANDS_BY_COLOR
        .get(key.as_str())
        .copied()
        .ok_or_else(|| CalcError::unknown_color(color))
}

fn band_for_digit(digit: u32) -> Option<&'static ResistorBand> {
    RESISTOR_BANDS
        .iter()
        .find(|b| b.is_digit() && b.digit as u32 == digit)
}

/// Result of decoding a colour-band marking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedResistor {
    /// Resistance (Ω)
    pub value_ohms: f64,
    /// Tolerance (%)
    pub tolerance_percent: f64,
    /// Temperature coefficient from a 6th band (ppm/°C)
    pub temp_coefficient_ppm: Option<u32>,
    /// Auto-scaled display string, e.g. "4.70 kΩ ±5%"
    pub formatted: String,
}

/// Decode an ordered list of 3 to 6 band colours
///
/// 3/4-band markings use two significant digits, 5/6-band markings three.
/// The band after the digits is the multiplier, the next one the tolerance.
///
/// # Errors
/// * `InvalidBandCount` - fewer than 3 or more than 6 bands
/// * `UnknownColor` - a colour is not in [`RESISTOR_BANDS`]
/// * `InvalidInput` - gold or silver used as a significant digit
pub fn decode<S: AsRef<str>>(bands: &[S]) -> CalcResult<DecodedResistor> {
    let count = bands.len();
    if !(3..=6).contains(&count) {
        return Err(CalcError::InvalidBandCount { count });
    }

    let entries = bands
        .iter()
        .map(|b| find_band(b.as_ref()))
        .collect::<CalcResult<Vec<_>>>()?;

    let digit_count = if count >= 5 { 3 } else { 2 };
    let (digits, rest) = entries.split_at(digit_count);

    let mut significant = 0.0;
    for (position, band) in digits.iter().enumerate() {
        if !band.is_digit() {
            return Err(CalcError::invalid_input(
                format!("bands[{}]", position),
                band.color,
                "Gold and silver cannot be significant digits",
            ));
        }
        significant = significant * 10.0 + f64::from(band.digit);
    }

    let value_ohms = significant * rest[0].multiplier;

    let tolerance_percent = match rest.get(1) {
        Some(band) => band.tolerance.unwrap_or_else(|| {
            warn!(color = band.color, "band has no tolerance meaning, assuming ±20%");
            DEFAULT_TOLERANCE_PERCENT
        }),
        None => DEFAULT_TOLERANCE_PERCENT,
    };

    let temp_coefficient_ppm = rest.get(2).and_then(|band| band.temp_coefficient);

    Ok(DecodedResistor {
        value_ohms,
        tolerance_percent,
        temp_coefficient_ppm,
        formatted: format!("{} ±{}%", format_resistance(value_ohms), tolerance_percent),
    })
}

/// Encode a resistance and tolerance into band colours
///
/// The value is normalised to two significant digits: divided by 10 while it
/// is 100 or more, and multiplied by 10 while it is below 10 (down to the
/// silver ×0.01 multiplier). Each digit maps to its colour, followed by the
/// multiplier band and the tolerance band.
///
/// Values from 1 Ω upward give 4 colours. A value with a single significant
/// digit that cannot be scaled further (0 Ω, or below 0.1 Ω) gives 3.
/// Non-finite or negative values encode as 0 Ω.
pub fn encode(value: f64, tolerance: f64) -> Vec<&'static str> {
    let mut normalized = if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!(value, "cannot encode value, using 0 Ω");
        0.0
    };
    let mut exponent: i32 = 0;

    while normalized >= 100.0 {
        normalized /= 10.0;
        exponent += 1;
    }
    while normalized > 0.0 && normalized < 10.0 && exponent > MIN_EXPONENT {
        normalized *= 10.0;
        exponent -= 1;
    }

    let mut significant = normalized.round() as u32;
    if significant >= 100 {
        // 99.5 and above rounds into the next decade
        significant /= 10;
        exponent += 1;
    }

    let mut colors: Vec<&'static str> = significant
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .filter_map(band_for_digit)
        .map(|b| b.color)
        .collect();

    let multiplier = RESISTOR_BANDS
        .iter()
        .find(|b| b.exponent() == exponent)
        .map(|b| b.color)
        .unwrap_or_else(|| {
            warn!(exponent, "no multiplier band for exponent");
            FALLBACK_MULTIPLIER_COLOR
        });
    colors.push(multiplier);

    let tolerance_color = RESISTOR_BANDS
        .iter()
        .find(|b| b.tolerance == Some(tolerance))
        .map(|b| b.color)
        .unwrap_or_else(|| {
            warn!(tolerance, "no tolerance band matches, using silver");
            FALLBACK_TOLERANCE_COLOR
        });
    colors.push(tolerance_color);

    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_table_invariants() {
        assert_eq!(RESISTOR_BANDS.len(), 12);
        assert_eq!(BANDS_BY_COLOR.len(), 12, "colour names must be unique");
        for (i, band) in RESISTOR_BANDS.iter().take(10).enumerate() {
            assert_eq!(band.digit as usize, i);
            assert_eq!(band.exponent(), i as i32);
        }
    }

    #[test]
    fn test_decode_four_band() {
        let decoded = decode(&["brown", "black", "red", "gold"]).unwrap();
        assert_eq!(decoded.value_ohms, 1000.0);
        assert_eq!(decoded.tolerance_percent, 5.0);
        assert_eq!(decoded.formatted, "1.00 kΩ ±5%");
        assert_eq!(decoded.temp_coefficient_ppm, None);
    }

    #[test]
    fn test_decode_three_band_defaults_to_20_percent() {
        let decoded = decode(&["yellow", "violet", "brown"]).unwrap();
        assert_eq!(decoded.value_ohms, 470.0);
        assert_eq!(decoded.tolerance_percent, 20.0);
        assert_eq!(decoded.formatted, "470.00 Ω ±20%");
    }

    #[test]
    fn test_decode_five_and_six_band() {
        let decoded = decode(&["brown", "black", "black", "red", "brown"]).unwrap();
        assert_eq!(decoded.value_ohms, 10_000.0);
        assert_eq!(decoded.tolerance_percent, 1.0);
        assert_eq!(decoded.formatted, "10.00 kΩ ±1%");

        let decoded = decode(&["orange", "orange", "black", "yellow", "green", "red"]).unwrap();
        assert_eq!(decoded.value_ohms, 3_300_000.0);
        assert_eq!(decoded.temp_coefficient_ppm, Some(50));
        // Temperature coefficient is not part of the formatted string
        assert_eq!(decoded.formatted, "3.30 MΩ ±0.5%");
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            decode(&["brown", "black"]).unwrap_err(),
            CalcError::InvalidBandCount { count: 2 }
        );
        assert_eq!(
            decode(&["brown", "pink", "red", "gold"]).unwrap_err().error_code(),
            "UNKNOWN_COLOR"
        );
        assert_eq!(
            decode(&["gold", "black", "red", "gold"]).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_decode_accepts_gray_and_mixed_case() {
        let decoded = decode(&["Gray", "RED", "black", "gold"]).unwrap();
        assert_eq!(decoded.value_ohms, 82.0);
    }

    #[test]
    fn test_encode_1k_5_percent() {
        assert_eq!(encode(1000.0, 5.0), vec!["brown", "black", "red", "gold"]);
    }

    #[test]
    fn test_encode_sub_ten_ohm_uses_gold_multiplier() {
        assert_eq!(encode(4.7, 5.0), vec!["yellow", "violet", "gold", "gold"]);
        assert_eq!(encode(0.22, 10.0), vec!["red", "red", "silver", "silver"]);
    }

    #[test]
    fn test_encode_fallbacks() {
        // 3% has no band: silver
        assert_eq!(encode(220.0, 3.0), vec!["red", "red", "brown", "silver"]);
        // Single significant digit
        assert_eq!(encode(0.0, 1.0), vec!["black", "black", "brown"]);
        // Rounds up into the next decade
        assert_eq!(encode(9.96, 1.0), vec!["brown", "black", "black", "brown"]);
    }

    #[test]
    fn test_three_significant_digits_round_to_two() {
        let bands = encode(472.0, 5.0);
        assert_eq!(bands, vec!["yellow", "violet", "brown", "gold"]);
        assert!(approx_eq(decode(&bands).unwrap().value_ohms, 470.0));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        for &(value, tolerance) in &[
            (1000.0, 5.0),
            (4700.0, 10.0),
            (220.0, 2.0),
            (47.0, 1.0),
            (10.0, 0.5),
            (1.5, 5.0),
            (0.22, 5.0),
            (68_000.0, 0.25),
            (1.0e6, 0.1),
            (3.3e9, 0.05),
        ] {
            let bands = encode(value, tolerance);
            assert_eq!(bands.len(), 4, "{} Ω -> {:?}", value, bands);
            let decoded = decode(&bands).unwrap();
            assert!(
                approx_eq(decoded.value_ohms, value),
                "{} Ω decoded as {}",
                value,
                decoded.value_ohms
            );
            assert_eq!(decoded.tolerance_percent, tolerance);
        }
    }
}
