//! # AC Reactance, Impedance and Resonance
//!
//! Formulas for series RLC behaviour under sinusoidal excitation, plus the
//! energy stored in a capacitor or inductor.
//!
//! ## Notation
//!
//! - `f` = Frequency (Hz)
//! - `C` = Capacitance (farads)
//! - `L` = Inductance (henries)
//! - `Xc`, `Xl` = Capacitive / inductive reactance (ohms)
//! - `Z` = Impedance magnitude (ohms)
//! - `θ` = Phase angle (degrees)
//!
//! ## Sign Convention
//!
//! The phase angle is `atan2(Xl - Xc, R)`: positive when the circuit is net
//! inductive (current lags), negative when net capacitive (current leads).
//!
//! All inputs are in base SI units. Prefix scaling (μF, mH, ...) belongs to
//! the caller; see [`crate::units`].

use std::f64::consts::PI;

/// Calculate capacitive reactance
///
/// # Formula
/// Xc = 1 / (2πfC), or 0 when C = 0
///
/// # Example
/// ```rust
/// use elec_core::equations::reactance::capacitive_reactance;
///
/// // 10 μF at 60 Hz
/// let xc = capacitive_reactance(60.0, 10.0e-6);
/// assert!((xc - 265.26).abs() < 0.01);
/// ```
pub fn capacitive_reactance(frequency: f64, capacitance: f64) -> f64 {
    if capacitance == 0.0 {
        return 0.0;
    }
    1.0 / (2.0 * PI * frequency * capacitance)
}

/// Calculate inductive reactance
///
/// # Formula
/// Xl = 2πfL
///
/// # Example
/// ```rust
/// use elec_core::equations::reactance::inductive_reactance;
///
/// // 100 mH at 60 Hz
/// let xl = inductive_reactance(60.0, 0.1);
/// assert!((xl - 37.70).abs() < 0.01);
/// ```
#[inline]
pub fn inductive_reactance(frequency: f64, inductance: f64) -> f64 {
    2.0 * PI * frequency * inductance
}

/// Calculate series impedance magnitude
///
/// # Formula
/// Z = √(R² + (Xl − Xc)²)
#[inline]
pub fn impedance(resistance: f64, capacitive_reactance: f64, inductive_reactance: f64) -> f64 {
    resistance.hypot(inductive_reactance - capacitive_reactance)
}

/// Calculate phase angle in degrees
///
/// # Formula
/// θ = atan2(Xl − Xc, R)
///
/// # Example
/// ```rust
/// use elec_core::equations::reactance::phase_angle;
///
/// // Purely resistive
/// assert_eq!(phase_angle(100.0, 0.0, 0.0), 0.0);
/// // Equal R and net inductive X
/// assert!((phase_angle(100.0, 0.0, 100.0) - 45.0).abs() < 1e-9);
/// ```
pub fn phase_angle(resistance: f64, capacitive_reactance: f64, inductive_reactance: f64) -> f64 {
    (inductive_reactance - capacitive_reactance)
        .atan2(resistance)
        .to_degrees()
}

/// Energy stored in a capacitor, in joules
///
/// # Formula
/// E = ½CV²
#[inline]
pub fn capacitor_energy(capacitance: f64, voltage: f64) -> f64 {
    0.5 * capacitance * voltage * voltage
}

/// Energy stored in an inductor, in joules
///
/// # Formula
/// E = ½LI²
#[inline]
pub fn inductor_energy(inductance: f64, current: f64) -> f64 {
    0.5 * inductance * current * current
}

/// Calculate LC resonant frequency
///
/// # Formula
/// f0 = 1 / (2π√(LC))
///
/// Returns `f64::INFINITY` when L or C is zero, as the plain formula does.
///
/// # Example
/// ```rust
/// use elec_core::equations::reactance::resonant_frequency;
///
/// // 100 mH, 10 μF
/// let f0 = resonant_frequency(0.1, 10.0e-6);
/// assert!((f0 - 159.15).abs() < 0.01);
/// ```
pub fn resonant_frequency(inductance: f64, capacitance: f64) -> f64 {
    1.0 / (2.0 * PI * (inductance * capacitance).sqrt())
}

/// Calculate bandwidth from resonant frequency and quality factor
///
/// # Formula
/// BW = f0 / Q
#[inline]
pub fn bandwidth(resonant_frequency: f64, quality_factor: f64) -> f64 {
    resonant_frequency / quality_factor
}

/// Series RLC impedance at an arbitrary frequency
///
/// Combines [`capacitive_reactance`], [`inductive_reactance`] and
/// [`impedance`]. At the resonant frequency this reduces to `R`.
pub fn impedance_at_frequency(resistance: f64, inductance: f64, capacitance: f64, frequency: f64) -> f64 {
    let xl = inductive_reactance(frequency, inductance);
    let xc = capacitive_reactance(frequency, capacitance);
    impedance(resistance, xc, xl)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
