//! # Ohm's Law and DC Power
//!
//! The four basic relations between voltage, current, resistance and power.
//!
//! ## Notation
//!
//! - `V` = Voltage (volts)
//! - `I` = Current (amperes)
//! - `R` = Resistance (ohms)
//! - `P` = Power (watts)
//!
//! ## Division by zero
//!
//! [`current`] and [`resistance`] return `0.0` when the divisor is zero.
//! Callers that need to tell a computed zero apart from an undefined result
//! use the `checked_*` companions, which return `None` instead.

/// Calculate voltage from current and resistance
///
/// # Formula
/// V = I × R
///
/// # Example
/// ```rust
/// use elec_core::equations::ohms_law::voltage;
///
/// assert_eq!(voltage(2.0, 6.0), 12.0);
/// ```
#[inline]
pub fn voltage(current: f64, resistance: f64) -> f64 {
    current * resistance
}

/// Calculate current from voltage and resistance
///
/// # Formula
/// I = V / R, or 0 when R = 0
///
/// # Example
/// ```rust
/// use elec_core::equations::ohms_law::current;
///
/// assert_eq!(current(12.0, 4.0), 3.0);
/// assert_eq!(current(12.0, 0.0), 0.0);
/// ```
#[inline]
pub fn current(voltage: f64, resistance: f64) -> f64 {
    checked_current(voltage, resistance).unwrap_or(0.0)
}

/// Calculate resistance from voltage and current
///
/// # Formula
/// R = V / I, or 0 when I = 0
///
/// # Example
/// ```rust
/// use elec_core::equations::ohms_law::resistance;
///
/// assert_eq!(resistance(12.0, 3.0), 4.0);
/// assert_eq!(resistance(12.0, 0.0), 0.0);
/// ```
#[inline]
pub fn resistance(voltage: f64, current: f64) -> f64 {
    checked_resistance(voltage, current).unwrap_or(0.0)
}

/// Calculate power from voltage and current
///
/// # Formula
/// P = V × I
#[inline]
pub fn power(voltage: f64, current: f64) -> f64 {
    voltage * current
}

/// Current, or `None` when the resistance is zero
pub fn checked_current(voltage: f64, resistance: f64) -> Option<f64> {
    if resistance == 0.0 {
        None
    } else {
        Some(voltage / resistance)
    }
}

/// Resistance, or `None` when the current is zero
pub fn checked_resistance(voltage: f64, current: f64) -> Option<f64> {
    if current == 0.0 {
        None
    } else {
        Some(voltage / current)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
