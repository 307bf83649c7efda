//! # Power Factor and the Power Triangle
//!
//! - `P` = Real power (W)
//! - `Q` = Reactive power (VAR)
//! - `S` = Apparent power (VA)
//! - `PF` = P / S
//!
//! PF is expected in [0, 1]. These functions neither clamp nor validate it;
//! a PF outside that range makes `acos` return NaN in [`reactive_power`].

/// Calculate power factor
///
/// # Formula
/// PF = P / S, or 0 when S = 0
///
/// # Example
/// ```rust
/// use elec_core::equations::power_factor::power_factor;
///
/// assert_eq!(power_factor(800.0, 1000.0), 0.8);
/// assert_eq!(power_factor(800.0, 0.0), 0.0);
/// ```
pub fn power_factor(real_power: f64, apparent_power: f64) -> f64 {
    checked_power_factor(real_power, apparent_power).unwrap_or(0.0)
}

/// Calculate reactive power
///
/// # Formula
/// Q = S × sin(acos(PF))
pub fn reactive_power(apparent_power: f64, power_factor: f64) -> f64 {
    apparent_power * power_factor.acos().sin()
}

/// Calculate apparent power
///
/// # Formula
/// S = P / PF, or 0 when PF = 0
pub fn apparent_power(real_power: f64, power_factor: f64) -> f64 {
    checked_apparent_power(real_power, power_factor).unwrap_or(0.0)
}

/// Power factor, or `None` when the apparent power is zero
pub fn checked_power_factor(real_power: f64, apparent_power: f64) -> Option<f64> {
    (apparent_power != 0.0).then(|| real_power / apparent_power)
}

/// Apparent power, or `None` when the power factor is zero
pub fn checked_apparent_power(real_power: f64, power_factor: f64) -> Option<f64> {
    (power_factor != 0.0).then(|| real_power / power_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_triangle_3_4_5() {
        // S = 1000 VA, PF = 0.8 → P = 800 W, Q = 600 VAR
        let q = reactive_power(1000.0, 0.8);
        assert!((q - 600.0).abs() < 1e-9, "Q = {}", q);

        let s = apparent_power(800.0, 0.8);
        assert!((s - 1000.0).abs() < 1e-9, "S = {}", s);
    }

    #[test]
    fn test_unity_power_factor_has_no_reactive_power() {
        assert!(reactive_power(500.0, 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_guarded_divisions() {
        assert_eq!(apparent_power(800.0, 0.0), 0.0);
        assert_eq!(checked_apparent_power(800.0, 0.0), None);
        assert_eq!(checked_power_factor(800.0, 0.0), None);
    }

    #[test]
    fn test_out_of_range_power_factor_is_not_clamped() {
        assert!(reactive_power(1000.0, 1.5).is_nan());
    }
}
