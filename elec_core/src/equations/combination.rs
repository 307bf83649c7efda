//! # Series and Parallel Combination
//!
//! Equivalent values for networks of like components.
//!
//! | Component  | Series          | Parallel        |
//! |------------|-----------------|-----------------|
//! | Resistor   | sum             | reciprocal sum  |
//! | Inductor   | sum             | reciprocal sum  |
//! | Capacitor  | reciprocal sum  | sum             |
//!
//! Reciprocal sums skip zero-valued components and return `0.0` when nothing
//! contributes, instead of dividing by zero.

/// Plain sum of component values
fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// 1 / Σ(1/xᵢ), skipping zeros; 0 when the reciprocal sum is 0
fn reciprocal_sum(values: &[f64]) -> f64 {
    let total: f64 = values
        .iter()
        .filter(|&&v| v != 0.0)
        .map(|v| 1.0 / v)
        .sum();

    if total == 0.0 {
        0.0
    } else {
        1.0 / total
    }
}

/// Equivalent resistance of resistors in series
///
/// # Example
/// ```rust
/// use elec_core::equations::combination::series_resistance;
///
/// assert_eq!(series_resistance(&[1000.0, 2200.0, 3300.0]), 6500.0);
/// ```
pub fn series_resistance(resistors: &[f64]) -> f64 {
    sum(resistors)
}

/// Equivalent resistance of resistors in parallel
///
/// # Example
/// ```rust
/// use elec_core::equations::combination::parallel_resistance;
///
/// assert_eq!(parallel_resistance(&[100.0, 100.0]), 50.0);
/// ```
pub fn parallel_resistance(resistors: &[f64]) -> f64 {
    reciprocal_sum(resistors)
}

/// Equivalent capacitance of capacitors in series
pub fn series_capacitance(capacitors: &[f64]) -> f64 {
    reciprocal_sum(capacitors)
}

/// Equivalent capacitance of capacitors in parallel
pub fn parallel_capacitance(capacitors: &[f64]) -> f64 {
    sum(capacitors)
}

/// Equivalent inductance of inductors in series (no mutual coupling)
pub fn series_inductance(inductors: &[f64]) -> f64 {
    sum(inductors)
}

/// Equivalent inductance of inductors in parallel (no mutual coupling)
pub fn parallel_inductance(inductors: &[f64]) -> f64 {
    reciprocal_sum(inductors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * b.abs().max(1.0)
    }

    #[test]
    fn test_single_element_identity() {
        for &r in &[1.0, 47.0, 1.0e6] {
            assert_eq!(series_resistance(&[r]), r);
            assert!(approx_eq(parallel_resistance(&[r]), r));
        }
    }

    #[test]
    fn test_equal_capacitors_in_series_halve() {
        let c = 10.0e-6;
        assert!(approx_eq(series_capacitance(&[c, c]), c / 2.0));
        assert!(approx_eq(parallel_capacitance(&[c, c]), 2.0 * c));
    }

    #[test]
    fn test_parallel_three_resistors() {
        // 1k || 2.2k || 3.3k = 1 / (1/1000 + 1/2200 + 1/3300) ≈ 568.97
        let r = parallel_resistance(&[1000.0, 2200.0, 3300.0]);
        assert!((r - 568.97).abs() < 0.01, "R = {}", r);
    }

    #[test]
    fn test_zero_values_are_skipped() {
        assert!(approx_eq(parallel_resistance(&[0.0, 100.0]), 100.0));
        assert!(approx_eq(series_capacitance(&[0.0, 4.0, 4.0]), 2.0));
    }

    #[test]
    fn test_degenerate_inputs_return_zero() {
        assert_eq!(parallel_resistance(&[]), 0.0);
        assert_eq!(parallel_inductance(&[0.0, 0.0]), 0.0);
        assert_eq!(series_capacitance(&[]), 0.0);
        assert_eq!(series_resistance(&[]), 0.0);
    }

    #[test]
    fn test_inductors_follow_resistor_rules() {
        assert!(approx_eq(series_inductance(&[0.01, 0.02]), 0.03));
        assert!(approx_eq(parallel_inductance(&[0.02, 0.02]), 0.01));
    }
}
