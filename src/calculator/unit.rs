//! Per-unit duty and landed cost

use super::rounding::round2;

/// Divisor used for per-unit figures: the quantity when it is a positive
/// number, otherwise 1 (missing, zero, negative or NaN).
pub fn effective_quantity(quantity: Option<f64>) -> f64 {
    match quantity {
        Some(q) if q > 0.0 => q,
        _ => 1.0,
    }
}

/// Duty per unit, rounded to two decimals
pub fn compute_per_unit_duty(total_duty: f64, quantity: Option<f64>) -> f64 {
    round2(total_duty / effective_quantity(quantity))
}

/// Assessable value per unit plus duty per unit, rounded to two decimals.
///
/// The duty share is computed against the same effective quantity as the
/// assessable share.
pub fn compute_landed_cost_per_unit(
    assessable_value: f64,
    total_duty: f64,
    quantity: Option<f64>,
) -> f64 {
    let qty = effective_quantity(quantity);
    round2(assessable_value / qty + compute_per_unit_duty(total_duty, Some(qty)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_unit_duty() {
        assert_eq!(compute_per_unit_duty(1000.0, Some(100.0)), 10.0);
        assert_eq!(compute_per_unit_duty(1000.0, Some(3.0)), 333.33);
    }

    #[test]
    fn test_per_unit_falls_back_to_total() {
        assert_eq!(compute_per_unit_duty(1000.0, Some(0.0)), 1000.0);
        assert_eq!(compute_per_unit_duty(1000.0, None), 1000.0);
        assert_eq!(compute_per_unit_duty(1000.0, Some(-5.0)), 1000.0);
        assert_eq!(compute_per_unit_duty(1000.0, Some(f64::NAN)), 1000.0);

        let t = 1234.5678;
        for q in [None, Some(0.0), Some(-1.0)] {
            assert_eq!(compute_per_unit_duty(t, q), round2(t));
        }
    }

    #[test]
    fn test_fractional_quantity() {
        assert_eq!(compute_per_unit_duty(100.0, Some(0.5)), 200.0);
    }

    #[test]
    fn test_landed_cost() {
        assert_eq!(compute_landed_cost_per_unit(5000.0, 1000.0, Some(100.0)), 60.0);
    }

    #[test]
    fn test_landed_cost_falls_back_consistently() {
        assert_eq!(compute_landed_cost_per_unit(5000.0, 1000.0, None), 6000.0);
        assert_eq!(compute_landed_cost_per_unit(5000.0, 1000.0, Some(0.0)), 6000.0);
    }

    #[test]
    fn test_landed_cost_uses_rounded_duty_share() {
        // 100/3 = 33.333.. ; duty 10/3 rounds to 3.33 ; 33.3333 + 3.33 = 36.6633
        assert_eq!(compute_landed_cost_per_unit(100.0, 10.0, Some(3.0)), 36.66);
    }

    #[test]
    fn test_nan_total_propagates() {
        assert!(compute_per_unit_duty(f64::NAN, Some(2.0)).is_nan());
        assert!(compute_landed_cost_per_unit(f64::NAN, 1.0, Some(2.0)).is_nan());
    }
}
