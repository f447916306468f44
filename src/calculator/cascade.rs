//! Cascading duty computation (BCD -> SWS -> IGST)

use super::rates::RateSet;
use super::rounding::round2;
use serde::{Deserialize, Serialize};

/// Monetary duty amounts, each rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DutyBreakdown {
    pub bcd: f64,
    pub sws: f64,
    pub igst: f64,
    pub total: f64,
}

impl DutyBreakdown {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Check `total == round2(bcd + sws + igst)` within a cent.
    ///
    /// Components and total are rounded independently, so the sum of the
    /// rounded parts may sit one hundredth away from `total`.
    pub fn is_consistent(&self) -> bool {
        (self.total - round2(self.bcd + self.sws + self.igst)).abs() <= 0.01 + 1e-9
    }
}

/// Compute the benchmark (potential) duty on an assessable value.
///
/// Each stage's base includes the previous stage's output:
/// 1. `bcd = value * bcd%`
/// 2. `sws = bcd * sws%`
/// 3. `igst = (value + bcd + sws) * igst%`
///
/// `bcd`, `sws`, `igst` and `total` are each rounded from their own unrounded
/// value; `total` is not the sum of the rounded components.
pub fn compute_potential_duty(assessable_value: f64, rates: &RateSet) -> DutyBreakdown {
    let bcd = assessable_value * (rates.bcd_rate / 100.0);
    let sws = bcd * (rates.sws_rate / 100.0);
    let igst = (assessable_value + bcd + sws) * (rates.igst_rate / 100.0);
    let total = bcd + sws + igst;

    DutyBreakdown {
        bcd: round2(bcd),
        sws: round2(sws),
        igst: round2(igst),
        total: round2(total),
    }
}

/// Compute the actual duty from shipment-declared rates.
///
/// Same cascade as [`compute_potential_duty`].
pub fn compute_duty_from_rates(assessable_value: f64, rates: &RateSet) -> DutyBreakdown {
    compute_potential_duty(assessable_value, rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_cascade() {
        let duty = compute_potential_duty(10_000.0, &RateSet::new(10.0, 10.0, 18.0));
        assert_abs_diff_eq!(duty.bcd, 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(duty.sws, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(duty.igst, 1998.0, epsilon = 1e-9);
        assert_abs_diff_eq!(duty.total, 3098.0, epsilon = 1e-9);
        assert!(duty.is_consistent());
    }

    #[test]
    fn test_sws_levied_on_bcd_not_value() {
        let duty = compute_potential_duty(10_000.0, &RateSet::new(5.0, 10.0, 0.0));
        assert_abs_diff_eq!(duty.bcd, 500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(duty.sws, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(duty.total, 550.0, epsilon = 1e-9);
    }

    #[test]
    fn test_igst_base_includes_prior_components() {
        let duty = compute_potential_duty(10_000.0, &RateSet::new(5.0, 10.0, 18.0));
        // (10000 + 500 + 50) * 0.18
        assert_abs_diff_eq!(duty.igst, 1899.0, epsilon = 1e-9);
        assert_abs_diff_eq!(duty.total, 2449.0, epsilon = 1e-9);
    }

    #[test]
    fn test_total_rounded_from_unrounded_sum() {
        // bcd = 0.005, igst = 0.005025: each rounds to 0.01, but the raw sum
        // 0.010025 rounds to 0.01 rather than 0.02
        let duty = compute_potential_duty(1.0, &RateSet::new(0.5, 0.0, 0.5));
        assert_eq!(duty.bcd, 0.01);
        assert_eq!(duty.sws, 0.0);
        assert_eq!(duty.igst, 0.01);
        assert_eq!(duty.total, 0.01);
        assert!(duty.is_consistent());
    }

    #[test]
    fn test_zero_rates_are_duty_free() {
        let duty = compute_potential_duty(12_345.67, &RateSet::zero());
        assert_eq!(duty, DutyBreakdown::zero());
    }

    #[test]
    fn test_non_negative_for_non_negative_inputs() {
        let values = [0.0, 0.01, 99.99, 10_000.0, 1_234_567.89];
        let rates = [
            RateSet::new(0.0, 0.0, 0.0),
            RateSet::new(7.5, 10.0, 18.0),
            RateSet::new(100.0, 100.0, 100.0),
            RateSet::new(0.1, 0.0, 28.0),
        ];
        for &v in &values {
            for r in &rates {
                assert!(compute_potential_duty(v, r).total >= 0.0);
            }
        }
    }

    #[test]
    fn test_negative_inputs_propagate() {
        let duty = compute_potential_duty(-1000.0, &RateSet::new(10.0, 10.0, 0.0));
        assert_abs_diff_eq!(duty.bcd, -100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(duty.sws, -10.0, epsilon = 1e-9);

        let duty = compute_potential_duty(1000.0, &RateSet::new(-10.0, 0.0, 0.0));
        assert_abs_diff_eq!(duty.total, -100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        let duty = compute_potential_duty(f64::NAN, &RateSet::new(10.0, 10.0, 18.0));
        assert!(duty.bcd.is_nan());
        assert!(duty.total.is_nan());
    }

    #[test]
    fn test_actual_matches_potential() {
        let rates = RateSet::new(7.5, 10.0, 18.0);
        for &v in &[0.0, 1.0, 2_500.0, 98_765.43] {
            assert_eq!(compute_duty_from_rates(v, &rates), compute_potential_duty(v, &rates));
        }
    }
}
