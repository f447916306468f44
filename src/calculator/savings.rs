//! Duty savings against a benchmark or filed BOE

use super::cascade::{compute_duty_from_rates, DutyBreakdown};
use super::rates::{CalcMethod, RateSet};
use super::rounding::round2;
use serde::{Deserialize, Serialize};

/// Map negative differences to 0 while letting `NaN` through
/// (`f64::max` would swallow it).
fn clamp_non_negative(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        x
    }
}

/// Savings of the actual duty against a benchmark, never negative
pub fn compute_duty_savings(actual_duty_total: f64, potential_duty_total: f64) -> f64 {
    round2(clamp_non_negative(potential_duty_total - actual_duty_total))
}

/// Inputs for comparing actual-rate duty against a filed Bill of Entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsParams {
    pub method: CalcMethod,
    pub assessable_value: f64,
    pub actual_rates: RateSet,
    pub boe: DutyBreakdown,
}

/// Savings when the actual-rate duty exceeds the BOE duty.
///
/// Always 0 under [`CalcMethod::Standard`]. Under CEPA and Rodtep the result
/// is `round2(max(actual.total - boe.total, 0))`.
pub fn compute_savings_from_actual_vs_boe(params: &SavingsParams) -> f64 {
    if !params.method.has_savings() {
        return 0.0;
    }

    let actual = compute_duty_from_rates(params.assessable_value, &params.actual_rates);
    round2(clamp_non_negative(actual.total - params.boe.total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(method: CalcMethod, boe_bcd_rate: f64) -> SavingsParams {
        SavingsParams {
            method,
            assessable_value: 10_000.0,
            actual_rates: RateSet::new(10.0, 10.0, 18.0),
            boe: compute_duty_from_rates(10_000.0, &RateSet::new(boe_bcd_rate, 10.0, 18.0)),
        }
    }

    #[test]
    fn test_duty_savings() {
        assert_abs_diff_eq!(compute_duty_savings(2500.0, 3080.0), 580.0, epsilon = 1e-9);
        assert_eq!(compute_duty_savings(4000.0, 3080.0), 0.0);
        assert_eq!(compute_duty_savings(3080.0, 3080.0), 0.0);
    }

    #[test]
    fn test_duty_savings_never_negative() {
        let totals = [-100.0, 0.0, 0.004, 12.5, 3080.0, 1e9];
        for &a in &totals {
            for &p in &totals {
                assert!(compute_duty_savings(a, p) >= 0.0);
            }
        }
    }

    #[test]
    fn test_standard_method_has_no_savings() {
        assert_eq!(compute_savings_from_actual_vs_boe(&params(CalcMethod::Standard, 5.0)), 0.0);
        assert_eq!(compute_savings_from_actual_vs_boe(&params(CalcMethod::Standard, 0.0)), 0.0);

        let mut p = params(CalcMethod::Standard, 5.0);
        p.boe = DutyBreakdown::zero();
        p.assessable_value = 1e7;
        assert_eq!(compute_savings_from_actual_vs_boe(&p), 0.0);
    }

    #[test]
    fn test_cepa_savings_against_lower_boe() {
        // actual 3098 at 10% BCD, BOE 2449 at 5% BCD
        let savings = compute_savings_from_actual_vs_boe(&params(CalcMethod::Cepa, 5.0));
        assert!(savings > 0.0);
        assert_abs_diff_eq!(savings, 649.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rodtep_no_savings_when_boe_higher() {
        // BOE at 12% BCD totals 3357.60, above the actual 3098
        assert_eq!(compute_savings_from_actual_vs_boe(&params(CalcMethod::Rodtep, 12.0)), 0.0);
    }

    #[test]
    fn test_equal_boe_yields_zero() {
        assert_eq!(compute_savings_from_actual_vs_boe(&params(CalcMethod::Cepa, 10.0)), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(compute_duty_savings(f64::NAN, 3080.0).is_nan());
        assert!(compute_duty_savings(2500.0, f64::NAN).is_nan());
        assert!(compute_duty_savings(f64::INFINITY, f64::INFINITY).is_nan());

        for method in [CalcMethod::Cepa, CalcMethod::Rodtep] {
            let mut p = params(method, 5.0);
            p.assessable_value = f64::NAN;
            assert!(compute_savings_from_actual_vs_boe(&p).is_nan());
        }

        let mut p = params(CalcMethod::Cepa, 5.0);
        p.boe.total = f64::NAN;
        assert!(compute_savings_from_actual_vs_boe(&p).is_nan());
    }

    #[test]
    fn test_infinity_propagates() {
        assert_eq!(compute_duty_savings(0.0, f64::INFINITY), f64::INFINITY);
        assert_eq!(compute_duty_savings(f64::INFINITY, 0.0), 0.0);
    }

    #[test]
    fn test_standard_gate_ignores_nan() {
        let mut p = params(CalcMethod::Standard, 5.0);
        p.assessable_value = f64::NAN;
        assert_eq!(compute_savings_from_actual_vs_boe(&p), 0.0);
    }

    #[test]
    fn test_repeated_calls_identical() {
        let p = params(CalcMethod::Rodtep, 5.0);
        let first = compute_savings_from_actual_vs_boe(&p);
        let second = compute_savings_from_actual_vs_boe(&p);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
