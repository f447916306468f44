//! Duty calculator: cascading customs duty, unit economics and savings
//!
//! Every function here is pure and total over `f64`. Nothing is validated:
//! negative values, out-of-range rates and `NaN` all propagate arithmetically.
//!
//! # Example
//!
//! ```rust
//! use customs_duty::calculator::{compute_potential_duty, compute_landed_cost_per_unit, RateSet};
//!
//! let duty = compute_potential_duty(10_000.0, &RateSet::new(10.0, 10.0, 18.0));
//! assert_eq!(duty.total, 3098.0);
//!
//! let landed = compute_landed_cost_per_unit(10_000.0, duty.total, Some(100.0));
//! assert_eq!(landed, 130.98);
//! ```

mod cascade;
mod rates;
mod rounding;
mod savings;
mod unit;

pub use cascade::{compute_duty_from_rates, compute_potential_duty, DutyBreakdown};
pub use rates::{CalcMethod, ParseMethodError, RateSet};
pub use rounding::{round, round2, MONEY_DECIMALS};
pub use savings::{compute_duty_savings, compute_savings_from_actual_vs_boe, SavingsParams};
pub use unit::{compute_landed_cost_per_unit, compute_per_unit_duty, effective_quantity};
