//! Customs Duty - cascading duty and landed-cost calculations for import shipments
//!
//! This library provides:
//! - Cascading BCD / SWS / IGST duty breakdowns from percentage rate sets
//! - Per-unit duty and landed cost per unit
//! - Duty savings against benchmark and filed Bill of Entry (BOE) figures
//! - CSV loading of shipment lines and batch duty reports

pub mod calculator;
pub mod config;
pub mod error;
pub mod report;
pub mod shipment;

// Re-export commonly used types
pub use calculator::{CalcMethod, DutyBreakdown, RateSet, SavingsParams};
pub use config::RunConfig;
pub use error::{ConfigError, LoadError, ReportError};
pub use report::{Report, ReportRunner, ReportSummary};
pub use shipment::{BoeRecord, LineItem};
