//! Shipment line items as supplied by the invoice / BOE records

use crate::calculator::{compute_duty_from_rates, CalcMethod, DutyBreakdown, RateSet};
use serde::{Deserialize, Serialize};

/// Bill of Entry figures to compare actual duty against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BoeRecord {
    /// BOE filed at benchmark rates; the breakdown is recomputed on the line's value
    Rates(RateSet),
    /// BOE duty as stored on the record
    Stored(DutyBreakdown),
}

impl BoeRecord {
    /// Duty breakdown of this BOE for the given assessable value
    pub fn breakdown(&self, assessable_value: f64) -> DutyBreakdown {
        match self {
            BoeRecord::Rates(rates) => compute_duty_from_rates(assessable_value, rates),
            BoeRecord::Stored(breakdown) => *breakdown,
        }
    }
}

/// A single invoice line on a shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item reference (part number, SKU, invoice line id)
    pub item_ref: String,
    pub method: CalcMethod,
    pub assessable_value: f64,
    /// None when the quantity was left blank
    pub quantity: Option<f64>,
    /// Rates declared on the shipment
    pub actual_rates: RateSet,
    pub boe: Option<BoeRecord>,
}

impl LineItem {
    /// Create a line with no BOE attached
    pub fn new(
        item_ref: impl Into<String>,
        method: CalcMethod,
        assessable_value: f64,
        quantity: Option<f64>,
        actual_rates: RateSet,
    ) -> Self {
        Self {
            item_ref: item_ref.into(),
            method,
            assessable_value,
            quantity,
            actual_rates,
            boe: None,
        }
    }

    /// Attach a BOE record
    pub fn with_boe(mut self, boe: BoeRecord) -> Self {
        self.boe = Some(boe);
        self
    }
}
