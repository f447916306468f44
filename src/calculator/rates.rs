//! Duty rate sets and calculation methods

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Percentage rates for the three duty components (7.5 means 7.5%)
///
/// Rates are not range-checked; negative or >100 values flow through the
/// arithmetic unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSet {
    /// Basic Customs Duty, levied on the assessable value
    pub bcd_rate: f64,
    /// Social Welfare Surcharge, levied on the BCD amount
    pub sws_rate: f64,
    /// Integrated GST, levied on assessable value + BCD + SWS
    pub igst_rate: f64,
}

impl RateSet {
    pub fn new(bcd_rate: f64, sws_rate: f64, igst_rate: f64) -> Self {
        Self {
            bcd_rate,
            sws_rate,
            igst_rate,
        }
    }

    /// All rates zero (duty-free)
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Duty calculation method declared on a shipment
///
/// Deserialises through [`FromStr`], so JSON accepts the same case-insensitive
/// names as CSV and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CalcMethod {
    /// Standard tariff, no savings concept
    #[default]
    Standard,
    /// Comprehensive Economic Partnership Agreement preferential duty
    #[serde(rename = "CEPA")]
    Cepa,
    /// Remission of Duties and Taxes on Exported Products
    Rodtep,
}

impl CalcMethod {
    /// Every method, in declaration order
    pub const ALL: [CalcMethod; 3] = [CalcMethod::Standard, CalcMethod::Cepa, CalcMethod::Rodtep];

    /// Whether an actual-vs-BOE savings figure is meaningful under this method
    pub fn has_savings(&self) -> bool {
        !matches!(self, CalcMethod::Standard)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalcMethod::Standard => "Standard",
            CalcMethod::Cepa => "CEPA",
            CalcMethod::Rodtep => "Rodtep",
        }
    }
}

impl fmt::Display for CalcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised calculation method name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown calculation method: {0}")]
pub struct ParseMethodError(pub String);

impl FromStr for CalcMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CalcMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseMethodError(trimmed.to_string()))
    }
}

impl TryFrom<String> for CalcMethod {
    type Error = ParseMethodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
