//! Load shipment line items from CSV

use super::{BoeRecord, LineItem};
use crate::calculator::{CalcMethod, DutyBreakdown, RateSet};
use crate::error::LoadError;
use csv::Reader;
use std::path::Path;

/// Default input file name for batch runs
pub const DEFAULT_LINES_PATH: &str = "data/shipment_lines.csv";

/// Raw CSV row; optional columns may be left empty
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ItemRef")]
    item_ref: String,
    #[serde(rename = "Method", default)]
    method: Option<String>,
    #[serde(rename = "AssessableValue")]
    assessable_value: f64,
    #[serde(rename = "Quantity", default)]
    quantity: Option<f64>,
    #[serde(rename = "BcdRate")]
    bcd_rate: f64,
    #[serde(rename = "SwsRate")]
    sws_rate: f64,
    #[serde(rename = "IgstRate")]
    igst_rate: f64,
    #[serde(rename = "BoeBcdRate", default)]
    boe_bcd_rate: Option<f64>,
    #[serde(rename = "BoeSwsRate", default)]
    boe_sws_rate: Option<f64>,
    #[serde(rename = "BoeIgstRate", default)]
    boe_igst_rate: Option<f64>,
    #[serde(rename = "BoeTotal", default)]
    boe_total: Option<f64>,
}

impl CsvRow {
    fn into_line_item(
        self,
        row: usize,
        default_method: CalcMethod,
    ) -> Result<LineItem, LoadError> {
        let method = match self.method.as_deref().map(str::trim) {
            None | Some("") => default_method,
            Some(name) => name.parse::<CalcMethod>().map_err(|source| LoadError::Method {
                row,
                item_ref: self.item_ref.clone(),
                source,
            })?,
        };

        let boe = match (self.boe_bcd_rate, self.boe_sws_rate, self.boe_igst_rate) {
            (Some(bcd), Some(sws), Some(igst)) => {
                Some(BoeRecord::Rates(RateSet::new(bcd, sws, igst)))
            }
            (None, None, None) => self.boe_total.map(|total| {
                BoeRecord::Stored(DutyBreakdown {
                    total,
                    ..DutyBreakdown::zero()
                })
            }),
            _ => {
                return Err(LoadError::PartialBoeRates {
                    row,
                    item_ref: self.item_ref,
                })
            }
        };

        Ok(LineItem {
            item_ref: self.item_ref,
            method,
            assessable_value: self.assessable_value,
            quantity: self.quantity,
            actual_rates: RateSet::new(self.bcd_rate, self.sws_rate, self.igst_rate),
            boe,
        })
    }
}

/// Load all line items from a CSV file
pub fn load_line_items<P: AsRef<Path>>(
    path: P,
    default_method: CalcMethod,
) -> Result<Vec<LineItem>, LoadError> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let items = read_rows(reader, default_method)?;
    log::info!("Loaded {} line items from {}", items.len(), path.display());
    Ok(items)
}

/// Load line items from any reader (e.g., string buffer, request body)
pub fn load_line_items_from_reader<R: std::io::Read>(
    reader: R,
    default_method: CalcMethod,
) -> Result<Vec<LineItem>, LoadError> {
    read_rows(Reader::from_reader(reader), default_method)
}

fn read_rows<R: std::io::Read>(
    mut reader: Reader<R>,
    default_method: CalcMethod,
) -> Result<Vec<LineItem>, LoadError> {
    let mut items = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        items.push(row.into_line_item(idx + 1, default_method)?);
    }

    Ok(items)
}
