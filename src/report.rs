//! Batch evaluation of shipment lines into a duty report
//!
//! Each line gets its actual duty breakdown, unit economics and, when a BOE
//! is attached, actual-vs-BOE savings. Lines are independent, so a batch can
//! be spread across the rayon pool without changing the output order.

use crate::calculator::{
    compute_duty_from_rates, compute_landed_cost_per_unit, compute_per_unit_duty,
    compute_savings_from_actual_vs_boe, round2, CalcMethod, DutyBreakdown, SavingsParams,
};
use crate::config::RunConfig;
use crate::error::ReportError;
use crate::shipment::LineItem;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// Evaluated figures for a single line
#[derive(Debug, Clone, PartialEq)]
pub struct LineResult {
    pub item_ref: String,
    pub method: CalcMethod,
    pub assessable_value: f64,
    pub quantity: Option<f64>,
    /// Duty at the shipment-declared rates
    pub duty: DutyBreakdown,
    pub per_unit_duty: f64,
    pub landed_cost_per_unit: f64,
    /// BOE duty total, when a BOE was attached
    pub boe_total: Option<f64>,
    pub savings: f64,
}

/// Evaluate one line
pub fn evaluate_line(line: &LineItem) -> LineResult {
    let duty = compute_duty_from_rates(line.assessable_value, &line.actual_rates);
    let boe = line.boe.map(|b| b.breakdown(line.assessable_value));

    let savings = match boe {
        Some(boe) => {
            if !line.method.has_savings() {
                log::warn!(
                    "{}: BOE attached under {} method, savings not applicable",
                    line.item_ref,
                    line.method
                );
            }
            compute_savings_from_actual_vs_boe(&SavingsParams {
                method: line.method,
                assessable_value: line.assessable_value,
                actual_rates: line.actual_rates,
                boe,
            })
        }
        None => 0.0,
    };

    let result = LineResult {
        item_ref: line.item_ref.clone(),
        method: line.method,
        assessable_value: line.assessable_value,
        quantity: line.quantity,
        duty,
        per_unit_duty: compute_per_unit_duty(duty.total, line.quantity),
        landed_cost_per_unit: compute_landed_cost_per_unit(
            line.assessable_value,
            duty.total,
            line.quantity,
        ),
        boe_total: boe.map(|b| b.total),
        savings,
    };

    log::debug!(
        "{}: duty={:.2} landed/unit={:.2} savings={:.2}",
        result.item_ref,
        result.duty.total,
        result.landed_cost_per_unit,
        result.savings
    );

    result
}

/// Totals for all lines under one method
#[derive(Debug, Clone, PartialEq)]
pub struct MethodTotals {
    pub method: CalcMethod,
    pub line_count: usize,
    pub total_duty: f64,
    pub total_savings: f64,
}

/// Block-level totals, each rounded once after summing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportSummary {
    pub line_count: usize,
    pub total_assessable: f64,
    pub total_duty: f64,
    pub total_savings: f64,
    pub lines_with_savings: usize,
    /// One entry per method present, in [`CalcMethod::ALL`] order
    pub by_method: Vec<MethodTotals>,
}

impl ReportSummary {
    pub fn from_lines(lines: &[LineResult]) -> Self {
        let by_method = CalcMethod::ALL
            .into_iter()
            .filter_map(|method| {
                let matching: Vec<&LineResult> =
                    lines.iter().filter(|l| l.method == method).collect();
                if matching.is_empty() {
                    return None;
                }
                Some(MethodTotals {
                    method,
                    line_count: matching.len(),
                    total_duty: round2(matching.iter().map(|l| l.duty.total).sum()),
                    total_savings: round2(matching.iter().map(|l| l.savings).sum()),
                })
            })
            .collect();

        Self {
            line_count: lines.len(),
            total_assessable: round2(lines.iter().map(|l| l.assessable_value).sum()),
            total_duty: round2(lines.iter().map(|l| l.duty.total).sum()),
            total_savings: round2(lines.iter().map(|l| l.savings).sum()),
            lines_with_savings: lines.iter().filter(|l| l.savings > 0.0).count(),
            by_method,
        }
    }
}

/// Evaluated lines plus their summary
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub lines: Vec<LineResult>,
    pub summary: ReportSummary,
}

/// Runs batches of lines under a fixed configuration
///
/// # Example
/// ```ignore
/// let runner = ReportRunner::new(RunConfig::default());
/// let lines = load_line_items(&runner.config().input_path, runner.config().default_method)?;
/// let report = runner.run(&lines);
/// write_report_csv(&runner.config().output_path, &report)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportRunner {
    config: RunConfig,
}

impl ReportRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Evaluate every line; output order matches input order
    pub fn run(&self, lines: &[LineItem]) -> Report {
        let results: Vec<LineResult> = if self.config.parallel {
            lines.par_iter().map(evaluate_line).collect()
        } else {
            lines.iter().map(evaluate_line).collect()
        };

        let summary = ReportSummary::from_lines(&results);
        log::info!(
            "Evaluated {} lines: duty={:.2} savings={:.2}",
            summary.line_count,
            summary.total_duty,
            summary.total_savings
        );

        Report {
            lines: results,
            summary,
        }
    }
}

/// Flat CSV row; amounts are written with two decimals
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "ItemRef")]
    item_ref: &'a str,
    #[serde(rename = "Method")]
    method: &'static str,
    #[serde(rename = "AssessableValue")]
    assessable_value: String,
    #[serde(rename = "Quantity")]
    quantity: Option<String>,
    #[serde(rename = "BCD")]
    bcd: String,
    #[serde(rename = "SWS")]
    sws: String,
    #[serde(rename = "IGST")]
    igst: String,
    #[serde(rename = "TotalDuty")]
    total_duty: String,
    #[serde(rename = "DutyPerUnit")]
    per_unit_duty: String,
    #[serde(rename = "LandedCostPerUnit")]
    landed_cost_per_unit: String,
    #[serde(rename = "BoeTotal")]
    boe_total: Option<String>,
    #[serde(rename = "Savings")]
    savings: String,
}

impl<'a> From<&'a LineResult> for ReportRow<'a> {
    fn from(line: &'a LineResult) -> Self {
        Self {
            item_ref: &line.item_ref,
            method: line.method.as_str(),
            assessable_value: format!("{:.2}", line.assessable_value),
            quantity: line.quantity.map(|q| q.to_string()),
            bcd: format!("{:.2}", line.duty.bcd),
            sws: format!("{:.2}", line.duty.sws),
            igst: format!("{:.2}", line.duty.igst),
            total_duty: format!("{:.2}", line.duty.total),
            per_unit_duty: format!("{:.2}", line.per_unit_duty),
            landed_cost_per_unit: format!("{:.2}", line.landed_cost_per_unit),
            boe_total: line.boe_total.map(|t| format!("{:.2}", t)),
            savings: format!("{:.2}", line.savings),
        }
    }
}

/// Write the per-line report to any writer
pub fn write_report_to_writer<W: std::io::Write>(
    writer: W,
    report: &Report,
) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for line in &report.lines {
        csv_writer.serialize(ReportRow::from(line))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the per-line report to a CSV file
pub fn write_report_csv<P: AsRef<Path>>(path: P, report: &Report) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_report_to_writer(file, report)
}
