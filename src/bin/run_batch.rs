//! Run duty calculations for every line in a shipment CSV
//!
//! Writes a per-line report CSV and prints the block summary

use anyhow::{Context, Result};
use clap::Parser;
use customs_duty::calculator::CalcMethod;
use customs_duty::report::write_report_csv;
use customs_duty::shipment::load_line_items;
use customs_duty::{ReportRunner, RunConfig};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", version, about = "Batch duty report over shipment lines")]
struct BatchArgs {
    /// JSON run configuration; CLI flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shipment line CSV
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report CSV to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Method for lines with an empty Method column
    #[arg(short, long)]
    method: Option<CalcMethod>,

    /// Evaluate lines on a single thread
    #[arg(long)]
    sequential: bool,
}

impl BatchArgs {
    fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(method) = self.method {
            config.default_method = method;
        }
        if self.sequential {
            config = config.sequential();
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = BatchArgs::parse().into_config()?;
    let start = Instant::now();

    println!("Loading shipment lines from {}...", config.input_path.display());
    let lines = load_line_items(&config.input_path, config.default_method)
        .with_context(|| format!("loading {}", config.input_path.display()))?;
    println!("Loaded {} lines in {:?}", lines.len(), start.elapsed());

    let runner = ReportRunner::new(config);
    let report = runner.run(&lines);

    let output_path = &runner.config().output_path;
    write_report_csv(output_path, &report)
        .with_context(|| format!("writing {}", output_path.display()))?;
    println!("Report written to {}", output_path.display());

    let summary = &report.summary;
    println!("\nBlock Summary:");
    println!("  Lines:            {}", summary.line_count);
    println!("  Total assessable: {:.2}", summary.total_assessable);
    println!("  Total duty:       {:.2}", summary.total_duty);
    println!(
        "  Total savings:    {:.2} ({} lines)",
        summary.total_savings, summary.lines_with_savings
    );

    println!("\nBy method:");
    for totals in &summary.by_method {
        println!(
            "  {:<8} lines={:<5} duty={:>14.2} savings={:>12.2}",
            totals.method.as_str(),
            totals.line_count,
            totals.total_duty,
            totals.total_savings,
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
