//! Customs Duty CLI
//!
//! Command-line interface for single-shipment duty and savings calculations

use clap::{Args, Parser, Subcommand};
use customs_duty::calculator::{
    compute_duty_from_rates, compute_landed_cost_per_unit, compute_per_unit_duty,
    compute_savings_from_actual_vs_boe, CalcMethod, DutyBreakdown, RateSet, SavingsParams,
};

#[derive(Parser, Debug)]
#[command(name = "customs-duty", version, about = "Cascading customs-duty calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the duty breakdown and landed cost for one shipment
    Duty {
        /// Assessable (customs) value
        #[arg(short, long)]
        assessable: f64,

        #[command(flatten)]
        rates: RateArgs,

        /// Unit count; blank, zero or negative means per-unit figures use the total
        #[arg(short, long)]
        quantity: Option<f64>,
    },

    /// Compare actual-rate duty against a filed BOE
    Savings {
        /// Calculation method: Standard, CEPA or Rodtep
        #[arg(short, long, default_value = "Standard")]
        method: CalcMethod,

        /// Assessable (customs) value
        #[arg(short, long)]
        assessable: f64,

        #[command(flatten)]
        rates: RateArgs,

        /// BOE basic customs duty rate (%)
        #[arg(long)]
        boe_bcd: f64,

        /// BOE social welfare surcharge rate (%)
        #[arg(long, default_value = "10")]
        boe_sws: f64,

        /// BOE integrated GST rate (%)
        #[arg(long)]
        boe_igst: f64,
    },
}

/// Shipment-declared rates
#[derive(Args, Debug)]
struct RateArgs {
    /// Basic customs duty rate (%)
    #[arg(long)]
    bcd: f64,

    /// Social welfare surcharge rate (%), levied on BCD
    #[arg(long, default_value = "10")]
    sws: f64,

    /// Integrated GST rate (%)
    #[arg(long)]
    igst: f64,
}

impl RateArgs {
    fn rate_set(&self) -> RateSet {
        RateSet::new(self.bcd, self.sws, self.igst)
    }
}

fn print_breakdown(label: &str, duty: &DutyBreakdown) {
    println!("{}:", label);
    println!("  BCD:   {:>14.2}", duty.bcd);
    println!("  SWS:   {:>14.2}", duty.sws);
    println!("  IGST:  {:>14.2}", duty.igst);
    println!("  Total: {:>14.2}", duty.total);
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Duty {
            assessable,
            rates,
            quantity,
        } => {
            let rates = rates.rate_set();
            log::debug!(
                "duty: assessable={} rates={:?} quantity={:?}",
                assessable,
                rates,
                quantity
            );

            let duty = compute_duty_from_rates(assessable, &rates);
            print_breakdown("Duty", &duty);
            println!();
            println!(
                "Duty per unit:        {:>14.2}",
                compute_per_unit_duty(duty.total, quantity)
            );
            println!(
                "Landed cost per unit: {:>14.2}",
                compute_landed_cost_per_unit(assessable, duty.total, quantity)
            );
        }
        Commands::Savings {
            method,
            assessable,
            rates,
            boe_bcd,
            boe_sws,
            boe_igst,
        } => {
            let actual_rates = rates.rate_set();
            let boe_rates = RateSet::new(boe_bcd, boe_sws, boe_igst);
            let boe = compute_duty_from_rates(assessable, &boe_rates);
            let actual = compute_duty_from_rates(assessable, &actual_rates);

            print_breakdown("Actual duty", &actual);
            print_breakdown("BOE duty", &boe);

            let savings = compute_savings_from_actual_vs_boe(&SavingsParams {
                method,
                assessable_value: assessable,
                actual_rates,
                boe,
            });
            println!();
            println!("Method:  {}", method);
            println!("Savings: {:.2}", savings);
        }
    }
}
