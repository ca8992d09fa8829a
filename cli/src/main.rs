//! `rails`: explore payment rails and simulate their costs from the terminal

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use payment_rails_core::fees::get_fee_schema;
use payment_rails_core::simulator::{DEFAULT_AMOUNT, DEFAULT_MONTHLY_VOLUME};
use payment_rails_core::{format_currency, simulate, Catalog, FeeBreakdown, Scenario, SimulatorInputs};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Explore how payments move through payment rails", long_about = None)]
struct Cli {
    /// Load scenarios from this JSON file instead of the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Currency code used for display formatting
    #[arg(long, global = true, default_value = "USD")]
    currency: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all scenarios
    List,

    /// Show the routing path, metrics and failure points of a scenario
    Show {
        /// Scenario id
        id: String,
    },

    /// Estimate fees and settlement time for a scenario
    Simulate {
        /// Scenario id
        id: String,

        /// Transaction amount (5 to 5000)
        #[arg(short, long, default_value_t = DEFAULT_AMOUNT)]
        amount: f64,

        /// Transactions per month (1 to 2000)
        #[arg(short, long, default_value_t = DEFAULT_MONTHLY_VOLUME)]
        volume: u32,
    },

    /// Compare monthly fees across every scenario with a simulator
    Compare {
        #[arg(short, long, default_value_t = DEFAULT_AMOUNT)]
        amount: f64,

        #[arg(short, long, default_value_t = DEFAULT_MONTHLY_VOLUME)]
        volume: u32,
    },

    /// Print the fee model schema as JSON
    FeeSchema,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulationReport<'a> {
    scenario: &'a str,
    inputs: SimulatorInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<FeeBreakdown>,
}

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin().context("loading built-in catalog")?,
    };
    tracing::debug!(fingerprint = %catalog.fingerprint(), "catalog ready");

    match &cli.command {
        Command::List => list(&cli, &catalog),
        Command::Show { id } => show(&cli, find(&catalog, id)?),
        Command::Simulate { id, amount, volume } => {
            let inputs = checked_inputs(*amount, *volume);
            run_simulation(&cli, find(&catalog, id)?, inputs)
        }
        Command::Compare { amount, volume } => {
            compare(&cli, &catalog, checked_inputs(*amount, *volume))
        }
        Command::FeeSchema => {
            println!("{}", get_fee_schema()?);
            Ok(())
        }
    }
}

fn find<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Scenario> {
    catalog.get(id).ok_or_else(|| {
        anyhow!(
            "unknown scenario '{}' (available: {})",
            id,
            catalog.ids().join(", ")
        )
    })
}

fn checked_inputs(amount: f64, volume: u32) -> SimulatorInputs {
    let requested = SimulatorInputs::new(amount, volume);
    if requested.is_in_range() {
        return requested;
    }
    let clamped = requested.clamped();
    tracing::warn!(
        amount,
        volume,
        clamped_amount = clamped.amount,
        clamped_volume = clamped.monthly_volume,
        "simulator inputs out of range, clamping"
    );
    clamped
}

fn list(cli: &Cli, catalog: &Catalog) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(catalog.scenarios())?);
        return Ok(());
    }

    println!("{:<20} {:<24} {:<10} TITLE", "ID", "RAIL", "SIMULATOR");
    for scenario in catalog.scenarios() {
        println!(
            "{:<20} {:<24} {:<10} {}",
            scenario.id,
            scenario.rail,
            if scenario.has_simulator() { "yes" } else { "-" },
            scenario.title
        );
    }
    Ok(())
}

fn show(cli: &Cli, scenario: &Scenario) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(scenario)?);
        return Ok(());
    }

    println!("{} [{}]", scenario.title, scenario.rail);
    println!("{}", scenario.description);
    println!();

    let path: Vec<&str> = scenario
        .routing_path()
        .into_iter()
        .map(|id| scenario.node(id).map_or(id, |n| n.label.as_str()))
        .collect();
    println!("Route: {}", path.join(" -> "));
    for edge in &scenario.edges {
        match &edge.duration_label {
            Some(duration) => println!("  {} -> {}: {} ({})", edge.from, edge.to, edge.label, duration),
            None => println!("  {} -> {}: {}", edge.from, edge.to, edge.label),
        }
    }

    println!();
    println!("Total time:    {}", scenario.metrics.total_time);
    println!("Typical fee:   {}", scenario.metrics.typical_fee);
    println!("Reversibility: {}", scenario.metrics.reversibility);

    println!();
    println!("What can go wrong:");
    for point in &scenario.failure_points {
        println!("  - {point}");
    }
    println!("Why it works this way:");
    for reason in &scenario.rationale {
        println!("  - {reason}");
    }
    Ok(())
}

fn run_simulation(cli: &Cli, scenario: &Scenario, inputs: SimulatorInputs) -> Result<()> {
    let breakdown = simulate(scenario, inputs);

    if cli.json {
        let report = SimulationReport {
            scenario: &scenario.id,
            inputs,
            breakdown,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let Some(breakdown) = breakdown else {
        println!("Cost simulator not applicable for '{}'", scenario.id);
        return Ok(());
    };

    println!("{} [{}]", scenario.title, scenario.rail);
    println!(
        "Amount {} x {} per month ({})",
        format_currency(inputs.amount, &cli.currency),
        inputs.monthly_volume,
        if breakdown.is_international { "international" } else { "domestic" }
    );
    println!(
        "Fee per transaction: {}",
        format_currency(breakdown.fee_per_transaction, &cli.currency)
    );
    println!(
        "Monthly fees:        {}",
        format_currency(breakdown.monthly_fees, &cli.currency)
    );
    println!("Settlement time:     {}", breakdown.settlement_time_display);
    Ok(())
}

fn compare(cli: &Cli, catalog: &Catalog, inputs: SimulatorInputs) -> Result<()> {
    let mut rows: Vec<(&Scenario, FeeBreakdown)> = catalog
        .with_simulator()
        .filter_map(|scenario| simulate(scenario, inputs).map(|b| (scenario, b)))
        .collect();
    rows.sort_by(|a, b| a.1.monthly_fees.total_cmp(&b.1.monthly_fees));

    if cli.json {
        let reports: Vec<SimulationReport<'_>> = rows
            .into_iter()
            .map(|(scenario, breakdown)| SimulationReport {
                scenario: &scenario.id,
                inputs,
                breakdown: Some(breakdown),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!(
        "{:<20} {:>14} {:>16}  SETTLEMENT",
        "ID", "PER TX", "MONTHLY"
    );
    for (scenario, breakdown) in rows {
        println!(
            "{:<20} {:>14} {:>16}  {}",
            scenario.id,
            format_currency(breakdown.fee_per_transaction, &cli.currency),
            format_currency(breakdown.monthly_fees, &cli.currency),
            breakdown.settlement_time_display
        );
    }
    Ok(())
}
