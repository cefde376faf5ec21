//! Interactive console front end.
//!
//! Prompts for a mode (cost-only or cost + time), reads one input line
//! from stdin, and prints one result line per package in input order:
//! `ID discount total [time]`, with trailing zeros trimmed.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courier_service::models::DeliveryResult;
use courier_service::offers::OfferCatalog;
use courier_service::parser;
use courier_service::pricing::CostCalculator;
use courier_service::processor::PackageProcessor;
use courier_service::validation;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    println!("=== Courier Service ===");
    println!("Select mode:");
    println!("1. Delivery cost estimation only");
    println!("2. Delivery time estimation");
    print!("Enter choice (1 or 2): ");
    flush_stdout()?;

    let choice = read_line()?;
    let processor = PackageProcessor::new(CostCalculator::new(OfferCatalog::with_defaults()));

    match choice.trim() {
        "1" => run_cost_mode(&processor),
        "2" => run_time_mode(&processor),
        other => Err(format!("invalid choice '{other}'")),
    }
}

fn run_cost_mode(processor: &PackageProcessor) -> Result<(), String> {
    println!("\nInput: base_cost n  id weight distance offer  (repeated n times)");
    println!("Example: 100 3 PKG1 5 5 OFR001 PKG2 15 5 OFR002 PKG3 10 100 OFR003");
    print!("\nEnter input: ");
    flush_stdout()?;

    let input = read_line()?;
    let packages = parser::parse_cost_input(&input).map_err(|e| e.to_string())?;
    validation::validate_batch(&packages).map_err(format_validation_errors)?;

    let results = processor.process_costs(&packages);
    print_results(&results, false);
    Ok(())
}

fn run_time_mode(processor: &PackageProcessor) -> Result<(), String> {
    println!("\nInput: base_cost n  id weight distance offer (xn)  vehicles max_speed max_weight");
    println!(
        "Example: 100 5 PKG1 50 30 OFR001 PKG2 75 125 OFFR08 PKG3 175 100 OFR003 \
         PKG4 110 60 OFFR002 PKG5 155 95 NA 2 70 200"
    );
    print!("\nEnter input: ");
    flush_stdout()?;

    let input = read_line()?;
    let (packages, config) = parser::parse_time_input(&input).map_err(|e| e.to_string())?;
    validation::validate_for_scheduling(&packages, &config).map_err(format_validation_errors)?;

    let results = processor
        .process_with_times(&packages, &config)
        .map_err(|e| e.to_string())?;
    print_results(&results, true);
    Ok(())
}

fn print_results(results: &[DeliveryResult], with_time: bool) {
    println!("\n=== Results ===");
    for result in results {
        if with_time {
            println!(
                "{} {} {} {}",
                result.package_id,
                fmt(result.discount),
                fmt(result.total_cost),
                fmt(result.estimated_delivery_time)
            );
        } else {
            println!(
                "{} {} {}",
                result.package_id,
                fmt(result.discount),
                fmt(result.total_cost)
            );
        }
    }
}

/// Formats a decimal with trailing zeros trimmed (`35.00` → `35`).
fn fmt(value: Decimal) -> String {
    value.normalize().to_string()
}

fn format_validation_errors(errors: Vec<validation::ValidationError>) -> String {
    let messages: Vec<String> = errors
        .into_iter()
        .map(|e| format!("invalid input: {}", e.message))
        .collect();
    messages.join("\n")
}

fn read_line() -> Result<String, String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("failed to read input: {e}"))?;
    Ok(line)
}

fn flush_stdout() -> Result<(), String> {
    io::stdout()
        .flush()
        .map_err(|e| format!("failed to write prompt: {e}"))
}
