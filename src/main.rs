use std::fs;
use std::io::{stderr, stdout};
use std::process::exit;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use bank_transaction_model::models::{BankTransaction, Contact};
use bank_transaction_model::remote::{self, Resource};

const HEADER: [&str; 8] = ["id", "type", "status", "date", "contact", "line_items", "total", "complete"];

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: bank-transactions [response].json [log_level:optional] > [summary].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let body = fs::read_to_string(path)
        .with_context(|| format!("Could not read response file [{path}]"))?;

    let transactions: Vec<BankTransaction> = remote::decode(&body)
        .with_context(|| format!("Could not decode {} from [{path}]", BankTransaction::resource_uri()))?;

    info!("Decoded {} bank transactions from [{path}]", transactions.len());

    write_summary_to_stdout(&transactions)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the CSV summary, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_summary_to_stdout(transactions: &[BankTransaction]) -> Result<()> {
    let mut output = csv::Writer::from_writer(stdout().lock());

    output.write_record(HEADER)?;

    for transaction in transactions {
        let complete = match remote::validate(transaction) {
            Ok(()) => true,
            Err(error) => {
                warn!("Bank transaction [{}]: {error}", transaction.guid().unwrap_or("unassigned"));
                false
            }
        };

        output.write_record([
            transaction.guid().unwrap_or_default().to_string(),
            transaction.transaction_type().map(|t| t.to_string()).unwrap_or_default(),
            transaction.status().map(|s| s.to_string()).unwrap_or_default(),
            transaction.date().map(|d| d.to_string()).unwrap_or_default(),
            transaction.contact().and_then(Contact::name).unwrap_or_default().to_string(),
            transaction.line_items().len().to_string(),
            transaction.total().map(|t| t.to_string()).unwrap_or_default(),
            complete.to_string(),
        ])?;
    }

    output.flush()?;

    Ok(())
}
