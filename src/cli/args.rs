use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::level_filters::LevelFilter;

use crate::config::{AmountConfig, EventWeights, GeneratorConfig};
use crate::types::{Amount, ClientId};

/// Generate a causally valid stream of payment ledger events
#[derive(Parser, Debug)]
#[command(name = "ledger-event-generator")]
#[command(about = "Generate a causally valid stream of payment ledger events", long_about = None)]
pub struct Args {
    /// Destination CSV file, parent directories are created as needed
    #[arg(short, long, value_name = "PATH", default_value = "samples/generated.csv")]
    pub output: PathBuf,

    /// Number of clients, ids are drawn uniformly from 1..=clients
    #[arg(long, default_value_t = 1_000)]
    pub clients: ClientId,

    /// Total number of events to emit
    #[arg(long, default_value_t = 10_000_000)]
    pub events: usize,

    /// Selection weight of deposits
    #[arg(long, value_name = "WEIGHT", default_value_t = 0.40)]
    pub deposit: f64,

    /// Selection weight of withdrawals
    #[arg(long, value_name = "WEIGHT", default_value_t = 0.35)]
    pub withdrawal: f64,

    /// Selection weight of disputes
    #[arg(long, value_name = "WEIGHT", default_value_t = 0.15)]
    pub dispute: f64,

    /// Selection weight of resolves
    #[arg(long, value_name = "WEIGHT", default_value_t = 0.06)]
    pub resolve: f64,

    /// Selection weight of chargebacks (informational, chargebacks take the remainder)
    #[arg(long, value_name = "WEIGHT", default_value_t = 0.04)]
    pub chargeback: f64,

    /// Probability that a selected, feasible chargeback is actually emitted
    #[arg(long, value_name = "PROBABILITY", default_value_t = 0.04)]
    pub chargeback_throttle: f64,

    /// Smallest amount a deposit or withdrawal may carry
    #[arg(long, value_name = "AMOUNT", default_value = "0.01", value_parser = parse_amount)]
    pub min_amount: Amount,

    /// Largest amount a deposit or withdrawal may carry
    #[arg(long, value_name = "AMOUNT", default_value = "10000.00", value_parser = parse_amount)]
    pub max_amount: Amount,

    /// Boundary between the small and the large amount band
    #[arg(long, value_name = "AMOUNT", default_value = "100.00", value_parser = parse_amount)]
    pub small_threshold: Amount,

    /// Probability of drawing from the small amount band
    #[arg(long, value_name = "PROBABILITY", default_value_t = 0.7)]
    pub small_probability: f64,

    /// Seed for the random source, a random seed is chosen and logged when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "info", value_parser = parse_log_level)]
    pub log_level: LevelFilter
}

impl Args {
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            clients: self.clients,
            events: self.events,
            weights: EventWeights {
                deposit: self.deposit,
                withdrawal: self.withdrawal,
                dispute: self.dispute,
                resolve: self.resolve,
                chargeback: self.chargeback
            },
            amounts: AmountConfig {
                min: self.min_amount,
                max: self.max_amount,
                small_threshold: self.small_threshold,
                small_probability: self.small_probability
            },
            chargeback_throttle: self.chargeback_throttle
        }
    }
}

fn parse_amount(value: &str) -> Result<Amount, String> {
    Decimal::from_str(value.trim()).map_err(|error| format!("invalid amount '{value}': {error}"))
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(format!("invalid log level '{level}', expected one of: error, warn, info, debug, trace"))
    }
}
