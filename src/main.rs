mod cli;
mod config;
mod generator;
mod ledger;
mod models;
mod output;
mod sampling;
mod types;

use std::io::stderr;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::level_filters::LevelFilter;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::Args;
use crate::generator::EventGenerator;
use crate::output::{EventStatistics, EventWriter};

const PROGRESS_INTERVAL: usize = 1_000_000;

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log_level);

    let config = args.to_config();
    config.validate()?;

    //NOTE: An explicit seed is always logged so that any run, seeded or not, can be reproduced.
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Generating {} events for {} clients into {} (seed {seed})", config.events, config.clients, args.output.display());

    let mut generator = EventGenerator::new(&config, StdRng::seed_from_u64(seed));
    let mut writer = EventWriter::create(&args.output)?;
    let mut statistics = EventStatistics::default();

    let timer = Instant::now();

    for event in generator.by_ref().take(config.events) {
        writer.write(&event)?;
        statistics.record(&event);

        if statistics.total() % PROGRESS_INTERVAL == 0 {
            info!("Generated {} events...", statistics.total());
        }
    }

    writer.finish()?;

    let duration = timer.elapsed();
    info!("Generated events in: {duration:?}");

    statistics.report(&generator);

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Logging goes to stderr so stdout stays free for piping.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
