use std::io::stderr;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use payments_dashboard_rs::{Dashboard, DashboardConfig};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

fn main() -> Result<()> {
    let config = DashboardConfig::parse();

    setup_logging(config.level_filter());

    let timer = Instant::now();
    let dashboard = Dashboard::build(&config.merchants);

    dashboard
        .save(&config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    info!(
        merchants = dashboard.len(),
        "Generated {} in {:?}",
        config.output.display(),
        timer.elapsed()
    );

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    // Logs go to stderr; the report goes to the output file
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
