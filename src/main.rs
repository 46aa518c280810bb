//! # actmon - Terminal Activity Panel
//!
//! A desktop-style activity monitor for the terminal showing simulated
//! CPU, memory, energy, disk, and network readings plus a fixed process
//! table. All data is synthetic; nothing is read from the host system.

mod app;
mod config;
pub mod constants;
mod models;
mod sim;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::Config;
use constants::MIN_REFRESH_MS;

/// actmon - Terminal Activity Panel
#[derive(Parser, Debug)]
#[command(name = "actmon", version, about = "A terminal activity monitor panel with simulated metrics")]
struct Cli {
    /// Color theme (default, gruvbox, nord, dracula, or a custom theme name)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// Refresh rate in milliseconds
    #[arg(long, short = 'r')]
    refresh_rate: Option<u64>,

    /// Seed for the metric simulation (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr only when RUST_LOG asks for it, so the alternate
    // screen stays clean by default.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Load and apply CLI overrides to config
    let mut config = Config::load();
    if let Some(rate) = cli.refresh_rate {
        config.refresh_interval_ms = rate.max(MIN_REFRESH_MS);
    }
    if let Some(ref theme_name) = cli.theme {
        config.theme = theme_name.clone();
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    // Build and run the application
    let mut app = app::App::new(&config)?;
    app.run().await
}
