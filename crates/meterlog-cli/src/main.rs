//! Meterlog CLI - Utility-meter reading tracker
//!
//! Usage:
//!   meterlog init                 Initialize database
//!   meterlog add --date ...       Record a meter reading
//!   meterlog list                 Show readings with consumption deltas
//!   meterlog suggest              Show gap-fill suggestions
//!   meterlog fill                 Create readings for all missing months
//!   meterlog serve --port 3000    Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Add {
            date,
            electricity_high,
            electricity_low,
            gas,
            water,
        } => commands::cmd_add(&cli.db, date, electricity_high, electricity_low, gas, water),
        Commands::List { limit, offset } => commands::cmd_list(&cli.db, limit, offset),
        Commands::Delete { id } => commands::cmd_delete(&cli.db, id),
        Commands::Suggest => commands::cmd_suggest(&cli.db),
        Commands::Fill => commands::cmd_fill(&cli.db),
        Commands::Status => commands::cmd_status(&cli.db),
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(&cli.db, &host, port, static_dir.as_deref()).await,
    }
}
