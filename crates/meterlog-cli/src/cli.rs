//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Meterlog - Track utility-meter readings and fill the gaps
#[derive(Parser)]
#[command(name = "meterlog")]
#[command(about = "Self-hosted utility-meter reading tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "meterlog.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Record a meter reading
    Add {
        /// Reading date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,

        /// Electricity meter, high tariff (kWh)
        #[arg(long)]
        electricity_high: f64,

        /// Electricity meter, low tariff (kWh)
        #[arg(long)]
        electricity_low: f64,

        /// Gas meter (m3)
        #[arg(long)]
        gas: f64,

        /// Water meter (m3)
        #[arg(long)]
        water: f64,
    },

    /// List readings with consumption deltas
    List {
        /// Number of readings to show
        #[arg(short, long, default_value = "12")]
        limit: i64,

        /// Number of readings to skip (pagination)
        #[arg(short, long, default_value = "0")]
        offset: i64,
    },

    /// Delete a reading
    Delete {
        /// Reading id
        #[arg(long)]
        id: i64,
    },

    /// Show interpolated suggestions for missing months
    Suggest,

    /// Create readings for all suggested missing months
    Fill,

    /// Show database status
    Status,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory with static frontend files to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}
