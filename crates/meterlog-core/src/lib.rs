//! Meterlog Core Library
//!
//! Shared functionality for the meterlog utility-meter tracker:
//! - SQLite store for dated meter readings (electricity high/low, gas, water)
//! - Period-over-period consumption deltas
//! - Gap detection and linear interpolation of missing reading months
//! - Chart and summary report queries

pub mod db;
pub mod diff;
pub mod error;
pub mod gapfill;
pub mod models;

pub use db::{Database, SortOrder};
pub use diff::with_diffs;
pub use error::{Error, Result};
pub use gapfill::{GapFillConfig, GapFiller, MissingMonth};
pub use models::{
    ChartPeriod, ChartSeries, GapSuggestion, NewReading, Reading, ReadingUpdate, ReadingWithDiff,
    StoreSummary, YearlyUsage,
};
