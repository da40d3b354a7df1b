//! Domain models for meterlog

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One dated snapshot of the four cumulative meter counters.
///
/// Counters are cumulative values as read off the physical meters, not
/// per-period consumption. Real-world meters are monotonic, but the store
/// does not enforce monotonicity; only non-negativity and date uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub id: i64,
    /// Unique across all readings (at most one reading per calendar date)
    pub date: NaiveDate,
    /// Electricity, high tariff (kWh)
    pub electricity_high: f64,
    /// Electricity, low tariff (kWh)
    pub electricity_low: f64,
    /// Gas meter (m3)
    pub gas: f64,
    /// Water meter (m3)
    pub water: f64,
    /// false = manually entered, true = generated by gap interpolation
    pub synthetic: bool,
    pub created_at: DateTime<Utc>,
}

/// A reading that has not been persisted yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReading {
    pub date: NaiveDate,
    pub electricity_high: f64,
    pub electricity_low: f64,
    pub gas: f64,
    pub water: f64,
    #[serde(default)]
    pub synthetic: bool,
}

impl NewReading {
    /// Validate a candidate reading before it reaches the store.
    ///
    /// Counter values must be non-negative and the date must not lie in the
    /// future. The HTTP layer validates first; the store re-checks so that
    /// direct library callers get the same guarantees.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("electricity_high", self.electricity_high),
            ("electricity_low", self.electricity_low),
            ("gas", self.gas),
            ("water", self.water),
        ] {
            if value < 0.0 {
                return Err(Error::InvalidReading(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        if self.date > Utc::now().date_naive() {
            return Err(Error::InvalidReading(format!(
                "date {} is in the future",
                self.date
            )));
        }

        Ok(())
    }
}

/// Partial update for an existing reading; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingUpdate {
    pub date: Option<NaiveDate>,
    pub electricity_high: Option<f64>,
    pub electricity_low: Option<f64>,
    pub gas: Option<f64>,
    pub water: Option<f64>,
    pub synthetic: Option<bool>,
}

/// A reading paired with per-metric deltas against the next-older reading
/// in the same window. Deltas are `None` for the oldest entry of a window,
/// because its predecessor may lie outside the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingWithDiff {
    #[serde(flatten)]
    pub reading: Reading,
    pub diff_electricity_high: Option<f64>,
    pub diff_electricity_low: Option<f64>,
    pub diff_gas: Option<f64>,
    pub diff_water: Option<f64>,
}

/// A candidate synthetic reading for one missing calendar month.
///
/// Produced by the interpolator; dated the first day of the missing month,
/// values rounded to two decimals, not yet persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapSuggestion {
    pub date: NaiveDate,
    pub electricity_high: f64,
    pub electricity_low: f64,
    pub gas: f64,
    pub water: f64,
    /// Always true; kept in the payload so consumers can render the flag
    pub synthetic: bool,
}

impl GapSuggestion {
    pub fn to_new_reading(&self) -> NewReading {
        NewReading {
            date: self.date,
            electricity_high: self.electricity_high,
            electricity_low: self.electricity_low,
            gas: self.gas,
            water: self.water,
            synthetic: true,
        }
    }
}

/// Time window for chart queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    /// Last 365 days
    Year,
    /// Last 730 days
    #[serde(rename = "2years")]
    TwoYears,
    /// Full history
    #[default]
    All,
}

impl std::str::FromStr for ChartPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "year" => Ok(Self::Year),
            "2years" => Ok(Self::TwoYears),
            "all" => Ok(Self::All),
            _ => Err(format!("Unknown chart period: {}", s)),
        }
    }
}

/// Cumulative meter series for chart rendering, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Reading dates formatted as dd.mm.YYYY
    pub labels: Vec<String>,
    pub electricity_high: Vec<f64>,
    pub electricity_low: Vec<f64>,
    pub gas: Vec<f64>,
    pub water: Vec<f64>,
    /// Synthetic flag per point, so charts can mark interpolated data
    pub synthetic_flags: Vec<bool>,
}

/// Consumption within one calendar year (last reading minus first)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyUsage {
    pub year: i32,
    pub readings_count: usize,
    pub electricity_high: f64,
    pub electricity_low: f64,
    pub gas: f64,
    pub water: f64,
}

/// Store-wide counts and date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSummary {
    pub total_readings: i64,
    pub manual_readings: i64,
    pub synthetic_readings: i64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}
