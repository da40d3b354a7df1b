//! Chart and summary queries

use chrono::{Datelike, Duration, NaiveDate, Utc};

use super::{Database, SortOrder};
use crate::error::Result;
use crate::gapfill::round2;
use crate::models::{ChartPeriod, ChartSeries, StoreSummary, YearlyUsage};

impl Database {
    /// Cumulative meter series for chart rendering, oldest first.
    ///
    /// Returns the raw counter values, not consumption deltas; the charts
    /// show total meter states over time.
    pub fn chart_series(&self, period: ChartPeriod) -> Result<ChartSeries> {
        let date_from = match period {
            ChartPeriod::Year => Some(Utc::now().date_naive() - Duration::days(365)),
            ChartPeriod::TwoYears => Some(Utc::now().date_naive() - Duration::days(730)),
            ChartPeriod::All => None,
        };

        let readings = self.list_readings(SortOrder::Ascending, None, 0, date_from, None)?;

        let mut series = ChartSeries {
            labels: Vec::with_capacity(readings.len()),
            electricity_high: Vec::with_capacity(readings.len()),
            electricity_low: Vec::with_capacity(readings.len()),
            gas: Vec::with_capacity(readings.len()),
            water: Vec::with_capacity(readings.len()),
            synthetic_flags: Vec::with_capacity(readings.len()),
        };

        for reading in readings {
            series.labels.push(reading.date.format("%d.%m.%Y").to_string());
            series.electricity_high.push(reading.electricity_high);
            series.electricity_low.push(reading.electricity_low);
            series.gas.push(reading.gas);
            series.water.push(reading.water);
            series.synthetic_flags.push(reading.synthetic);
        }

        Ok(series)
    }

    /// Year-over-year consumption: for each calendar year with readings,
    /// the last counter value minus the first, per metric.
    pub fn year_over_year(&self) -> Result<Vec<YearlyUsage>> {
        let readings = self.list_readings(SortOrder::Ascending, None, 0, None, None)?;

        let mut years: Vec<YearlyUsage> = Vec::new();

        for chunk in readings.chunk_by(|a, b| a.date.year() == b.date.year()) {
            let first = &chunk[0];
            let last = &chunk[chunk.len() - 1];

            years.push(YearlyUsage {
                year: first.date.year(),
                readings_count: chunk.len(),
                electricity_high: round2(last.electricity_high - first.electricity_high),
                electricity_low: round2(last.electricity_low - first.electricity_low),
                gas: round2(last.gas - first.gas),
                water: round2(last.water - first.water),
            });
        }

        Ok(years)
    }

    /// Store-wide counts and date range
    pub fn summary(&self) -> Result<StoreSummary> {
        let conn = self.conn()?;

        let total_readings = self.count_readings(None)?;
        let manual_readings = self.count_readings(Some(false))?;
        let synthetic_readings = self.count_readings(Some(true))?;

        let first_date: Option<String> =
            conn.query_row("SELECT MIN(date) FROM readings", [], |row| row.get(0))?;
        let last_date: Option<String> =
            conn.query_row("SELECT MAX(date) FROM readings", [], |row| row.get(0))?;

        let parse =
            |s: Option<String>| s.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok());

        Ok(StoreSummary {
            total_readings,
            manual_readings,
            synthetic_readings,
            first_date: parse(first_date),
            last_date: parse(last_date),
        })
    }
}
