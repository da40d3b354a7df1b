//! Suggestion and commit orchestration over the reading store

use tracing::{debug, info};

use crate::db::{Database, SortOrder};
use crate::error::{Error, Result};
use crate::models::{GapSuggestion, Reading};

use super::detector::missing_months;
use super::interpolator::interpolate;

/// Tunables for gap detection
#[derive(Debug, Clone, Copy)]
pub struct GapFillConfig {
    /// Adjacent readings further apart than this form a gap
    pub threshold_days: i64,
    /// How many of the most recent readings to scan
    pub window: i64,
}

impl Default for GapFillConfig {
    fn default() -> Self {
        Self {
            threshold_days: 30,
            window: 12,
        }
    }
}

/// Scans the recent reading history for gaps and fills them with
/// interpolated synthetic readings.
pub struct GapFiller<'a> {
    db: &'a Database,
    config: GapFillConfig,
}

impl<'a> GapFiller<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self::with_config(db, GapFillConfig::default())
    }

    pub fn with_config(db: &'a Database, config: GapFillConfig) -> Self {
        Self { db, config }
    }

    /// Compute gap-fill suggestions over the most recent window of readings.
    ///
    /// Candidates whose date already has a stored reading are dropped
    /// silently; a reading may have been entered for a missing month since
    /// the gap formed, and that is not an error. Fewer than two readings in
    /// the window means no pairs to inspect, so the result is empty.
    ///
    /// Suggestions come back in ascending date order across all gaps.
    pub fn compute_suggestions(&self) -> Result<Vec<GapSuggestion>> {
        let mut readings = self.db.list_readings(
            SortOrder::Descending,
            Some(self.config.window),
            0,
            None,
            None,
        )?;

        if readings.len() < 2 {
            return Ok(Vec::new());
        }

        // Oldest first for pairwise scanning
        readings.reverse();

        let mut suggestions = Vec::new();

        for pair in readings.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);

            let months = missing_months(current.date, next.date, self.config.threshold_days);
            if months.is_empty() {
                continue;
            }

            debug!(
                from = %current.date,
                to = %next.date,
                missing = months.len(),
                "Detected reading gap"
            );

            for candidate in interpolate(current, next, &months) {
                if self.db.find_reading_by_date(candidate.date)?.is_some() {
                    continue;
                }
                suggestions.push(candidate);
            }
        }

        Ok(suggestions)
    }

    /// Persist every current suggestion, returning the number created.
    ///
    /// The date collision is re-checked inside each create's transaction,
    /// guarding against a reading created between suggestion and commit; a
    /// candidate that lost that race is skipped, not an error.
    pub fn commit_all(&self) -> Result<usize> {
        let suggestions = self.compute_suggestions()?;

        let mut created = 0;
        for suggestion in &suggestions {
            match self.db.create_reading(&suggestion.to_new_reading()) {
                Ok(_) => created += 1,
                Err(Error::Conflict(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        if created > 0 {
            info!(created, "Committed gap-fill suggestions");
        }

        Ok(created)
    }

    /// Persist a single caller-supplied suggestion.
    ///
    /// Unlike `commit_all`, a date collision here surfaces as `Conflict`;
    /// the caller explicitly asked for this month.
    pub fn commit_one(&self, suggestion: &GapSuggestion) -> Result<Reading> {
        self.db.create_reading(&suggestion.to_new_reading())
    }
}
