//! Gap detection between adjacent readings

use chrono::{Datelike, NaiveDate};

/// A calendar month with no recorded reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingMonth {
    pub year: i32,
    pub month: u32,
}

impl MissingMonth {
    /// Synthetic readings are always dated the first day of the month
    pub fn first_day(&self) -> NaiveDate {
        // Month is always 1..=12 by construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| panic!("invalid month token {}-{}", self.year, self.month))
    }
}

/// Enumerate the calendar months strictly between two adjacent readings,
/// if the readings form a gap.
///
/// A pair forms a gap when the dates lie more than `threshold_days` apart.
/// For a gap, every month strictly between `current`'s month and `next`'s
/// month is returned in ascending order; the boundary months themselves are
/// never included. Pairs at or under the threshold yield nothing.
pub fn missing_months(
    current: NaiveDate,
    next: NaiveDate,
    threshold_days: i64,
) -> Vec<MissingMonth> {
    if (next - current).num_days() <= threshold_days {
        return Vec::new();
    }

    let mut months = Vec::new();

    // Start from the month after `current`, rolling over year boundaries
    let mut year = current.year();
    let mut month = current.month() + 1;
    if month > 12 {
        month = 1;
        year += 1;
    }

    while year < next.year() || (year == next.year() && month < next.month()) {
        months.push(MissingMonth { year, month });
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    months
}
