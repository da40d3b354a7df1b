//! Meter reading operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewReading, Reading, ReadingUpdate};

/// Date ordering for reading listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first
    Ascending,
    /// Most recent first
    Descending,
}

impl SortOrder {
    fn as_sql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

const READING_COLUMNS: &str =
    "id, date, electricity_high, electricity_low, gas, water, synthetic, created_at";

fn row_to_reading(row: &Row) -> rusqlite::Result<Reading> {
    let date_str: String = row.get(1)?;
    let created_at_str: String = row.get(7)?;

    Ok(Reading {
        id: row.get(0)?,
        date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
        electricity_high: row.get(2)?,
        electricity_low: row.get(3)?,
        gas: row.get(4)?,
        water: row.get(5)?,
        synthetic: row.get(6)?,
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// Insert a reading, enforcing the one-reading-per-date invariant.
    ///
    /// The duplicate-date check and the insert run inside one transaction,
    /// so a concurrent writer targeting the same date fails with `Conflict`
    /// rather than silently overwriting.
    pub fn create_reading(&self, reading: &NewReading) -> Result<Reading> {
        reading.validate()?;

        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT id FROM readings WHERE date = ?",
                params![reading.date.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        if existing.is_some() {
            return Err(Error::Conflict(format!(
                "A reading for {} already exists",
                reading.date
            )));
        }

        tx.execute(
            r#"
            INSERT INTO readings (date, electricity_high, electricity_low, gas, water, synthetic)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                reading.date.to_string(),
                reading.electricity_high,
                reading.electricity_low,
                reading.gas,
                reading.water,
                reading.synthetic,
            ],
        )?;

        let id = tx.last_insert_rowid();
        tx.commit()?;

        self.get_reading(id)?
            .ok_or_else(|| Error::NotFound(format!("Reading {} vanished after insert", id)))
    }

    /// Get a reading by id
    pub fn get_reading(&self, id: i64) -> Result<Option<Reading>> {
        let conn = self.conn()?;

        let reading = conn
            .query_row(
                &format!("SELECT {} FROM readings WHERE id = ?", READING_COLUMNS),
                params![id],
                row_to_reading,
            )
            .optional()?;

        Ok(reading)
    }

    /// Look up a reading by its calendar date
    pub fn find_reading_by_date(&self, date: NaiveDate) -> Result<Option<Reading>> {
        let conn = self.conn()?;

        let reading = conn
            .query_row(
                &format!("SELECT {} FROM readings WHERE date = ?", READING_COLUMNS),
                params![date.to_string()],
                row_to_reading,
            )
            .optional()?;

        Ok(reading)
    }

    /// Apply a partial update to an existing reading.
    ///
    /// Date reassignment is allowed but subject to the same uniqueness
    /// invariant as creation.
    pub fn update_reading(&self, id: i64, update: &ReadingUpdate) -> Result<Reading> {
        let current = self
            .get_reading(id)?
            .ok_or_else(|| Error::NotFound(format!("Reading {} not found", id)))?;

        let merged = NewReading {
            date: update.date.unwrap_or(current.date),
            electricity_high: update.electricity_high.unwrap_or(current.electricity_high),
            electricity_low: update.electricity_low.unwrap_or(current.electricity_low),
            gas: update.gas.unwrap_or(current.gas),
            water: update.water.unwrap_or(current.water),
            synthetic: update.synthetic.unwrap_or(current.synthetic),
        };
        merged.validate()?;

        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        if merged.date != current.date {
            let colliding: Option<i64> = tx
                .query_row(
                    "SELECT id FROM readings WHERE date = ? AND id != ?",
                    params![merged.date.to_string(), id],
                    |row| row.get(0),
                )
                .optional()?;

            if colliding.is_some() {
                return Err(Error::Conflict(format!(
                    "A reading for {} already exists",
                    merged.date
                )));
            }
        }

        tx.execute(
            r#"
            UPDATE readings
            SET date = ?, electricity_high = ?, electricity_low = ?, gas = ?, water = ?, synthetic = ?
            WHERE id = ?
            "#,
            params![
                merged.date.to_string(),
                merged.electricity_high,
                merged.electricity_low,
                merged.gas,
                merged.water,
                merged.synthetic,
                id,
            ],
        )?;

        tx.commit()?;

        self.get_reading(id)?
            .ok_or_else(|| Error::NotFound(format!("Reading {} not found", id)))
    }

    /// Delete a reading by id
    pub fn delete_reading(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;

        let deleted = conn.execute("DELETE FROM readings WHERE id = ?", params![id])?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Reading {} not found", id)));
        }

        Ok(())
    }

    /// List readings ordered by date, with optional pagination and filters
    pub fn list_readings(
        &self,
        order: SortOrder,
        limit: Option<i64>,
        offset: i64,
        date_from: Option<NaiveDate>,
        synthetic: Option<bool>,
    ) -> Result<Vec<Reading>> {
        let conn = self.conn()?;

        let mut conditions = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(from) = date_from {
            conditions.push("date >= ?".to_string());
            params.push(Box::new(from.to_string()));
        }

        if let Some(flag) = synthetic {
            conditions.push("synthetic = ?".to_string());
            params.push(Box::new(flag));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        // SQLite treats LIMIT -1 as unlimited
        params.push(Box::new(limit.unwrap_or(-1)));
        params.push(Box::new(offset));

        let sql = format!(
            "SELECT {} FROM readings {} ORDER BY date {} LIMIT ? OFFSET ?",
            READING_COLUMNS,
            where_clause,
            order.as_sql()
        );

        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let readings = stmt
            .query_map(params_refs.as_slice(), row_to_reading)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(readings)
    }

    /// Count readings, optionally filtered by the synthetic flag
    pub fn count_readings(&self, synthetic: Option<bool>) -> Result<i64> {
        let conn = self.conn()?;

        let count = match synthetic {
            Some(flag) => conn.query_row(
                "SELECT COUNT(*) FROM readings WHERE synthetic = ?",
                params![flag],
                |row| row.get(0),
            )?,
            None => conn.query_row("SELECT COUNT(*) FROM readings", [], |row| row.get(0))?,
        };

        Ok(count)
    }
}
