//! Reading entry and listing commands

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;

use meterlog_core::models::NewReading;
use meterlog_core::{diff, SortOrder};

use super::open_db;

pub fn cmd_add(
    db_path: &Path,
    date: NaiveDate,
    electricity_high: f64,
    electricity_low: f64,
    gas: f64,
    water: f64,
) -> Result<()> {
    let db = open_db(db_path)?;

    let reading = db.create_reading(&NewReading {
        date,
        electricity_high,
        electricity_low,
        gas,
        water,
        synthetic: false,
    })?;

    println!("✅ Recorded reading #{} for {}", reading.id, reading.date);
    println!("   Electricity high: {:.2} kWh", reading.electricity_high);
    println!("   Electricity low:  {:.2} kWh", reading.electricity_low);
    println!("   Gas:              {:.2} m3", reading.gas);
    println!("   Water:            {:.2} m3", reading.water);

    Ok(())
}

pub fn cmd_list(db_path: &Path, limit: i64, offset: i64) -> Result<()> {
    let db = open_db(db_path)?;

    let window = db.list_readings(SortOrder::Descending, Some(limit), offset, None, None)?;
    if window.is_empty() {
        println!("No readings recorded yet. Add one with 'meterlog add'.");
        return Ok(());
    }

    let rows = diff::with_diffs(&window);

    println!(
        "{:<6} {:<12} {:>12} {:>12} {:>10} {:>10}  {}",
        "id", "date", "elec high", "elec low", "gas", "water", "source"
    );

    let fmt_delta = |d: Option<f64>| match d {
        Some(v) => format!("{:+.2}", v),
        None => "-".to_string(),
    };

    for row in &rows {
        let r = &row.reading;
        println!(
            "{:<6} {:<12} {:>12.2} {:>12.2} {:>10.2} {:>10.2}  {}",
            r.id,
            r.date,
            r.electricity_high,
            r.electricity_low,
            r.gas,
            r.water,
            if r.synthetic { "interpolated" } else { "manual" }
        );
        println!(
            "{:<6} {:<12} {:>12} {:>12} {:>10} {:>10}",
            "",
            "",
            fmt_delta(row.diff_electricity_high),
            fmt_delta(row.diff_electricity_low),
            fmt_delta(row.diff_gas),
            fmt_delta(row.diff_water),
        );
    }

    Ok(())
}

pub fn cmd_delete(db_path: &Path, id: i64) -> Result<()> {
    let db = open_db(db_path)?;

    db.delete_reading(id)?;
    println!("🗑️  Deleted reading #{}", id);

    Ok(())
}
