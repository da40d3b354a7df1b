//! Gap-fill suggestion commands

use std::path::Path;

use anyhow::Result;

use meterlog_core::GapFiller;

use super::open_db;

pub fn cmd_suggest(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;

    let suggestions = GapFiller::new(&db).compute_suggestions()?;
    if suggestions.is_empty() {
        println!("✅ No gaps found. Every month in the recent history has a reading.");
        return Ok(());
    }

    println!("🔍 {} missing month(s) detected:", suggestions.len());
    println!(
        "{:<12} {:>12} {:>12} {:>10} {:>10}",
        "date", "elec high", "elec low", "gas", "water"
    );

    for s in &suggestions {
        println!(
            "{:<12} {:>12.2} {:>12.2} {:>10.2} {:>10.2}",
            s.date, s.electricity_high, s.electricity_low, s.gas, s.water
        );
    }

    println!();
    println!("Run 'meterlog fill' to create these readings.");

    Ok(())
}

pub fn cmd_fill(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;

    let created = GapFiller::new(&db).commit_all()?;
    if created == 0 {
        println!("✅ Nothing to fill. Every month in the recent history has a reading.");
    } else {
        println!("✅ Created {} interpolated reading(s).", created);
    }

    Ok(())
}
