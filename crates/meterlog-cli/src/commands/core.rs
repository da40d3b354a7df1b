//! Init and status commands

use std::path::Path;

use anyhow::Result;

use super::open_db;

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record a reading: meterlog add --date 2024-01-01 \\");
    println!("       --electricity-high 1500.5 --electricity-low 800.2 --gas 320 --water 95.7");
    println!("  2. Start web UI: meterlog serve");

    Ok(())
}

pub fn cmd_status(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;
    let summary = db.summary()?;

    println!("📊 Meterlog Status");
    println!("   ─────────────────────────────");
    println!("   Database: {}", db_path.display());
    println!("   Total readings: {}", summary.total_readings);
    println!("   Manual entries: {}", summary.manual_readings);
    println!("   Interpolated: {}", summary.synthetic_readings);

    match (summary.first_date, summary.last_date) {
        (Some(first), Some(last)) => {
            println!("   Date range: {} .. {}", first, last);
        }
        _ => {
            println!("   Date range: (no readings yet)");
        }
    }

    Ok(())
}
