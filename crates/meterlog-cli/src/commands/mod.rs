//! Command implementations for the meterlog CLI
//!
//! Each command lives in a submodule; `open_db` is the shared entry point
//! to the store.

mod core;
mod gapfill;
mod readings;
mod serve;

pub use core::{cmd_init, cmd_status};
pub use gapfill::{cmd_fill, cmd_suggest};
pub use readings::{cmd_add, cmd_delete, cmd_list};
pub use serve::cmd_serve;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use meterlog_core::db::Database;

/// Open the database, running migrations if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow!("Database path is not valid UTF-8"))?;
    Database::new(path_str).context("Failed to open database")
}
