//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod charts;
pub mod gapfill;
pub mod readings;

// Re-export all handlers for use in router
pub use charts::*;
pub use gapfill::*;
pub use readings::*;
