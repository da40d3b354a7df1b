//! Gap detection and interpolation for missing reading months
//!
//! Readings are supposed to arrive roughly monthly. When two adjacent
//! readings are further apart than the gap threshold, the months in between
//! have no data. This module finds those months and synthesizes plausible
//! readings for them by linear interpolation between the gap's boundary
//! readings:
//! - `detector` - finds gaps and enumerates the missing calendar months
//! - `interpolator` - computes one synthetic reading per missing month
//! - `engine` - orchestrates detection + interpolation over the store and
//!   commits accepted suggestions

pub mod detector;
pub mod engine;
pub mod interpolator;

pub use detector::{missing_months, MissingMonth};
pub use engine::{GapFillConfig, GapFiller};
pub use interpolator::interpolate;

pub(crate) use interpolator::round2;
