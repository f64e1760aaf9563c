//! Signal representations.
//!
//! This module provides the data types every other module consumes and produces:
//! - `IndexRange` for the inclusive integer domain of a signal
//! - `Signal` for samples laid out over an `IndexRange`
//! - `TimeSeries` for samples laid out over a time axis in seconds

mod discrete;
mod range;
mod series;

pub use discrete::{Signal, peak};
pub use range::IndexRange;
pub use series::{TimeSeries, linspace};
