//! Closed intervals and the canonical set container built on them.

mod interval;
mod interval_set;

pub use interval::{Endpoint, Interval};
pub use interval_set::IntervalSet;
