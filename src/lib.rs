//! interval-sweep - boolean set operations over sorted closed intervals
//!
//! Two canonical operand lists (sorted, pairwise disjoint, closed
//! `[start, end]` intervals) are combined with [`BooleanOp::Union`],
//! [`BooleanOp::Intersection`] or [`BooleanOp::Difference`] in a single
//! sweep over their merged boundaries.
//!
//! ```rust
//! use qtty::Second;
//! use interval_sweep::{boolean, BooleanOp, Interval};
//!
//! let left = [Interval::<Second>::from_f64(1.0, 3.0)];
//! let right = [Interval::<Second>::from_f64(2.0, 4.0)];
//!
//! assert_eq!(boolean(BooleanOp::Union, &left, &right), vec![Interval::from_f64(1.0, 4.0)]);
//! assert_eq!(boolean(BooleanOp::Intersection, &left, &right), vec![Interval::from_f64(2.0, 3.0)]);
//! assert_eq!(boolean(BooleanOp::Difference, &left, &right), vec![Interval::from_f64(1.0, 2.0)]);
//! ```

pub mod config;
pub mod error;
pub mod intervals;
pub mod sweep;

pub use config::SweepConfig;
pub use error::IntervalError;
pub use intervals::{Endpoint, Interval, IntervalSet};
pub use sweep::{boolean, boolean_with, BooleanOp};
