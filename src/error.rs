use thiserror::Error;

use crate::sweep::Operand;

/// Errors reported by the checked constructors and the validating sweep.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntervalError {
    #[error("interval start {start} is greater than its end {end}")]
    InvalidBounds { start: f64, end: f64 },

    #[error("interval coordinate cannot be NaN")]
    NaNCoordinate,

    /// The interval at `index` overlaps, touches, or precedes its predecessor.
    #[error("{operand} operand is not canonical at interval {index}")]
    NotCanonical { operand: Operand, index: usize },
}
