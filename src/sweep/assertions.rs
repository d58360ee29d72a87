//! Operand checks shared by the debug assertions and the validating sweep.

use qtty::Unit;

use super::event::Operand;
use crate::error::IntervalError;
use crate::intervals::Interval;

/// Returns true if `intervals` is canonical: no NaN, each interval has
/// start <= end, and each interval starts strictly after its predecessor ends.
pub fn is_canonical<U: Unit>(intervals: &[Interval<U>]) -> bool {
    validate_operand(Operand::Left, intervals).is_ok()
}

/// Reports the first interval of `intervals` that breaks the canonical form.
pub fn validate_operand<U: Unit>(
    operand: Operand,
    intervals: &[Interval<U>],
) -> Result<(), IntervalError> {
    for (index, interval) in intervals.iter().enumerate() {
        let (start, end) = (interval.start().value(), interval.end().value());
        if start.is_nan() || end.is_nan() {
            return Err(IntervalError::NaNCoordinate);
        }
        if start > end {
            return Err(IntervalError::InvalidBounds { start, end });
        }
        if index > 0 && intervals[index - 1].end().value() >= start {
            return Err(IntervalError::NotCanonical { operand, index });
        }
    }
    Ok(())
}
