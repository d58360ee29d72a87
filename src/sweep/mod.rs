//! Sweep-line boolean operations over two canonical interval lists.
//!
//! An operation runs in two passes:
//!
//! 1. [`merge`] interleaves the boundaries of both operands into one ordered
//!    sequence of [`BoundaryEvent`]s and links coincident boundaries coming
//!    from opposite operands.
//! 2. [`evaluate`] walks that sequence once, tracking whether the sweep line
//!    is inside each operand, and emits the maximal runs where the chosen
//!    [`BooleanOp`] holds.
//!
//! Both operands must be canonical: sorted, pairwise disjoint (closed
//! intervals may not touch), with `start <= end`. [`boolean`] trusts this and
//! only checks it in debug builds; [`boolean_with`] can validate it.
//!
//! Closed intervals that touch across operands are treated as contiguous, not
//! overlapping: `[0, 5] ∪ [5, 9] = [0, 9]`, `[0, 5] ∩ [5, 9] = ∅`.

mod assertions;
mod evaluate;
mod event;
mod merge;
mod op;

#[cfg(test)]
mod tests;

pub use assertions::{is_canonical, validate_operand};
pub use event::{BoundaryEvent, Operand};
pub use op::BooleanOp;

use qtty::Unit;

use crate::config::SweepConfig;
use crate::error::IntervalError;
use crate::intervals::Interval;
use event::Operands;

/// Combines two canonical interval lists with `op`.
///
/// The result is sorted, pairwise disjoint and freshly allocated. Output for
/// non-canonical operands is unspecified.
///
/// # Example
///
/// ```rust
/// use qtty::Second;
/// use interval_sweep::intervals::Interval;
/// use interval_sweep::sweep::{boolean, BooleanOp};
///
/// let left = [Interval::<Second>::from_f64(0.0, 10.0)];
/// let right = [
///     Interval::<Second>::from_f64(3.0, 4.0),
///     Interval::<Second>::from_f64(6.0, 7.0),
/// ];
/// let diff = boolean(BooleanOp::Difference, &left, &right);
/// assert_eq!(
///     diff,
///     vec![
///         Interval::from_f64(0.0, 3.0),
///         Interval::from_f64(4.0, 6.0),
///         Interval::from_f64(7.0, 10.0),
///     ]
/// );
/// ```
pub fn boolean<U: Unit>(op: BooleanOp, left: &[Interval<U>], right: &[Interval<U>]) -> Vec<Interval<U>> {
    debug_assert!(is_canonical(left), "left operand is not canonical");
    debug_assert!(is_canonical(right), "right operand is not canonical");
    run(op, left, right, true)
}

/// Returns the merged boundary events of both operands in sweep order, with
/// coincident cross-operand pairs linked.
pub fn boundary_events<U: Unit>(left: &[Interval<U>], right: &[Interval<U>]) -> Vec<BoundaryEvent> {
    merge::merge_events(&Operands::new(left, right))
}

/// Like [`boolean`], with validation and output shaping taken from `config`.
///
/// Returns an error only when `config.validate_operands` is set and an operand
/// is not canonical.
pub fn boolean_with<U: Unit>(
    config: &SweepConfig,
    op: BooleanOp,
    left: &[Interval<U>],
    right: &[Interval<U>],
) -> Result<Vec<Interval<U>>, IntervalError> {
    if config.validate_operands {
        validate_operand(Operand::Left, left)
            .and_then(|()| validate_operand(Operand::Right, right))
            .inspect_err(|e| log::debug!("rejected {op:?} operands: {e}"))?;
    }
    Ok(run(op, left, right, config.coalesce_touching))
}

fn run<U: Unit>(
    op: BooleanOp,
    left: &[Interval<U>],
    right: &[Interval<U>],
    coalesce_touching: bool,
) -> Vec<Interval<U>> {
    let operands = Operands::new(left, right);
    let events = merge::merge_events(&operands);
    let result = evaluate::evaluate(op, &operands, &events, coalesce_touching);
    log::trace!(
        "{op:?}: {} + {} intervals, {} events, {} result intervals",
        left.len(),
        right.len(),
        events.len(),
        result.len()
    );
    result
}
