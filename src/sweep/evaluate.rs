//! Sweep evaluator: walks merged events and emits the runs where the operator holds.

use qtty::{Quantity, Unit};

use super::event::{BoundaryEvent, Operand, Operands};
use super::op::BooleanOp;
use crate::intervals::Interval;

/// Per-operand membership at the current sweep position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Membership {
    left: bool,
    right: bool,
}

impl Membership {
    fn cross(&mut self, event: &BoundaryEvent) {
        match event.operand {
            Operand::Left => self.left = event.enters(),
            Operand::Right => self.right = event.enters(),
        }
    }
}

/// Evaluates `op` over `events`, which must come from
/// [`merge_events`](super::merge::merge_events) over the same `operands`.
///
/// When `coalesce_touching` is set, an entry exactly at the previous result's
/// exit reopens that result instead of starting a touching neighbour.
pub(crate) fn evaluate<U: Unit>(
    op: BooleanOp,
    operands: &Operands<'_, U>,
    events: &[BoundaryEvent],
    coalesce_touching: bool,
) -> Vec<Interval<U>> {
    let mut membership = Membership::default();
    let mut inside = false;
    let mut entry: Option<Quantity<U>> = None;
    let mut result: Vec<Interval<U>> = Vec::new();

    for (i, event) in events.iter().enumerate() {
        membership.cross(event);
        if event.coincident_next {
            if let Some(next) = events.get(i + 1) {
                membership.cross(next);
            }
        }

        let now_inside = op.apply(membership.left, membership.right);
        match (inside, now_inside) {
            (false, true) => {
                let at = operands.coordinate(event);
                let reopen = coalesce_touching
                    && result
                        .last()
                        .is_some_and(|last| last.end().value() == at.value());
                entry = if reopen {
                    result.pop().map(|last| last.start())
                } else {
                    Some(at)
                };
            }
            (true, false) => {
                if let Some(start) = entry.take() {
                    result.push(Interval::new(start, operands.coordinate(event)));
                }
            }
            _ => {}
        }
        inside = now_inside;
    }

    debug_assert!(!inside, "sweep ended inside the result region");
    result
}
