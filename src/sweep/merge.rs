//! Event merger: interleaves the boundaries of two operands in sweep order.

use qtty::Unit;

use super::event::{BoundaryEvent, Operand, Operands};
use crate::intervals::Endpoint;

/// Merges the boundaries of both operands into one chronologically ordered
/// sequence of `2 * (left.len() + right.len())` events.
///
/// Each operand is read as a flattened boundary stream where interval `i`
/// contributes its start at position `2i` and its end at `2i + 1`. Equal
/// coordinates emit starts before ends; a full tie emits the left operand
/// first.
pub(crate) fn merge_events<U: Unit>(operands: &Operands<'_, U>) -> Vec<BoundaryEvent> {
    let left_len = operands.left.len() * 2;
    let right_len = operands.right.len() * 2;
    let mut events = Vec::with_capacity(left_len + right_len);

    let mut left_pos = 0usize;
    let mut right_pos = 0usize;
    while left_pos < left_len && right_pos < right_len {
        let left_value = operands.position_value(Operand::Left, left_pos);
        let right_value = operands.position_value(Operand::Right, right_pos);
        let take_left = left_value < right_value
            || (left_value == right_value
                && Endpoint::from_position(left_pos) <= Endpoint::from_position(right_pos));

        if take_left {
            events.push(BoundaryEvent::from_position(Operand::Left, left_pos));
            left_pos += 1;
        } else {
            events.push(BoundaryEvent::from_position(Operand::Right, right_pos));
            right_pos += 1;
        }
    }

    events.extend((left_pos..left_len).map(|pos| BoundaryEvent::from_position(Operand::Left, pos)));
    events.extend((right_pos..right_len).map(|pos| BoundaryEvent::from_position(Operand::Right, pos)));

    link_coincident(operands, &mut events);
    events
}

/// Marks every event whose successor comes from the other operand at the
/// same coordinate, so the evaluator can resolve the pair as one transition.
///
/// The entry of a single-point interval is never paired with an exit: its own
/// exit follows at the same coordinate, and the point must be swept while the
/// other operand is still inside.
pub(crate) fn link_coincident<U: Unit>(operands: &Operands<'_, U>, events: &mut [BoundaryEvent]) {
    for i in 1..events.len() {
        let prev = events[i - 1];
        let next = events[i];
        let opens_point = prev.enters() && operands.side(prev.operand)[prev.index].is_degenerate();
        events[i - 1].coincident_next = prev.operand != next.operand
            && operands.coordinate(&prev).value() == operands.coordinate(&next).value()
            && !(opens_point && !next.enters());
    }
}
