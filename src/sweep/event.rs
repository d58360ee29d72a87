//! Boundary events crossed by the sweep line.

use std::fmt::Display;

use qtty::{Quantity, Unit};

use crate::intervals::{Endpoint, Interval};

/// Which side of a binary operation an interval belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Left,
    Right,
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Left => write!(f, "left"),
            Operand::Right => write!(f, "right"),
        }
    }
}

/// One interval boundary, in the order the sweep line reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryEvent {
    pub operand: Operand,
    /// Index of the owning interval within its operand list.
    pub index: usize,
    pub endpoint: Endpoint,
    /// The next event comes from the other operand at the same coordinate.
    pub coincident_next: bool,
}

impl BoundaryEvent {
    /// Event for flattened position `position` of `operand`'s boundary stream.
    pub(crate) const fn from_position(operand: Operand, position: usize) -> Self {
        Self {
            operand,
            index: position >> 1,
            endpoint: Endpoint::from_position(position),
            coincident_next: false,
        }
    }

    /// Membership of the owning operand right after crossing this boundary.
    pub const fn enters(&self) -> bool {
        matches!(self.endpoint, Endpoint::Start)
    }
}

/// Borrowed pair of operand lists that events index into.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operands<'a, U: Unit> {
    pub left: &'a [Interval<U>],
    pub right: &'a [Interval<U>],
}

impl<'a, U: Unit> Operands<'a, U> {
    pub fn new(left: &'a [Interval<U>], right: &'a [Interval<U>]) -> Self {
        Self { left, right }
    }

    pub fn side(&self, operand: Operand) -> &'a [Interval<U>] {
        match operand {
            Operand::Left => self.left,
            Operand::Right => self.right,
        }
    }

    /// Coordinate of flattened position `position` in `operand`'s boundary stream.
    pub fn position_value(&self, operand: Operand, position: usize) -> f64 {
        self.side(operand)[position >> 1]
            .at(Endpoint::from_position(position))
            .value()
    }

    pub fn coordinate(&self, event: &BoundaryEvent) -> Quantity<U> {
        self.side(event.operand)[event.index].at(event.endpoint)
    }
}
