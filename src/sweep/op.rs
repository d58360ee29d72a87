#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boolean operator combining two interval sets.
///
/// `Union` and `Intersection` are symmetric in their operands; `Difference`
/// keeps what is in the left operand and not in the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BooleanOp {
    Union,
    Intersection,
    Difference,
}

impl BooleanOp {
    /// Membership of the combined region given per-operand membership.
    pub const fn apply(self, left_in: bool, right_in: bool) -> bool {
        match self {
            BooleanOp::Union => left_in || right_in,
            BooleanOp::Intersection => left_in && right_in,
            BooleanOp::Difference => left_in && !right_in,
        }
    }

    pub const fn is_commutative(self) -> bool {
        !matches!(self, BooleanOp::Difference)
    }
}
