//! Configuration for the checked sweep entry point.

/// Controls how [`boolean_with`](crate::sweep::boolean_with) treats its operands
/// and shapes its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Validate both operands before sweeping and report the first violation
    /// instead of producing unspecified output.
    pub validate_operands: bool,

    /// Extend the previous result interval when a new entry lands exactly on
    /// its exit coordinate. With `false`, touching results are emitted as-is,
    /// e.g. `[0, 10] \ [5, 5]` yields `[0, 5], [5, 10]`.
    pub coalesce_touching: bool,
}

impl SweepConfig {
    /// Default behaviour with operand validation turned on.
    pub const fn strict() -> Self {
        Self {
            validate_operands: true,
            coalesce_touching: true,
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            validate_operands: false,
            coalesce_touching: true,
        }
    }
}
