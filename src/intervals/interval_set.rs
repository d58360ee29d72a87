//! A canonical container for sorted, disjoint closed intervals.
//!
//! [`IntervalSet`] wraps a `Vec<Interval<U>>` and keeps it canonical at all
//! times: intervals are sorted by start and no two intervals overlap or touch
//! (touching intervals are merged). That is exactly the operand shape the
//! sweep expects, so set operations run without re-checking their inputs.
//!
//! Read access is transparent via `Deref<Target = [Interval<U>]>`.

use std::fmt::Display;
use std::ops::Deref;

use qtty::{Quantity, Unit};

use super::interval::Interval;
use crate::error::IntervalError;
use crate::sweep::{self, BooleanOp, Operand};

/// A sorted set of pairwise disjoint closed intervals.
///
/// # Performance
///
/// - Construction from unsorted input: O(n log n) sort + O(n) merge.
/// - `push`: O(1) amortized when appending in order, O(n log n) otherwise.
/// - Set operations: O(n + m) single sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSet<U: Unit>(Vec<Interval<U>>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl<U: Unit> IntervalSet<U> {
    /// Creates an empty interval set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Wraps a `Vec` that is **already in canonical form** without re-sorting.
    ///
    /// The invariant is asserted in debug builds only. Non-canonical input in
    /// release builds silently corrupts downstream set operations.
    pub fn from_sorted_unchecked(vec: Vec<Interval<U>>) -> Self {
        debug_assert!(
            sweep::is_canonical(&vec),
            "IntervalSet::from_sorted_unchecked called with non-canonical input"
        );
        Self(vec)
    }

    /// Wraps a `Vec` after checking it is canonical.
    pub fn try_from_sorted(vec: Vec<Interval<U>>) -> Result<Self, IntervalError> {
        sweep::validate_operand(Operand::Left, &vec)?;
        Ok(Self(vec))
    }
}

impl<U: Unit> IntervalSet<U> {
    /// Sorts by start and merges overlapping / touching intervals in place.
    fn normalize(&mut self) {
        if self.0.len() <= 1 {
            return;
        }
        self.0
            .sort_by(|a, b| a.start().value().total_cmp(&b.start().value()));
        let mut merged: Vec<Interval<U>> = Vec::with_capacity(self.0.len());
        for interval in self.0.drain(..) {
            match merged.last_mut() {
                Some(last) if last.end().value() >= interval.start().value() => {
                    if interval.end().value() > last.end().value() {
                        *last = Interval::new(last.start(), interval.end());
                    }
                }
                _ => merged.push(interval),
            }
        }
        self.0 = merged;
    }
}

// ─────────────────────────────────────────────────────────────────────
// Mutation methods
// ─────────────────────────────────────────────────────────────────────

impl<U: Unit> IntervalSet<U> {
    /// Inserts an interval, maintaining canonical form.
    ///
    /// O(1) when the interval starts at or after the last one; otherwise the
    /// set is re-normalized.
    pub fn push(&mut self, interval: Interval<U>) {
        let Some(last) = self.0.last().copied() else {
            self.0.push(interval);
            return;
        };

        if interval.start().value() > last.end().value() {
            self.0.push(interval);
        } else if interval.start().value() >= last.start().value() {
            // Overlaps or touches the last interval only.
            let end = if interval.end().value() > last.end().value() {
                interval.end()
            } else {
                last.end()
            };
            let last_idx = self.0.len() - 1;
            self.0[last_idx] = Interval::new(last.start(), end);
        } else {
            self.0.push(interval);
            self.normalize();
        }
    }

    /// Appends all intervals from a slice, then re-normalizes.
    pub fn extend_from_slice(&mut self, intervals: &[Interval<U>]) {
        if intervals.is_empty() {
            return;
        }
        self.0.extend_from_slice(intervals);
        self.normalize();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Consumes the set and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval<U>> {
        self.0
    }

    pub fn as_slice(&self) -> &[Interval<U>] {
        &self.0
    }

    /// Returns true if some interval of the set contains `position`.
    pub fn contains(&self, position: Quantity<U>) -> bool {
        let idx = self
            .0
            .partition_point(|interval| interval.end().value() < position.value());
        self.0
            .get(idx)
            .is_some_and(|interval| interval.contains(position))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl<U: Unit> IntervalSet<U> {
    /// Combines `self` (left operand) with `other` (right operand).
    pub fn boolean(&self, op: BooleanOp, other: &IntervalSet<U>) -> IntervalSet<U> {
        Self::from_sorted_unchecked(sweep::boolean(op, &self.0, &other.0))
    }

    pub fn union(&self, other: &IntervalSet<U>) -> IntervalSet<U> {
        self.boolean(BooleanOp::Union, other)
    }

    pub fn intersection(&self, other: &IntervalSet<U>) -> IntervalSet<U> {
        self.boolean(BooleanOp::Intersection, other)
    }

    /// Returns the parts of `self` not covered by `other`.
    pub fn difference(&self, other: &IntervalSet<U>) -> IntervalSet<U> {
        self.boolean(BooleanOp::Difference, other)
    }

    /// Returns the parts covered by exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &IntervalSet<U>) -> IntervalSet<U> {
        self.difference(other).union(&other.difference(self))
    }

    /// Returns the complement of `self` within `bounds`.
    pub fn complement(&self, bounds: Interval<U>) -> IntervalSet<U> {
        Self::from_sorted_unchecked(sweep::boolean(BooleanOp::Difference, &[bounds], &self.0))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl<U: Unit> Deref for IntervalSet<U> {
    type Target = [Interval<U>];

    fn deref(&self) -> &[Interval<U>] {
        &self.0
    }
}

impl<U: Unit> AsRef<[Interval<U>]> for IntervalSet<U> {
    fn as_ref(&self) -> &[Interval<U>] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl<U: Unit> From<Vec<Interval<U>>> for IntervalSet<U> {
    /// Creates an `IntervalSet` from an unsorted `Vec`, normalizing on construction.
    fn from(vec: Vec<Interval<U>>) -> Self {
        let mut set = Self(vec);
        set.normalize();
        set
    }
}

impl<U: Unit> From<Interval<U>> for IntervalSet<U> {
    fn from(interval: Interval<U>) -> Self {
        Self(vec![interval])
    }
}

impl<U: Unit> FromIterator<Interval<U>> for IntervalSet<U> {
    fn from_iter<I: IntoIterator<Item = Interval<U>>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<U: Unit> Extend<Interval<U>> for IntervalSet<U> {
    fn extend<I: IntoIterator<Item = Interval<U>>>(&mut self, iter: I) {
        self.0.extend(iter);
        self.normalize();
    }
}

impl<U: Unit> IntoIterator for IntervalSet<U> {
    type Item = Interval<U>;
    type IntoIter = std::vec::IntoIter<Interval<U>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, U: Unit> IntoIterator for &'a IntervalSet<U> {
    type Item = &'a Interval<U>;
    type IntoIter = std::slice::Iter<'a, Interval<U>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<U: Unit> Default for IntervalSet<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Unit> Display for IntervalSet<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(interval_set, vec![...])` in tests.
impl<U: Unit> PartialEq<Vec<Interval<U>>> for IntervalSet<U> {
    fn eq(&self, other: &Vec<Interval<U>>) -> bool {
        self.0 == *other
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for IntervalSet<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for IntervalSet<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = <Vec<Interval<U>> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}
