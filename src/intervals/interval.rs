//! Closed interval representation.

use std::fmt::Display;

use qtty::{Quantity, Unit};

use crate::error::IntervalError;

/// Selects one of the two boundaries of an [`Interval`].
///
/// `Start` orders before `End`, which is the tie-break used when two
/// boundaries share a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    /// Maps a flattened boundary position (`2i` start, `2i + 1` end) to its endpoint.
    pub(crate) const fn from_position(position: usize) -> Self {
        if position & 1 == 0 {
            Endpoint::Start
        } else {
            Endpoint::End
        }
    }
}

/// Closed range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<U: Unit> {
    start: Quantity<U>,
    end: Quantity<U>,
}

impl<U: Unit> Interval<U> {
    /// Creates interval `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`. Use [`Interval::try_new`] for untrusted input.
    pub const fn new(start: Quantity<U>, end: Quantity<U>) -> Self {
        assert!(
            start.value() <= end.value(),
            "Interval start must be <= end"
        );
        Self { start, end }
    }

    pub const fn from_f64(start: f64, end: f64) -> Self {
        Self::new(Quantity::<U>::new(start), Quantity::<U>::new(end))
    }

    /// Creates interval `[start, end]`, rejecting NaN coordinates and reversed bounds.
    pub fn try_new(start: Quantity<U>, end: Quantity<U>) -> Result<Self, IntervalError> {
        if start.value().is_nan() || end.value().is_nan() {
            return Err(IntervalError::NaNCoordinate);
        }
        if start.value() > end.value() {
            return Err(IntervalError::InvalidBounds {
                start: start.value(),
                end: end.value(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn try_from_f64(start: f64, end: f64) -> Result<Self, IntervalError> {
        Self::try_new(Quantity::<U>::new(start), Quantity::<U>::new(end))
    }

    pub const fn start(&self) -> Quantity<U> {
        self.start
    }

    pub const fn end(&self) -> Quantity<U> {
        self.end
    }

    /// Returns the boundary selected by `endpoint`.
    pub const fn at(&self, endpoint: Endpoint) -> Quantity<U> {
        match endpoint {
            Endpoint::Start => self.start,
            Endpoint::End => self.end,
        }
    }

    pub fn duration(&self) -> Quantity<U> {
        self.end - self.start
    }

    /// True for single-point intervals `[x, x]`.
    pub const fn is_degenerate(&self) -> bool {
        self.start.value() == self.end.value()
    }

    /// Converts this interval to another unit of the same dimension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qtty::*;
    /// use interval_sweep::intervals::Interval;
    ///
    /// let minutes = Interval::<Minute>::from_f64(30.0, 90.0);
    /// let hours: Interval<Hour> = minutes.to();
    /// assert!((hours.start().value() - 0.5).abs() < 1e-12);
    /// assert!((hours.end().value() - 1.5).abs() < 1e-12);
    /// ```
    pub fn to<T: Unit<Dim = U::Dim>>(self) -> Interval<T> {
        Interval::new(self.start.to(), self.end.to())
    }

    /// Returns true if `position` ∈ `[start, end]`.
    pub const fn contains(&self, position: Quantity<U>) -> bool {
        self.start.value() <= position.value() && position.value() <= self.end.value()
    }

    /// Checks if this interval shares at least one point with `other`.
    /// Touching endpoints count as overlap.
    pub const fn overlaps(&self, other: &Interval<U>) -> bool {
        self.start.value() <= other.end.value() && other.start.value() <= self.end.value()
    }
}

impl<U: Unit> Display for Interval<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start.value(), self.end.value())
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Interval<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("start", &self.start.value())?;
        s.serialize_field("end", &self.end.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Interval<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: f64,
            end: f64,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from_f64(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
