//! Bounded integer value model shared by both pickers.

use std::ops::RangeInclusive;

use crate::error::{PickerError, PickerResult};

/// Inclusive integer range `[min, max]` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    min: i32,
    max: i32,
}

impl ValueRange {
    /// Create a range, rejecting `min > max`.
    pub fn new(min: i32, max: i32) -> PickerResult<Self> {
        if min > max {
            return Err(PickerError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub(crate) const fn new_unchecked(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of unit steps between `min` and `max`.
    pub fn span(&self) -> u32 {
        (i64::from(self.max) - i64::from(self.min)) as u32
    }

    /// Whether `value` lies inside the range.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Iterate every integer in the range.
    pub fn values(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Offset of `value` from `min`, in units.
    pub fn offset_of(&self, value: i32) -> i64 {
        i64::from(value) - i64::from(self.min)
    }
}

/// A committed value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueChanged {
    /// The new value.
    pub value: i32,
    /// The value before the change.
    pub previous: i32,
}

/// Result of trying to set a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The value changed.
    Changed(ValueChanged),
    /// The requested value equals the current one.
    Unchanged,
    /// The requested value is outside the range; nothing changed.
    Rejected { attempted: i32 },
}

/// The current value of a picker, always inside its range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueModel {
    range: ValueRange,
    current: i32,
}

impl ValueModel {
    /// Create a model, rejecting an initial value outside the range.
    pub fn new(range: ValueRange, value: i32) -> PickerResult<Self> {
        if !range.contains(value) {
            return Err(PickerError::ValueOutOfRange {
                value,
                min: range.min(),
                max: range.max(),
            });
        }
        Ok(Self {
            range,
            current: value,
        })
    }

    pub(crate) const fn new_unchecked(range: ValueRange, value: i32) -> Self {
        Self {
            range,
            current: value,
        }
    }

    pub fn value(&self) -> i32 {
        self.current
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Try to move to `value`. Out-of-range values leave the model untouched.
    pub fn try_set(&mut self, value: i32) -> Commit {
        if !self.range.contains(value) {
            return Commit::Rejected { attempted: value };
        }
        if value == self.current {
            return Commit::Unchanged;
        }
        let previous = std::mem::replace(&mut self.current, value);
        Commit::Changed(ValueChanged { value, previous })
    }
}
