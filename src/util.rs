//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use cgmath::num_traits::Float;

/// An interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: std::ops::Sub<T, Output = T> + Copy> Interval<T> {
    /// Gets the magnitude of the interval.
    pub fn length(&self) -> T {
        self.max - self.min
    }
}

impl<T: Float> Interval<T> {
    /// Grows the interval by the given amount at both ends.
    pub fn pad(&self, amount: T) -> Self {
        Self {
            min: self.min - amount,
            max: self.max + amount,
        }
    }

    /// Expands the interval just enough to contain the value.
    pub fn expand_to(&self, value: T) -> Self {
        Self {
            min: T::min(self.min, value),
            max: T::max(self.max, value),
        }
    }

    pub fn lerp(&self, t: T) -> T {
        self.min + t * (self.max - self.min)
    }

    pub fn inv_lerp(&self, value: T) -> T {
        (value - self.min) / (self.max - self.min)
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}
