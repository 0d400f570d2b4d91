//! Pattern 4: Bounded Generics
//!
//! From no bound at all to a recursive one. Each bound narrows which types
//! the compiler lets in:
//!
//! | function     | bound               | accepts `Threshold`? |
//! |--------------|---------------------|----------------------|
//! | [`identity`] | none                | yes                  |
//! | [`to_f64`]   | `Into<f64>`         | no                   |
//! | [`exceeds`]  | `PartialOrd<i32>`   | yes                  |
//! | [`max_of`]   | `Ord` (self-bound)  | no                   |
//!
//! ```compile_fail
//! use creational_idioms::bounds::{max_of, Threshold};
//!
//! // Threshold compares against i32, not against itself.
//! max_of(&[Threshold(1), Threshold(2)]);
//! ```

use std::cmp::Ordering;

// Unbounded: nothing can be done with `T` except move it.
pub fn identity<T>(value: T) -> T {
    value
}

// Bounded by a numeric conversion.
pub fn to_f64<T: Into<f64>>(value: T) -> f64 {
    value.into()
}

// Bounded by comparability with a foreign type.
pub fn exceeds<T: PartialOrd<i32>>(value: &T, limit: i32) -> bool {
    value > &limit
}

/// Recursive bound: `T` must be totally ordered against other `T`s.
///
/// Ties resolve to the last maximal element, as `Iterator::max` does.
pub fn max_of<T: Ord>(items: &[T]) -> Option<&T> {
    items.iter().max()
}

/// A limit that compares against plain integers but not against other
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(pub i32);

impl PartialEq<i32> for Threshold {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<i32> for Threshold {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}
