//! Scalar trait for batch element types.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Trait for the floating-point element types the batch kernels operate on.
///
/// The kernels are pure arithmetic over a single real scalar type, so the
/// bounds stay minimal: copyable, the four ring operations, and `Send + Sync`
/// so slots can be partitioned across threads.
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;
}

impl Scalar for f64 {
    fn one() -> Self {
        1.0
    }
}

impl Scalar for f32 {
    fn one() -> Self {
        1.0
    }
}
