//! Scalar traits and fixed comparison tolerances.
//!
//! - `Coord`: anything a `Point` can store (integers and floats).
//! - `Real`: floating-point coordinates; only these can form convex sets,
//!   since convexity needs closure under convex combination.
//!
//! Policy
//! - Tolerances are fixed per element type (`Real::TOLERANCE`), never runtime
//!   configuration. Call sites that need a different slack pass an explicit
//!   epsilon to `near` or `Point::is_nearly_equal`.

use nalgebra::Scalar;
use num_traits::{Float, NumAssign};

/// Element type of a `Point`.
pub trait Coord: Scalar + Copy + PartialOrd + NumAssign {}

impl<T> Coord for T where T: Scalar + Copy + PartialOrd + NumAssign {}

/// Floating-point element type with a fixed comparison tolerance.
pub trait Real: Coord + Float {
    /// Absolute tolerance used by the `flt_*` comparisons and near-zero tests.
    const TOLERANCE: Self;
}

impl Real for f32 {
    const TOLERANCE: f32 = 1e-5;
}

impl Real for f64 {
    const TOLERANCE: f64 = 1e-9;
}

#[inline]
pub fn near<T: Real>(a: T, b: T, eps: T) -> bool {
    (a - b).abs() <= eps
}

#[inline]
pub fn near_zero<T: Real>(a: T) -> bool {
    a.abs() <= T::TOLERANCE
}

/// `a > b` by more than the tolerance.
#[inline]
pub fn flt_gt<T: Real>(a: T, b: T) -> bool {
    a > b + T::TOLERANCE
}

/// `a < b` by more than the tolerance.
#[inline]
pub fn flt_lt<T: Real>(a: T, b: T) -> bool {
    a < b - T::TOLERANCE
}

/// `a >= b` up to the tolerance.
#[inline]
pub fn flt_ge<T: Real>(a: T, b: T) -> bool {
    !flt_lt(a, b)
}

/// `a <= b` up to the tolerance.
#[inline]
pub fn flt_le<T: Real>(a: T, b: T) -> bool {
    !flt_gt(a, b)
}
