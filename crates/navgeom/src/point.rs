//! Fixed-size N-dimensional points (also used as vectors).
//!
//! Purpose
//! - One value type for 2D/3D/ND coordinates with stack storage
//!   (`nalgebra::SVector`), arithmetic, and the comparison helpers the
//!   geometry modules need.
//!
//! Conventions
//! - `PartialEq` is exact. Tolerant equality goes through `is_nearly_equal`.
//! - There is no `PartialOrd`: component-wise ordering is not an order. Use the
//!   `all_*` / `any_*` predicates instead; `any_gt` is `!all_le`, etc.
//! - Zero-length vectors are never normalized; `normalized` returns `None`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::{SVector, Scalar};
use num_traits::{NumCast, ToPrimitive};

use crate::num::{near, Coord, Real};

/// N-dimensional point / vector with element type `T`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<const N: usize, T: Scalar>(SVector<T, N>);

pub type Point2<T> = Point<2, T>;
pub type Point3<T> = Point<3, T>;
pub type Point2f = Point2<f32>;
pub type Point3f = Point3<f32>;
pub type Vec2f = Point2<f32>;
pub type Vec3f = Point3<f32>;

impl<const N: usize, T: Coord> Point<N, T> {
    #[inline]
    pub fn from_array(coords: [T; N]) -> Self {
        Self(SVector::from(coords))
    }

    /// Every coordinate set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Build from a per-dimension generator.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_array(std::array::from_fn(f))
    }

    #[inline]
    pub fn coords(&self) -> &SVector<T, N> {
        &self.0
    }

    #[inline]
    pub fn into_coords(self) -> SVector<T, N> {
        self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    #[inline]
    pub fn length_sq(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self(self.0.zip_map(&other.0, |a, b| a * b))
    }

    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        Self(self.0.zip_map(&other.0, |a, b| a / b))
    }

    #[inline]
    pub fn add_scalar(&self, value: T) -> Self {
        Self(self.0.map(|a| a + value))
    }

    #[inline]
    pub fn sub_scalar(&self, value: T) -> Self {
        Self(self.0.map(|a| a - value))
    }

    /// Smallest coordinate and the dimension holding it (first on ties).
    pub fn min_coord(&self) -> (T, usize) {
        let mut best = (self[0], 0);
        for (i, &c) in self.iter().enumerate().skip(1) {
            if c < best.0 {
                best = (c, i);
            }
        }
        best
    }

    /// Largest coordinate and the dimension holding it (first on ties).
    pub fn max_coord(&self) -> (T, usize) {
        let mut best = (self[0], 0);
        for (i, &c) in self.iter().enumerate().skip(1) {
            if c > best.0 {
                best = (c, i);
            }
        }
        best
    }

    /// Contiguous sub-point `[start, start + M)`.
    pub fn slice<const M: usize>(&self, start: usize) -> Point<M, T> {
        debug_assert!(start + M <= N, "slice [{start}, {}) out of range for N={N}", start + M);
        Point::from_fn(|i| self[start + i])
    }

    /// Element-type conversion; `None` if any coordinate does not fit in `U`.
    pub fn try_cast<U>(&self) -> Option<Point<N, U>>
    where
        T: ToPrimitive,
        U: Coord + NumCast,
    {
        let mut out = [U::zero(); N];
        for (o, &c) in out.iter_mut().zip(self.iter()) {
            *o = <U as NumCast>::from(c)?;
        }
        Some(Point::from_array(out))
    }

    /// Component-wise helper: true iff `cmp` holds for every coordinate pair.
    #[inline]
    fn all_with(&self, other: &Self, cmp: impl Fn(T, T) -> bool) -> bool {
        self.iter().zip(other.iter()).all(|(&a, &b)| cmp(a, b))
    }

    #[inline]
    pub fn all_lt(&self, other: &Self) -> bool {
        self.all_with(other, |a, b| a < b)
    }
    #[inline]
    pub fn all_le(&self, other: &Self) -> bool {
        self.all_with(other, |a, b| a <= b)
    }
    #[inline]
    pub fn all_gt(&self, other: &Self) -> bool {
        self.all_with(other, |a, b| a > b)
    }
    #[inline]
    pub fn all_ge(&self, other: &Self) -> bool {
        self.all_with(other, |a, b| a >= b)
    }
    #[inline]
    pub fn any_gt(&self, other: &Self) -> bool {
        !self.all_le(other)
    }
    #[inline]
    pub fn any_lt(&self, other: &Self) -> bool {
        !self.all_ge(other)
    }
    #[inline]
    pub fn any_ge(&self, other: &Self) -> bool {
        !self.all_lt(other)
    }
    #[inline]
    pub fn any_le(&self, other: &Self) -> bool {
        !self.all_gt(other)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn inf(&self, other: &Self) -> Self {
        Self(self.0.zip_map(&other.0, |a, b| if b < a { b } else { a }))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn sup(&self, other: &Self) -> Self {
        Self(self.0.zip_map(&other.0, |a, b| if b > a { b } else { a }))
    }
}

impl<const N: usize, T: Real> Point<N, T> {
    #[inline]
    pub fn length(&self) -> T {
        self.length_sq().sqrt()
    }

    /// Scale to unit length in place; returns the previous length.
    /// A zero vector is left untouched and `0` is returned.
    pub fn make_unit_length(&mut self) -> T {
        let length_sq = self.length_sq();
        if length_sq > T::zero() {
            let length = length_sq.sqrt();
            *self *= T::one() / length;
            length
        } else {
            T::zero()
        }
    }

    /// Unit vector in the same direction, `None` for the zero vector.
    #[inline]
    pub fn normalized(&self) -> Option<Self> {
        let mut out = *self;
        (out.make_unit_length() > T::zero()).then_some(out)
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self(self.0.map(|a| a.abs()))
    }

    /// Every coordinate within `eps` of the other point's.
    #[inline]
    pub fn is_nearly_equal(&self, other: &Self, eps: T) -> bool {
        self.all_with(other, |a, b| near(a, b, eps))
    }

    /// `is_nearly_equal` with the element type's fixed tolerance.
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.is_nearly_equal(other, T::TOLERANCE)
    }
}

impl<T: Coord> Point2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }
    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }
    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }
}

impl<T: Coord> Point3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }
    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }
    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }
    #[inline]
    pub fn z(&self) -> T {
        self[2]
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - other.y() * self.z(),
            other.x() * self.z() - self.x() * other.z(),
            self.x() * other.y() - other.x() * self.y(),
        )
    }
}

/// z-component of the cross product of two 2D vectors.
/// Positive when `b` is counter-clockwise from `a`.
#[inline]
pub fn cross_2d<T: Coord>(a: &Point2<T>, b: &Point2<T>) -> T {
    a.x() * b.y() - a.y() * b.x()
}

#[inline]
pub fn compute_distance_between<const N: usize, T: Real>(a: &Point<N, T>, b: &Point<N, T>) -> T {
    (*a - *b).length()
}

/// Parallel or anti-parallel within `angle_threshold` (radians).
/// Zero vectors are never aligned.
pub fn are_vectors_aligned<const N: usize, T: Real>(
    a: &Point<N, T>,
    b: &Point<N, T>,
    angle_threshold: T,
) -> bool {
    match (a.normalized(), b.normalized()) {
        (Some(ua), Some(ub)) => are_unit_vectors_aligned(&ua, &ub, angle_threshold),
        _ => false,
    }
}

/// `are_vectors_aligned` for inputs already known to be unit length.
pub fn are_unit_vectors_aligned<const N: usize, T: Real>(
    a: &Point<N, T>,
    b: &Point<N, T>,
    angle_threshold: T,
) -> bool {
    debug_assert!(near(a.length(), T::one(), T::TOLERANCE), "expected unit vector, got {a:?}");
    debug_assert!(near(b.length(), T::one(), T::TOLERANCE), "expected unit vector, got {b:?}");
    let dot_threshold = T::one() - angle_threshold.cos();
    near(a.dot(b).abs(), T::one(), dot_threshold)
}

impl<const N: usize, T: Coord> From<[T; N]> for Point<N, T> {
    #[inline]
    fn from(coords: [T; N]) -> Self {
        Self::from_array(coords)
    }
}

impl<const N: usize, T: Coord> From<SVector<T, N>> for Point<N, T> {
    #[inline]
    fn from(coords: SVector<T, N>) -> Self {
        Self(coords)
    }
}

impl<const N: usize, T: Coord> From<Point<N, T>> for SVector<T, N> {
    #[inline]
    fn from(p: Point<N, T>) -> Self {
        p.0
    }
}

impl<const N: usize, T: Coord> Default for Point<N, T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize, T: Scalar> Index<usize> for Point<N, T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<const N: usize, T: Scalar> IndexMut<usize> for Point<N, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<const N: usize, T: Coord> Add for Point<N, T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<const N: usize, T: Coord> Sub for Point<N, T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<const N: usize, T: Coord> AddAssign for Point<N, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<const N: usize, T: Coord> SubAssign for Point<N, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<const N: usize, T: Coord> Mul<T> for Point<N, T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self(self.0.map(|a| a * rhs))
    }
}

impl<const N: usize, T: Coord> Div<T> for Point<N, T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self(self.0.map(|a| a / rhs))
    }
}

impl<const N: usize, T: Coord> MulAssign<T> for Point<N, T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for c in self.0.iter_mut() {
            *c *= rhs;
        }
    }
}

impl<const N: usize, T: Coord> DivAssign<T> for Point<N, T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        for c in self.0.iter_mut() {
            *c /= rhs;
        }
    }
}

impl<const N: usize, T: Coord + Neg<Output = T>> Neg for Point<N, T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.map(|a| -a))
    }
}

impl<const N: usize, T: Coord + fmt::Display> fmt::Display for Point<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_and_dot() {
        let a = Point3f::new(1.0, 2.0, 3.0);
        let b = Point3f::new(4.0, -5.0, 6.0);
        assert_eq!(a + b, Point3f::new(5.0, -3.0, 9.0));
        assert_eq!(b - a, Point3f::new(3.0, -7.0, 3.0));
        assert_eq!(a * 2.0, Point3f::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Point3f::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(&b), 4.0 - 10.0 + 18.0);
        assert_eq!(a.add_scalar(1.0), Point3f::new(2.0, 3.0, 4.0));
        let mut c = a;
        c += b;
        c /= 5.0;
        assert_eq!(c, Point3f::new(1.0, -0.6, 1.8));
    }

    #[test]
    fn integer_points() {
        let a = Point::<4, i32>::from_array([1, -2, 3, 0]);
        let b = Point::<4, i32>::splat(1);
        assert_eq!((a + b)[1], -1);
        assert_eq!(a.dot(&b), 2);
        assert_eq!(a.min_coord(), (-2, 1));
        assert_eq!(a.max_coord(), (3, 2));
        assert_eq!(a.slice::<2>(1), Point2::new(-2, 3));
    }

    #[test]
    fn cross_products() {
        let x = Point3f::new(1.0, 0.0, 0.0);
        let y = Point3f::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Point3f::new(0.0, 0.0, 1.0));
        assert_eq!(cross_2d(&Point2f::new(1.0, 0.0), &Point2f::new(0.0, 1.0)), 1.0);
        assert_eq!(cross_2d(&Point2f::new(0.0, 1.0), &Point2f::new(1.0, 0.0)), -1.0);
    }

    #[test]
    fn comparisons_are_component_wise() {
        let lo = Point2f::new(0.0, 0.0);
        let hi = Point2f::new(1.0, 1.0);
        let mixed = Point2f::new(2.0, -1.0);
        assert!(lo.all_lt(&hi));
        assert!(hi.all_ge(&lo));
        assert!(!mixed.all_lt(&hi) && !mixed.all_gt(&hi));
        assert!(mixed.any_gt(&hi) && mixed.any_lt(&hi));
        assert!(lo.all_le(&lo) && !lo.any_lt(&lo));
    }

    #[test]
    fn unit_length_and_tolerant_equality() {
        let mut v = Point2f::new(3.0, 4.0);
        assert_eq!(v.make_unit_length(), 5.0);
        assert!(v.approx_eq(&Point2f::new(0.6, 0.8)));
        let mut z = Point2f::zeros();
        assert_eq!(z.make_unit_length(), 0.0);
        assert_eq!(z, Point2f::zeros());
        assert!(z.normalized().is_none());
        assert!(Point2f::new(1.0, 1.0).is_nearly_equal(&Point2f::new(1.05, 0.95), 0.1));
        assert!(!Point2f::new(1.0, 1.0).approx_eq(&Point2f::new(1.001, 1.0)));
    }

    #[test]
    fn distance_and_alignment() {
        let a = Point2f::new(1.0, 1.0);
        let b = Point2f::new(4.0, 5.0);
        assert!((compute_distance_between(&a, &b) - 5.0).abs() < 1e-6);
        let d1 = Point2f::new(1.0, 0.0);
        let d2 = Point2f::new(10.0, 0.5);
        let d3 = Point2f::new(-3.0, 0.0);
        let d4 = Point2f::new(0.0, 1.0);
        let ten_deg = 10.0f32.to_radians();
        assert!(are_vectors_aligned(&d1, &d2, ten_deg));
        assert!(are_vectors_aligned(&d1, &d3, ten_deg));
        assert!(!are_vectors_aligned(&d1, &d4, ten_deg));
        assert!(!are_vectors_aligned(&d1, &Point2f::zeros(), ten_deg));
    }

    #[test]
    fn casting_and_display() {
        let p = Point2f::new(1.5, -2.0);
        let q: Point2<f64> = p.try_cast().expect("f32 fits in f64");
        assert_eq!(q, Point2::new(1.5, -2.0));
        let big = Point2::<f64>::new(1e10, 0.0);
        assert!(big.try_cast::<i32>().is_none());
        assert_eq!(format!("{p}"), "(1.5, -2)");
        assert_eq!(p.inf(&Point2f::new(0.0, 0.0)), Point2f::new(0.0, -2.0));
        assert_eq!(p.sup(&Point2f::new(0.0, 0.0)), Point2f::new(1.5, 0.0));
    }
}
