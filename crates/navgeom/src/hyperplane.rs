//! Affine hyperplanes `a·x + b = 0` and open half-planes `a·x + b > 0`.
//!
//! Invariants:
//! - `a` should be non-zero. A zero normal makes every evaluation the constant
//!   `b`; operations that divide by `|a|` return `None` or fall back to the
//!   sign of `b` instead of dividing.
//! - Both types are immutable after construction.

use nalgebra::Scalar;

use crate::num::{near_zero, Real};
use crate::point::{Point, Point2};
use crate::point_set::{ConvexPointSet, PointSet};

/// Hyperplane `{x : a·x + b = 0}`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineHyperplane<const N: usize, T: Scalar> {
    a: Point<N, T>,
    b: T,
}

/// Infinite 2D line.
pub type Line2<T> = AffineHyperplane<2, T>;
pub type Line2f = Line2<f32>;

/// Open half-space `{x : a·x + b > 0}`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Halfplane<const N: usize, T: Scalar> {
    plane: AffineHyperplane<N, T>,
}

pub type Halfplane2<T> = Halfplane<2, T>;
pub type Halfplane2f = Halfplane2<f32>;

impl<const N: usize, T: Real> AffineHyperplane<N, T> {
    #[inline]
    pub fn new(a: Point<N, T>, b: T) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn normal(&self) -> &Point<N, T> {
        &self.a
    }

    #[inline]
    pub fn offset(&self) -> T {
        self.b
    }

    /// `a·x + b`.
    #[inline]
    pub fn evaluate(&self, x: &Point<N, T>) -> T {
        self.a.dot(x) + self.b
    }

    /// `evaluate(x) / |a|`; `None` for a zero normal.
    #[inline]
    pub fn signed_distance(&self, x: &Point<N, T>) -> Option<T> {
        let norm = self.a.length();
        (norm > T::zero()).then(|| self.evaluate(x) / norm)
    }

    /// Same normal (within tolerance) and the offset ordering `keep(self.b, h.b)`.
    #[inline]
    fn parallel_with(&self, h: &Halfplane<N, T>, keep: impl Fn(T, T) -> bool) -> bool {
        self.a.approx_eq(h.normal()) && keep(self.b, h.offset())
    }
}

impl<T: Real> Line2<T> {
    /// Line through `p` and `q`; its positive side is to the left of `p → q`.
    pub fn from_points(p: &Point2<T>, q: &Point2<T>) -> Self {
        let d = *q - *p;
        let a = Point2::new(-d.y(), d.x());
        let b = -a.dot(p);
        Self::new(a, b)
    }

    /// Crossing point of two lines (Cramer's rule on the 2×2 system).
    ///
    /// Returns `None` when the lines are parallel or coincident: the
    /// determinant is within `TOLERANCE * |a1| * |a2|` of zero.
    pub fn intersection_point(&self, other: &Self) -> Option<Point2<T>> {
        let (a1, b1) = (self.a, -self.b);
        let (a2, b2) = (other.a, -other.b);
        let det = a1.x() * a2.y() - a1.y() * a2.x();
        if det.abs() <= T::TOLERANCE * a1.length() * a2.length() {
            return None;
        }
        let x = (b1 * a2.y() - a1.y() * b2) / det;
        let y = (a1.x() * b2 - b1 * a2.x()) / det;
        Some(Point2::new(x, y))
    }
}

impl<const N: usize, T: Real> PointSet<N, T> for AffineHyperplane<N, T> {
    /// On the plane, up to tolerance.
    #[inline]
    fn contains(&self, p: &Point<N, T>) -> bool {
        near_zero(self.evaluate(p))
    }
}

impl<const N: usize, T: Real> ConvexPointSet<N, T> for AffineHyperplane<N, T> {
    /// Only a parallel plane can lie inside `h`: on this plane `a·x = -b`, so
    /// `h` evaluates to `h.b - b` everywhere, which must be positive.
    fn in_half_plane(&self, h: &Halfplane<N, T>) -> bool {
        self.parallel_with(h, |b, hb| hb > b)
    }
}

impl<const N: usize, T: Real> Halfplane<N, T> {
    #[inline]
    pub fn new(a: Point<N, T>, b: T) -> Self {
        Self {
            plane: AffineHyperplane::new(a, b),
        }
    }

    #[inline]
    pub fn boundary(&self) -> &AffineHyperplane<N, T> {
        &self.plane
    }

    #[inline]
    pub fn normal(&self) -> &Point<N, T> {
        self.plane.normal()
    }

    #[inline]
    pub fn offset(&self) -> T {
        self.plane.offset()
    }

    #[inline]
    pub fn evaluate(&self, x: &Point<N, T>) -> T {
        self.plane.evaluate(x)
    }
}

impl<const N: usize, T: Real> From<AffineHyperplane<N, T>> for Halfplane<N, T> {
    /// The positive side of the plane.
    fn from(plane: AffineHyperplane<N, T>) -> Self {
        Self { plane }
    }
}

impl<const N: usize, T: Real> PointSet<N, T> for Halfplane<N, T> {
    /// Strict: points on the boundary are outside.
    #[inline]
    fn contains(&self, p: &Point<N, T>) -> bool {
        self.evaluate(p) > T::zero()
    }
}

impl<const N: usize, T: Real> ConvexPointSet<N, T> for Halfplane<N, T> {
    /// `{a·x + b > 0} ⊆ {a·x + b' > 0}` iff the normals match and `b <= b'`.
    fn in_half_plane(&self, h: &Halfplane<N, T>) -> bool {
        self.plane.parallel_with(h, |b, hb| b <= hb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point2f;

    #[test]
    fn halfplane_is_open() {
        let h = Halfplane2f::new(Point2f::new(0.0, 1.0), -2.0);
        assert!(h.contains(&Point2f::new(5.0, 2.5)));
        assert!(!h.contains(&Point2f::new(5.0, 2.0)));
        assert!(!h.contains(&Point2f::new(5.0, 1.0)));
        // the boundary itself is on the plane
        assert!(h.boundary().contains(&Point2f::new(-3.0, 2.0)));
    }

    #[test]
    fn plane_contains_is_tolerant() {
        let l = Line2f::new(Point2f::new(1.0, 1.0), -2.0);
        assert!(l.contains(&Point2f::new(1.0, 1.0)));
        assert!(l.contains(&Point2f::new(1.0 + 1e-6, 1.0)));
        assert!(!l.contains(&Point2f::new(1.1, 1.0)));
    }

    #[test]
    fn line_intersection_cramer() {
        let x_eq_5 = Line2f::new(Point2f::new(1.0, 0.0), -5.0);
        let y_eq_x = Line2f::from_points(&Point2f::new(0.0, 0.0), &Point2f::new(1.0, 1.0));
        let p = x_eq_5.intersection_point(&y_eq_x).expect("lines cross");
        assert!(p.approx_eq(&Point2f::new(5.0, 5.0)));
        let parallel = Line2f::new(Point2f::new(1.0, 0.0), 3.0);
        assert!(x_eq_5.intersection_point(&parallel).is_none());
        assert!(x_eq_5.intersection_point(&x_eq_5).is_none());
    }

    #[test]
    fn from_points_positive_side_is_left() {
        let l = Line2f::from_points(&Point2f::new(0.0, 0.0), &Point2f::new(1.0, 0.0));
        assert!(l.evaluate(&Point2f::new(0.5, 1.0)) > 0.0);
        assert!(l.evaluate(&Point2f::new(0.5, -1.0)) < 0.0);
        assert_eq!(l.signed_distance(&Point2f::new(3.0, 2.0)), Some(2.0));
    }

    #[test]
    fn parallel_implication() {
        let h = Halfplane2f::new(Point2f::new(0.0, 1.0), 1.0); // y > -1
        let tighter = Halfplane2f::new(Point2f::new(0.0, 1.0), 0.0); // y > 0
        let looser = Halfplane2f::new(Point2f::new(0.0, 1.0), 2.0); // y > -2
        assert!(tighter.in_half_plane(&h));
        assert!(h.in_half_plane(&h));
        assert!(!looser.in_half_plane(&h));
        let tilted = Halfplane2f::new(Point2f::new(0.1, 1.0), 0.0);
        assert!(!tilted.in_half_plane(&h));

        let plane_y0 = Line2f::new(Point2f::new(0.0, 1.0), 0.0);
        assert!(plane_y0.in_half_plane(&h));
        let plane_ym1 = Line2f::new(Point2f::new(0.0, 1.0), 1.0);
        assert!(!plane_ym1.in_half_plane(&h));
    }
}
