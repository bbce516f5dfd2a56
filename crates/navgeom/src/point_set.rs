//! Capability traits shared by every shape.
//!
//! - `PointSet`: membership.
//! - `ConvexPointSet`: membership plus the conservative "entirely inside this
//!   open half-plane" test used as a separating-plane pre-check.
//! - `BoundedPointSet`: membership plus an axis-aligned bounding box and a
//!   box-intersection test. Both must agree with `contains`: a contained point
//!   always lies in the box.
//! - `BoundedConvexSet`: anything that is both convex and bounded. Blanket
//!   implemented; this is the type-erased element of `ConvexIntersection`.
//!
//! All traits are object safe so shapes can be stored as `Box<dyn ...>`.

use nalgebra::Scalar;

use crate::hypercube::AxisAlignedHyperCube;
use crate::hyperplane::Halfplane;
use crate::num::Real;
use crate::point::Point;
use crate::union::PointSetUnion;

pub trait PointSet<const N: usize, T: Scalar> {
    /// Pure membership predicate.
    fn contains(&self, p: &Point<N, T>) -> bool;

    /// `contains` for every point; stops at the first miss.
    fn contains_all(&self, points: &[Point<N, T>]) -> bool {
        points.iter().all(|p| self.contains(p))
    }

    /// `self ∪ other` (not convex in general).
    fn union_with<S>(self, other: S) -> PointSetUnion<Self, S>
    where
        Self: Sized,
        S: PointSet<N, T>,
    {
        PointSetUnion::new(self, other)
    }
}

pub trait ConvexPointSet<const N: usize, T: Real>: PointSet<N, T> {
    /// True only if every point of the set lies strictly inside `h`.
    /// Must answer `false` whenever the set touches or straddles the boundary.
    fn in_half_plane(&self, h: &Halfplane<N, T>) -> bool;
}

pub trait BoundedPointSet<const N: usize, T: Real>: PointSet<N, T> {
    /// Smallest axis-aligned box containing the set.
    /// `None` when no finite, non-empty box exists.
    fn axis_aligned_bounding_box(&self) -> Option<AxisAlignedHyperCube<N, T>>;

    fn intersects(&self, cube: &AxisAlignedHyperCube<N, T>) -> bool;
}

pub trait BoundedConvexSet<const N: usize, T: Real>:
    ConvexPointSet<N, T> + BoundedPointSet<N, T>
{
}

impl<const N: usize, T: Real, S> BoundedConvexSet<N, T> for S where
    S: ConvexPointSet<N, T> + BoundedPointSet<N, T>
{
}
