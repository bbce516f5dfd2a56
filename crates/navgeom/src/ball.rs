//! Closed L2 ball.

use nalgebra::Scalar;

use crate::hypercube::AxisAlignedHyperCube;
use crate::hyperplane::Halfplane;
use crate::num::Real;
use crate::point::Point;
use crate::point_set::{BoundedPointSet, ConvexPointSet, PointSet};

/// `{x : |x - center| <= radius}`.
///
/// Invariants:
/// - `radius >= 0`.
/// - `radius_sq == radius * radius`, kept in sync by the setters so the
///   membership test never takes a square root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball<const N: usize, T: Scalar> {
    center: Point<N, T>,
    radius: T,
    radius_sq: T,
}

pub type Ball2<T> = Ball<2, T>;
pub type Ball2f = Ball2<f32>;
pub type Ball3f = Ball<3, f32>;

impl<const N: usize, T: Real> Ball<N, T> {
    pub fn new(center: Point<N, T>, radius: T) -> Self {
        debug_assert!(radius >= T::zero(), "ball radius must be non-negative");
        Self {
            center,
            radius,
            radius_sq: radius * radius,
        }
    }

    #[inline]
    pub fn centroid(&self) -> &Point<N, T> {
        &self.center
    }

    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    #[inline]
    pub fn radius_sq(&self) -> T {
        self.radius_sq
    }

    #[inline]
    pub fn set_centroid(&mut self, center: Point<N, T>) {
        self.center = center;
    }

    pub fn set_radius(&mut self, radius: T) {
        debug_assert!(radius >= T::zero(), "ball radius must be non-negative");
        self.radius = radius;
        self.radius_sq = radius * radius;
    }

    /// Axis-aligned box `center ± radius`.
    pub fn bounding_box(&self) -> AxisAlignedHyperCube<N, T> {
        AxisAlignedHyperCube::from_corners(
            &self.center.sub_scalar(self.radius),
            &self.center.add_scalar(self.radius),
        )
    }
}

impl<const N: usize, T: Real> PointSet<N, T> for Ball<N, T> {
    #[inline]
    fn contains(&self, p: &Point<N, T>) -> bool {
        (*p - self.center).length_sq() <= self.radius_sq
    }
}

impl<const N: usize, T: Real> ConvexPointSet<N, T> for Ball<N, T> {
    /// The ball is inside iff the center is on the positive side and its
    /// distance to the boundary exceeds the radius. Touching is not inside.
    fn in_half_plane(&self, h: &Halfplane<N, T>) -> bool {
        let value = h.evaluate(&self.center);
        let normal_sq = h.normal().length_sq();
        if normal_sq <= T::zero() {
            // Degenerate plane: `h` is everything or nothing.
            return value > T::zero();
        }
        let dist_sq = value * value / normal_sq;
        if dist_sq <= self.radius_sq {
            return false;
        }
        value > T::zero()
    }
}

impl<const N: usize, T: Real> BoundedPointSet<N, T> for Ball<N, T> {
    fn axis_aligned_bounding_box(&self) -> Option<AxisAlignedHyperCube<N, T>> {
        Some(self.bounding_box())
    }

    fn intersects(&self, cube: &AxisAlignedHyperCube<N, T>) -> bool {
        cube.intersects_ball(self)
    }
}
