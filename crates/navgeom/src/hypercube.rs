//! Axis-aligned boxes in N dimensions, with the 2D quad specialization used
//! by the occupancy grid.
//!
//! Invariants
//! - `vertices.len() == 2^N`.
//! - Vertex `k` takes the max of dimension `d` iff bit `d` of `k` is set, so
//!   `vertices[0]` is the all-minimum corner and `vertices[2^N - 1]` the
//!   all-maximum corner. `min_corner`/`max_corner` rely on this.

use nalgebra::Scalar;

use crate::ball::Ball;
use crate::convex_polygon::ConvexPolygon;
use crate::fast_polygon::FastPolygon;
use crate::hyperplane::{Halfplane, Halfplane2f, Line2f};
use crate::num::Real;
use crate::point::{Point, Point2f};
use crate::point_set::{BoundedPointSet, ConvexPointSet, PointSet};

#[derive(Clone, Debug, PartialEq)]
pub struct AxisAlignedHyperCube<const N: usize, T: Scalar> {
    vertices: Vec<Point<N, T>>,
}

/// 2D axis-aligned rectangle.
pub type AxisAlignedQuad<T> = AxisAlignedHyperCube<2, T>;
pub type AxisAlignedQuadf = AxisAlignedQuad<f32>;

impl<const N: usize, T: Real> AxisAlignedHyperCube<N, T> {
    /// Box spanned by two opposite corners, given in any order.
    pub fn from_corners(p: &Point<N, T>, q: &Point<N, T>) -> Self {
        let lo = p.inf(q);
        let hi = p.sup(q);
        let vertices = (0..1usize << N)
            .map(|k| Point::from_fn(|d| if (k >> d) & 1 == 1 { hi[d] } else { lo[d] }))
            .collect();
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point<N, T>] {
        &self.vertices
    }

    #[inline]
    pub fn min_corner(&self) -> &Point<N, T> {
        &self.vertices[0]
    }

    #[inline]
    pub fn max_corner(&self) -> &Point<N, T> {
        &self.vertices[self.vertices.len() - 1]
    }

    #[inline]
    pub fn centroid(&self) -> Point<N, T> {
        (*self.min_corner() + *self.max_corner()) / (T::one() + T::one())
    }

    /// Closed boxes overlap (touching counts).
    pub fn intersects_cube(&self, other: &Self) -> bool {
        self.min_corner().all_le(other.max_corner()) && other.min_corner().all_le(self.max_corner())
    }

    /// Approximate box/ball overlap.
    ///
    /// True if the box holds the ball center. Otherwise step exactly one
    /// radius from the ball center toward the box centroid and test that
    /// single point. Misses corner grazes, and a ball large enough to step
    /// clean over a small box reports no overlap.
    pub fn intersects_ball(&self, ball: &Ball<N, T>) -> bool {
        let center = *ball.centroid();
        if self.contains(&center) {
            return true;
        }
        let Some(dir) = (self.centroid() - center).normalized() else {
            return false;
        };
        self.contains(&(center + dir * ball.radius()))
    }
}

impl<const N: usize, T: Real> PointSet<N, T> for AxisAlignedHyperCube<N, T> {
    #[inline]
    fn contains(&self, p: &Point<N, T>) -> bool {
        p.all_ge(self.min_corner()) && p.all_le(self.max_corner())
    }
}

impl<const N: usize, T: Real> ConvexPointSet<N, T> for AxisAlignedHyperCube<N, T> {
    fn in_half_plane(&self, h: &Halfplane<N, T>) -> bool {
        self.vertices.iter().all(|v| h.contains(v))
    }
}

impl<const N: usize, T: Real> BoundedPointSet<N, T> for AxisAlignedHyperCube<N, T> {
    fn axis_aligned_bounding_box(&self) -> Option<AxisAlignedHyperCube<N, T>> {
        Some(self.clone())
    }

    fn intersects(&self, cube: &AxisAlignedHyperCube<N, T>) -> bool {
        self.intersects_cube(cube)
    }
}

impl AxisAlignedQuadf {
    /// Separating-axis test against a convex, clockwise polygon.
    ///
    /// The four box axes come first (cheap reject on the polygon's bounding
    /// box), then each polygon edge: if the whole quad lies strictly on the
    /// outer side of some edge, they are disjoint.
    pub fn intersects_polygon(&self, poly: &FastPolygon) -> bool {
        if poly.polygon().is_empty() || !self.overlaps_extent(poly.min_x(), poly.max_x(), poly.min_y(), poly.max_y()) {
            return false;
        }
        !poly
            .edge_segments()
            .iter()
            .any(|edge| self.in_half_plane(&edge.outward_halfplane()))
    }

    /// `intersects_polygon` for a polygon without the precomputed cache.
    pub fn intersects_convex_polygon(&self, poly: &ConvexPolygon) -> bool {
        if poly.is_empty() || !self.overlaps_extent(poly.min_x(), poly.max_x(), poly.min_y(), poly.max_y()) {
            return false;
        }
        // Stored order is clockwise, so the left side of each edge is outside.
        let vertices = poly.as_polygon().as_slice();
        let n = vertices.len();
        !(0..n).any(|i| {
            let outward: Halfplane2f = Line2f::from_points(&vertices[i], &vertices[(i + 1) % n]).into();
            self.in_half_plane(&outward)
        })
    }

    fn overlaps_extent(&self, min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> bool {
        let lo: &Point2f = self.min_corner();
        let hi: &Point2f = self.max_corner();
        !(hi.x() < min_x || lo.x() > max_x || hi.y() < min_y || lo.y() > max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::Ball2f;
    use crate::point::Point3f;

    fn unit_quad() -> AxisAlignedQuadf {
        AxisAlignedQuadf::from_corners(&Point2f::new(1.0, 0.0), &Point2f::new(0.0, 1.0))
    }

    #[test]
    fn vertex_order_is_min_first_max_last() {
        let c = AxisAlignedHyperCube::<3, f32>::from_corners(
            &Point3f::new(2.0, -1.0, 5.0),
            &Point3f::new(0.0, 1.0, 3.0),
        );
        assert_eq!(c.vertices().len(), 8);
        assert_eq!(c.vertices()[0], Point3f::new(0.0, -1.0, 3.0));
        assert_eq!(c.vertices()[7], Point3f::new(2.0, 1.0, 5.0));
        assert_eq!(c.vertices()[1], Point3f::new(2.0, -1.0, 3.0));
        assert_eq!(c.centroid(), Point3f::new(1.0, 0.0, 4.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let q = unit_quad();
        assert!(q.contains(&Point2f::new(0.0, 0.0)));
        assert!(q.contains(&Point2f::new(1.0, 0.5)));
        assert!(!q.contains(&Point2f::new(1.01, 0.5)));
        assert_eq!(q.axis_aligned_bounding_box(), Some(q.clone()));
    }

    #[test]
    fn in_half_plane_needs_every_vertex() {
        let q = unit_quad();
        // x > -0.5
        assert!(q.in_half_plane(&Halfplane2f::new(Point2f::new(1.0, 0.0), 0.5)));
        // x > 0 leaves the left edge on the boundary
        assert!(!q.in_half_plane(&Halfplane2f::new(Point2f::new(1.0, 0.0), 0.0)));
    }

    #[test]
    fn cube_overlap() {
        let q = unit_quad();
        let touching = AxisAlignedQuadf::from_corners(&Point2f::new(1.0, 1.0), &Point2f::new(2.0, 2.0));
        let apart = AxisAlignedQuadf::from_corners(&Point2f::new(1.5, 0.0), &Point2f::new(2.0, 1.0));
        assert!(q.intersects_cube(&touching));
        assert!(q.intersects(&touching));
        assert!(!q.intersects_cube(&apart));
    }

    #[test]
    fn ball_overlap_approximation() {
        let q = unit_quad();
        assert!(q.intersects_ball(&Ball2f::new(Point2f::new(0.5, 0.5), 0.1)));
        assert!(q.intersects_ball(&Ball2f::new(Point2f::new(1.5, 0.5), 0.6)));
        assert!(!q.intersects_ball(&Ball2f::new(Point2f::new(1.5, 0.5), 0.4)));
        // The corner (1, 1) is ~1.0198 away, so the ball does reach the box,
        // but the probe toward the centroid ends up above it.
        let corner = Ball2f::new(Point2f::new(1.2, 2.0), 1.03);
        assert!(corner.contains(&Point2f::new(1.0, 1.0)));
        assert!(!q.intersects_ball(&corner));
        assert!(!corner.intersects(&q));
        // A radius longer than the way through the box steps past it.
        let oversized = Ball2f::new(Point2f::new(1.5, 0.5), 5.0);
        assert!(oversized.contains(&Point2f::new(0.5, 0.5)));
        assert!(!q.intersects_ball(&oversized));
        assert!(q.intersects_ball(&Ball2f::new(Point2f::new(1.5, 0.5), 1.0)));
    }

    #[test]
    fn quad_against_convex_polygon() {
        let tri = ConvexPolygon::new(vec![
            Point2f::new(0.0, 0.0),
            Point2f::new(4.0, 0.0),
            Point2f::new(0.0, 4.0),
        ]);
        let fast = FastPolygon::new(tri.clone());
        let inside = AxisAlignedQuadf::from_corners(&Point2f::new(0.5, 0.5), &Point2f::new(1.0, 1.0));
        // inside the bounding box but past the hypotenuse
        let past_hyp = AxisAlignedQuadf::from_corners(&Point2f::new(3.0, 3.0), &Point2f::new(3.9, 3.9));
        let straddling = AxisAlignedQuadf::from_corners(&Point2f::new(1.5, 1.5), &Point2f::new(3.0, 3.0));
        let far = AxisAlignedQuadf::from_corners(&Point2f::new(10.0, 10.0), &Point2f::new(11.0, 11.0));
        for (q, expected) in [(&inside, true), (&past_hyp, false), (&straddling, true), (&far, false)] {
            assert_eq!(q.intersects_polygon(&fast), expected, "{q:?}");
            assert_eq!(q.intersects_convex_polygon(&tri), expected, "{q:?}");
        }
    }
}
