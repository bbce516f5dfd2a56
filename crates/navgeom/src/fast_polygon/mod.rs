//! Convex polygon with a precomputed containment cache.
//!
//! Purpose
//! - Answer many `contains` queries against one obstacle polygon (occupancy
//!   rasterization, collision checks) with as few dot products as possible.
//!
//! Model
//! - Around the area centroid `c` two circles are cached: the circumscribed
//!   one (max vertex distance, holds the whole polygon) and the inscribed one
//!   (min distance from `c` to an edge line, held by the polygon).
//! - Each non-degenerate edge contributes its outward unit normal and the
//!   index of its first vertex in clockwise storage.
//! - Queries go: bounding box reject, outer circle reject, inner circle
//!   accept, then per-edge half-plane tests. Only the last step depends on
//!   the edge order, and it is an AND over all edges, so `sort_edge_vectors`
//!   can never change an answer.
//!
//! Invariants
//! - Every cached field is derived once in `new`; only the edge test order
//!   changes afterwards.

mod sort;

use crate::convex_polygon::ConvexPolygon;
use crate::hypercube::AxisAlignedHyperCube;
use crate::hyperplane::Halfplane2f;
use crate::line_segment::LineSegment;
use crate::point::{Point2f, Vec2f};
use crate::point_set::{BoundedPointSet, ConvexPointSet, PointSet};

#[derive(Clone, Debug)]
pub struct FastPolygon {
    poly: ConvexPolygon,
    circle_center: Point2f,
    circumscribed_radius_sq: f32,
    inscribed_radius_sq: f32,
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
    /// (outward unit normal, anchor vertex index), in test order.
    perpendicular_edges: Vec<(Vec2f, usize)>,
    edge_segments: Vec<LineSegment>,
}

impl FastPolygon {
    pub fn new(poly: ConvexPolygon) -> Self {
        let vertices = poly.as_polygon().as_slice();
        let n = vertices.len();
        let circle_center = poly.centroid();

        let circumscribed_radius_sq = vertices
            .iter()
            .map(|v| (*v - circle_center).length_sq())
            .fold(0.0f32, f32::max);

        let mut perpendicular_edges = Vec::with_capacity(n);
        for i in 0..n {
            let e = vertices[(i + 1) % n] - vertices[i];
            // Storage is clockwise: the left normal points out.
            if let Some(normal) = Vec2f::new(-e.y(), e.x()).normalized() {
                perpendicular_edges.push((normal, i));
            }
        }

        let inscribed_radius_sq = if n < 3 {
            0.0
        } else {
            perpendicular_edges
                .iter()
                .map(|(normal, i)| {
                    let d = (circle_center - vertices[*i]).dot(normal);
                    d * d
                })
                .fold(f32::INFINITY, f32::min)
        };
        let inscribed_radius_sq = if inscribed_radius_sq.is_finite() { inscribed_radius_sq } else { 0.0 };

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (f32::INFINITY, f32::NEG_INFINITY, f32::INFINITY, f32::NEG_INFINITY);
        for v in vertices {
            min_x = min_x.min(v.x());
            max_x = max_x.max(v.x());
            min_y = min_y.min(v.y());
            max_y = max_y.max(v.y());
        }

        let edge_segments = poly.as_polygon().edge_segments();

        tracing::trace!(
            vertices = n,
            edges = perpendicular_edges.len(),
            inscribed_radius_sq,
            circumscribed_radius_sq,
            "fast polygon built"
        );

        Self {
            poly,
            circle_center,
            circumscribed_radius_sq,
            inscribed_radius_sq,
            min_x,
            max_x,
            min_y,
            max_y,
            perpendicular_edges,
            edge_segments,
        }
    }

    /// Convex-hull the points, then build the cache.
    pub fn from_points(points: Vec<Point2f>) -> Self {
        Self::new(ConvexPolygon::convex_hull(points))
    }

    /// Fast containment for a convex, clockwise polygon.
    pub fn contains_point(&self, p: &Point2f) -> bool {
        self.contains_xy(p.x(), p.y())
    }

    pub fn contains_xy(&self, x: f32, y: f32) -> bool {
        if x < self.min_x || x > self.max_x || y < self.min_y || y > self.max_y {
            return false;
        }
        let p = Point2f::new(x, y);
        let dist_sq = (p - self.circle_center).length_sq();
        if dist_sq > self.circumscribed_radius_sq {
            return false;
        }
        if dist_sq < self.inscribed_radius_sq {
            return true;
        }
        let vertices = self.poly.as_polygon().as_slice();
        self.perpendicular_edges
            .iter()
            .all(|(normal, i)| normal.dot(&(p - vertices[*i])) <= 0.0)
    }

    /// Containment without the convex/clockwise assumption: on any edge, or
    /// inside by ray-casting parity.
    pub fn contains_assumptionless(&self, p: &Point2f) -> bool {
        if self.edge_segments.iter().any(|s| s.contains(p)) {
            return true;
        }
        let mut inside = false;
        for s in &self.edge_segments {
            let (a, b) = (s.from(), s.to());
            if (a.y() > p.y()) != (b.y() > p.y()) {
                let x_cross = a.x() + (p.y() - a.y()) * (b.x() - a.x()) / (b.y() - a.y());
                if p.x() < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    #[inline]
    pub fn polygon(&self) -> &ConvexPolygon {
        &self.poly
    }

    #[inline]
    pub fn circle_center(&self) -> &Point2f {
        &self.circle_center
    }

    #[inline]
    pub fn circumscribed_radius_sq(&self) -> f32 {
        self.circumscribed_radius_sq
    }

    #[inline]
    pub fn inscribed_radius_sq(&self) -> f32 {
        self.inscribed_radius_sq
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.min_x
    }
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.max_x
    }
    #[inline]
    pub fn min_y(&self) -> f32 {
        self.min_y
    }
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Edges in clockwise storage order (not the test order).
    #[inline]
    pub fn edge_segments(&self) -> &[LineSegment] {
        &self.edge_segments
    }

    /// Anchor vertex index of each edge, in the order step 4 tests them.
    pub fn edge_test_order(&self) -> Vec<usize> {
        self.perpendicular_edges.iter().map(|(_, i)| *i).collect()
    }
}

impl From<ConvexPolygon> for FastPolygon {
    fn from(poly: ConvexPolygon) -> Self {
        Self::new(poly)
    }
}

impl PointSet<2, f32> for FastPolygon {
    /// `contains_point`, or `contains_assumptionless` with the
    /// `assumptionless-contains` feature.
    #[inline]
    fn contains(&self, p: &Point2f) -> bool {
        if cfg!(feature = "assumptionless-contains") {
            self.contains_assumptionless(p)
        } else {
            self.contains_point(p)
        }
    }
}

impl ConvexPointSet<2, f32> for FastPolygon {
    fn in_half_plane(&self, h: &Halfplane2f) -> bool {
        self.poly.in_half_plane(h)
    }
}

impl BoundedPointSet<2, f32> for FastPolygon {
    fn axis_aligned_bounding_box(&self) -> Option<AxisAlignedHyperCube<2, f32>> {
        if self.poly.is_empty() {
            return None;
        }
        Some(AxisAlignedHyperCube::from_corners(
            &Point2f::new(self.min_x, self.min_y),
            &Point2f::new(self.max_x, self.max_y),
        ))
    }

    fn intersects(&self, cube: &AxisAlignedHyperCube<2, f32>) -> bool {
        cube.intersects_polygon(self)
    }
}
