//! Convex polygons with a canonical clockwise storage order, plus the
//! Graham-scan convex hull.
//!
//! Invariants
//! - Vertices are convex and stored clockwise. `new` reverses
//!   counter-clockwise input; convexity itself is only debug-asserted.
//! - `ClockDirection` is a view: switching it remaps indices through
//!   `internal_idx` and never touches the stored vertices.
//!
//! Conventions
//! - `contains` is inclusive with a distance tolerance of
//!   `f32::TOLERANCE * |p - a|` per edge, so it holds at any scale.
//! - Winding is read from the sign of the f64 shoelace sum, never from a
//!   tolerance band.

use std::cmp::Ordering;

use crate::hypercube::AxisAlignedHyperCube;
use crate::hyperplane::Halfplane2f;
use crate::line_segment::{orientation, LineSegment, Orientation};
use crate::num::Real;
use crate::point::{cross_2d, Point2f};
use crate::point_set::{BoundedPointSet, ConvexPointSet, PointSet};
use crate::polygon::Poly2f;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClockDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    poly: Poly2f,
    clock_direction: ClockDirection,
}

impl ConvexPolygon {
    /// Take ownership of convex vertices in either winding.
    pub fn new(mut vertices: Vec<Point2f>) -> Self {
        debug_assert!(Self::is_convex(&vertices), "vertices are not convex: {vertices:?}");
        if doubled_area(&vertices) > 0.0 {
            vertices.reverse();
        }
        Self {
            poly: Poly2f::from_vertices(vertices),
            clock_direction: ClockDirection::Clockwise,
        }
    }

    pub fn from_polygon(poly: Poly2f) -> Self {
        Self::new(poly.into_vertices())
    }

    /// Every non-degenerate turn goes the same way. Collinear runs are
    /// skipped; fewer than three points are trivially convex.
    pub fn is_convex(points: &[Point2f]) -> bool {
        let n = points.len();
        if n < 3 {
            return true;
        }
        let mut seen: Option<Orientation> = None;
        for i in 0..n {
            let turn = orientation(&points[i], &points[(i + 1) % n], &points[(i + 2) % n]);
            if turn == Orientation::Collinear {
                continue;
            }
            match seen {
                None => seen = Some(turn),
                Some(prev) if prev != turn => return false,
                Some(_) => {}
            }
        }
        true
    }

    /// Graham scan.
    ///
    /// Inputs of at most two points come back unchanged. Otherwise the pivot
    /// is the lowest point (leftmost on ties), the rest are sorted by polar
    /// angle around it with closer points first on equal angles, and the scan
    /// pops every non-left turn. Collinear boundary points are dropped.
    pub fn convex_hull(mut points: Vec<Point2f>) -> Self {
        if points.len() <= 2 {
            return Self::new(points);
        }
        let pivot_idx = points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.y().total_cmp(&b.y()).then_with(|| a.x().total_cmp(&b.x()))
            })
            .map_or(0, |(i, _)| i);
        points.swap(0, pivot_idx);
        let pivot = points[0];
        points[1..].sort_by(|a, b| polar_order(&pivot, a, b));

        let mut hull: Vec<Point2f> = Vec::with_capacity(points.len());
        for p in points {
            while hull.len() >= 2 && turn_exact(&hull[hull.len() - 2], &hull[hull.len() - 1], &p) <= 0.0 {
                hull.pop();
            }
            hull.push(p);
        }
        Self::new(hull)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.poly.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.poly.is_empty()
    }

    #[inline]
    pub fn clock_direction(&self) -> ClockDirection {
        self.clock_direction
    }

    /// Change the viewing order; storage stays clockwise.
    #[inline]
    pub fn set_clock_direction(&mut self, dir: ClockDirection) {
        self.clock_direction = dir;
    }

    #[inline]
    fn internal_idx(&self, i: usize) -> usize {
        match self.clock_direction {
            ClockDirection::Clockwise => i,
            ClockDirection::CounterClockwise => self.len() - 1 - i,
        }
    }

    /// Vertex `i` in the current viewing order.
    #[inline]
    pub fn vertex(&self, i: usize) -> &Point2f {
        self.poly.vertex(self.internal_idx(i))
    }

    /// Vertices in the current viewing order.
    pub fn iter(&self) -> impl Iterator<Item = &Point2f> + '_ {
        (0..self.len()).map(move |i| self.vertex(i))
    }

    /// Underlying clockwise storage, independent of the viewing order.
    #[inline]
    pub fn as_polygon(&self) -> &Poly2f {
        &self.poly
    }

    #[inline]
    pub fn centroid(&self) -> Point2f {
        self.poly.centroid()
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.poly.min_x()
    }
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.poly.max_x()
    }
    #[inline]
    pub fn min_y(&self) -> f32 {
        self.poly.min_y()
    }
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.poly.max_y()
    }

    /// Push every vertex `distance` further from the centroid.
    /// Negative distances are ignored.
    pub fn radial_expand(&mut self, distance: f32) {
        if distance < 0.0 {
            tracing::warn!(distance, "negative radial expansion ignored");
            return;
        }
        let center = self.centroid();
        for v in self.poly.vertices_mut().iter_mut() {
            if let Some(dir) = (*v - center).normalized() {
                *v += dir * distance;
            }
        }
    }
}

impl From<Vec<Point2f>> for ConvexPolygon {
    fn from(vertices: Vec<Point2f>) -> Self {
        Self::new(vertices)
    }
}

/// Twice the signed area in f64, fanned from the first vertex. Positive for
/// counter-clockwise input, zero for fewer than three or collinear points.
fn doubled_area(points: &[Point2f]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    points
        .windows(2)
        .skip(1)
        .map(|w| turn_exact(first, &w[0], &w[1]))
        .sum()
}

/// `cross(b - a, p - b)` in f64. Differences and products of f32 inputs are
/// exact there, so the sign is exact.
#[inline]
fn turn_exact(a: &Point2f, b: &Point2f, p: &Point2f) -> f64 {
    let (ux, uy) = (f64::from(b.x()) - f64::from(a.x()), f64::from(b.y()) - f64::from(a.y()));
    let (vx, vy) = (f64::from(p.x()) - f64::from(b.x()), f64::from(p.y()) - f64::from(b.y()));
    ux * vy - uy * vx
}

/// Polar order about `pivot` for points at or above it: counter-clockwise
/// first, then closer first on equal angles. Points equal to the pivot sort
/// before everything. Evaluated exactly, so this is a total order.
fn polar_order(pivot: &Point2f, a: &Point2f, b: &Point2f) -> Ordering {
    let rel = |p: &Point2f| (f64::from(p.x()) - f64::from(pivot.x()), f64::from(p.y()) - f64::from(pivot.y()));
    let (ax, ay) = rel(a);
    let (bx, by) = rel(b);
    let (la, lb) = (ax * ax + ay * ay, bx * bx + by * by);
    if la == 0.0 || lb == 0.0 {
        return la.total_cmp(&lb);
    }
    let c = ax * by - ay * bx;
    if c > 0.0 {
        Ordering::Less
    } else if c < 0.0 {
        Ordering::Greater
    } else {
        la.total_cmp(&lb)
    }
}

impl PointSet<2, f32> for ConvexPolygon {
    /// Inclusive. Degenerate polygons fall back to point and segment tests.
    fn contains(&self, p: &Point2f) -> bool {
        let v = self.poly.as_slice();
        match v.len() {
            0 => false,
            1 => v[0].approx_eq(p),
            2 => LineSegment::new(v[0], v[1]).contains(p),
            n => (0..n).all(|i| {
                let a = v[i];
                let edge = v[(i + 1) % n] - a;
                let offset = *p - a;
                // Clockwise storage: the inside is to the right of each edge.
                cross_2d(&edge, &offset) <= f32::TOLERANCE * edge.length() * offset.length()
            }),
        }
    }
}

impl ConvexPointSet<2, f32> for ConvexPolygon {
    fn in_half_plane(&self, h: &Halfplane2f) -> bool {
        !self.is_empty() && self.poly.iter().all(|v| h.contains(v))
    }
}

impl BoundedPointSet<2, f32> for ConvexPolygon {
    fn axis_aligned_bounding_box(&self) -> Option<AxisAlignedHyperCube<2, f32>> {
        self.poly.bounding_box()
    }

    fn intersects(&self, cube: &AxisAlignedHyperCube<2, f32>) -> bool {
        cube.intersects_convex_polygon(self)
    }
}
