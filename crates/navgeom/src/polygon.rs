//! Ordered vertex lists (closed polygons).
//!
//! A `Polygon` makes no convexity or winding promise; `ConvexPolygon` layers
//! those invariants on top. Edge `i` runs from vertex `i` to vertex
//! `(i + 1) % len`.

use std::ops::Index;

use nalgebra::Scalar;
use num_traits::NumCast;

use crate::hypercube::AxisAlignedHyperCube;
use crate::line_segment::LineSegment;
use crate::num::{near_zero, Coord, Real};
use crate::point::{cross_2d, Point, Point2, Point2f};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon<const N: usize, T: Scalar> {
    vertices: Vec<Point<N, T>>,
}

pub type Poly2<T> = Polygon<2, T>;
pub type Poly2f = Poly2<f32>;
pub type Poly3f = Polygon<3, f32>;

impl<const N: usize, T: Coord> Polygon<N, T> {
    pub fn new() -> Self {
        Self { vertices: Vec::new() }
    }

    pub fn from_vertices(vertices: Vec<Point<N, T>>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn push(&mut self, p: Point<N, T>) {
        self.vertices.push(p);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point<N, T>> {
        self.vertices.iter()
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> &Point<N, T> {
        &self.vertices[i]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point<N, T>] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point<N, T>> {
        self.vertices
    }

    #[inline]
    pub(crate) fn vertices_mut(&mut self) -> &mut Vec<Point<N, T>> {
        &mut self.vertices
    }

    /// Smallest coordinate along `dim`; `None` for an empty polygon.
    pub fn min_coord(&self, dim: usize) -> Option<T> {
        self.vertices
            .iter()
            .map(|v| v[dim])
            .reduce(|a, b| if b < a { b } else { a })
    }

    /// Largest coordinate along `dim`; `None` for an empty polygon.
    pub fn max_coord(&self, dim: usize) -> Option<T> {
        self.vertices
            .iter()
            .map(|v| v[dim])
            .reduce(|a, b| if b > a { b } else { a })
    }
}

impl<const N: usize, T: Real> Polygon<N, T> {
    /// Plain average of the vertices (origin for an empty polygon).
    pub fn vertex_mean(&self) -> Point<N, T> {
        if self.vertices.is_empty() {
            return Point::zeros();
        }
        let sum = self.vertices.iter().fold(Point::zeros(), |acc, v| acc + *v);
        sum / <T as NumCast>::from(self.vertices.len()).unwrap_or_else(T::one)
    }

    pub fn bounding_box(&self) -> Option<AxisAlignedHyperCube<N, T>> {
        let (first, rest) = self.vertices.split_first()?;
        let (lo, hi) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), v| (lo.inf(v), hi.sup(v)));
        Some(AxisAlignedHyperCube::from_corners(&lo, &hi))
    }
}

impl<T: Real> Poly2<T> {
    /// Shoelace area; positive for counter-clockwise order.
    pub fn signed_area(&self) -> T {
        let n = self.vertices.len();
        if n < 3 {
            return T::zero();
        }
        let origin = self.vertices[0];
        let mut twice = T::zero();
        for i in 1..n - 1 {
            twice += cross_2d(&(self.vertices[i] - origin), &(self.vertices[i + 1] - origin));
        }
        twice / (T::one() + T::one())
    }

    /// Area-weighted centroid.
    ///
    /// Vertices are shifted by the first vertex before accumulating, which
    /// keeps the products small for polygons far from the origin. Collinear
    /// extra vertices contribute zero area and do not move the result.
    /// Falls back to `vertex_mean` for (near) zero-area input.
    pub fn centroid(&self) -> Point2<T> {
        let n = self.vertices.len();
        if n < 3 {
            return self.vertex_mean();
        }
        let origin = self.vertices[0];
        let mut twice_area = T::zero();
        let mut acc = Point2::zeros();
        for i in 1..n - 1 {
            let a = self.vertices[i] - origin;
            let b = self.vertices[i + 1] - origin;
            let w = cross_2d(&a, &b);
            twice_area += w;
            acc += (a + b) * w;
        }
        if near_zero(twice_area) {
            return self.vertex_mean();
        }
        let three = T::one() + T::one() + T::one();
        origin + acc / (three * twice_area)
    }

    /// Heading of edge `i` in radians, `atan2(dy, dx)`.
    pub fn edge_angle(&self, i: usize) -> T {
        let n = self.vertices.len();
        let d = self.vertices[(i + 1) % n] - self.vertices[i];
        d.y().atan2(d.x())
    }

    #[inline]
    pub fn min_x(&self) -> T {
        self.min_coord(0).unwrap_or_else(T::nan)
    }

    #[inline]
    pub fn max_x(&self) -> T {
        self.max_coord(0).unwrap_or_else(T::nan)
    }

    #[inline]
    pub fn min_y(&self) -> T {
        self.min_coord(1).unwrap_or_else(T::nan)
    }

    #[inline]
    pub fn max_y(&self) -> T {
        self.max_coord(1).unwrap_or_else(T::nan)
    }
}

impl Poly2f {
    /// Edge `i` as a segment from vertex `i` to vertex `i + 1` (wrapping).
    pub fn edge_segment(&self, i: usize) -> LineSegment {
        let n = self.vertices.len();
        LineSegment::new(self.vertices[i], self.vertices[(i + 1) % n])
    }

    /// All edges in storage order.
    pub fn edge_segments(&self) -> Vec<LineSegment> {
        (0..self.vertices.len()).map(|i| self.edge_segment(i)).collect()
    }
}

impl<const N: usize, T: Scalar> Index<usize> for Polygon<N, T> {
    type Output = Point<N, T>;

    fn index(&self, i: usize) -> &Point<N, T> {
        &self.vertices[i]
    }
}

impl<const N: usize, T: Coord> FromIterator<Point<N, T>> for Polygon<N, T> {
    fn from_iter<I: IntoIterator<Item = Point<N, T>>>(iter: I) -> Self {
        Self::from_vertices(iter.into_iter().collect())
    }
}

impl From<Vec<Point2f>> for Poly2f {
    fn from(vertices: Vec<Point2f>) -> Self {
        Self::from_vertices(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point3f;

    fn unit_square() -> Poly2f {
        Poly2f::from_vertices(vec![
            Point2f::new(0.0, 0.0),
            Point2f::new(1.0, 0.0),
            Point2f::new(1.0, 1.0),
            Point2f::new(0.0, 1.0),
        ])
    }

    #[test]
    fn square_area_and_centroid() {
        let sq = unit_square();
        assert_eq!(sq.signed_area(), 1.0);
        assert!(sq.centroid().approx_eq(&Point2f::new(0.5, 0.5)));
        let cw: Poly2f = sq.iter().rev().copied().collect();
        assert_eq!(cw.signed_area(), -1.0);
        assert!(cw.centroid().approx_eq(&Point2f::new(0.5, 0.5)));
    }

    #[test]
    fn centroid_is_area_weighted() {
        // Dense vertices on one side would drag the vertex mean; not the centroid.
        let poly = Poly2f::from_vertices(vec![
            Point2f::new(0.0, 0.0),
            Point2f::new(0.25, 0.0),
            Point2f::new(0.5, 0.0),
            Point2f::new(0.75, 0.0),
            Point2f::new(1.0, 0.0),
            Point2f::new(1.0, 1.0),
            Point2f::new(0.0, 1.0),
        ]);
        assert!(poly.centroid().approx_eq(&Point2f::new(0.5, 0.5)));
        assert!(poly.vertex_mean().y() < 0.3);
    }

    #[test]
    fn degenerate_centroid_falls_back_to_mean() {
        let line = Poly2f::from_vertices(vec![
            Point2f::new(0.0, 0.0),
            Point2f::new(1.0, 1.0),
            Point2f::new(2.0, 2.0),
        ]);
        assert!(line.centroid().approx_eq(&Point2f::new(1.0, 1.0)));
        assert_eq!(Poly2f::new().centroid(), Point2f::zeros());
    }

    #[test]
    fn extents_and_box() {
        let sq = unit_square();
        assert_eq!((sq.min_x(), sq.max_x(), sq.min_y(), sq.max_y()), (0.0, 1.0, 0.0, 1.0));
        let bb = sq.bounding_box().expect("non-empty");
        assert_eq!(*bb.max_corner(), Point2f::new(1.0, 1.0));
        assert!(Poly2f::new().bounding_box().is_none());
        assert!(Poly2f::new().min_coord(0).is_none());

        let tri3 = Poly3f::from_vertices(vec![
            Point3f::new(0.0, 0.0, 1.0),
            Point3f::new(1.0, 0.0, -1.0),
            Point3f::new(0.0, 2.0, 0.0),
        ]);
        assert_eq!(tri3.max_coord(1), Some(2.0));
        assert_eq!(tri3.min_coord(2), Some(-1.0));
    }

    #[test]
    fn edges_wrap_around() {
        let sq = unit_square();
        let last = sq.edge_segment(3);
        assert_eq!(last.from(), &Point2f::new(0.0, 1.0));
        assert_eq!(last.to(), &Point2f::new(0.0, 0.0));
        assert_eq!(sq.edge_segments().len(), 4);
        assert!((sq.edge_angle(0) - 0.0).abs() < 1e-6);
        assert!((sq.edge_angle(1) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
