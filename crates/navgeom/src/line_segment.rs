//! Bounded 2D line segments.
//!
//! A segment keeps its supporting `Line2f` plus cached extents and deltas so
//! the hot predicates (`contains`, the quad/polygon separating test) never
//! recompute them.

use crate::hypercube::AxisAlignedHyperCube;
use crate::hyperplane::{Halfplane, Halfplane2f, Line2f};
use crate::num::{flt_ge, flt_le, Real};
use crate::point::{cross_2d, Point2f, Vec2f};
use crate::point_set::{BoundedPointSet, ConvexPointSet, PointSet};

/// Turn direction of the path `p → q → r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Classify the turn `p → q → r`.
///
/// The collinear band is `TOLERANCE * |q - p| * |r - q|`, a bound on the sine
/// of the turn angle, so the answer does not depend on the polygon's scale.
pub fn orientation(p: &Point2f, q: &Point2f, r: &Point2f) -> Orientation {
    let a = *q - *p;
    let b = *r - *q;
    let turn = cross_2d(&a, &b);
    let band = f32::TOLERANCE * a.length() * b.length();
    if turn > band {
        Orientation::CounterClockwise
    } else if turn < -band {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    line: Line2f,
    from: Point2f,
    to: Point2f,
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
    dx: f32,
    dy: f32,
}

impl LineSegment {
    pub fn new(from: Point2f, to: Point2f) -> Self {
        Self {
            line: Line2f::from_points(&from, &to),
            from,
            to,
            min_x: from.x().min(to.x()),
            max_x: from.x().max(to.x()),
            min_y: from.y().min(to.y()),
            max_y: from.y().max(to.y()),
            dx: to.x() - from.x(),
            dy: to.y() - from.y(),
        }
    }

    #[inline]
    pub fn from(&self) -> &Point2f {
        &self.from
    }

    #[inline]
    pub fn to(&self) -> &Point2f {
        &self.to
    }

    /// Supporting line; its positive side is left of `from → to`.
    #[inline]
    pub fn line(&self) -> &Line2f {
        &self.line
    }

    /// `to - from`.
    #[inline]
    pub fn direction(&self) -> Vec2f {
        Vec2f::new(self.dx, self.dy)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.dx.hypot(self.dy)
    }

    #[inline]
    pub fn midpoint(&self) -> Point2f {
        Point2f::new(self.from.x() + 0.5 * self.dx, self.from.y() + 0.5 * self.dy)
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

    /// Open half-plane left of `from → to`. For an edge of a clockwise
    /// polygon this is the outside.
    #[inline]
    pub fn outward_halfplane(&self) -> Halfplane2f {
        Halfplane::from(self.line)
    }

    /// Single crossing point of two segments.
    ///
    /// `None` when they miss each other, and also for parallel or collinear
    /// (overlapping) segments, which have no single point to report.
    pub fn intersects_at(&self, other: &Self) -> Option<Point2f> {
        let o1 = orientation(&self.from, &self.to, &other.from);
        let o2 = orientation(&self.from, &self.to, &other.to);
        let o3 = orientation(&other.from, &other.to, &self.from);
        let o4 = orientation(&other.from, &other.to, &self.to);
        if o1 != o2 && o3 != o4 {
            return self.line.intersection_point(&other.line);
        }
        None
    }

    /// Whether the segments share any point, collinear overlap included.
    pub fn intersects_with(&self, other: &Self) -> bool {
        let o1 = orientation(&self.from, &self.to, &other.from);
        let o2 = orientation(&self.from, &self.to, &other.to);
        let o3 = orientation(&other.from, &other.to, &self.from);
        let o4 = orientation(&other.from, &other.to, &self.to);
        if o1 != o2 && o3 != o4 {
            return true;
        }
        (o1 == Orientation::Collinear && self.contains(&other.from))
            || (o2 == Orientation::Collinear && self.contains(&other.to))
            || (o3 == Orientation::Collinear && other.contains(&self.from))
            || (o4 == Orientation::Collinear && other.contains(&self.to))
    }

    /// Infinite line through the midpoint, perpendicular to the segment.
    pub fn perpendicular_bisector(&self) -> Line2f {
        let d = self.direction();
        Line2f::new(d, -d.dot(&self.midpoint()))
    }

    #[inline]
    fn in_extent(&self, p: &Point2f) -> bool {
        flt_ge(p.x(), self.min_x) && flt_le(p.x(), self.max_x) && flt_ge(p.y(), self.min_y) && flt_le(p.y(), self.max_y)
    }
}

impl PointSet<2, f32> for LineSegment {
    /// Collinear with the segment and inside its bounding box.
    fn contains(&self, p: &Point2f) -> bool {
        let offset = *p - self.from;
        let turn = cross_2d(&self.direction(), &offset);
        let band = f32::TOLERANCE * self.length() * offset.length();
        turn.abs() <= band && self.in_extent(p)
    }
}

impl ConvexPointSet<2, f32> for LineSegment {
    fn in_half_plane(&self, h: &Halfplane2f) -> bool {
        h.contains(&self.from) && h.contains(&self.to)
    }
}

impl BoundedPointSet<2, f32> for LineSegment {
    fn axis_aligned_bounding_box(&self) -> Option<AxisAlignedHyperCube<2, f32>> {
        Some(AxisAlignedHyperCube::from_corners(
            &Point2f::new(self.min_x, self.min_y),
            &Point2f::new(self.max_x, self.max_y),
        ))
    }

    /// An endpoint inside the box, or a crossing with one of its four sides.
    fn intersects(&self, cube: &AxisAlignedHyperCube<2, f32>) -> bool {
        if cube.contains(&self.from) || cube.contains(&self.to) {
            return true;
        }
        let v = cube.vertices();
        [(0, 1), (1, 3), (3, 2), (2, 0)]
            .iter()
            .any(|&(i, j)| self.intersects_with(&LineSegment::new(v[i], v[j])))
    }
}
