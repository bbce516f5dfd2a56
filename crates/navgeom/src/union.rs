//! Binary union of two point sets, nestable into N-way unions
//! (`a.union_with(b.union_with(c))`).
//!
//! A union of convex sets is not convex, so only `PointSet` and (when both
//! sides are bounded) `BoundedPointSet` are implemented.

use crate::hypercube::AxisAlignedHyperCube;
use crate::num::Real;
use crate::point::Point;
use crate::point_set::{BoundedPointSet, PointSet};

#[derive(Clone, Debug, PartialEq)]
pub struct PointSetUnion<S1, S2> {
    first: S1,
    second: S2,
}

impl<S1, S2> PointSetUnion<S1, S2> {
    pub fn new(first: S1, second: S2) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &S1 {
        &self.first
    }

    pub fn second(&self) -> &S2 {
        &self.second
    }
}

impl<const N: usize, T, S1, S2> PointSet<N, T> for PointSetUnion<S1, S2>
where
    T: Real,
    S1: PointSet<N, T>,
    S2: PointSet<N, T>,
{
    #[inline]
    fn contains(&self, p: &Point<N, T>) -> bool {
        self.first.contains(p) || self.second.contains(p)
    }
}

impl<const N: usize, T, S1, S2> BoundedPointSet<N, T> for PointSetUnion<S1, S2>
where
    T: Real,
    S1: BoundedPointSet<N, T>,
    S2: BoundedPointSet<N, T>,
{
    /// Smallest box holding both member boxes; `None` if either has none.
    fn axis_aligned_bounding_box(&self) -> Option<AxisAlignedHyperCube<N, T>> {
        let a = self.first.axis_aligned_bounding_box()?;
        let b = self.second.axis_aligned_bounding_box()?;
        Some(AxisAlignedHyperCube::from_corners(
            &a.min_corner().inf(b.min_corner()),
            &a.max_corner().sup(b.max_corner()),
        ))
    }

    fn intersects(&self, cube: &AxisAlignedHyperCube<N, T>) -> bool {
        self.first.intersects(cube) || self.second.intersects(cube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::Ball2f;
    use crate::hyperplane::Halfplane2f;
    use crate::hypercube::AxisAlignedQuadf;
    use crate::point::Point2f;

    #[test]
    fn nested_union_contains_any_member() {
        let a = Ball2f::new(Point2f::new(0.0, 0.0), 1.0);
        let b = Ball2f::new(Point2f::new(5.0, 0.0), 1.0);
        let c = AxisAlignedQuadf::from_corners(&Point2f::new(10.0, -1.0), &Point2f::new(11.0, 1.0));
        let u = a.union_with(b.union_with(c));
        assert!(u.contains(&Point2f::new(0.5, 0.0)));
        assert!(u.contains(&Point2f::new(5.5, 0.0)));
        assert!(u.contains(&Point2f::new(10.5, 0.0)));
        assert!(!u.contains(&Point2f::new(2.5, 0.0)));
        assert_eq!(u.second().first().radius(), 1.0);

        let bb: AxisAlignedQuadf = u.axis_aligned_bounding_box().expect("all members bounded");
        assert_eq!(*bb.min_corner(), Point2f::new(-1.0, -1.0));
        assert_eq!(*bb.max_corner(), Point2f::new(11.0, 1.0));
    }

    #[test]
    fn intersects_is_or() {
        let u = PointSetUnion::new(
            Ball2f::new(Point2f::new(0.0, 0.0), 1.0),
            Ball2f::new(Point2f::new(5.0, 0.0), 1.0),
        );
        let near_second = AxisAlignedQuadf::from_corners(&Point2f::new(4.5, -0.5), &Point2f::new(5.5, 0.5));
        let between = AxisAlignedQuadf::from_corners(&Point2f::new(2.0, -0.5), &Point2f::new(3.0, 0.5));
        assert!(u.intersects(&near_second));
        assert!(!u.intersects(&between));
    }

    #[test]
    fn union_with_unbounded_member() {
        let h = Halfplane2f::new(Point2f::new(1.0, 0.0), 0.0);
        let u = PointSetUnion::new(h, Ball2f::new(Point2f::new(-3.0, 0.0), 1.0));
        assert!(u.contains(&Point2f::new(1.0, 0.0)));
        assert!(u.contains(&Point2f::new(-3.0, 0.5)));
        assert!(!u.contains(&Point2f::new(-1.0, 0.0)));
    }
}
