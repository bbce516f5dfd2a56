//! Intersection of heterogeneous bounded convex sets.
//!
//! The container owns its members as `Box<dyn BoundedConvexSet>`; every query
//! is the logical AND of the per-member answers. An intersection with no
//! members contains everything but has no finite bounding box.

use std::fmt;

use crate::hypercube::AxisAlignedHyperCube;
use crate::hyperplane::Halfplane;
use crate::num::Real;
use crate::point::Point;
use crate::point_set::{BoundedConvexSet, BoundedPointSet, ConvexPointSet, PointSet};

pub struct ConvexIntersection<const N: usize, T: Real> {
    sets: Vec<Box<dyn BoundedConvexSet<N, T>>>,
}

impl<const N: usize, T: Real> ConvexIntersection<N, T> {
    pub fn new() -> Self {
        Self { sets: Vec::new() }
    }

    pub fn add_set<S>(&mut self, set: S)
    where
        S: BoundedConvexSet<N, T> + 'static,
    {
        self.sets.push(Box::new(set));
    }

    /// Builder form of `add_set`.
    pub fn with_set<S>(mut self, set: S) -> Self
    where
        S: BoundedConvexSet<N, T> + 'static,
    {
        self.add_set(set);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl<const N: usize, T: Real> Default for ConvexIntersection<N, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, T: Real> fmt::Debug for ConvexIntersection<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvexIntersection")
            .field("members", &self.sets.len())
            .finish()
    }
}

impl<const N: usize, T: Real> PointSet<N, T> for ConvexIntersection<N, T> {
    fn contains(&self, p: &Point<N, T>) -> bool {
        self.sets.iter().all(|s| s.contains(p))
    }
}

impl<const N: usize, T: Real> ConvexPointSet<N, T> for ConvexIntersection<N, T> {
    /// Conservative: only true if every member is inside `h` on its own.
    fn in_half_plane(&self, h: &Halfplane<N, T>) -> bool {
        self.sets.iter().all(|s| s.in_half_plane(h))
    }
}

impl<const N: usize, T: Real> BoundedPointSet<N, T> for ConvexIntersection<N, T> {
    /// Overlap of the member boxes.
    ///
    /// `None` when there are no members, when a member has no box, or when
    /// the member boxes are disjoint in some dimension (empty intersection).
    fn axis_aligned_bounding_box(&self) -> Option<AxisAlignedHyperCube<N, T>> {
        let mut boxes = self.sets.iter().map(|s| s.axis_aligned_bounding_box());
        let first = boxes.next()??;
        let (mut lo, mut hi) = (*first.min_corner(), *first.max_corner());
        for b in boxes {
            let b = b?;
            lo = lo.sup(b.min_corner());
            hi = hi.inf(b.max_corner());
        }
        if lo.any_gt(&hi) {
            return None;
        }
        Some(AxisAlignedHyperCube::from_corners(&lo, &hi))
    }

    fn intersects(&self, cube: &AxisAlignedHyperCube<N, T>) -> bool {
        self.sets.iter().all(|s| s.intersects(cube))
    }
}
