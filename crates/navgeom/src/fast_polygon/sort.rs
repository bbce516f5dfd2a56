//! Greedy reordering of the per-edge tests.
//!
//! Probes sit where step 4 of `contains_xy` actually runs: 16 on the
//! circumscribed circle and 16 (half a step rotated) on a ring a quarter of
//! the way from the inscribed to the circumscribed radius. Each round moves
//! to the front the edge that rejects the most still-unrejected probes.

use std::f32::consts::TAU;

use super::FastPolygon;
use crate::point::{Point2f, Vec2f};

const PROBES_PER_RING: usize = 16;
const INNER_RING_BLEND: f32 = 0.25;

impl FastPolygon {
    /// Reorder the edge tests so that likely rejections come first.
    /// Query results are unaffected.
    pub fn sort_edge_vectors(&mut self) {
        let outer = self.circumscribed_radius_sq.sqrt();
        let inner = self.inscribed_radius_sq.sqrt();
        let blended = inner + INNER_RING_BLEND * (outer - inner);
        let step = TAU / PROBES_PER_RING as f32;
        let c = self.circle_center;
        let mut probes: Vec<Point2f> = (0..PROBES_PER_RING)
            .flat_map(|k| {
                let th_outer = k as f32 * step;
                let th_inner = th_outer + 0.5 * step;
                [
                    Point2f::new(c.x() + outer * th_outer.cos(), c.y() + outer * th_outer.sin()),
                    Point2f::new(c.x() + blended * th_inner.cos(), c.y() + blended * th_inner.sin()),
                ]
            })
            .collect();

        let vertices = self.poly.as_polygon().as_slice();
        let rejects = |(normal, i): &(Vec2f, usize), p: &Point2f| normal.dot(&(*p - vertices[*i])) > 0.0;

        let mut placed = 0;
        while placed < self.perpendicular_edges.len() && !probes.is_empty() {
            let mut best = placed;
            let mut best_count = 0;
            for j in placed..self.perpendicular_edges.len() {
                let count = probes.iter().filter(|p| rejects(&self.perpendicular_edges[j], *p)).count();
                if count > best_count {
                    best = j;
                    best_count = count;
                }
            }
            if best_count == 0 {
                break;
            }
            self.perpendicular_edges[placed..=best].rotate_right(1);
            let chosen = self.perpendicular_edges[placed];
            probes.retain(|p| !rejects(&chosen, p));
            placed += 1;
        }

        tracing::debug!(
            edges = self.perpendicular_edges.len(),
            placed,
            undecided_probes = probes.len(),
            "sorted edge tests"
        );
    }
}
