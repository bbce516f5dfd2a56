//! Rasterize random obstacle polygons into an occupancy grid and log how the
//! cached containment path and the quad overlap test agree.
//!
//! Usage:
//!   cargo run -p navgeom --example occupancy_probe -- [cell_size]
//!   RUST_LOG is not read; the subscriber logs at DEBUG so the edge-sort
//!   summary is visible.

use navgeom::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

const GRID_HALF_EXTENT: f32 = 80.0;

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cell: f32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .filter(|c: &f32| *c > 0.0)
        .unwrap_or(4.0);

    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 4, max: 12 },
        base_radius: 30.0,
        ..RadialCfg::default()
    };

    for index in 0..3 {
        let mut obstacle = FastPolygon::new(draw_convex_polygon(cfg, ReplayToken::new(2025, index)));
        obstacle.sort_edge_vectors();

        let cells_per_side = (2.0 * GRID_HALF_EXTENT / cell).ceil() as usize;
        let (mut centers_inside, mut quads_touching) = (0usize, 0usize);
        for row in 0..cells_per_side {
            for col in 0..cells_per_side {
                let lo = Point2f::new(-GRID_HALF_EXTENT + col as f32 * cell, -GRID_HALF_EXTENT + row as f32 * cell);
                let hi = lo.add_scalar(cell);
                let quad = AxisAlignedQuadf::from_corners(&lo, &hi);
                if obstacle.contains(&quad.centroid()) {
                    centers_inside += 1;
                }
                if quad.intersects_polygon(&obstacle) {
                    quads_touching += 1;
                }
            }
        }

        // Every cell whose center is inside must also overlap.
        let consistent = centers_inside <= quads_touching;
        tracing::info!(
            index,
            vertices = obstacle.polygon().len(),
            cell,
            centers_inside,
            quads_touching,
            consistent,
            "rasterized"
        );
    }
}
