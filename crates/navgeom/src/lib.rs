//! Convex point-set geometry for robot navigation.
//!
//! Shapes answer membership (`PointSet`), "entirely inside this open
//! half-plane" (`ConvexPointSet`) and axis-aligned box questions
//! (`BoundedPointSet`). Heterogeneous shapes compose through
//! `ConvexIntersection` (boxed trait objects) and `PointSetUnion`
//! (generic, nestable).
//!
//! The occupancy hot path is `FastPolygon`: a convex obstacle polygon with
//! cached circles and edge normals, queried many times per map update, and
//! `AxisAlignedQuad::intersects_polygon` for grid cells.
//!
//! Policy
//! - Synchronous value types with no internal locking. The few mutators
//!   (`Ball::set_radius`, `ConvexPolygon::radial_expand`,
//!   `FastPolygon::sort_edge_vectors`, ...) need `&mut`.
//! - Degenerate inputs yield `Option::None`; broken preconditions are
//!   `debug_assert!`ed and assumed in release builds.

pub mod ball;
pub mod convex_polygon;
pub mod fast_polygon;
pub mod hypercube;
pub mod hyperplane;
pub mod intersection;
pub mod line_segment;
pub mod num;
pub mod point;
pub mod point_set;
pub mod polygon;
pub mod sample;
pub mod union;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use ball::{Ball, Ball2f};
pub use convex_polygon::{ClockDirection, ConvexPolygon};
pub use fast_polygon::FastPolygon;
pub use hypercube::{AxisAlignedHyperCube, AxisAlignedQuad};
pub use hyperplane::{AffineHyperplane, Halfplane, Line2f};
pub use line_segment::LineSegment;
pub use point::{Point, Point2f, Point3f};
pub use point_set::{BoundedConvexSet, BoundedPointSet, ConvexPointSet, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ball::{Ball, Ball2, Ball2f, Ball3f};
    pub use crate::convex_polygon::{ClockDirection, ConvexPolygon};
    pub use crate::fast_polygon::FastPolygon;
    pub use crate::hypercube::{AxisAlignedHyperCube, AxisAlignedQuad, AxisAlignedQuadf};
    pub use crate::hyperplane::{AffineHyperplane, Halfplane, Halfplane2, Halfplane2f, Line2, Line2f};
    pub use crate::intersection::ConvexIntersection;
    pub use crate::line_segment::{orientation, LineSegment, Orientation};
    pub use crate::num::{Coord, Real};
    pub use crate::point::{
        are_unit_vectors_aligned, are_vectors_aligned, compute_distance_between, cross_2d, Point, Point2, Point2f,
        Point3, Point3f, Vec2f, Vec3f,
    };
    pub use crate::point_set::{BoundedConvexSet, BoundedPointSet, ConvexPointSet, PointSet};
    pub use crate::polygon::{Poly2, Poly2f, Poly3f, Polygon};
    pub use crate::sample::{draw_convex_polygon, sample_points_in_box, RadialCfg, ReplayToken, VertexCount};
    pub use crate::union::PointSetUnion;
}
