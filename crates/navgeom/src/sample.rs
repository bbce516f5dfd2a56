//! Random convex polygons and query points (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic obstacle shapes and probe points for property tests,
//!   benchmarks and the occupancy demo.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter around `center`, then take the convex hull.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::convex_polygon::ConvexPolygon;
use crate::point::Point2f;

/// How many vertices to place before taking the hull. Counts below three
/// are raised to three.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Shape of a sampled obstacle.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Max angular offset per vertex, in units of the even spacing. Kept
    /// below one half so neighbours never swap.
    pub angle_jitter_frac: f32,
    /// Max relative deviation of each vertex distance from `base_radius`.
    pub radial_jitter: f32,
    pub base_radius: f32,
    pub center: Point2f,
    /// Rotate the whole polygon by a random angle.
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(8),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Point2f::zeros(),
            random_phase: true,
        }
    }
}

/// `(seed, index)` pair naming one draw, so a failing case can be rebuilt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // splitmix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random convex polygon (clockwise) via radial jitter + convex hull.
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> ConvexPolygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-3);
    let delta = std::f32::consts::TAU / n as f32;
    let phase = if cfg.random_phase {
        rng.gen::<f32>() * std::f32::consts::TAU
    } else {
        0.0
    };
    let pts: Vec<Point2f> = (0..n)
        .map(|k| {
            let th = phase + k as f32 * delta + rng.gen_range(-1.0f32..=1.0) * aj * delta;
            let r = (1.0 + rng.gen_range(-1.0f32..=1.0) * rj) * r0;
            Point2f::new(cfg.center.x() + th.cos() * r, cfg.center.y() + th.sin() * r)
        })
        .collect();
    ConvexPolygon::convex_hull(pts)
}

/// `count` points uniform in the box `[lo, hi]`.
pub fn sample_points_in_box(lo: Point2f, hi: Point2f, count: usize, tok: ReplayToken) -> Vec<Point2f> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = (lo.inf(&hi), lo.sup(&hi));
    (0..count)
        .map(|_| {
            Point2f::new(
                lo.x() + rng.gen::<f32>() * (hi.x() - lo.x()),
                lo.y() + rng.gen::<f32>() * (hi.y() - lo.y()),
            )
        })
        .collect()
}
