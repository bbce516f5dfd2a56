//! Criterion benchmarks for the Graham-scan convex hull.
//! Focus sizes: m in {8, 64, 512, 4096} random points.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use navgeom::prelude::*;

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull");
    for &m in &[8usize, 64, 512, 4096] {
        group.bench_with_input(BenchmarkId::new("graham_scan", m), &m, |b, &m| {
            b.iter_batched(
                || sample_points_in_box(Point2f::new(-100.0, -100.0), Point2f::new(100.0, 100.0), m, ReplayToken::new(11, m as u64)),
                |pts| {
                    let _hull = ConvexPolygon::convex_hull(pts);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("hull_then_cache", m), &m, |b, &m| {
            b.iter_batched(
                || sample_points_in_box(Point2f::new(-100.0, -100.0), Point2f::new(100.0, 100.0), m, ReplayToken::new(12, m as u64)),
                |pts| {
                    let mut fast = FastPolygon::from_points(pts);
                    fast.sort_edge_vectors();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
