//! Criterion benchmarks for the planar algorithms.
//! Focus sizes: n in {10, 100, 1_000, 10_000}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::geom2::rand::{
    draw_convex_polygon, draw_int_cloud, draw_point_cloud, Bounds2, RadialCfg, ReplayToken,
    VertexCount,
};
use planar::geom2::{closest_pair, convex_hull, is_inside, polygon_diameter, Point};

const SIZES: [usize; 4] = [10, 100, 1_000, 10_000];

fn cloud(n: usize, index: u64) -> Vec<Point<f64>> {
    draw_point_cloud(n, Bounds2::default(), ReplayToken { seed: 43, index })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull");
    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("f64", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 0),
                |pts| {
                    let _hull = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
        // Dense integer grid: many duplicates and collinear triples.
        group.bench_with_input(BenchmarkId::new("i64_dense", n), &n, |b, &n| {
            b.iter_batched(
                || draw_int_cloud(n, 16, ReplayToken { seed: 44, index: 0 }),
                |pts| {
                    let _hull = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_closest_and_diameter(c: &mut Criterion) {
    let mut group = c.benchmark_group("distances");
    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("closest_pair", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 1),
                |pts| {
                    let _d = closest_pair(&pts);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("polygon_diameter", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 2),
                |pts| {
                    let _d = polygon_diameter(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_point_in_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_inside");
    for &n in &[8usize, 64, 512] {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RadialCfg::default()
        };
        let poly = draw_convex_polygon(cfg, ReplayToken { seed: 45, index: 0 });
        let queries = cloud(256, 3);
        group.bench_with_input(BenchmarkId::new("radial", n), &n, |b, _| {
            b.iter(|| queries.iter().filter(|q| is_inside(&poly, **q)).count())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_hull,
    bench_closest_and_diameter,
    bench_point_in_polygon
);
criterion_main!(benches);
