use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use regionmask_rust::{normalize_longitudes, reduce_to_180, reduce_to_360, WrapMode};

fn grid(n: usize) -> Vec<f64> {
    (0..n).map(|i| 360.0 * i as f64 / n as f64).collect()
}

fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reductions");

    for n in [360, 3600, 36000] {
        let lon = grid(n);
        group.bench_with_input(BenchmarkId::new("reduce_to_180", n), &lon, |b, lon| {
            b.iter(|| reduce_to_180(black_box(lon)));
        });
        group.bench_with_input(BenchmarkId::new("reduce_to_360", n), &lon, |b, lon| {
            b.iter(|| reduce_to_360(black_box(lon)));
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for n in [360, 3600, 36000] {
        let lon = grid(n);
        group.bench_with_input(BenchmarkId::new("auto", n), &lon, |b, lon| {
            b.iter(|| normalize_longitudes(black_box(lon.as_slice()), WrapMode::Auto));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reductions, bench_normalize);
criterion_main!(benches);
