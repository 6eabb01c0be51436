use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use terrain_core::{GeneratorParams, build, generate, preview};

const SEED: u64 = 2025;

fn params(size: usize) -> GeneratorParams {
    GeneratorParams::new(size, SEED, 0.0, 255.0, 0.4)
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("diamond-square generate");
    for size in [65, 257, 513] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| generate(black_box(params(size))).unwrap())
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh build");
    for size in [65, 257, 513] {
        let heights = generate(params(size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &heights, |b, heights| {
            b.iter(|| build(heights.clone(), 0.25, 0.2))
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    c.bench_function("generate + build + shaded preview (257)", |b| {
        b.iter(|| {
            let heights = generate(params(257)).unwrap();
            let mesh = build(heights.clone(), 0.25, 0.2);
            let _img = preview::shaded(&heights, &mesh).unwrap();
        })
    });
}

criterion_group!(
    terrain_benchmarks,
    bench_generate,
    bench_build,
    bench_full_pipeline
);
criterion_main!(terrain_benchmarks);
