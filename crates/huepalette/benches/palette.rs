//! Benchmarks for color conversion and palette generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huepalette::{hex_to_xy, Float, HarmonyMode, Rgb, Shuffler, XyPoint, GAMUT_B};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");

    group.bench_function("hex-to-xy", |b| {
        b.iter(|| hex_to_xy(black_box("3a7bd5"), &GAMUT_B))
    });

    let root = Rgb::from_24bit(0x3a, 0x7b, 0xd5);
    group.bench_function("harmony-square-12", |b| {
        b.iter(|| HarmonyMode::Square.generate(black_box(&root), 12))
    });

    let distinct = (0..12)
        .map(|n| XyPoint::new(0.2 + 0.02 * n as Float, 0.3))
        .collect::<Vec<_>>();
    let repeated = (0..12)
        .map(|n| XyPoint::new(0.2 + 0.1 * (n % 3) as Float, 0.3))
        .collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(42);

    group.bench_function("shuffle-distinct-12", |b| {
        b.iter(|| Shuffler::default().shuffle(black_box(&distinct), &mut rng))
    });

    group.bench_function("shuffle-constructed-12", |b| {
        b.iter(|| Shuffler::new(0).shuffle(black_box(&repeated), &mut rng))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
