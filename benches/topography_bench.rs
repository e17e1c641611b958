//! Benchmarks for bottom-topography generation.
//!
//! Run with: `cargo bench --bench topography_bench`
//!
//! The composition loop is the only hot path in the crate; the override
//! passes and the rescale are linear sweeps over the field.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use idealized_basin::{HorizontalGrid, TopographyConfig, TopographyGenerator};

fn bench_generate(c: &mut Criterion) {
    let generator = TopographyGenerator::new(TopographyConfig::default(), 4000.0, 5.0)
        .expect("reference configuration must validate");

    let mut group = c.benchmark_group("topography");
    for &(nx, ny) in &[(60, 140), (120, 280), (240, 560)] {
        let grid = HorizontalGrid::uniform(nx, ny, 0.0, 60.0, -70.0, 140.0)
            .expect("grid construction");

        group.bench_with_input(
            BenchmarkId::new("generate", format!("{}x{}", nx, ny)),
            &grid,
            |b, grid| b.iter(|| generator.generate(black_box(grid))),
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("generate_parallel", format!("{}x{}", nx, ny)),
            &grid,
            |b, grid| b.iter(|| generator.generate_parallel(black_box(grid))),
        );
    }
    group.finish();
}

fn bench_composed_depth(c: &mut Criterion) {
    let generator = TopographyGenerator::new(TopographyConfig::default(), 4000.0, 5.0)
        .expect("reference configuration must validate");

    // Sweep a diagonal through every feature region.
    let points: Vec<(f64, f64)> = (0..1000)
        .map(|n| {
            let t = n as f64 / 999.0;
            (t, 0.05 + 0.9 * t)
        })
        .collect();

    c.bench_function("composed_depth_1000pts", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &(x, y) in &points {
                acc += generator.composed_depth(black_box(x), black_box(y));
            }
            acc
        })
    });
}

criterion_group!(benches, bench_generate, bench_composed_depth);
criterion_main!(benches);
