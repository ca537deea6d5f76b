//! Performance measurement for relocation scoring at varying grid sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use tilesort::color::LumaChromaDistance;
use tilesort::engine::optimizer::best_destination;
use tilesort::engine::sampler::OriginSampler;
use tilesort::spatial::TileGrid;

fn noise_grid(side: u32, seed: u64) -> TileGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    TileGrid::new(RgbaImage::from_fn(side, side, |_, _| {
        Rgba([rng.random(), rng.random(), rng.random(), 255])
    }))
}

/// Measures candidate scoring cost as the grid grows
fn bench_best_destination(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_destination");

    for side in &[16u32, 64, 256] {
        let grid = noise_grid(*side, 12345);
        let center = [side / 2, side / 2];

        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            let mut sampler = OriginSampler;
            b.iter(|| {
                black_box(best_destination(
                    &grid,
                    &mut sampler,
                    &LumaChromaDistance,
                    black_box(center),
                ));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_best_destination);
criterion_main!(benches);
