//! Performance measurement for the complete pixelate-and-cluster workflow

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use tilesort::color::LumaChromaDistance;
use tilesort::engine::PixelEngine;
use tilesort::engine::shuffle::Unbiased;

fn noise_image(width: u32, height: u32, seed: u64) -> RgbaImage {
    let mut rng = StdRng::seed_from_u64(seed);
    RgbaImage::from_fn(width, height, |_, _| {
        Rgba([rng.random(), rng.random(), rng.random(), 255])
    })
}

/// Measures time for pixelation, shuffle, and 25 optimizer passes
fn bench_pixelate_and_cluster(c: &mut Criterion) {
    let source = noise_image(640, 480, 12345);

    c.bench_function("pixelate_shuffle_cluster_25_steps", |b| {
        b.iter(|| {
            let mut engine = PixelEngine::from_seed(source.clone(), 12345);
            if engine.pixelate(64).is_err() {
                return;
            }
            engine.shuffle(&mut Unbiased);

            for _ in 0..25 {
                if engine.step(0.05, &LumaChromaDistance).is_err() {
                    return;
                }
            }
            black_box(engine.into_image());
        });
    });
}

criterion_group!(benches, bench_pixelate_and_cluster);
criterion_main!(benches);
