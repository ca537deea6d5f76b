//! Engine orchestration tying grid, sampler, and RNG together
//!
//! `PixelEngine` owns the grid for the duration of a run and threads one
//! explicitly seeded RNG through the shuffle and the optimizer, so runs
//! are reproducible given a fixed seed.

use crate::color::ColorMetric;
use crate::engine::sampler::{BlockSampler, UniformRandomSampler};
use crate::engine::shuffle::SwapBias;
use crate::engine::{optimizer, pixelate, shuffle, sort, swap};
use crate::io::configuration::SAMPLER_SEED_XOR;
use crate::io::error::Result;
use crate::spatial::TileGrid;
use image::{Rgba, RgbaImage};
use rand::{SeedableRng, rngs::StdRng};

/// Pixelation and rearrangement engine over a single owned grid
pub struct PixelEngine<S: BlockSampler> {
    grid: TileGrid,
    sampler: S,
    rng: StdRng,
}

impl PixelEngine<UniformRandomSampler> {
    /// Create an engine with the canonical random sampler
    ///
    /// The sampler's stream is derived from the same seed so one seed
    /// reproduces the whole run.
    pub fn from_seed(image: RgbaImage, seed: u64) -> Self {
        Self::new(image, UniformRandomSampler::new(seed ^ SAMPLER_SEED_XOR), seed)
    }
}

impl<S: BlockSampler> PixelEngine<S> {
    /// Create an engine with an explicit sampling strategy
    pub fn new(image: RgbaImage, sampler: S, seed: u64) -> Self {
        Self {
            grid: TileGrid::new(image),
            sampler,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Borrow the grid for inspection
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Consume the engine and return the raster for encoding or display
    pub fn into_image(self) -> RgbaImage {
        self.grid.into_image()
    }

    /// Read a block's representative color through the sampler
    pub fn block_color(&mut self, x: u32, y: u32) -> Rgba<u8> {
        self.sampler.sample(&self.grid, x, y)
    }

    /// Down-sample the raster into `target_columns` blocks of width
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when `target_columns` is zero or
    /// exceeds the image width; the grid is untouched in that case.
    pub fn pixelate(&mut self, target_columns: u32) -> Result<()> {
        pixelate::apply(&mut self.grid, target_columns, &mut self.sampler)
    }

    /// Permute the blocks with a bias predicate
    pub fn shuffle<B: SwapBias + ?Sized>(&mut self, bias: &mut B) {
        shuffle::apply(&mut self.grid, &mut self.sampler, &mut self.rng, bias);
    }

    /// Run one local-search pass, relocating up to
    /// `floor(block_count * frequency)` blocks
    ///
    /// Returns the number of relocations actually performed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when `frequency` lies outside
    /// `[0, 1]`; the grid is untouched in that case.
    pub fn step<M: ColorMetric + ?Sized>(&mut self, frequency: f64, metric: &M) -> Result<usize> {
        optimizer::step(
            &mut self.grid,
            &mut self.sampler,
            &mut self.rng,
            frequency,
            metric,
        )
    }

    /// Sort each row's blocks by a scalar color key, ascending
    pub fn sort_rows<K: Fn(Rgba<u8>) -> f64>(&mut self, key: K) {
        sort::sort_rows(&mut self.grid, &mut self.sampler, key);
    }

    /// Exchange the sampled colors of two blocks
    pub fn swap(&mut self, p1: [u32; 2], p2: [u32; 2]) {
        swap::swap(&mut self.grid, &mut self.sampler, p1, p2);
    }
}
