//! Command-line interface for pixelating and rearranging a single image

use crate::color::{LumaChromaDistance, distance::luma};
use crate::engine::PixelEngine;
use crate::engine::shuffle::Unbiased;
use crate::io::configuration::{
    DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_STEP_FREQUENCY, DEFAULT_TARGET_COLUMNS,
};
use crate::io::error::Result;
use crate::io::image::{load_rgba, save_png};
use crate::io::progress::ProgressReporter;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilesort")]
#[command(
    author,
    version,
    about = "Pixelate an image into tiles and rearrange them by color similarity"
)]
/// Command-line arguments for the tile rearrangement tool
pub struct Cli {
    /// Input image (PNG, JPEG, or GIF)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (always encoded as PNG)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Grid width in blocks
    #[arg(short, long, default_value_t = DEFAULT_TARGET_COLUMNS)]
    pub columns: u32,

    /// Shuffle the tiles after pixelation
    #[arg(short, long)]
    pub shuffle: bool,

    /// Sort each row of tiles by luma after clustering
    #[arg(long)]
    pub sort_rows: bool,

    /// Number of clustering passes to run
    #[arg(short, long, default_value_t = 0)]
    pub iterations: usize,

    /// Fraction of tiles given a relocation attempt per pass
    #[arg(short, long, default_value_t = DEFAULT_STEP_FREQUENCY)]
    pub frequency: f64,

    /// Random seed for reproducible runs
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Runs the decode, rearrange, encode pipeline for one image
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Process the input image according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be decoded, a parameter fails
    /// validation, or the output cannot be written.
    pub fn process(&self) -> Result<()> {
        let raster = load_rgba(&self.cli.input)?;
        let mut engine = PixelEngine::from_seed(raster, self.cli.seed);

        engine.pixelate(self.cli.columns)?;

        if self.cli.shuffle {
            engine.shuffle(&mut Unbiased);
        }

        let progress = ProgressReporter::new(self.cli.iterations, self.cli.quiet);
        for _ in 0..self.cli.iterations {
            engine.step(self.cli.frequency, &LumaChromaDistance)?;
            progress.tick();
        }
        progress.finish();

        if self.cli.sort_rows {
            engine.sort_rows(luma);
        }

        save_png(&engine.into_image(), &self.cli.output)
    }
}
