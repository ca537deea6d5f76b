//! Pixelation and tile rearrangement algorithms
//!
//! This module contains the algorithmic core:
//! - Block color sampling strategies
//! - Down-sampling into uniform-colored blocks
//! - Biased Fisher-Yates block shuffling
//! - Greedy local-search tile relocation
//! - Row-wise reordering by a color key
//! - The engine orchestrator tying grid, sampler, and RNG together

/// Engine orchestration and the public run surface
pub mod executor;
/// Greedy relocate-to-best-neighbor local search
pub mod optimizer;
/// Down-sampling a raster into uniform-colored blocks
pub mod pixelate;
/// Block color sampling strategies
pub mod sampler;
/// Biased Fisher-Yates block permutation
pub mod shuffle;
/// Row-wise block reordering by a scalar color key
pub mod sort;
/// The block swap primitive shared by all rearrangement passes
pub mod swap;

pub use executor::PixelEngine;
pub use sampler::BlockSampler;
