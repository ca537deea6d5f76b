//! Greedy color-driven tile rearrangement over pixelated images
//!
//! The engine down-samples a raster into a grid of uniform-colored tiles,
//! optionally shuffles them, and then runs a stochastic local search that
//! relocates tiles toward visually similar neighborhoods.

#![forbid(unsafe_code)]

/// Color conversion and distance metrics
pub mod color;
/// Pixelation, shuffling, and local-search tile rearrangement
pub mod engine;
/// Input/output operations, CLI glue, and error handling
pub mod io;
/// Tile grid geometry and raster ownership
pub mod spatial;

pub use io::error::{EngineError, Result};
