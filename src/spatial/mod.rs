//! Spatial data structures for the tile grid
//!
//! This module contains the grid abstraction that owns the raster buffer
//! and translates between block coordinates, pixel rectangles, and flat
//! block indices.

/// Tile grid geometry, coordinate mapping, and block fills
pub mod grid;

pub use grid::TileGrid;
