//! Down-sampling a raster into a grid of uniform-colored blocks

use crate::engine::sampler::BlockSampler;
use crate::io::error::{Result, invalid_configuration};
use crate::spatial::TileGrid;

/// Pixelate the grid to `target_columns` blocks of width
///
/// Computes `block_size = width / target_columns` and
/// `rows = height / block_size`, fills every block with the sampler's
/// representative color, then crops the fractional remainder strips so
/// that blocks exactly tile the raster. Validation happens before any
/// mutation: a rejected call leaves the grid untouched.
///
/// # Errors
///
/// Returns `InvalidConfiguration` when `target_columns` is zero or
/// exceeds the image width in pixels.
pub fn apply<S: BlockSampler + ?Sized>(
    grid: &mut TileGrid,
    target_columns: u32,
    sampler: &mut S,
) -> Result<()> {
    if target_columns == 0 {
        return Err(invalid_configuration(
            "target_columns",
            &target_columns,
            &"must be greater than zero",
        ));
    }

    let block_size = grid.width() / target_columns;
    if block_size == 0 {
        return Err(invalid_configuration(
            "target_columns",
            &target_columns,
            &format!(
                "exceeds the image width of {} pixels",
                grid.width()
            ),
        ));
    }

    let rows = grid.height() / block_size;
    grid.set_block_geometry(target_columns, rows, block_size);

    // Block order is irrelevant: blocks are disjoint
    for x in 0..grid.cols() {
        for y in 0..grid.rows() {
            let color = sampler.sample(grid, x, y);
            grid.fill_block(x, y, color);
        }
    }

    grid.crop_to_blocks();
    Ok(())
}
