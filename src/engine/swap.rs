//! Block swap primitive
//!
//! The sole mutator used by the shuffle, the optimizer, and the row sort.
//! Colors are read through the sampler, so a swap is only color-stable
//! once both blocks are uniform (i.e. after pixelation).

use crate::engine::sampler::BlockSampler;
use crate::spatial::TileGrid;

/// Exchange the sampled colors of two blocks
pub fn swap<S: BlockSampler + ?Sized>(
    grid: &mut TileGrid,
    sampler: &mut S,
    p1: [u32; 2],
    p2: [u32; 2],
) {
    let c1 = sampler.sample(grid, p1[0], p1[1]);
    let c2 = sampler.sample(grid, p2[0], p2[1]);
    grid.fill_block(p2[0], p2[1], c1);
    grid.fill_block(p1[0], p1[1], c2);
}
