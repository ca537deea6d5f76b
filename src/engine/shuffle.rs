//! Biased Fisher-Yates block permutation
//!
//! Walks the flat block indices from `n - 1` down to `1`, drawing one
//! partner index in `[0, i]` per step and swapping only when the bias
//! predicate agrees. An always-true predicate recovers an unbiased
//! uniform permutation; an arbitrary predicate produces a systematically
//! biased partial shuffle.

use crate::engine::sampler::BlockSampler;
use crate::engine::swap::swap;
use crate::spatial::TileGrid;
use rand::{Rng, rngs::StdRng};

/// Predicate gating each candidate swap of the shuffle
///
/// Plain `FnMut(&TileGrid, [u32; 2], [u32; 2]) -> bool` closures satisfy
/// this trait through the blanket implementation.
pub trait SwapBias {
    /// Whether the candidate swap between `p1` and `p2` should happen
    fn biased(&mut self, grid: &TileGrid, p1: [u32; 2], p2: [u32; 2]) -> bool;
}

impl<F> SwapBias for F
where
    F: FnMut(&TileGrid, [u32; 2], [u32; 2]) -> bool,
{
    fn biased(&mut self, grid: &TileGrid, p1: [u32; 2], p2: [u32; 2]) -> bool {
        self(grid, p1, p2)
    }
}

/// Accepts every candidate swap, yielding a uniform permutation
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbiased;

impl SwapBias for Unbiased {
    fn biased(&mut self, _grid: &TileGrid, _p1: [u32; 2], _p2: [u32; 2]) -> bool {
        true
    }
}

/// Swaps only when a channel of the candidate block is below a threshold
///
/// Reads the candidate block's origin pixel, so the bias is color-stable
/// once blocks are uniform.
#[derive(Debug, Clone, Copy)]
pub struct ChannelThreshold {
    /// RGBA channel index to inspect (0 = red, 1 = green, 2 = blue)
    pub channel: usize,
    /// Swap happens when the channel value is strictly below this
    pub threshold: u8,
}

impl SwapBias for ChannelThreshold {
    fn biased(&mut self, grid: &TileGrid, _p1: [u32; 2], p2: [u32; 2]) -> bool {
        let rect = grid.block_rect(p2[0], p2[1]);
        let color = grid.pixel(rect.min[0], rect.min[1]);
        color.0.get(self.channel).copied().unwrap_or(u8::MAX) < self.threshold
    }
}

/// Permute the grid's blocks with a bias predicate
///
/// Consumes exactly one RNG draw per step, so the candidate sequence is
/// fully determined by the seed.
pub fn apply<S, B>(grid: &mut TileGrid, sampler: &mut S, rng: &mut StdRng, bias: &mut B)
where
    S: BlockSampler + ?Sized,
    B: SwapBias + ?Sized,
{
    for i in (1..grid.block_count()).rev() {
        let p1 = grid.index_to_coord(i);
        let partner = rng.random_range(0..=i);
        let p2 = grid.index_to_coord(partner);
        if bias.biased(grid, p1, p2) {
            swap(grid, sampler, p1, p2);
        }
    }
}
