//! Row-wise block reordering by a scalar color key
//!
//! Reorders each grid row independently, ascending by the key of each
//! block's sampled color. Sorting is stable, so blocks with equal keys
//! keep their relative order.

use crate::engine::sampler::BlockSampler;
use crate::spatial::TileGrid;
use image::Rgba;
use std::cmp::Ordering;

/// Sort each row's blocks by `key`, ascending
pub fn sort_rows<S, K>(grid: &mut TileGrid, sampler: &mut S, key: K)
where
    S: BlockSampler + ?Sized,
    K: Fn(Rgba<u8>) -> f64,
{
    for y in 0..grid.rows() {
        let mut colors: Vec<Rgba<u8>> = (0..grid.cols())
            .map(|x| sampler.sample(grid, x, y))
            .collect();

        colors.sort_by(|a, b| key(*a).partial_cmp(&key(*b)).unwrap_or(Ordering::Equal));

        for (x, color) in colors.into_iter().enumerate() {
            grid.fill_block(x as u32, y, color);
        }
    }
}
