//! Greedy relocate-to-best-neighbor local search
//!
//! Each pass performs a fixed budget of independent relocation attempts.
//! An attempt draws one random block, scores all nine candidate
//! destinations in its 3x3 neighborhood (the zero offset included), and
//! swaps the block with the first strict minimum when that differs from
//! its current position. There is no convergence detection and no early
//! stop; repeated passes tend to reduce local color discontinuity but
//! carry no global optimality guarantee.

use crate::color::ColorMetric;
use crate::engine::sampler::BlockSampler;
use crate::engine::swap::swap;
use crate::io::error::{Result, invalid_configuration};
use crate::spatial::TileGrid;
use rand::{Rng, rngs::StdRng};

/// Candidate destination offsets in tie-break enumeration order
///
/// Ties between minimum-scoring candidates keep the first offset in this
/// order, so the order itself is part of the reproducibility contract.
pub const NEIGHBOR_OFFSETS: [[i64; 2]; 9] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 0],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Run one optimizer pass of `floor(block_count * frequency)` attempts
///
/// Consumes exactly one engine RNG draw per attempt (the source index);
/// scoring reads colors through the sampler, which has its own stream.
/// Returns the number of relocations actually performed.
///
/// # Errors
///
/// Returns `InvalidConfiguration` when `frequency` lies outside `[0, 1]`;
/// the grid is untouched in that case.
pub fn step<S, M>(
    grid: &mut TileGrid,
    sampler: &mut S,
    rng: &mut StdRng,
    frequency: f64,
    metric: &M,
) -> Result<usize>
where
    S: BlockSampler + ?Sized,
    M: ColorMetric + ?Sized,
{
    if !(0.0..=1.0).contains(&frequency) {
        return Err(invalid_configuration(
            "frequency",
            &frequency,
            &"must lie in [0, 1]",
        ));
    }

    let attempts = (grid.block_count() as f64 * frequency).floor() as usize;
    let mut moves = 0;

    for _ in 0..attempts {
        let bn = rng.random_range(0..grid.block_count());
        let origin = grid.index_to_coord(bn);
        let destination = best_destination(grid, sampler, metric, origin);
        if destination != origin {
            swap(grid, sampler, origin, destination);
            moves += 1;
        }
    }

    Ok(moves)
}

/// Find the minimum-scoring candidate destination for one block
///
/// Enumerates the full 3x3 neighborhood of `origin` in
/// [`NEIGHBOR_OFFSETS`] order, skipping out-of-bounds candidates, and
/// keeps the first strict minimum. The zero offset participates with the
/// same formula, which degenerates to double-counting the block's current
/// neighborhood; a true improving neighbor must beat that baseline.
pub fn best_destination<S, M>(
    grid: &TileGrid,
    sampler: &mut S,
    metric: &M,
    origin: [u32; 2],
) -> [u32; 2]
where
    S: BlockSampler + ?Sized,
    M: ColorMetric + ?Sized,
{
    let mut min_score = f64::INFINITY;
    let mut best = origin;

    for delta in NEIGHBOR_OFFSETS {
        let cx = i64::from(origin[0]) + delta[0];
        let cy = i64::from(origin[1]) + delta[1];
        if !grid.in_bounds(cx, cy) {
            continue;
        }
        let candidate = [cx as u32, cy as u32];
        let score = relocation_score(grid, sampler, metric, origin, candidate);
        if score < min_score {
            min_score = score;
            best = candidate;
        }
    }

    best
}

/// Score moving the block at `origin` into `candidate`
///
/// Sums, over the 3x3 neighborhood pattern applied around both positions:
/// how well the moving block would fit the candidate's neighbors, and how
/// well the displaced block would fit the vacated origin's neighborhood.
/// Each term is gated by its own bounds check.
pub fn relocation_score<S, M>(
    grid: &TileGrid,
    sampler: &mut S,
    metric: &M,
    origin: [u32; 2],
    candidate: [u32; 2],
) -> f64
where
    S: BlockSampler + ?Sized,
    M: ColorMetric + ?Sized,
{
    let moving = sampler.sample(grid, origin[0], origin[1]);
    let displaced = sampler.sample(grid, candidate[0], candidate[1]);
    let mut score = 0.0;

    for delta in NEIGHBOR_OFFSETS {
        let nx = i64::from(candidate[0]) + delta[0];
        let ny = i64::from(candidate[1]) + delta[1];
        if grid.in_bounds(nx, ny) {
            let neighbor = sampler.sample(grid, nx as u32, ny as u32);
            score += metric.distance(moving, neighbor);
        }

        let ox = i64::from(origin[0]) + delta[0];
        let oy = i64::from(origin[1]) + delta[1];
        if grid.in_bounds(ox, oy) {
            let vacated_neighbor = sampler.sample(grid, ox as u32, oy as u32);
            score += metric.distance(displaced, vacated_neighbor);
        }
    }

    score
}
