//! Validates grid geometry, coordinate mapping, and pixelation cropping

use image::{Rgba, RgbaImage};
use tilesort::EngineError;
use tilesort::engine::PixelEngine;
use tilesort::engine::sampler::OriginSampler;
use tilesort::spatial::TileGrid;

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, ((x + y) % 256) as u8, 255])
    })
}

#[test]
fn test_new_grid_maps_one_block_per_pixel() {
    let grid = TileGrid::new(gradient(7, 5));
    assert_eq!(grid.cols(), 7);
    assert_eq!(grid.rows(), 5);
    assert_eq!(grid.block_size(), 1);
    assert_eq!(grid.block_count(), 35);
}

#[test]
fn test_pixelate_crops_to_whole_blocks() -> tilesort::Result<()> {
    let mut engine = PixelEngine::from_seed(gradient(105, 80), 42);
    engine.pixelate(10)?;

    let grid = engine.grid();
    assert_eq!(grid.block_size(), 10);
    assert_eq!(grid.cols(), 10);
    assert_eq!(grid.rows(), 8);
    assert_eq!(grid.width(), 100);
    assert_eq!(grid.height(), 80);

    // Every block is uniformly colored after pixelation
    for bn in 0..grid.block_count() {
        let [x, y] = grid.index_to_coord(bn);
        let rect = grid.block_rect(x, y);
        let reference = grid.pixel(rect.min[0], rect.min[1]);
        for py in rect.min[1]..rect.max[1] {
            for px in rect.min[0]..rect.max[0] {
                assert_eq!(grid.pixel(px, py), reference);
            }
        }
    }
    Ok(())
}

#[test]
fn test_coordinate_bijection() -> tilesort::Result<()> {
    let mut engine = PixelEngine::from_seed(gradient(105, 80), 42);
    engine.pixelate(10)?;

    let grid = engine.grid();
    for bn in 0..grid.block_count() {
        let [x, y] = grid.index_to_coord(bn);
        assert_eq!(x, (bn % 10) as u32);
        assert_eq!(y, (bn / 10) as u32);
        assert_eq!(grid.coord_to_index(x, y), bn);
        assert!(grid.in_bounds(i64::from(x), i64::from(y)));
    }

    assert!(!grid.in_bounds(-1, 0));
    assert!(!grid.in_bounds(0, -1));
    assert!(!grid.in_bounds(10, 0));
    assert!(!grid.in_bounds(0, 8));
    Ok(())
}

#[test]
fn test_block_rect_and_fill() -> tilesort::Result<()> {
    let mut engine = PixelEngine::new(gradient(40, 30), OriginSampler, 1);
    engine.pixelate(4)?;

    let rect = engine.grid().block_rect(2, 1);
    assert_eq!(rect.min, [20, 10]);
    assert_eq!(rect.max, [30, 20]);
    assert_eq!(rect.size(), 10);

    let mut grid = TileGrid::new(gradient(8, 8));
    let marker = Rgba([9, 9, 9, 9]);
    grid.fill_block(2, 1, marker);
    assert_eq!(grid.pixel(2, 1), marker);
    assert_ne!(grid.pixel(3, 1), marker);
    Ok(())
}

#[test]
fn test_pixelate_rejects_oversized_columns() {
    let mut engine = PixelEngine::from_seed(gradient(105, 80), 42);
    let result = engine.pixelate(200);
    assert!(matches!(
        result,
        Err(EngineError::InvalidConfiguration { .. })
    ));

    // Rejection happens before any mutation
    let grid = engine.grid();
    assert_eq!(grid.cols(), 105);
    assert_eq!(grid.rows(), 80);
    assert_eq!(grid.block_size(), 1);
    assert_eq!(grid.width(), 105);
    assert_eq!(grid.height(), 80);
}

#[test]
fn test_pixelate_rejects_zero_columns() {
    let mut engine = PixelEngine::from_seed(gradient(16, 16), 42);
    assert!(matches!(
        engine.pixelate(0),
        Err(EngineError::InvalidConfiguration { .. })
    ));
}
