//! Tile grid geometry and raster ownership
//!
//! The grid is the sole mutable entity of the engine. It owns the pixel
//! buffer and is the single authority for mapping block coordinates to
//! pixel rectangles and flat indices. All mutation flows through
//! `fill_block`; no component keeps its own copy of the raster.

use image::{Rgba, RgbaImage, imageops};

/// Half-open pixel rectangle covering one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRect {
    /// Minimum pixel coordinates (inclusive)
    pub min: [u32; 2],
    /// Maximum pixel coordinates (exclusive)
    pub max: [u32; 2],
}

impl BlockRect {
    /// Edge length of the rectangle in pixels
    pub const fn size(&self) -> u32 {
        self.max[0] - self.min[0]
    }
}

/// Grid of uniform square blocks over an owned raster
///
/// Freshly constructed grids map one block per pixel; `pixelate` installs
/// coarser geometry and crops the raster so that `cols * block_size` and
/// `rows * block_size` exactly match the image dimensions afterwards.
/// Single-writer by construction: the grid is owned by the engine for the
/// duration of a run and no locking is provided or needed.
#[derive(Debug, Clone)]
pub struct TileGrid {
    image: RgbaImage,
    cols: u32,
    rows: u32,
    block_size: u32,
}

impl TileGrid {
    /// Wrap a decoded raster with the initial one-block-per-pixel mapping
    pub fn new(image: RgbaImage) -> Self {
        let cols = image.width();
        let rows = image.height();
        Self {
            image,
            cols,
            rows,
            block_size: 1,
        }
    }

    /// Number of block columns
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of block rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Pixel edge length of one block
    pub const fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Total number of blocks in the grid
    pub const fn block_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Pixel rectangle of the block at `(x, y)`
    ///
    /// Callers must have validated `x < cols` and `y < rows`; the returned
    /// rectangle is not bounds-checked against the raster.
    pub const fn block_rect(&self, x: u32, y: u32) -> BlockRect {
        let bs = self.block_size;
        BlockRect {
            min: [x * bs, y * bs],
            max: [(x + 1) * bs, (y + 1) * bs],
        }
    }

    /// Overwrite every pixel of block `(x, y)` with `color`
    pub fn fill_block(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        let rect = self.block_rect(x, y);
        for py in rect.min[1]..rect.max[1] {
            for px in rect.min[0]..rect.max[0] {
                self.image.put_pixel(px, py, color);
            }
        }
    }

    /// Map a flat block index to `[x, y]` coordinates, row-major
    pub const fn index_to_coord(&self, bn: usize) -> [u32; 2] {
        let cols = self.cols as usize;
        [(bn % cols) as u32, (bn / cols) as u32]
    }

    /// Map block coordinates to the flat row-major index
    ///
    /// Inverse of `index_to_coord` for all valid indices; the shuffle and
    /// the optimizer rely on this bijection to convert flat random draws
    /// into 2-D positions.
    pub const fn coord_to_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.cols as usize + x as usize
    }

    /// Whether signed block coordinates fall inside the grid
    pub const fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.cols as i64 && y >= 0 && y < self.rows as i64
    }

    /// Read a single pixel, transparent black when out of range
    pub fn pixel(&self, px: u32, py: u32) -> Rgba<u8> {
        self.image
            .get_pixel_checked(px, py)
            .copied()
            .unwrap_or(Rgba([0, 0, 0, 0]))
    }

    /// Raster width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Raster height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying raster
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the grid and return the raster for encoding or display
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Install new block geometry; only `pixelate` recomputes this
    pub(crate) const fn set_block_geometry(&mut self, cols: u32, rows: u32, block_size: u32) {
        self.cols = cols;
        self.rows = rows;
        self.block_size = block_size;
    }

    /// Crop the raster to the whole-block-aligned region
    ///
    /// Discards the fractional remainder strips on the right and bottom
    /// edges so that blocks exactly tile the raster.
    pub(crate) fn crop_to_blocks(&mut self) {
        let width = self.cols * self.block_size;
        let height = self.rows * self.block_size;
        if width != self.image.width() || height != self.image.height() {
            self.image = imageops::crop_imm(&self.image, 0, 0, width, height).to_image();
        }
    }
}
