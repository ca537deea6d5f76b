//! Image decoding and PNG export

use crate::io::error::{EngineError, Result};
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// Decode an image file into a directly addressable RGBA raster
///
/// PNG, JPEG, and GIF inputs are supported through the codec's format
/// detection.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be read or decoded.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path).map_err(|e| EngineError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(decoded.to_rgba8())
}

/// Encode a raster as PNG, creating parent directories as needed
///
/// The output is always PNG regardless of the path's extension, matching
/// the tool's documented output format.
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created and
/// `ImageExport` if encoding or writing fails.
pub fn save_png(raster: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| EngineError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    raster
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| EngineError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
