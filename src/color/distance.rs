//! Perceptual color distance metrics
//!
//! The canonical metric converts 8-bit RGB to full-range BT.601
//! luma/chroma and scores dissimilarity as the Euclidean distance in that
//! space. Luma
//! and chroma are weighted separately, which clusters tiles more smoothly
//! than raw channel differences would.

use image::Rgba;

/// Dissimilarity metric between two block colors
///
/// Implementations must be symmetric and return nonnegative scores.
/// Plain `Fn(Rgba<u8>, Rgba<u8>) -> f64` closures satisfy this trait
/// through the blanket implementation.
pub trait ColorMetric {
    /// Score the dissimilarity of two colors
    fn distance(&self, a: Rgba<u8>, b: Rgba<u8>) -> f64;
}

impl<F> ColorMetric for F
where
    F: Fn(Rgba<u8>, Rgba<u8>) -> f64,
{
    fn distance(&self, a: Rgba<u8>, b: Rgba<u8>) -> f64 {
        self(a, b)
    }
}

/// Euclidean distance in BT.601 luma/chroma space
///
/// Alpha is ignored; the engine operates on the RGB channels only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LumaChromaDistance;

impl ColorMetric for LumaChromaDistance {
    fn distance(&self, a: Rgba<u8>, b: Rgba<u8>) -> f64 {
        let [ya, cba, cra] = luma_chroma(a);
        let [yb, cbb, crb] = luma_chroma(b);
        let dy = ya - yb;
        let dcb = cba - cbb;
        let dcr = cra - crb;
        dy.mul_add(dy, dcb.mul_add(dcb, dcr * dcr)).sqrt()
    }
}

/// Full-range BT.601 conversion from 8-bit RGB to `[luma, cb, cr]`
pub fn luma_chroma(color: Rgba<u8>) -> [f64; 3] {
    let [r, g, b, _] = color.0;
    let r = f64::from(r);
    let g = f64::from(g);
    let b = f64::from(b);

    let y = 0.114f64.mul_add(b, 0.299f64.mul_add(r, 0.587 * g));
    let cb = 0.5f64.mul_add(b, (-0.168_736f64).mul_add(r, -0.331_264 * g)) + 128.0;
    let cr = (-0.081_312f64).mul_add(b, 0.5f64.mul_add(r, -0.418_688 * g)) + 128.0;
    [y, cb, cr]
}

/// BT.601 luma of a color, the default row-sort key
pub fn luma(color: Rgba<u8>) -> f64 {
    let [y, _, _] = luma_chroma(color);
    y
}
