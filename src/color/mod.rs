//! Color conversion and distance metrics

/// Perceptual color dissimilarity in luma/chroma space
pub mod distance;

pub use distance::{ColorMetric, LumaChromaDistance};
