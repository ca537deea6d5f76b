//! Input/output operations and error handling
//!
//! This module contains the boundary of the engine:
//! - Command-line interface and the batch driver
//! - Runtime configuration defaults
//! - Error types shared across the crate
//! - Image decode/encode and progress reporting

/// Command-line interface and batch processing driver
pub mod cli;
/// Runtime configuration defaults and constants
pub mod configuration;
/// Error types and result alias for all operations
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// Iteration progress reporting
pub mod progress;
