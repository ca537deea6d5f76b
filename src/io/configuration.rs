//! Runtime configuration defaults and constants

// Default values for configurable parameters
/// Fixed seed for reproducible runs
pub const DEFAULT_SEED: u64 = 42;

/// Default grid width in blocks
pub const DEFAULT_TARGET_COLUMNS: u32 = 10;

/// Default fraction of the block count relocated per optimizer pass
pub const DEFAULT_STEP_FREQUENCY: f64 = 0.05;

/// Default output filename
pub const DEFAULT_OUTPUT: &str = "out.png";

// The sampler draws from its own stream so that color reads during
// scoring never perturb the engine's draw sequence
/// XOR mask deriving the sampler seed from the engine seed
pub const SAMPLER_SEED_XOR: u64 = 0x9e37_79b9_7f4a_7c15;

// Progress bar display settings
/// Width of the iteration progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
