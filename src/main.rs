//! CLI entry point for the tile pixelation and rearrangement tool

use clap::Parser;
use tilesort::io::cli::{Cli, FileProcessor};

fn main() -> tilesort::Result<()> {
    let cli = Cli::parse();
    let processor = FileProcessor::new(cli);
    processor.process()
}
