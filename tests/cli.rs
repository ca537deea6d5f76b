//! Validates the end-to-end decode, rearrange, encode pipeline

use image::{Rgba, RgbaImage};
use tilesort::EngineError;
use tilesort::io::cli::{Cli, FileProcessor};
use tilesort::io::image::{load_rgba, save_png};

fn make_cli(input: std::path::PathBuf, output: std::path::PathBuf) -> Cli {
    Cli {
        input,
        output,
        columns: 10,
        shuffle: true,
        sort_rows: false,
        iterations: 3,
        frequency: 0.05,
        seed: 42,
        quiet: true,
    }
}

#[test]
fn test_process_writes_cropped_png() -> tilesort::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("input.png");
    let output_path = dir.path().join("nested").join("result.png");

    let source = RgbaImage::from_fn(105, 80, |x, y| {
        Rgba([x as u8, y as u8, ((x * y) % 256) as u8, 255])
    });
    save_png(&source, &input_path)?;

    let processor = FileProcessor::new(make_cli(input_path, output_path.clone()));
    processor.process()?;

    let result = load_rgba(&output_path)?;
    assert_eq!(result.width(), 100);
    assert_eq!(result.height(), 80);
    Ok(())
}

#[test]
fn test_process_reports_missing_input() {
    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let cli = make_cli(dir.path().join("missing.png"), dir.path().join("out.png"));

    let result = FileProcessor::new(cli).process();
    assert!(matches!(result, Err(EngineError::ImageLoad { .. })));
}

#[test]
fn test_process_rejects_oversized_columns() -> tilesort::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("tiny.png");
    save_png(&RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])), &input_path)?;

    let mut cli = make_cli(input_path, dir.path().join("out.png"));
    cli.columns = 100;

    let result = FileProcessor::new(cli).process();
    assert!(matches!(
        result,
        Err(EngineError::InvalidConfiguration { .. })
    ));
    Ok(())
}
