use hough_radon::config::{load_config, tool_args, HoughLinesConfig};
use hough_radon::error::TransformError;
use hough_radon::pipeline::run_hough_lines;
use std::env;

const USAGE: &str = "Usage: hough_lines <points.txt> [config.json]";

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), TransformError> {
    let (input, config_path) = tool_args(env::args().skip(1), USAGE)?;
    let config: HoughLinesConfig = load_config(config_path.as_deref())?;
    let report = run_hough_lines(&input, &config)?;

    for path in &report.outputs {
        println!("Saved {}", path.display());
    }
    println!(
        "Processed {} evidence items in {:.1} ms",
        report.evidence_count, report.timing.total_ms
    );
    Ok(())
}
