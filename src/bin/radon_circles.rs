use hough_radon::config::{load_config, tool_args, RadonCirclesConfig};
use hough_radon::error::TransformError;
use hough_radon::pipeline::run_radon_circles;
use std::env;

const USAGE: &str = "Usage: radon_circles <image.pgm> [config.json]";

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), TransformError> {
    let (input, config_path) = tool_args(env::args().skip(1), USAGE)?;
    let config: RadonCirclesConfig = load_config(config_path.as_deref())?;
    let report = run_radon_circles(&input, &config)?;

    for path in &report.outputs {
        println!("Saved {}", path.display());
    }
    println!(
        "Processed {} evidence items in {:.1} ms",
        report.evidence_count, report.timing.total_ms
    );
    Ok(())
}
