use super::{allocate, export_plane, finish};
use crate::config::HoughLinesConfig;
use crate::diagnostics::RunReport;
use crate::error::Result;
use crate::kernels::{vote_into, LineHoughKernel, VoteKernel};
use crate::points::read_points;
use log::info;
use std::path::Path;
use std::time::Instant;

const TOOL: &str = "hough_lines";
const DEFAULT_OUTPUT: &str = "houghSpace";

/// Vote a point list into an angle × distance space and export it.
pub fn run_hough_lines(input: &Path, config: &HoughLinesConfig) -> Result<RunReport> {
    let run_start = Instant::now();
    let mut report = RunReport::new(TOOL, input);

    let start = Instant::now();
    let points = read_points(input)?;
    report.timing.lap("read_points", start);
    info!("read {} points from {}", points.len(), input.display());

    let kernel = match &config.distance {
        Some(axis) => LineHoughKernel::new(config.num_angles, axis.dimension()),
        None => LineHoughKernel::for_points(&points, config.num_angles)?,
    }
    .with_oversampling(config.oversampling)
    .with_out_of_range(config.out_of_range);
    let mut space = allocate(kernel.dimensions(), &config.output)?;

    let start = Instant::now();
    report.evidence_count = vote_into(&kernel, &mut space, points.iter().copied());
    report.timing.lap("vote", start);
    report.describe_space(&space);

    let start = Instant::now();
    let (rows, cols) = (space.shape()[0], space.shape()[1]);
    let path = export_plane(
        space.as_slice(),
        rows,
        cols,
        &config.output.base_or(DEFAULT_OUTPUT),
        "",
        config.normalization,
        config.output.format,
    )?;
    report.outputs.push(path);
    report.timing.lap("export", start);

    finish(report, run_start, &config.output)
}
