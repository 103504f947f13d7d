use super::{allocate, export_plane, finish};
use crate::config::RadonLinesConfig;
use crate::diagnostics::RunReport;
use crate::error::Result;
use crate::image::io::read_pgm;
use crate::image::ImageView;
use crate::kernels::{IntegrationKernel, LineRadonKernel};
use log::info;
use std::path::Path;
use std::time::Instant;

const TOOL: &str = "radon_lines";
const DEFAULT_OUTPUT: &str = "radonSpace";

/// Integrate a raster along every line hypothesis and export the sinogram.
pub fn run_radon_lines(input: &Path, config: &RadonLinesConfig) -> Result<RunReport> {
    let run_start = Instant::now();
    let mut report = RunReport::new(TOOL, input);

    let start = Instant::now();
    let image = read_pgm(input)?;
    report.evidence_count = image.pixel_count();
    report.timing.lap("read_pgm", start);
    info!("read {}x{} raster from {}", image.width(), image.height(), input.display());

    let kernel = match &config.distance {
        Some(axis) => LineRadonKernel::new(config.num_angles, axis.dimension()),
        None => LineRadonKernel::for_raster(image.height(), image.width(), config.num_angles)?,
    };
    let mut space = allocate(kernel.dimensions(), &config.output)?;

    let start = Instant::now();
    kernel.integrate(&image.as_view(), &mut space);
    report.timing.lap("integrate", start);
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
