use super::{allocate, export_plane, finish};
use crate::config::RadonCirclesConfig;
use crate::diagnostics::RunReport;
use crate::error::Result;
use crate::image::io::read_pgm;
use crate::image::ImageView;
use crate::kernels::{CircleRadonKernel, IntegrationKernel};
use log::info;
use std::path::Path;
use std::time::Instant;

const TOOL: &str = "radon_circles";
const DEFAULT_OUTPUT: &str = "accumulators";

/// Integrate a raster along every circle hypothesis and export one
/// `(row, col)` plane per radius as `<base>_<radius>`.
pub fn run_radon_circles(input: &Path, config: &RadonCirclesConfig) -> Result<RunReport> {
    let run_start = Instant::now();
    let mut report = RunReport::new(TOOL, input);

    let start = Instant::now();
    let image = read_pgm(input)?;
    report.evidence_count = image.pixel_count();
    report.timing.lap("read_pgm", start);
    info!("read {}x{} raster from {}", image.width(), image.height(), input.display());

    let kernel = CircleRadonKernel::new(config.radius, image.height(), image.width())?;
    let mut space = allocate(kernel.dimensions(), &config.output)?;

    let start = Instant::now();
    kernel.integrate(&image.as_view(), &mut space);
    report.timing.lap("integrate", start);
    report.describe_space(&space);

    let start = Instant::now();
    let base = config.output.base_or(DEFAULT_OUTPUT);
    let radius = kernel.radius();
    let (rows, cols) = (space.shape()[1], space.shape()[2]);
    for ri in 0..radius.resolution {
        let suffix = format!("_{}", radius.value_at(ri) as i64);
        let path = export_plane(
            space.plane(&[ri]),
            rows,
            cols,
            &base,
            &suffix,
            config.normalization,
            config.output.format,
        )?;
        report.outputs.push(path);
    }
    report.timing.lap("export", start);

    finish(report, run_start, &config.output)
}
