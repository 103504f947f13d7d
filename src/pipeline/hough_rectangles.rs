use super::{allocate, axis_tag, export_plane, finish};
use crate::config::HoughRectanglesConfig;
use crate::diagnostics::RunReport;
use crate::error::Result;
use crate::image::io::read_pgm;
use crate::kernels::{vote_into, RectangleKernel, VoteKernel};
use crate::projection::pairwise_marginals;
use log::info;
use std::path::Path;
use std::time::Instant;

const TOOL: &str = "hough_rectangles";
const DEFAULT_OUTPUT: &str = "accumulators";

/// Vote every nonzero pixel into a width × height × row × col space and
/// export its six pairwise marginals (`_w_h`, `_w_r`, … `_r_c`).
pub fn run_hough_rectangles(input: &Path, config: &HoughRectanglesConfig) -> Result<RunReport> {
    let run_start = Instant::now();
    let mut report = RunReport::new(TOOL, input);

    let start = Instant::now();
    let image = read_pgm(input)?;
    report.timing.lap("read_pgm", start);
    info!("read {}x{} raster from {}", image.width(), image.height(), input.display());

    let kernel = RectangleKernel::new(config.width, config.height, image.height(), image.width())?;
    let mut space = allocate(kernel.dimensions(), &config.output)?;

    let start = Instant::now();
    report.evidence_count = vote_into(&kernel, &mut space, image.as_view().nonzero_points());
    report.timing.lap("vote", start);
    info!("voted {} boundary pixels", report.evidence_count);
    report.describe_space(&space);

    let start = Instant::now();
    let marginals = pairwise_marginals(&space);
    report.timing.lap("project", start);

    let start = Instant::now();
    let base = config.output.base_or(DEFAULT_OUTPUT);
    let dims = space.dims();
    for marginal in &marginals {
        let (a, b) = marginal.axes;
        let suffix = format!("_{}_{}", axis_tag(&dims[a]), axis_tag(&dims[b]));
        let path = export_plane(
            &marginal.values,
            marginal.rows,
            marginal.cols,
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
