//! End-to-end tool runs: evidence → kernel → space → planes → rasters.
//!
//! Each `run_*` function reads its input, fills one parameter space, exports
//! every plane with the shared naming convention and returns a [`RunReport`].
//! Planes already written stay on disk if a later one fails.

mod hough_lines;
mod hough_rectangles;
mod radon_circles;
mod radon_lines;

pub use hough_lines::run_hough_lines;
pub use hough_rectangles::run_hough_rectangles;
pub use radon_circles::run_radon_circles;
pub use radon_lines::run_radon_lines;

use crate::config::OutputConfig;
use crate::diagnostics::RunReport;
use crate::error::Result;
use crate::image::io::{save_raster, suffixed_path, write_json_file};
use crate::image::RasterFormat;
use crate::normalize::{normalize, Normalization};
use crate::space::{Dimension, ParamSpace};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Allocate a zeroed space, honouring the configured memory budget.
fn allocate(dims: Vec<Dimension>, output: &OutputConfig) -> Result<ParamSpace> {
    let shape: Vec<usize> = dims.iter().map(|d| d.resolution).collect();
    debug!(
        "allocating parameter space {:?} ({} bytes)",
        shape,
        ParamSpace::required_bytes(&dims).unwrap_or(usize::MAX)
    );
    ParamSpace::with_budget(dims, output.memory_limit_bytes())
}

/// Normalize one plane and write it to `<base><suffix>.<ext>`.
fn export_plane<T: Copy + Into<u64>>(
    values: &[T],
    rows: usize,
    cols: usize,
    base: &Path,
    suffix: &str,
    normalization: Normalization,
    format: RasterFormat,
) -> Result<PathBuf> {
    let raster = normalize(values, rows, cols, normalization);
    let path = suffixed_path(base, suffix, format);
    save_raster(&raster, &path, format)?;
    info!("wrote {}x{} plane to {}", cols, rows, path.display());
    Ok(path)
}

/// One-letter axis tag used in projection file names (`width` → `w`).
fn axis_tag(dim: &Dimension) -> char {
    dim.name.chars().next().unwrap_or('x')
}

fn finish(mut report: RunReport, run_start: Instant, output: &OutputConfig) -> Result<RunReport> {
    report.timing.finish(run_start);
    if let Some(path) = &output.report_json {
        write_json_file(path, &report)?;
        info!("wrote run report to {}", path.display());
    }
    Ok(report)
}
