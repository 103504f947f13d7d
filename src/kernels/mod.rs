//! Shape kernels that fill a [`ParamSpace`] from raster evidence.
//!
//! Two families share the accumulator:
//! - [`VoteKernel`] (Hough): called once per evidence point, increments every
//!   cell whose shape passes through that point.
//! - [`IntegrationKernel`] (Radon): sweeps every cell and stores the sum of
//!   pixel intensities along the hypothesized shape.
//!
//! Kernels only ever address cells inside the space they describe; evidence
//! that would land outside is dropped (or clamped where a kernel says so).

mod circle_radon;
mod line_hough;
mod line_radon;
mod rectangle;

pub use circle_radon::{circle_integral, for_each_circle_offset, CircleRadonKernel};
pub use line_hough::{LineHoughKernel, OutOfRange, DEFAULT_ANGULAR_OVERSAMPLING};
pub use line_radon::LineRadonKernel;
pub use rectangle::RectangleKernel;

use crate::error::{Result, TransformError};
use crate::image::ImageU8;
use crate::points::EdgePoint;
use crate::space::{Dimension, ParamSpace};
use serde::{Deserialize, Serialize};

/// Evidence-driven kernel: one call per boundary point.
pub trait VoteKernel {
    /// Axes of the space this kernel votes into.
    fn dimensions(&self) -> Vec<Dimension>;

    /// Cast all votes implied by `point`.
    fn vote(&self, space: &mut ParamSpace, point: EdgePoint);
}

/// Sweep-driven kernel: computes every cell directly from the raster.
pub trait IntegrationKernel {
    /// Axes of the space this kernel integrates into.
    fn dimensions(&self) -> Vec<Dimension>;

    /// Overwrite every cell of `space` with its line/curve integral.
    fn integrate(&self, image: &ImageU8<'_>, space: &mut ParamSpace);
}

/// Feed `evidence` through `kernel`, returning the number of points voted.
pub fn vote_into<K, I>(kernel: &K, space: &mut ParamSpace, evidence: I) -> usize
where
    K: VoteKernel + ?Sized,
    I: IntoIterator<Item = EdgePoint>,
{
    let mut count = 0;
    for point in evidence {
        kernel.vote(space, point);
        count += 1;
    }
    count
}

/// Allocate the kernel's space and vote all of `evidence` into it.
pub fn accumulate_votes<K, I>(kernel: &K, evidence: I) -> Result<ParamSpace>
where
    K: VoteKernel + ?Sized,
    I: IntoIterator<Item = EdgePoint>,
{
    let mut space = ParamSpace::new(kernel.dimensions())?;
    vote_into(kernel, &mut space, evidence);
    Ok(space)
}

/// Allocate the kernel's space and integrate `image` into it.
pub fn integrate_image<K>(kernel: &K, image: &ImageU8<'_>) -> Result<ParamSpace>
where
    K: IntegrationKernel + ?Sized,
{
    let mut space = ParamSpace::new(kernel.dimensions())?;
    kernel.integrate(image, &mut space);
    Ok(space)
}

/// Inclusive integer size range (pixels) for width, height or radius axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: i64,
    pub max: i64,
}

impl SizeRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub(crate) fn dimension(&self, name: &str) -> Result<Dimension> {
        if self.min < 0 {
            return Err(TransformError::InvalidDimension {
                name: name.to_string(),
                reason: format!("sizes must be non-negative, got min {}", self.min),
            });
        }
        let dim = Dimension::integer(name, self.min, self.max);
        dim.validate()?;
        Ok(dim)
    }
}

/// Sum of samples saturated into one accumulator cell.
#[inline]
pub(crate) fn saturate(sum: u64) -> u32 {
    u32::try_from(sum).unwrap_or(u32::MAX)
}

/// Center axes spanning a `rows × cols` raster.
pub(crate) fn center_dimensions(rows: usize, cols: usize) -> [Dimension; 2] {
    [
        Dimension::integer("row", 0, rows as i64 - 1),
        Dimension::integer("col", 0, cols as i64 - 1),
    ]
}

/// Symmetric distance axis `[-D, D]` with unit bins, `D = ceil(hypot(rows, cols))`.
///
/// Fails when `2D + 1` bins cannot be counted in a `usize`.
pub(crate) fn distance_dimension(rows: f64, cols: f64) -> Result<Dimension> {
    let reach = rows.hypot(cols).ceil();
    let bins = (reach as usize)
        .checked_mul(2)
        .and_then(|n| n.checked_add(1))
        .filter(|_| reach.is_finite())
        .ok_or_else(|| TransformError::InvalidDimension {
            name: "distance".to_string(),
            reason: format!("reach {reach} needs more bins than can be addressed"),
        })?;
    Ok(Dimension::new("distance", -reach, reach, bins))
}
