#![doc = include_str!("../README.md")]

// Accumulator core
pub mod kernels;
pub mod normalize;
pub mod projection;
pub mod space;

// Evidence, rasters and errors
pub mod error;
pub mod image;
pub mod points;

// Tool plumbing
pub mod config;
pub mod diagnostics;
pub mod pipeline;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Result, TransformError};
pub use crate::kernels::{
    accumulate_votes, integrate_image, vote_into, CircleRadonKernel, IntegrationKernel,
    LineHoughKernel, LineRadonKernel, RectangleKernel, SizeRange, VoteKernel,
};
pub use crate::normalize::{normalize, Normalization};
pub use crate::projection::{pairwise_marginals, Marginal};
pub use crate::space::{Dimension, ParamSpace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use hough_radon::prelude::*;
///
/// let mut raster = GrayImageU8::zeros(32, 32);
/// for x in 0..32 {
///     raster.set(x, 10, 200);
/// }
/// let kernel = LineRadonKernel::for_raster(32, 32, 181).unwrap();
/// let space = integrate_image(&kernel, &raster.as_view()).unwrap();
/// let (peak, _) = space.argmax().unwrap();
/// assert_eq!(peak[0], 90); // horizontal line: normal at π/2
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::kernels::{
        accumulate_votes, integrate_image, CircleRadonKernel, IntegrationKernel, LineHoughKernel,
        LineRadonKernel, RectangleKernel, SizeRange, VoteKernel,
    };
    pub use crate::normalize::{normalize, Normalization};
    pub use crate::points::EdgePoint;
    pub use crate::projection::pairwise_marginals;
    pub use crate::space::{Dimension, ParamSpace};
}
