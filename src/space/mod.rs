//! Discretized parameter spaces.
//!
//! A [`ParamSpace`] is an ordered list of [`Dimension`]s plus one flat,
//! row-major buffer of integer cells. Kernels address cells by multi-index;
//! projection and normalization consume the buffer through [`ParamSpace::cells`]
//! or the raw slice.

mod dimension;
mod param_space;

pub use dimension::Dimension;
pub use param_space::{CellIndex, CellValue, Cells, ParamSpace, MAX_DIMS};
