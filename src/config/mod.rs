//! JSON configuration for the command-line tools.
//!
//! Every field is optional; a missing file or a missing field falls back to
//! the built-in defaults.

mod lines;
mod shapes;

pub use lines::{HoughLinesConfig, RadonLinesConfig};
pub use shapes::{HoughRectanglesConfig, RadonCirclesConfig};

use crate::error::{Result, TransformError};
use crate::image::RasterFormat;
use crate::space::Dimension;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where and how a tool writes its rasters.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output path without extension; multi-plane tools append a suffix.
    /// `None` uses the tool's own default name.
    pub base: Option<PathBuf>,
    pub format: RasterFormat,
    /// Optional JSON run report.
    pub report_json: Option<PathBuf>,
    /// Refuse parameter spaces larger than this many MiB.
    pub memory_limit_mb: Option<usize>,
}

impl OutputConfig {
    pub fn base_or(&self, default: &str) -> PathBuf {
        self.base.clone().unwrap_or_else(|| PathBuf::from(default))
    }

    pub fn memory_limit_bytes(&self) -> Option<usize> {
        self.memory_limit_mb.map(|mb| mb.saturating_mul(1 << 20))
    }
}

/// Explicit distance axis for the line transforms.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct DistanceAxis {
    pub min: f64,
    pub max: f64,
    pub bins: usize,
}

impl DistanceAxis {
    pub fn dimension(&self) -> Dimension {
        Dimension::new("distance", self.min, self.max, self.bins)
    }
}

/// Load a tool config, or its defaults when no path is given.
pub fn load_config<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    let Some(path) = path else {
        return Ok(T::default());
    };
    let data = fs::read_to_string(path).map_err(|e| TransformError::io(path, e))?;
    serde_json::from_str(&data).map_err(|e| TransformError::Config {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Split `<input> [config.json]` tool arguments (program name excluded).
pub fn tool_args<I>(args: I, usage: &str) -> Result<(PathBuf, Option<PathBuf>)>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [input] => Ok((PathBuf::from(input), None)),
        [input, config] => Ok((PathBuf::from(input), Some(PathBuf::from(config)))),
        _ => Err(TransformError::Usage(usage.to_string())),
    }
}
