use super::{DistanceAxis, OutputConfig};
use crate::kernels::{OutOfRange, DEFAULT_ANGULAR_OVERSAMPLING};
use crate::normalize::Normalization;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct HoughLinesConfig {
    /// Angle bins over `[0, π]`.
    pub num_angles: usize,
    /// Sweep steps per angle bin.
    pub oversampling: usize,
    /// Distance axis; derived from the point extent when absent.
    pub distance: Option<DistanceAxis>,
    pub out_of_range: OutOfRange,
    pub normalization: Normalization,
    pub output: OutputConfig,
}

impl Default for HoughLinesConfig {
    fn default() -> Self {
        Self {
            num_angles: 180,
            oversampling: DEFAULT_ANGULAR_OVERSAMPLING,
            distance: None,
            out_of_range: OutOfRange::Drop,
            normalization: Normalization::Peak,
            output: OutputConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RadonLinesConfig {
    pub num_angles: usize,
    /// Distance axis; derived from the raster diagonal when absent.
    pub distance: Option<DistanceAxis>,
    pub normalization: Normalization,
    pub output: OutputConfig,
}

impl Default for RadonLinesConfig {
    fn default() -> Self {
        Self {
            num_angles: 180,
            distance: None,
            normalization: Normalization::Peak,
            output: OutputConfig::default(),
        }
    }
}
