use super::OutputConfig;
use crate::kernels::SizeRange;
use crate::normalize::Normalization;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct HoughRectanglesConfig {
    pub width: SizeRange,
    pub height: SizeRange,
    pub normalization: Normalization,
    pub output: OutputConfig,
}

impl Default for HoughRectanglesConfig {
    fn default() -> Self {
        Self {
            width: SizeRange::new(5, 100),
            height: SizeRange::new(5, 100),
            normalization: Normalization::MinMax,
            output: OutputConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RadonCirclesConfig {
    pub radius: SizeRange,
    pub normalization: Normalization,
    pub output: OutputConfig,
}

impl Default for RadonCirclesConfig {
    fn default() -> Self {
        Self {
            radius: SizeRange::new(3, 50),
            normalization: Normalization::MinMax,
            output: OutputConfig::default(),
        }
    }
}
