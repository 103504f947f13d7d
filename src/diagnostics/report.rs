use super::TimingBreakdown;
use crate::space::{CellValue, Dimension, ParamSpace};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global maximum of an accumulator, decoded to parameter values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakReport {
    pub indices: Vec<usize>,
    pub parameters: Vec<f64>,
    pub value: CellValue,
}

impl PeakReport {
    pub fn from_space(space: &ParamSpace) -> Option<Self> {
        let (idx, value) = space.argmax()?;
        Some(Self {
            indices: idx.to_vec(),
            parameters: space.decode(&idx),
            value,
        })
    }
}

/// Summary of one tool run, written when `report_json` is configured.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub tool: String,
    pub input: PathBuf,
    pub evidence_count: usize,
    pub dimensions: Vec<Dimension>,
    pub peak: Option<PeakReport>,
    pub outputs: Vec<PathBuf>,
    pub timing: TimingBreakdown,
}

impl RunReport {
    pub fn new(tool: &str, input: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.to_string(),
            input: input.into(),
            evidence_count: 0,
            dimensions: Vec::new(),
            peak: None,
            outputs: Vec::new(),
            timing: TimingBreakdown::default(),
        }
    }

    /// Record the shape and peak of the filled space.
    pub fn describe_space(&mut self, space: &ParamSpace) {
        self.dimensions = space.dims().to_vec();
        self.peak = PeakReport::from_space(space);
    }
}
