//! Serializable run reports and stage timings.

pub mod report;
pub mod timing;

pub use report::{PeakReport, RunReport};
pub use timing::{StageTiming, TimingBreakdown};
