use super::{distance_dimension, VoteKernel};
use crate::error::Result;
use crate::points::{extent, EdgePoint};
use crate::space::{Dimension, ParamSpace};
use serde::{Deserialize, Serialize};

/// Angular supersampling factor of the reference line voter.
pub const DEFAULT_ANGULAR_OVERSAMPLING: usize = 100;

/// What to do with a vote whose distance falls outside the distance axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRange {
    /// Discard the vote.
    #[default]
    Drop,
    /// Count it in the nearest edge bin.
    Clamp,
}

/// One oversampled step of the angle sweep.
#[derive(Clone, Copy, Debug)]
struct SweepStep {
    cos: f64,
    sin: f64,
    angle_index: usize,
}

/// Angle–distance line voter with an oversampled angle sweep.
///
/// Every point votes along its sinusoid `d = c·cos θ + r·sin θ`. The sweep runs
/// at `num_angles · oversampling` steps over `[0, π]` and each step is folded
/// into the nearest of the `num_angles` output bins, so the curve leaves no
/// gaps between coarse angle columns.
#[derive(Clone, Debug)]
pub struct LineHoughKernel {
    angle: Dimension,
    distance: Dimension,
    oversampling: usize,
    out_of_range: OutOfRange,
    sweep: Vec<SweepStep>,
}

impl LineHoughKernel {
    pub fn new(num_angles: usize, distance: Dimension) -> Self {
        let mut kernel = Self {
            angle: Dimension::angle(num_angles),
            distance,
            oversampling: DEFAULT_ANGULAR_OVERSAMPLING,
            out_of_range: OutOfRange::default(),
            sweep: Vec::new(),
        };
        kernel.rebuild_sweep();
        kernel
    }

    /// Kernel whose distance axis covers the extent of `points`.
    pub fn for_points(points: &[EdgePoint], num_angles: usize) -> Result<Self> {
        let (rows, cols) = extent(points);
        Ok(Self::new(num_angles, distance_dimension(rows as f64, cols as f64)?))
    }

    pub fn with_oversampling(mut self, oversampling: usize) -> Self {
        self.oversampling = oversampling.max(1);
        self.rebuild_sweep();
        self
    }

    pub fn with_out_of_range(mut self, policy: OutOfRange) -> Self {
        self.out_of_range = policy;
        self
    }

    pub fn oversampling(&self) -> usize {
        self.oversampling
    }

    pub fn angle(&self) -> &Dimension {
        &self.angle
    }

    pub fn distance(&self) -> &Dimension {
        &self.distance
    }

    fn rebuild_sweep(&mut self) {
        let num_angles = self.angle.resolution;
        let steps = num_angles * self.oversampling;
        let last = steps.saturating_sub(1).max(1) as f64;
        self.sweep = (0..steps)
            .map(|a| {
                let frac = a as f64 / last;
                let theta = frac * std::f64::consts::PI;
                let angle_index =
                    (frac * num_angles.saturating_sub(1) as f64 + 0.5).floor() as usize;
                SweepStep {
                    cos: theta.cos(),
                    sin: theta.sin(),
                    angle_index,
                }
            })
            .collect();
    }

    fn distance_index(&self, distance: f64) -> Option<usize> {
        match self.out_of_range {
            OutOfRange::Drop => self.distance.index_of(distance),
            OutOfRange::Clamp => Some(self.distance.clamped_index_of(distance)),
        }
    }
}

impl VoteKernel for LineHoughKernel {
    fn dimensions(&self) -> Vec<Dimension> {
        vec![self.angle.clone(), self.distance.clone()]
    }

    fn vote(&self, space: &mut ParamSpace, point: EdgePoint) {
        let (r, c) = (point.row as f64, point.col as f64);
        for step in &self.sweep {
            let distance = c * step.cos + r * step.sin;
            if let Some(dist_index) = self.distance_index(distance) {
                space.increment(&[step.angle_index, dist_index]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use crate::kernels::accumulate_votes;
    use crate::points::parse_points;

    #[test]
    fn reference_extent_gives_reference_axis() {
        let pts = [EdgePoint::new(100, 100)];
        let kernel = LineHoughKernel::for_points(&pts, 180).unwrap();
        let d = kernel.distance();
        assert_eq!((d.min, d.max, d.resolution), (-142.0, 142.0, 285));
        assert_eq!(kernel.oversampling(), 100);
    }

    #[test]
    fn each_point_casts_one_vote_per_sweep_step() {
        let pts = [EdgePoint::new(4, 7), EdgePoint::new(0, 0)];
        let kernel = LineHoughKernel::for_points(&pts, 30)
            .unwrap()
            .with_oversampling(7);
        let space = accumulate_votes(&kernel, pts.iter().copied()).unwrap();
        let total: u64 = space.as_slice().iter().map(|&v| v as u64).sum();
        assert_eq!(total, 2 * 30 * 7);
    }

    #[test]
    fn extreme_coordinates_are_rejected_not_wrapped() {
        let pts = parse_points("9000000000000000000 9000000000000000000");
        assert_eq!(pts.len(), 1);
        let err = LineHoughKernel::for_points(&pts, 4).unwrap_err();
        match err {
            TransformError::InvalidDimension { name, .. } => assert_eq!(name, "distance"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn first_and_last_steps_hit_end_bins() {
        let kernel = LineHoughKernel::new(10, Dimension::new("distance", -5.0, 5.0, 11));
        assert_eq!(kernel.sweep.first().unwrap().angle_index, 0);
        assert_eq!(kernel.sweep.last().unwrap().angle_index, 9);
    }

    #[test]
    fn out_of_range_votes_follow_policy() {
        let narrow = Dimension::new("distance", -1.0, 1.0, 3);
        let pt = EdgePoint::new(0, 50);

        let dropped = LineHoughKernel::new(4, narrow.clone()).with_oversampling(2);
        let space = accumulate_votes(&dropped, [pt]).unwrap();
        let kept: u32 = space.as_slice().iter().sum();
        assert!(kept < 8, "far votes must be discarded, kept {kept}");

        let clamped = LineHoughKernel::new(4, narrow)
            .with_oversampling(2)
            .with_out_of_range(OutOfRange::Clamp);
        let space = accumulate_votes(&clamped, [pt]).unwrap();
        assert_eq!(space.as_slice().iter().sum::<u32>(), 8);
        // θ = 0 gives d = 50, pinned to the last distance bin
        assert!(space.get(&[0, 2]) >= 1);
    }
}
