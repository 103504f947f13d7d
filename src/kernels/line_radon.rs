use super::{distance_dimension, saturate, IntegrationKernel};
use crate::error::Result;
use crate::image::ImageU8;
use crate::space::{Dimension, ParamSpace};

/// Below this `|sin θ|` the hypothesized line is treated as vertical.
const VERTICAL_SIN_EPS: f64 = 1e-9;

/// Angle–distance intensity integrator (discrete Radon transform).
///
/// Cell `(a, d)` holds the sum of the pixels on the line
/// `c·cos θ + r·sin θ = distance`, sampled once per column by solving for the
/// row. Near-vertical lines (`sin θ ≈ 0`) are sampled once per row of the
/// single column `c = distance / cos θ` instead.
#[derive(Clone, Debug)]
pub struct LineRadonKernel {
    angle: Dimension,
    distance: Dimension,
}

impl LineRadonKernel {
    pub fn new(num_angles: usize, distance: Dimension) -> Self {
        Self {
            angle: Dimension::angle(num_angles),
            distance,
        }
    }

    /// Kernel whose distance axis covers a `rows × cols` raster.
    pub fn for_raster(rows: usize, cols: usize, num_angles: usize) -> Result<Self> {
        Ok(Self::new(num_angles, distance_dimension(rows as f64, cols as f64)?))
    }

    pub fn angle(&self) -> &Dimension {
        &self.angle
    }

    pub fn distance(&self) -> &Dimension {
        &self.distance
    }

    /// Intensity sum along one line hypothesis.
    pub fn line_integral(image: &ImageU8<'_>, theta: f64, distance: f64) -> u64 {
        let (sin, cos) = theta.sin_cos();
        if sin.abs() < VERTICAL_SIN_EPS {
            let col = (distance / cos + 0.5).floor() as i64;
            return (0..image.h as i64)
                .map(|row| image.sample(row, col) as u64)
                .sum();
        }
        (0..image.w as i64)
            .map(|col| {
                let row = ((distance - col as f64 * cos) / sin + 0.5).floor() as i64;
                image.sample(row, col) as u64
            })
            .sum()
    }
}

impl IntegrationKernel for LineRadonKernel {
    fn dimensions(&self) -> Vec<Dimension> {
        vec![self.angle.clone(), self.distance.clone()]
    }

    fn integrate(&self, image: &ImageU8<'_>, space: &mut ParamSpace) {
        for a in 0..self.angle.resolution {
            let theta = self.angle.value_at(a);
            for d in 0..self.distance.resolution {
                let distance = self.distance.value_at(d);
                space.set(&[a, d], saturate(Self::line_integral(image, theta, distance)));
            }
        }
    }
}
