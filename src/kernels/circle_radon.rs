use super::{center_dimensions, saturate, IntegrationKernel, SizeRange};
use crate::error::Result;
use crate::image::ImageU8;
use crate::space::{Dimension, ParamSpace};

/// Visit the boundary of a circle of `radius` as `(d_row, d_col)` offsets.
///
/// Midpoint (Bresenham) traversal: the four cardinal points first, then one
/// octant stepped with the `f` / `ddF_x` / `ddF_y` decision variables and
/// mirrored eight ways. Offsets on the diagonals are visited more than once,
/// and every visit counts as one sample.
pub fn for_each_circle_offset(radius: i64, mut visit: impl FnMut(i64, i64)) {
    let mut f = 1 - radius;
    let mut ddf_x = 1;
    let mut ddf_y = -2 * radius;
    let mut x = 0;
    let mut y = radius;

    visit(radius, 0);
    visit(-radius, 0);
    visit(0, radius);
    visit(0, -radius);

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x;

        visit(y, x);
        visit(y, -x);
        visit(-y, x);
        visit(-y, -x);
        visit(x, y);
        visit(x, -y);
        visit(-x, y);
        visit(-x, -y);
    }
}

/// Sum of the pixels sampled on the circle of `radius` around `(row, col)`.
pub fn circle_integral(image: &ImageU8<'_>, row: i64, col: i64, radius: i64) -> u64 {
    let mut sum = 0u64;
    for_each_circle_offset(radius, |dr, dc| {
        sum += image.sample(row + dr, col + dc) as u64;
    });
    sum
}

/// Radius–center intensity integrator for circles.
///
/// Space layout: `(radius, row, col)`; each radius is one contiguous
/// `(row, col)` plane.
#[derive(Clone, Debug)]
pub struct CircleRadonKernel {
    radius: Dimension,
    rows: Dimension,
    cols: Dimension,
}

impl CircleRadonKernel {
    pub fn new(radius: SizeRange, rows: usize, cols: usize) -> Result<Self> {
        let [row_dim, col_dim] = center_dimensions(rows, cols);
        Ok(Self {
            radius: radius.dimension("radius")?,
            rows: row_dim,
            cols: col_dim,
        })
    }

    pub fn radius(&self) -> &Dimension {
        &self.radius
    }
}

impl IntegrationKernel for CircleRadonKernel {
    fn dimensions(&self) -> Vec<Dimension> {
        vec![self.radius.clone(), self.rows.clone(), self.cols.clone()]
    }

    fn integrate(&self, image: &ImageU8<'_>, space: &mut ParamSpace) {
        let min_radius = self.radius.min as i64;
        for ri in 0..self.radius.resolution {
            let radius = min_radius + ri as i64;
            for r in 0..self.rows.resolution {
                for c in 0..self.cols.resolution {
                    let sum = circle_integral(image, r as i64, c as i64, radius);
                    space.set(&[ri, r, c], saturate(sum));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;
    use crate::kernels::integrate_image;
    use std::collections::HashSet;

    fn offsets(radius: i64) -> Vec<(i64, i64)> {
        let mut out = Vec::new();
        for_each_circle_offset(radius, |dr, dc| out.push((dr, dc)));
        out
    }

    #[test]
    fn traversal_stays_near_true_radius() {
        for radius in 1..20 {
            for (dr, dc) in offsets(radius) {
                let dist = ((dr * dr + dc * dc) as f64).sqrt();
                assert!(
                    (dist - radius as f64).abs() < 0.75,
                    "offset ({dr},{dc}) too far from radius {radius}"
                );
            }
        }
    }

    #[test]
    fn traversal_is_symmetric() {
        let pts: HashSet<_> = offsets(7).into_iter().collect();
        for &(dr, dc) in &pts {
            assert!(pts.contains(&(-dr, dc)));
            assert!(pts.contains(&(dc, dr)));
        }
    }

    #[test]
    fn zero_radius_samples_center_four_times() {
        assert_eq!(offsets(0), vec![(0, 0); 4]);
    }

    #[test]
    fn uniform_raster_counts_samples() {
        let img = GrayImageU8::new(41, 41, vec![2; 41 * 41]);
        let sum = circle_integral(&img.as_view(), 20, 20, 9);
        assert_eq!(sum, 2 * offsets(9).len() as u64);
        // clipped by the border: only in-raster samples count
        let clipped = circle_integral(&img.as_view(), 0, 0, 9);
        assert!(clipped < sum);
    }

    #[test]
    fn space_planes_follow_radius_axis() {
        let img = GrayImageU8::new(5, 4, vec![1; 20]);
        let kernel = CircleRadonKernel::new(SizeRange::new(1, 2), 4, 5).unwrap();
        let space = integrate_image(&kernel, &img.as_view()).unwrap();
        assert_eq!(space.shape(), &[2, 4, 5]);
        assert_eq!(space.plane(&[0]).len(), 20);
    }
}
