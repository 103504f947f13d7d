use super::{center_dimensions, SizeRange, VoteKernel};
use crate::error::Result;
use crate::points::EdgePoint;
use crate::space::{Dimension, ParamSpace};

/// Width–height–center voter for axis-aligned rectangles.
///
/// A rectangle of width `w` and height `h` centered at `(R, C)` has its left
/// edge at `C - ⌊w/2⌋`, right edge at `C + ⌈w/2⌉`, top edge at `R - ⌊h/2⌋` and
/// bottom edge at `R + ⌈h/2⌉`. For every size, a boundary point votes for all
/// centers that would put it on a vertical edge (two candidate columns, a run
/// of `h + 1` rows) and on a horizontal edge (two candidate rows, a run of
/// `w + 1` columns). A pair of candidate columns (or rows) votes only when
/// both lie inside the raster; run cells outside the raster are skipped.
///
/// Space layout: `(width, height, row, col)`.
#[derive(Clone, Debug)]
pub struct RectangleKernel {
    width: Dimension,
    height: Dimension,
    rows: Dimension,
    cols: Dimension,
}

impl RectangleKernel {
    pub fn new(width: SizeRange, height: SizeRange, rows: usize, cols: usize) -> Result<Self> {
        let [row_dim, col_dim] = center_dimensions(rows, cols);
        Ok(Self {
            width: width.dimension("width")?,
            height: height.dimension("height")?,
            rows: row_dim,
            cols: col_dim,
        })
    }

    pub fn width(&self) -> &Dimension {
        &self.width
    }

    pub fn height(&self) -> &Dimension {
        &self.height
    }

    #[inline]
    fn num_rows(&self) -> i64 {
        self.rows.resolution as i64
    }

    #[inline]
    fn num_cols(&self) -> i64 {
        self.cols.resolution as i64
    }
}

impl VoteKernel for RectangleKernel {
    fn dimensions(&self) -> Vec<Dimension> {
        vec![
            self.width.clone(),
            self.height.clone(),
            self.rows.clone(),
            self.cols.clone(),
        ]
    }

    fn vote(&self, space: &mut ParamSpace, point: EdgePoint) {
        let (inr, inc) = (point.row, point.col);
        let (num_rows, num_cols) = (self.num_rows(), self.num_cols());
        let w_min = self.width.min as i64;
        let h_min = self.height.min as i64;

        for wi in 0..self.width.resolution {
            let w = w_min + wi as i64;
            let (left, right) = (w / 2, w - w / 2);
            for hi in 0..self.height.resolution {
                let h = h_min + hi as i64;
                let (top, bottom) = (h / 2, h - h / 2);

                // point on the left or right edge
                let cols = [inc + left, inc - right];
                if cols.iter().all(|c| (0..num_cols).contains(c)) {
                    let row_lo = (inr - bottom).max(0);
                    let row_hi = (inr + top).min(num_rows - 1);
                    for center_row in row_lo..=row_hi {
                        for center_col in cols {
                            space.increment(&[wi, hi, center_row as usize, center_col as usize]);
                        }
                    }
                }

                // point on the top or bottom edge
                let rows = [inr + top, inr - bottom];
                if rows.iter().all(|r| (0..num_rows).contains(r)) {
                    let col_lo = (inc - right).max(0);
                    let col_hi = (inc + left).min(num_cols - 1);
                    for center_col in col_lo..=col_hi {
                        for center_row in rows {
                            space.increment(&[wi, hi, center_row as usize, center_col as usize]);
                        }
                    }
                }
            }
        }
    }
}
