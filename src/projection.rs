//! Marginal projections of parameter spaces with more than two axes.
//!
//! Every unordered pair of axes `(a, b)`, `a < b`, gets a 2D plane holding the
//! sum over all remaining axes. All planes are filled in one pass over the
//! cells. For a 4D rectangle space this yields the six planes
//! `(w,h) (w,r) (w,c) (h,r) (h,c) (r,c)` in that order.
use crate::space::ParamSpace;

/// Sum of a parameter space over every axis except `axes`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marginal {
    /// Axis indices kept, `(row axis, column axis)`.
    pub axes: (usize, usize),
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<u64>,
}

impl Marginal {
    fn zeros(axes: (usize, usize), rows: usize, cols: usize) -> Self {
        Self {
            axes,
            rows,
            cols,
            values: vec![0; rows * cols],
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.values[row * self.cols + col]
    }

    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }
}

/// All pairwise marginals of `space`, ordered lexicographically by axis pair.
pub fn pairwise_marginals(space: &ParamSpace) -> Vec<Marginal> {
    let shape = space.shape();
    let n = shape.len();
    let mut planes: Vec<Marginal> = (0..n)
        .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
        .map(|(a, b)| Marginal::zeros((a, b), shape[a], shape[b]))
        .collect();

    for (idx, value) in space.cells() {
        if value == 0 {
            continue;
        }
        for plane in &mut planes {
            let (a, b) = plane.axes;
            let cols = plane.cols;
            plane.values[idx[a] * cols + idx[b]] += value as u64;
        }
    }
    planes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Dimension;

    #[test]
    fn four_axes_give_six_planes_in_order() {
        let mut space = ParamSpace::new(vec![
            Dimension::integer("width", 0, 1),
            Dimension::integer("height", 0, 2),
            Dimension::integer("row", 0, 3),
            Dimension::integer("col", 0, 4),
        ])
        .unwrap();
        space.set(&[1, 2, 3, 4], 5);
        space.set(&[0, 2, 1, 4], 2);

        let planes = pairwise_marginals(&space);
        let axes: Vec<_> = planes.iter().map(|p| p.axes).collect();
        assert_eq!(axes, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        for plane in &planes {
            assert_eq!(plane.total(), 7);
        }
        assert_eq!(planes[0].get(1, 2), 5);
        assert_eq!(planes[0].get(0, 2), 2);
        assert_eq!(planes[4].get(2, 4), 7);
        assert_eq!((planes[5].rows, planes[5].cols), (4, 5));
        assert_eq!(planes[5].get(1, 4), 2);
    }

    #[test]
    fn two_axes_project_to_themselves() {
        let mut space = ParamSpace::new(vec![
            Dimension::integer("a", 0, 2),
            Dimension::integer("b", 0, 1),
        ])
        .unwrap();
        space.set(&[2, 1], 9);
        let planes = pairwise_marginals(&space);
        assert_eq!(planes.len(), 1);
        assert_eq!(planes[0].values, vec![0, 0, 0, 0, 0, 9]);
    }
}
