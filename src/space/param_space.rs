use super::Dimension;
use crate::error::{Result, TransformError};
use std::ops::Deref;

/// Maximum number of axes a [`ParamSpace`] may carry.
pub const MAX_DIMS: usize = 8;

/// Accumulator cell: a vote tally or an intensity integral.
pub type CellValue = u32;

/// Dense N-dimensional accumulator stored row-major in one flat buffer, the
/// first dimension varying slowest.
#[derive(Clone, Debug)]
pub struct ParamSpace {
    dims: Vec<Dimension>,
    shape: Vec<usize>,
    strides: Vec<usize>,
    cells: Vec<CellValue>,
}

impl ParamSpace {
    /// Allocate a zero-filled space for `dims`.
    pub fn new(dims: Vec<Dimension>) -> Result<Self> {
        Self::with_budget(dims, None)
    }

    /// Like [`ParamSpace::new`], refusing spaces larger than `max_bytes`.
    pub fn with_budget(dims: Vec<Dimension>, max_bytes: Option<usize>) -> Result<Self> {
        if dims.is_empty() || dims.len() > MAX_DIMS {
            return Err(TransformError::InvalidDimension {
                name: format!("{} axes", dims.len()),
                reason: format!("a parameter space needs 1..={MAX_DIMS} dimensions"),
            });
        }
        for dim in &dims {
            dim.validate()?;
        }
        let shape: Vec<usize> = dims.iter().map(|d| d.resolution).collect();
        let alloc_error = || TransformError::Allocation {
            shape: shape.clone(),
        };

        let bytes = Self::required_bytes(&dims).ok_or_else(alloc_error)?;
        if max_bytes.is_some_and(|limit| bytes > limit) {
            return Err(alloc_error());
        }
        let len = bytes / std::mem::size_of::<CellValue>();
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| alloc_error())?;
        cells.resize(len, 0);

        let mut strides = vec![1usize; shape.len()];
        for k in (0..shape.len().saturating_sub(1)).rev() {
            strides[k] = strides[k + 1] * shape[k + 1];
        }

        Ok(Self {
            dims,
            shape,
            strides,
            cells,
        })
    }

    /// Bytes of cell storage `dims` would need, `None` on overflow.
    pub fn required_bytes(dims: &[Dimension]) -> Option<usize> {
        dims.iter()
            .try_fold(1usize, |acc, d| acc.checked_mul(d.resolution))?
            .checked_mul(std::mem::size_of::<CellValue>())
    }

    pub fn dims(&self) -> &[Dimension] {
        &self.dims
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[CellValue] {
        &self.cells
    }

    /// Flat offset of `indices`; every index must be inside its axis.
    #[inline]
    pub fn offset(&self, indices: &[usize]) -> usize {
        debug_assert_eq!(indices.len(), self.ndim(), "index arity mismatch");
        debug_assert!(
            indices.iter().zip(&self.shape).all(|(&i, &n)| i < n),
            "index {indices:?} outside shape {:?}",
            self.shape
        );
        indices.iter().zip(&self.strides).map(|(i, s)| i * s).sum()
    }

    /// Flat offset of `indices`, `None` if any index is out of bounds.
    #[inline]
    pub fn checked_offset(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.ndim() || indices.iter().zip(&self.shape).any(|(&i, &n)| i >= n) {
            return None;
        }
        Some(self.offset(indices))
    }

    #[inline]
    pub fn increment(&mut self, indices: &[usize]) {
        let off = self.offset(indices);
        self.cells[off] = self.cells[off].saturating_add(1);
    }

    #[inline]
    pub fn get(&self, indices: &[usize]) -> CellValue {
        self.cells[self.offset(indices)]
    }

    #[inline]
    pub fn set(&mut self, indices: &[usize], value: CellValue) {
        let off = self.offset(indices);
        self.cells[off] = value;
    }

    /// Contiguous trailing 2D plane selected by fixing all leading axes.
    pub fn plane(&self, leading: &[usize]) -> &[CellValue] {
        assert!(self.ndim() >= 2, "plane needs at least two axes");
        assert_eq!(leading.len(), self.ndim() - 2, "plane needs all leading indices");
        let start: usize = leading
            .iter()
            .zip(&self.strides)
            .zip(&self.shape)
            .map(|((&i, &s), &n)| {
                assert!(i < n, "leading index {i} outside axis of {n}");
                i * s
            })
            .sum();
        let n = self.shape[self.ndim() - 2] * self.shape[self.ndim() - 1];
        &self.cells[start..start + n]
    }

    /// Row-major `(indices, value)` pairs; call again to restart.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            space: self,
            next: 0,
            index: CellIndex::zeros(self.ndim()),
        }
    }

    /// First cell holding the global maximum.
    pub fn argmax(&self) -> Option<(CellIndex, CellValue)> {
        self.cells().fold(None, |best, (idx, v)| match best {
            Some((_, bv)) if bv >= v => best,
            _ => Some((idx, v)),
        })
    }

    /// Parameter values represented by `indices`, one per axis.
    pub fn decode(&self, indices: &[usize]) -> Vec<f64> {
        self.dims
            .iter()
            .zip(indices)
            .map(|(d, &i)| d.value_at(i))
            .collect()
    }
}

/// Fixed-capacity multi-index; derefs to the used `&[usize]` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellIndex {
    coords: [usize; MAX_DIMS],
    len: usize,
}

impl CellIndex {
    fn zeros(len: usize) -> Self {
        Self {
            coords: [0; MAX_DIMS],
            len,
        }
    }
}

impl Deref for CellIndex {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.coords[..self.len]
    }
}

/// Row-major cell iterator returned by [`ParamSpace::cells`].
pub struct Cells<'a> {
    space: &'a ParamSpace,
    next: usize,
    index: CellIndex,
}

impl Iterator for Cells<'_> {
    type Item = (CellIndex, CellValue);

    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.space.cells.get(self.next)?;
        let current = self.index;
        self.next += 1;
        // odometer step, last axis fastest
        for k in (0..self.index.len).rev() {
            self.index.coords[k] += 1;
            if self.index.coords[k] < self.space.shape[k] {
                break;
            }
            self.index.coords[k] = 0;
        }
        Some((current, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.space.cells.len() - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Cells<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn space_2x3x4() -> ParamSpace {
        ParamSpace::new(vec![
            Dimension::integer("a", 0, 1),
            Dimension::integer("b", 0, 2),
            Dimension::integer("c", 0, 3),
        ])
        .unwrap()
    }

    #[test]
    fn strides_are_row_major() {
        let space = space_2x3x4();
        assert_eq!(space.shape(), &[2, 3, 4]);
        assert_eq!(space.strides(), &[12, 4, 1]);
        assert_eq!(space.len(), 24);
        assert_eq!(space.offset(&[1, 2, 3]), 23);
        assert_eq!(space.checked_offset(&[1, 3, 0]), None);
        assert!(space.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn increment_and_set_address_one_cell() {
        let mut space = space_2x3x4();
        space.increment(&[1, 0, 2]);
        space.increment(&[1, 0, 2]);
        space.set(&[0, 2, 1], 40);
        assert_eq!(space.get(&[1, 0, 2]), 2);
        assert_eq!(space.get(&[0, 2, 1]), 40);
        assert_eq!(space.as_slice().iter().map(|&v| v as u64).sum::<u64>(), 42);
    }

    #[test]
    fn cells_visit_every_index_in_order() {
        let mut space = space_2x3x4();
        space.set(&[0, 1, 3], 5);
        let visited: Vec<_> = space.cells().collect();
        assert_eq!(visited.len(), 24);
        for (flat, (idx, value)) in visited.iter().enumerate() {
            assert_eq!(space.offset(idx), flat);
            assert_eq!(*value, space.as_slice()[flat]);
        }
        assert_eq!(&*visited[7].0, &[0, 1, 3]);
        // restartable
        assert_eq!(space.cells().count(), 24);
    }

    #[test]
    fn plane_slices_trailing_axes() {
        let mut space = space_2x3x4();
        space.set(&[1, 2, 0], 9);
        let plane = space.plane(&[1]);
        assert_eq!(plane.len(), 12);
        assert_eq!(plane[2 * 4], 9);
    }

    #[test]
    fn argmax_decodes_parameters() {
        let mut space = ParamSpace::new(vec![
            Dimension::angle(5),
            Dimension::new("distance", -2.0, 2.0, 5),
        ])
        .unwrap();
        space.set(&[2, 4], 3);
        let (idx, v) = space.argmax().unwrap();
        assert_eq!((&*idx, v), (&[2usize, 4][..], 3));
        let params = space.decode(&idx);
        assert!((params[0] - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(params[1], 2.0);
    }

    #[test]
    fn oversized_space_is_allocation_error() {
        let dims = vec![
            Dimension::new("a", 0.0, 1.0, usize::MAX / 2),
            Dimension::new("b", 0.0, 1.0, 4),
        ];
        let err = ParamSpace::new(dims).unwrap_err();
        assert!(matches!(err, TransformError::Allocation { .. }), "{err:?}");
    }

    #[test]
    fn budget_is_enforced_before_allocating() {
        let dims = vec![Dimension::integer("a", 0, 99), Dimension::integer("b", 0, 99)];
        assert!(ParamSpace::with_budget(dims.clone(), Some(40_000)).is_ok());
        let err = ParamSpace::with_budget(dims, Some(39_999)).unwrap_err();
        match err {
            TransformError::Allocation { shape } => assert_eq!(shape, vec![100, 100]),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let err = ParamSpace::new(vec![Dimension::new("w", 0.0, 1.0, 0)]).unwrap_err();
        assert!(matches!(err, TransformError::InvalidDimension { .. }));
    }
}
