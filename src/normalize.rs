//! Linear rescaling of accumulator planes to 8-bit rasters.
//!
//! Two policies:
//! - [`Normalization::Peak`]: `v · 255 / max`, the floor fixed at zero. Suited
//!   to vote counts, where an empty cell is meaningful.
//! - [`Normalization::MinMax`]: `(v - min) · 255 / (max - min)`, stretching
//!   the occupied range.
//!
//! A degenerate range (`max == 0` for `Peak`, `max == min` for `MinMax`) uses a
//! divisor of one. Results are rounded half up and always fit in a byte.
use crate::image::GrayImageU8;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    Peak,
    MinMax,
}

/// Rescale `values` to `[0, 255]`.
pub fn normalize_values<T: Copy + Into<u64>>(values: &[T], policy: Normalization) -> Vec<u8> {
    let Some((min, max)) = values.iter().fold(None, |acc, &v| {
        let v: u64 = v.into();
        Some(match acc {
            None => (v, v),
            Some((lo, hi)) => (v.min(lo), v.max(hi)),
        })
    }) else {
        return Vec::new();
    };

    let floor = match policy {
        Normalization::Peak => 0,
        Normalization::MinMax => min,
    };
    let range = if max > floor { max - floor } else { 1 };
    let scale = 255.0 / range as f64;
    values
        .iter()
        .map(|&v| {
            let v: u64 = v.into();
            ((v - floor) as f64 * scale + 0.5).floor().min(255.0) as u8
        })
        .collect()
}

/// Rescale a row-major `rows × cols` plane into an 8-bit raster.
pub fn normalize<T: Copy + Into<u64>>(
    values: &[T],
    rows: usize,
    cols: usize,
    policy: Normalization,
) -> GrayImageU8 {
    GrayImageU8::new(cols, rows, normalize_values(values, policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_keeps_zero_floor() {
        let out = normalize_values(&[10u32, 20, 40], Normalization::Peak);
        assert_eq!(out, vec![64, 128, 255]);
    }

    #[test]
    fn min_max_stretches_range() {
        let out = normalize_values(&[10u32, 20, 40], Normalization::MinMax);
        assert_eq!(out, vec![0, 85, 255]);
    }

    #[test]
    fn uniform_input_is_degenerate_but_bounded() {
        assert_eq!(normalize_values(&[7u64; 4], Normalization::MinMax), vec![0; 4]);
        assert_eq!(normalize_values(&[0u32; 3], Normalization::Peak), vec![0; 3]);
        // a lone positive value under Peak is its own maximum
        assert_eq!(normalize_values(&[1u32], Normalization::Peak), vec![255]);
    }

    #[test]
    fn every_output_is_a_byte_and_max_hits_255() {
        let values: Vec<u64> = (0..1000).map(|i| (i * 7919) % 1013 + 3).collect();
        for policy in [Normalization::Peak, Normalization::MinMax] {
            let out = normalize_values(&values, policy);
            assert_eq!(out.len(), values.len());
            assert_eq!(out.iter().copied().max(), Some(255));
        }
    }

    #[test]
    fn plane_shape_is_rows_by_cols() {
        let img = normalize(&[1u32, 2, 3, 4, 5, 6], 2, 3, Normalization::MinMax);
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.get(2, 1), 255);
    }

    #[test]
    fn empty_input_yields_empty_raster() {
        assert!(normalize_values::<u32>(&[], Normalization::Peak).is_empty());
    }
}
