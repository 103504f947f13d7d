use crate::error::{Result, TransformError};
use serde::{Deserialize, Serialize};

/// One discretized axis of a parameter space.
///
/// Bin `i` represents the value `min + (max - min) · i / (resolution - 1)`, so
/// both bounds are representable and a value maps to its nearest bin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub resolution: usize,
}

impl Dimension {
    pub fn new(name: impl Into<String>, min: f64, max: f64, resolution: usize) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            resolution,
        }
    }

    /// Line orientation over `[0, π]`.
    pub fn angle(resolution: usize) -> Self {
        Self::new("angle", 0.0, std::f64::consts::PI, resolution)
    }

    /// Unit-step integer axis covering `min..=max`.
    pub fn integer(name: impl Into<String>, min: i64, max: i64) -> Self {
        let resolution = if max >= min {
            (max - min) as usize + 1
        } else {
            0
        };
        Self::new(name, min as f64, max as f64, resolution)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| TransformError::InvalidDimension {
            name: self.name.clone(),
            reason,
        };
        if self.resolution == 0 {
            return Err(invalid("resolution must be at least 1".into()));
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(invalid(format!(
                "bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.max < self.min || (self.resolution > 1 && self.max == self.min) {
            return Err(invalid(format!(
                "empty range [{}, {}] for {} bins",
                self.min, self.max, self.resolution
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Continuous bin coordinate of `value` (not rounded, not bounded).
    #[inline]
    pub fn position(&self, value: f64) -> f64 {
        if self.resolution <= 1 {
            return 0.0;
        }
        (value - self.min) * (self.resolution - 1) as f64 / self.span()
    }

    /// Nearest bin with half-up rounding, `None` when it falls outside the axis.
    #[inline]
    pub fn index_of(&self, value: f64) -> Option<usize> {
        let idx = (self.position(value) + 0.5).floor();
        (idx >= 0.0 && idx < self.resolution as f64).then_some(idx as usize)
    }

    /// Nearest bin, pinned to the first or last bin when out of range.
    #[inline]
    pub fn clamped_index_of(&self, value: f64) -> usize {
        let idx = (self.position(value) + 0.5).floor();
        idx.clamp(0.0, (self.resolution - 1) as f64) as usize
    }

    /// Parameter value represented by bin `index`.
    #[inline]
    pub fn value_at(&self, index: usize) -> f64 {
        if self.resolution <= 1 {
            return self.min;
        }
        self.min + self.span() * index as f64 / (self.resolution - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn integer_axis_is_unit_step() {
        let d = Dimension::integer("radius", 3, 50);
        assert_eq!(d.resolution, 48);
        assert_eq!(d.value_at(0), 3.0);
        assert_eq!(d.value_at(47), 50.0);
        assert_eq!(d.index_of(12.0), Some(9));
        assert_eq!(d.index_of(2.0), None);
        assert_eq!(d.index_of(51.0), None);
    }

    #[test]
    fn index_rounds_half_up() {
        let d = Dimension::new("distance", -142.0, 142.0, 285);
        assert_eq!(d.index_of(0.0), Some(142));
        assert_eq!(d.index_of(0.49), Some(142));
        assert_eq!(d.index_of(0.51), Some(143));
        assert_eq!(d.index_of(-142.4), Some(0));
        assert_eq!(d.index_of(-142.6), None);
        assert_eq!(d.clamped_index_of(-500.0), 0);
        assert_eq!(d.clamped_index_of(500.0), 284);
    }

    #[test]
    fn angle_axis_includes_both_ends() {
        let d = Dimension::angle(181);
        assert!((d.value_at(90) - PI / 2.0).abs() < 1e-12);
        assert!((d.value_at(180) - PI).abs() < 1e-12);
        assert_eq!(d.index_of(PI / 4.0), Some(45));
    }

    #[test]
    fn validation_rejects_degenerate_axes() {
        assert!(Dimension::integer("w", 10, 5).validate().is_err());
        assert!(Dimension::new("d", 1.0, 1.0, 4).validate().is_err());
        assert!(Dimension::new("d", f64::NAN, 1.0, 4).validate().is_err());
        assert!(Dimension::new("d", 1.0, 1.0, 1).validate().is_ok());
    }
}
