use serde::{Deserialize, Serialize};

use crate::core::Orientation;
use crate::error::{ChartError, ChartResult};

/// Tuning controls for data-driven auto-ranging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRangeTuning {
    /// Margin added to each end, as a fraction of the data span.
    pub margin_ratio: f64,
    /// Absolute margin used when the data span is zero.
    pub fallback_margin: f64,
}

impl Default for AxisRangeTuning {
    fn default() -> Self {
        Self {
            margin_ratio: 0.01,
            fallback_margin: 1.0,
        }
    }
}

impl AxisRangeTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.margin_ratio.is_finite() || self.margin_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "axis margin ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.fallback_margin.is_finite() || self.fallback_margin <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis fallback margin must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Visible bounds of one axis together with its data-to-pixel transform.
///
/// The transform is `pixel = offset + (value - lower_bound) * scale`. Horizontal
/// axes use `offset = 0` and a positive scale; vertical axes put the lower bound
/// at the bottom edge (`offset = pixel_length`) and use a negative scale.
///
/// Every constructor validates, so an `AxisRange` value always has
/// `lower_bound < upper_bound` and `pixel_length > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    lower_bound: f64,
    upper_bound: f64,
    scale: f64,
    pixel_length: f64,
    orientation: Orientation,
}

impl AxisRange {
    pub fn new(
        lower_bound: f64,
        upper_bound: f64,
        pixel_length: f64,
        orientation: Orientation,
    ) -> ChartResult<Self> {
        validate_bounds(lower_bound, upper_bound)?;
        if !pixel_length.is_finite() || pixel_length <= 0.0 {
            return Err(ChartError::DegenerateAxis {
                lower: lower_bound,
                upper: upper_bound,
                pixel_length,
            });
        }

        let magnitude = pixel_length / (upper_bound - lower_bound);
        if !magnitude.is_finite() || magnitude <= 0.0 {
            return Err(ChartError::DegenerateAxis {
                lower: lower_bound,
                upper: upper_bound,
                pixel_length,
            });
        }
        let scale = match orientation {
            Orientation::Horizontal => magnitude,
            Orientation::Vertical => -magnitude,
        };

        Ok(Self {
            lower_bound,
            upper_bound,
            scale,
            pixel_length,
            orientation,
        })
    }

    /// Fits bounds around a data extent with a symmetric margin.
    ///
    /// A zero-width extent falls back to `tuning.fallback_margin` on each side.
    pub fn auto_range(
        data_min: f64,
        data_max: f64,
        pixel_length: f64,
        orientation: Orientation,
        tuning: AxisRangeTuning,
    ) -> ChartResult<Self> {
        if !data_min.is_finite() || !data_max.is_finite() || data_min > data_max {
            return Err(ChartError::InvalidData(format!(
                "data extent must be finite and ordered, got [{data_min}, {data_max}]"
            )));
        }
        let tuning = tuning.validate()?;

        let span = data_max - data_min;
        let margin = if span > 0.0 {
            span * tuning.margin_ratio
        } else {
            tuning.fallback_margin
        };

        Self::new(
            data_min - margin,
            data_max + margin,
            pixel_length,
            orientation,
        )
    }

    #[must_use]
    pub fn lower_bound(self) -> f64 {
        self.lower_bound
    }

    #[must_use]
    pub fn upper_bound(self) -> f64 {
        self.upper_bound
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.lower_bound, self.upper_bound)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Pixels per data unit; negative for vertical axes.
    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    /// Pixel position of `lower_bound`.
    #[must_use]
    pub fn offset(self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => 0.0,
            Orientation::Vertical => self.pixel_length,
        }
    }

    #[must_use]
    pub fn pixel_length(self) -> f64 {
        self.pixel_length
    }

    #[must_use]
    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower_bound && value <= self.upper_bound
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.offset() + (value - self.lower_bound) * self.scale
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        self.lower_bound + (pixel - self.offset()) / self.scale
    }

    /// Same pixel length and orientation, new bounds.
    pub fn with_bounds(self, lower_bound: f64, upper_bound: f64) -> ChartResult<Self> {
        Self::new(
            lower_bound,
            upper_bound,
            self.pixel_length,
            self.orientation,
        )
    }

    /// Same bounds, new pixel length; the scale follows.
    pub fn with_pixel_length(self, pixel_length: f64) -> ChartResult<Self> {
        Self::new(
            self.lower_bound,
            self.upper_bound,
            pixel_length,
            self.orientation,
        )
    }

    /// Shifts both bounds by `pixel_delta / scale` data units.
    ///
    /// `pixel_delta` is `anchor - current` of a drag gesture.
    pub fn panned(self, pixel_delta: f64) -> ChartResult<Self> {
        if !pixel_delta.is_finite() {
            return Err(ChartError::InvalidData(
                "pan pixel delta must be finite".to_owned(),
            ));
        }
        let delta = pixel_delta / self.scale;
        self.with_bounds(self.lower_bound + delta, self.upper_bound + delta)
    }

    /// Scales the span by `factor` around the data value under `pixel_anchor`.
    ///
    /// `factor > 1` zooms out, `factor < 1` zooms in. The anchor value keeps its
    /// pixel position.
    pub fn zoomed(self, pixel_anchor: f64, factor: f64) -> ChartResult<Self> {
        if !pixel_anchor.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom anchor pixel must be finite".to_owned(),
            ));
        }
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "zoom factor must be finite and > 0, got {factor}"
            )));
        }

        let mid = self.pixel_to_value(pixel_anchor);
        self.with_bounds(
            mid - (mid - self.lower_bound) * factor,
            mid + (self.upper_bound - mid) * factor,
        )
    }
}

fn validate_bounds(lower_bound: f64, upper_bound: f64) -> ChartResult<()> {
    if !lower_bound.is_finite() || !upper_bound.is_finite() || lower_bound >= upper_bound {
        return Err(ChartError::InvalidBounds {
            lower: lower_bound,
            upper: upper_bound,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{AxisRange, AxisRangeTuning};
    use crate::core::Orientation;
    use crate::error::ChartError;

    #[test]
    fn vertical_axis_maps_lower_bound_to_bottom_edge() {
        let range = AxisRange::new(0.0, 10.0, 200.0, Orientation::Vertical).expect("valid");
        assert_eq!(range.scale(), -20.0);
        assert_eq!(range.value_to_pixel(0.0), 200.0);
        assert_eq!(range.value_to_pixel(10.0), 0.0);
        assert_eq!(range.pixel_to_value(100.0), 5.0);
    }

    #[test]
    fn zero_pixel_length_is_degenerate() {
        let err = AxisRange::new(0.0, 1.0, 0.0, Orientation::Horizontal).unwrap_err();
        assert!(matches!(err, ChartError::DegenerateAxis { .. }));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = AxisRange::new(2.0, 1.0, 100.0, Orientation::Horizontal).unwrap_err();
        assert!(matches!(err, ChartError::InvalidBounds { .. }));
    }

    #[test]
    fn tuning_rejects_non_positive_fallback() {
        let tuning = AxisRangeTuning {
            margin_ratio: 0.01,
            fallback_margin: 0.0,
        };
        assert!(tuning.validate().is_err());
    }
}
