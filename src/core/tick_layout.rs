use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::label_format::format_tick_label;
use crate::core::tick_delta::{TickDelta, select_tick_delta};
use crate::core::{AxisRange, Orientation};
use crate::error::{ChartError, ChartResult};

/// Bounding box of a rendered tick label in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelExtent {
    pub width: f64,
    pub height: f64,
}

impl LabelExtent {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent the label occupies along an axis of the given orientation.
    #[must_use]
    pub fn along(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

/// Text-metrics capability supplied by the font/rendering backend.
pub trait LabelMeasurer {
    fn measure_label(&self, text: &str, rotation_deg: f64) -> LabelExtent;
}

impl<T: LabelMeasurer + ?Sized> LabelMeasurer for &T {
    fn measure_label(&self, text: &str, rotation_deg: f64) -> LabelExtent {
        (**self).measure_label(text, rotation_deg)
    }
}

/// Backend-independent glyph-width estimate for headless layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedLabelMeasurer {
    pub font_size_px: f64,
}

impl Default for EstimatedLabelMeasurer {
    fn default() -> Self {
        Self { font_size_px: 12.0 }
    }
}

impl LabelMeasurer for EstimatedLabelMeasurer {
    fn measure_label(&self, text: &str, rotation_deg: f64) -> LabelExtent {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        let width = (units * self.font_size_px).max(self.font_size_px * 0.5);
        let height = self.font_size_px * 1.2;
        if !rotation_deg.is_finite() || rotation_deg == 0.0 {
            return LabelExtent::new(width, height);
        }

        let (sin, cos) = rotation_deg.to_radians().sin_cos();
        LabelExtent::new(
            (width * cos).abs() + (height * sin).abs(),
            (width * sin).abs() + (height * cos).abs(),
        )
    }
}

/// One labeled major tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub value: f64,
    pub label: String,
    pub magnitude: i32,
}

/// Controls for the label-fit search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickLayoutTuning {
    /// Target pixel spacing a fresh axis starts its search from.
    pub initial_spacing_px: f64,
    /// Minimum free space between neighbouring labels.
    pub label_gap_px: f64,
    /// Spacing above `label + shrink_hysteresis * gap` is considered loose.
    pub shrink_hysteresis: f64,
    /// Hard cap on passes, on top of the visited-spacing check.
    pub max_passes: u32,
}

impl Default for TickLayoutTuning {
    fn default() -> Self {
        Self {
            initial_spacing_px: 50.0,
            label_gap_px: 10.0,
            shrink_hysteresis: 1.2,
            max_passes: 64,
        }
    }
}

impl TickLayoutTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.initial_spacing_px.is_finite() || self.initial_spacing_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "initial tick spacing must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_gap_px.is_finite() || self.label_gap_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "tick label gap must be finite and > 0".to_owned(),
            ));
        }
        if !self.shrink_hysteresis.is_finite() || self.shrink_hysteresis < 1.0 {
            return Err(ChartError::InvalidData(
                "tick shrink hysteresis must be finite and >= 1".to_owned(),
            ));
        }
        if self.max_passes == 0 {
            return Err(ChartError::InvalidData(
                "tick layout needs at least one pass".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Result of one major-tick layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLayout {
    pub ticks: Vec<TickMark>,
    /// Spacing between major ticks in data units.
    pub delta: f64,
    pub magnitude: i32,
    /// Target pixel spacing that produced `delta`; seeds the next layout.
    pub spacing_px: f64,
    /// Largest label extent along the axis.
    pub max_label_extent: f64,
    pub passes: u32,
    /// `false` when labels still overlap because the search ran out of spacings.
    pub converged: bool,
}

impl TickLayout {
    /// Major spacing in pixels.
    #[must_use]
    pub fn delta_px(&self, range: AxisRange) -> f64 {
        self.delta * range.scale().abs()
    }
}

/// Searches for a major-tick spacing whose labels fit along the axis.
///
/// Starting from `start_spacing_px`, every pass picks a nice delta for the
/// current target spacing, formats and measures the labels, then widens the
/// target by `label_gap_px` on overlap or narrows it while the spacing is
/// loose. A spacing is never tried twice, which bounds the search; if it
/// stops while labels still overlap, the tightest non-overlapping layout
/// seen is returned instead, or the overlapping one when none fit.
pub fn layout_major_ticks(
    range: AxisRange,
    start_spacing_px: f64,
    rotation_deg: f64,
    tuning: TickLayoutTuning,
    measurer: &impl LabelMeasurer,
) -> ChartResult<TickLayout> {
    layout_major_ticks_with(
        range,
        start_spacing_px,
        rotation_deg,
        tuning,
        measurer,
        format_tick_label,
    )
}

/// Same as [`layout_major_ticks`] with a custom `(value, magnitude)` label
/// formatter, so measured labels match the ones displayed.
pub fn layout_major_ticks_with(
    range: AxisRange,
    start_spacing_px: f64,
    rotation_deg: f64,
    tuning: TickLayoutTuning,
    measurer: &impl LabelMeasurer,
    formatter: impl Fn(f64, i32) -> String,
) -> ChartResult<TickLayout> {
    let tuning = tuning.validate()?;
    let scale_abs = range.scale().abs();
    let gap = tuning.label_gap_px;
    let orientation = range.orientation();

    let mut spacing_px = if start_spacing_px.is_finite() && start_spacing_px > 0.0 {
        start_spacing_px
    } else {
        tuning.initial_spacing_px
    };
    let mut visited: SmallVec<[f64; 16]> = SmallVec::new();
    let mut best_fit: Option<TickLayout> = None;
    let mut passes = 0_u32;

    loop {
        passes += 1;
        visited.push(spacing_px);

        let TickDelta { delta, magnitude } = select_tick_delta(spacing_px / scale_abs)?;
        let ticks = generate_major_ticks_with(range, delta, magnitude, &formatter);
        let max_label_extent = ticks
            .iter()
            .map(|tick| {
                measurer
                    .measure_label(&tick.label, rotation_deg)
                    .along(orientation)
            })
            .fold(0.0_f64, f64::max);

        let delta_px = delta * scale_abs;
        let overlapping = delta_px < max_label_extent + gap;
        let layout = TickLayout {
            ticks,
            delta,
            magnitude,
            spacing_px,
            max_label_extent,
            passes,
            converged: !overlapping,
        };

        let next_spacing = if overlapping {
            Some(spacing_px + gap)
        } else if delta_px > max_label_extent + tuning.shrink_hysteresis * gap {
            Some(spacing_px - gap)
        } else {
            None
        };

        if !overlapping && best_fit.as_ref().is_none_or(|best| layout.delta < best.delta) {
            best_fit = Some(layout.clone());
        }

        let retry = next_spacing.filter(|next| {
            *next > 0.0
                && passes < tuning.max_passes
                && !visited
                    .iter()
                    .any(|tried| (tried - next).abs() <= gap * 1e-9)
        });
        match retry {
            Some(next) => spacing_px = next,
            None => {
                let mut result = match (overlapping, best_fit) {
                    (true, Some(best)) => best,
                    _ => layout,
                };
                result.passes = passes;
                if !result.converged {
                    warn!(
                        passes,
                        delta = result.delta,
                        max_label_extent = result.max_label_extent,
                        "tick labels still overlap after exhausting spacing candidates"
                    );
                }
                debug!(
                    passes,
                    delta = result.delta,
                    magnitude = result.magnitude,
                    spacing_px = result.spacing_px,
                    tick_count = result.ticks.len(),
                    "major tick layout settled"
                );
                return Ok(result);
            }
        }
    }
}

/// Emits labeled ticks at multiples of `delta` inside the range.
///
/// At most `pixel_length / 2` multiples are visited. Generation also stops
/// once stepping no longer increases the value, which happens when `delta`
/// falls below the float resolution at the bounds.
#[must_use]
pub fn generate_major_ticks(range: AxisRange, delta: f64, magnitude: i32) -> Vec<TickMark> {
    generate_major_ticks_with(range, delta, magnitude, format_tick_label)
}

fn generate_major_ticks_with(
    range: AxisRange,
    delta: f64,
    magnitude: i32,
    formatter: impl Fn(f64, i32) -> String,
) -> Vec<TickMark> {
    if !delta.is_finite() || delta <= 0.0 {
        return Vec::new();
    }

    let max_steps = (range.pixel_length() / 2.0).ceil() as usize;
    let first_index = (range.lower_bound() / delta).ceil();
    let mut ticks: Vec<TickMark> = Vec::new();
    let mut previous: Option<f64> = None;
    for step in 0..max_steps {
        let value = (first_index + step as f64) * delta;
        if value >= range.upper_bound() || previous.is_some_and(|last| value <= last) {
            break;
        }
        previous = Some(value);
        if value < range.lower_bound() {
            continue;
        }
        // Folds -0.0 into 0.0.
        let value = if value == 0.0 { 0.0 } else { value };
        ticks.push(TickMark {
            value,
            label: formatter(value, magnitude),
            magnitude,
        });
    }
    ticks
}

/// Values splitting each major interval into `minor_count` equal parts.
///
/// Endpoints (major ticks) are excluded and only values inside the range are
/// kept, including the partial intervals at both ends. Values that do not
/// strictly increase at the float resolution of the bounds are dropped.
#[must_use]
pub fn minor_tick_values(range: AxisRange, major_delta: f64, minor_count: u32) -> Vec<f64> {
    if minor_count < 2 || !major_delta.is_finite() || major_delta <= 0.0 {
        return Vec::new();
    }

    let max_intervals = range.pixel_length().ceil() as usize;
    let step = major_delta / f64::from(minor_count);
    let first_index = (range.lower_bound() / major_delta).floor();
    let mut values: Vec<f64> = Vec::new();
    let mut previous_major: Option<f64> = None;
    for interval in 0..max_intervals {
        let major = (first_index + interval as f64) * major_delta;
        if major >= range.upper_bound() || previous_major.is_some_and(|last| major <= last) {
            break;
        }
        previous_major = Some(major);
        for k in 1..minor_count {
            let value = major + step * f64::from(k);
            if range.contains(value) && values.last().is_none_or(|&last| value > last) {
                values.push(value);
            }
        }
    }
    values
}
