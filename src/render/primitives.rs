use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Straight RGBA paint for grid, tick, label and series strokes.
///
/// Channels are unit-interval floats so the same value can feed any backend
/// without knowing its pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color.
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        match channels
            .iter()
            .position(|value| !(0.0..=1.0).contains(value))
        {
            Some(index) => Err(ChartError::InvalidData(format!(
                "color {:?} channel {index} is outside [0, 1]",
                channels
            ))),
            None => Ok(()),
        }
    }
}

/// Shared stroke check for axis lines and series polylines.
fn validate_stroke(kind: &str, stroke_width: f64, color: Color) -> ChartResult<()> {
    if !(stroke_width.is_finite() && stroke_width > 0.0) {
        return Err(ChartError::InvalidData(format!(
            "{kind} stroke width must be finite and > 0, got {stroke_width}"
        )));
    }
    color.validate()
}

/// Grid line or tick mark segment, in plot-surface pixels.
///
/// Tick marks of the x axis sit below the plot (`y > height`) and those of
/// the y axis left of it (`x < 0`), so coordinates may fall outside the
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .any(|coordinate| !coordinate.is_finite())
        {
            return Err(ChartError::InvalidData(format!(
                "line ({}, {}) -> ({}, {}) has a non-finite endpoint",
                self.x1, self.y1, self.x2, self.y2
            )));
        }
        validate_stroke("line", self.stroke_width, self.color)
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Draw command for one tick label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub rotation_deg: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            rotation_deg: 0.0,
            color,
            h_align,
            v_align,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates and rotation must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Series samples projected to pixel space, in data order.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self
            .points
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "polyline points must be finite".to_owned(),
            ));
        }
        validate_stroke("polyline", self.stroke_width, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LinePrimitive, PolylinePrimitive};

    #[test]
    fn color_channels_must_be_unit_interval() {
        assert!(Color::rgb(0.0, 0.5, 1.0).validate().is_ok());
        assert!(Color::rgba(0.2, 0.2, 0.2, 1.01).validate().is_err());
        assert!(Color::rgba(f64::NAN, 0.0, 0.0, 1.0).validate().is_err());
    }

    #[test]
    fn tick_segments_may_leave_the_viewport_but_not_go_non_finite() {
        let ink = Color::rgb(0.2, 0.2, 0.2);
        assert!(LinePrimitive::new(0.0, 10.0, -6.0, 10.0, 1.0, ink).validate().is_ok());
        assert!(LinePrimitive::new(0.0, f64::INFINITY, -6.0, 10.0, 1.0, ink).validate().is_err());
        assert!(LinePrimitive::new(0.0, 10.0, -6.0, 10.0, 0.0, ink).validate().is_err());

        let polyline = PolylinePrimitive {
            points: vec![(0.0, 0.0), (5.0, 5.0)],
            stroke_width: -1.0,
            color: ink,
        };
        assert!(polyline.validate().is_err());
    }
}
