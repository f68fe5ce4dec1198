use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual options used when the engine materializes a `RenderFrame`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub tick_color: Color,
    pub tick_line_width: f64,
    pub major_tick_length_px: f64,
    pub minor_tick_length_px: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Space between a tick mark's outer end and its label.
    pub label_padding_px: f64,
    pub series_line_color: Color,
    pub series_line_width: f64,
    pub show_grid: bool,
    pub show_minor_ticks: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_line_color: Color::rgba(0.5, 0.5, 0.5, 0.35),
            grid_line_width: 1.0,
            tick_color: Color::rgb(0.2, 0.2, 0.2),
            tick_line_width: 1.0,
            major_tick_length_px: 6.0,
            minor_tick_length_px: 3.0,
            label_color: Color::rgb(0.1, 0.1, 0.1),
            label_font_size_px: 12.0,
            label_padding_px: 2.0,
            series_line_color: Color::rgb(0.16, 0.38, 0.85),
            series_line_width: 1.5,
            show_grid: true,
            show_minor_ticks: true,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        self.grid_line_color.validate()?;
        self.tick_color.validate()?;
        self.label_color.validate()?;
        self.series_line_color.validate()?;

        for (name, value) in [
            ("grid line width", self.grid_line_width),
            ("tick line width", self.tick_line_width),
            ("major tick length", self.major_tick_length_px),
            ("minor tick length", self.minor_tick_length_px),
            ("label font size", self.label_font_size_px),
            ("series line width", self.series_line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.label_padding_px.is_finite() || self.label_padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "label padding must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
