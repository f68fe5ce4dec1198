use serde::{Deserialize, Serialize};

use crate::core::{AxisRangeTuning, DEFAULT_MINOR_TICK_COUNT, TickLayoutTuning, Viewport};
use crate::error::{ChartError, ChartResult};

/// Zoom step applied per scroll notch.
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.1;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can keep chart setup in a
/// config file. It describes the initial setup only; view state is never
/// written back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_range")]
    pub x_range: (f64, f64),
    #[serde(default = "default_range")]
    pub y_range: (f64, f64),
    /// When `false` both axes start pinned to `x_range` / `y_range`.
    #[serde(default = "default_auto_ranging")]
    pub auto_ranging: bool,
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f64,
    #[serde(default = "default_minor_tick_count")]
    pub minor_tick_count: u32,
    #[serde(default)]
    pub tick_label_rotation_deg: f64,
    #[serde(default)]
    pub range_tuning: AxisRangeTuning,
    #[serde(default)]
    pub tick_tuning: TickLayoutTuning,
}

impl ChartEngineConfig {
    /// Creates an auto-ranging config for the given plot surface.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            x_range: default_range(),
            y_range: default_range(),
            auto_ranging: default_auto_ranging(),
            zoom_factor: default_zoom_factor(),
            minor_tick_count: default_minor_tick_count(),
            tick_label_rotation_deg: 0.0,
            range_tuning: AxisRangeTuning::default(),
            tick_tuning: TickLayoutTuning::default(),
        }
    }

    /// Sets initial x-axis bounds.
    #[must_use]
    pub fn with_x_range(mut self, lower: f64, upper: f64) -> Self {
        self.x_range = (lower, upper);
        self
    }

    /// Sets initial y-axis bounds.
    #[must_use]
    pub fn with_y_range(mut self, lower: f64, upper: f64) -> Self {
        self.y_range = (lower, upper);
        self
    }

    #[must_use]
    pub fn with_auto_ranging(mut self, enabled: bool) -> Self {
        self.auto_ranging = enabled;
        self
    }

    #[must_use]
    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    #[must_use]
    pub fn with_minor_tick_count(mut self, count: u32) -> Self {
        self.minor_tick_count = count;
        self
    }

    #[must_use]
    pub fn with_tick_label_rotation_deg(mut self, rotation_deg: f64) -> Self {
        self.tick_label_rotation_deg = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_range_tuning(mut self, tuning: AxisRangeTuning) -> Self {
        self.range_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_tick_tuning(mut self, tuning: TickLayoutTuning) -> Self {
        self.tick_tuning = tuning;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for (lower, upper) in [self.x_range, self.y_range] {
            if !lower.is_finite() || !upper.is_finite() || lower >= upper {
                return Err(ChartError::InvalidBounds { lower, upper });
            }
        }
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 1.0 {
            return Err(ChartError::InvalidData(format!(
                "zoom factor must be finite and > 1, got {}",
                self.zoom_factor
            )));
        }
        if !self.tick_label_rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "tick label rotation must be finite".to_owned(),
            ));
        }
        self.range_tuning.validate()?;
        self.tick_tuning.validate()?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_range() -> (f64, f64) {
    (0.0, 1.0)
}

fn default_auto_ranging() -> bool {
    true
}

fn default_zoom_factor() -> f64 {
    DEFAULT_ZOOM_FACTOR
}

fn default_minor_tick_count() -> u32 {
    DEFAULT_MINOR_TICK_COUNT
}
