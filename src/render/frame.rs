use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, PolylinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Coordinates are plot-surface pixels; axis labels may extend past the
/// surface edges into the host's axis gutters.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub grid_lines: Vec<LinePrimitive>,
    pub tick_lines: Vec<LinePrimitive>,
    pub series: Vec<PolylinePrimitive>,
    pub labels: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            grid_lines: Vec::new(),
            tick_lines: Vec::new(),
            series: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in self.grid_lines.iter().chain(&self.tick_lines) {
            line.validate()?;
        }
        for polyline in &self.series {
            polyline.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid_lines.is_empty()
            && self.tick_lines.is_empty()
            && self.series.is_empty()
            && self.labels.is_empty()
    }
}
