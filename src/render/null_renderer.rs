use crate::core::{EstimatedLabelMeasurer, LabelExtent, LabelMeasurer};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// Label sizes come from [`EstimatedLabelMeasurer`]. Frames are still
/// validated so tests catch invalid geometry without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub measurer: EstimatedLabelMeasurer,
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl LabelMeasurer for NullRenderer {
    fn measure_label(&self, text: &str, rotation_deg: f64) -> LabelExtent {
        self.measurer.measure_label(text, rotation_deg)
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
