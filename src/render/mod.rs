mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PolylinePrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::core::LabelMeasurer;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends measure label text for tick layout and then receive a fully
/// materialized `RenderFrame`, so drawing code stays isolated from axis and
/// interaction logic.
pub trait Renderer: LabelMeasurer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
