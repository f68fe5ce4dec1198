use tracing::debug;

use crate::core::AxisId;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Scales one axis by `factor` around the data value under `pixel_anchor`
    /// and pins it.
    ///
    /// `factor > 1` zooms out and `factor < 1` zooms in; the anchor value
    /// keeps its pixel position.
    pub fn zoom(&mut self, axis: AxisId, pixel_anchor: f64, factor: f64) -> ChartResult<()> {
        let range = self.axis(axis).range().zoomed(pixel_anchor, factor)?;
        self.commit_user_ranges(&[(axis, range)])
    }

    /// Makes one data unit span the same number of pixels on both axes.
    ///
    /// The axis showing fewer pixels per unit (more data per pixel) keeps its
    /// bounds; the other one is widened around the plot center to match.
    /// Both axes end up pinned.
    pub fn set_axes_equal(&mut self) -> ChartResult<()> {
        let scale_x = self.x_axis.scale().abs();
        let scale_y = self.y_axis.scale().abs();
        let ratio = scale_x / scale_y;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "cannot equalize axis scales {scale_x} and {scale_y}"
            )));
        }

        let mut ranges = Vec::with_capacity(2);
        if ratio < 1.0 {
            let center = self.viewport.length_along(AxisId::Y) / 2.0;
            ranges.push((AxisId::Y, self.y_axis.range().zoomed(center, 1.0 / ratio)?));
            ranges.push((AxisId::X, self.x_axis.range()));
        } else {
            ranges.push((AxisId::Y, self.y_axis.range()));
            if ratio > 1.0 {
                let center = self.viewport.length_along(AxisId::X) / 2.0;
                ranges.push((AxisId::X, self.x_axis.range().zoomed(center, ratio)?));
            } else {
                ranges.push((AxisId::X, self.x_axis.range()));
            }
        }

        debug!(scale_x, scale_y, ratio, "equalizing axis scales");
        self.commit_user_ranges(&ranges)
    }
}
