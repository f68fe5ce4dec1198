use tracing::debug;

use crate::core::{AxisId, AxisRange, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, ChartEvent, InvalidationTopic};

impl<R: Renderer> ChartEngine<R> {
    /// Resizes the plot surface.
    ///
    /// Auto-ranging axes are refitted to the new length. Pinned axes are
    /// rescaled around the center by `new / old`, which keeps both their
    /// scale and the data value at the center of the surface.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport == self.viewport {
            return Ok(());
        }

        let mut pinned: Vec<(AxisId, AxisRange)> = Vec::with_capacity(2);
        for axis in AxisId::BOTH {
            let state = self.axis(axis);
            if state.auto_ranging() {
                continue;
            }
            let old_length = state.pixel_length();
            let new_length = viewport.length_along(axis);
            let range = state
                .range()
                .with_pixel_length(new_length)?
                .zoomed(new_length / 2.0, new_length / old_length)?;
            pinned.push((axis, range));
        }

        debug!(
            from_width = self.viewport.width,
            from_height = self.viewport.height,
            width = viewport.width,
            height = viewport.height,
            "viewport resized"
        );
        self.viewport = viewport;
        self.invalidate(InvalidationTopic::Viewport);

        for (axis, range) in pinned {
            let previous = self.axis(axis).range().bounds();
            self.axis_mut(axis).set_range(range)?;
            self.invalidate_axis(axis);
            self.publish_bounds_change(axis, previous);
        }
        self.refresh_auto_ranging_axes()?;

        self.emit_event(ChartEvent::ViewportResized {
            width: viewport.width,
            height: viewport.height,
        });
        Ok(())
    }
}
