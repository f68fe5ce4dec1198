use tracing::{debug, warn};

use crate::core::{AxisId, TickMark};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, ChartEvent, InvalidationTopic, InvalidationTopics};

impl<R: Renderer> ChartEngine<R> {
    /// Lays out major ticks for one axis using the renderer's label metrics.
    ///
    /// Memoized per axis; repeated calls with unchanged bounds reuse the last
    /// layout.
    pub fn compute_ticks(&mut self, axis: AxisId) -> ChartResult<Vec<TickMark>> {
        let misses_before = self.axis(axis).tick_cache_stats().misses;
        let ticks = {
            let (axis_state, measurer) = self.axis_and_measurer(axis);
            axis_state.compute_ticks(measurer)?
        };
        if self.axis(axis).tick_cache_stats().misses != misses_before {
            self.emit_event(ChartEvent::TicksChanged {
                axis,
                major_count: ticks.len(),
            });
        }
        Ok(ticks)
    }

    /// Minor tick values derived from the last major layout of `axis`.
    #[must_use]
    pub fn minor_ticks(&self, axis: AxisId) -> Vec<f64> {
        self.axis(axis).minor_ticks()
    }

    #[must_use]
    pub fn tick_label(&self, axis: AxisId, value: f64) -> Option<String> {
        self.axis(axis).tick_label(value)
    }

    /// Drains the layout-dirty flag and recomputes what it names.
    ///
    /// Returns the drained topics; an empty set means nothing was pending and
    /// no work was done. An axis whose tick layout fails keeps its previous
    /// ticks and is reported with a warning.
    pub fn layout(&mut self) -> ChartResult<InvalidationTopics> {
        let pending = self.take_pending_invalidation();
        if pending.is_none() {
            return Ok(pending);
        }

        if pending.contains_topic(InvalidationTopic::Data)
            || pending.contains_topic(InvalidationTopic::Viewport)
        {
            self.refresh_auto_ranging_axes()?;
            // Refreshing re-marks the axes it moved; they are handled below.
            self.pending_invalidation = InvalidationTopics::none();
        }

        for axis in AxisId::BOTH {
            if let Err(err) = self.compute_ticks(axis) {
                warn!(?axis, error = %err, "skipping tick layout for axis");
            }
        }
        debug!(?pending, "layout pass complete");
        Ok(pending)
    }
}
