use crate::core::AxisId;
use crate::render::Renderer;

use super::{ChartEngine, ChartEvent, InvalidationTopic, ViewportContext};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn viewport_context(&self) -> ViewportContext {
        ViewportContext {
            viewport: self.viewport,
            x_bounds: self.x_axis.range().bounds(),
            y_bounds: self.y_axis.range().bounds(),
            x_auto_ranging: self.x_axis.auto_ranging(),
            y_auto_ranging: self.y_axis.auto_ranging(),
            interaction_mode: self.interaction.mode(),
            series_count: self.series.len(),
        }
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.viewport_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }

    /// Marks the axis dirty and notifies when its bounds moved.
    pub(super) fn publish_bounds_change(&mut self, axis: AxisId, previous: (f64, f64)) {
        let (lower, upper) = self.axis(axis).range().bounds();
        if (lower, upper) == previous {
            return;
        }
        self.invalidate_axis(axis);
        self.emit_event(ChartEvent::BoundsChanged { axis, lower, upper });
    }

    pub(super) fn publish_auto_ranging_change(&mut self, axis: AxisId, previous: bool) {
        let enabled = self.axis(axis).auto_ranging();
        if enabled != previous {
            self.emit_event(ChartEvent::AutoRangingChanged { axis, enabled });
        }
    }

    pub(super) fn publish_data_update(&mut self) {
        self.invalidate(InvalidationTopic::Data);
        let series_count = self.series.len();
        self.emit_event(ChartEvent::DataUpdated { series_count });
    }
}
