use serde::{Deserialize, Serialize};

use crate::core::{AxisId, Viewport};
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed with every notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportContext {
    pub viewport: Viewport,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
    pub x_auto_ranging: bool,
    pub y_auto_ranging: bool,
    pub interaction_mode: InteractionMode,
    pub series_count: usize,
}

impl ViewportContext {
    #[must_use]
    pub fn bounds(self, axis: AxisId) -> (f64, f64) {
        match axis {
            AxisId::X => self.x_bounds,
            AxisId::Y => self.y_bounds,
        }
    }
}

/// Notifications fired after the engine state changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    BoundsChanged { axis: AxisId, lower: f64, upper: f64 },
    AutoRangingChanged { axis: AxisId, enabled: bool },
    TicksChanged { axis: AxisId, major_count: usize },
    ViewportResized { width: u32, height: u32 },
    PanStarted,
    PanEnded,
    DataUpdated { series_count: usize },
    Rendered,
}

/// Subscriber for engine notifications.
///
/// Observers see events and a context snapshot; they cannot mutate the
/// engine from inside the callback. Scheduling a redraw is up to the host.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: ViewportContext);
}
