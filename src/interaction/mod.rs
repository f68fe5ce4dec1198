use serde::{Deserialize, Serialize};

use crate::core::AxisId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Region of the chart an input event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    PlotSurface,
    XAxis,
    YAxis,
}

impl HitTarget {
    /// Whether drags and scrolls on this target move the given axis.
    #[must_use]
    pub fn affects(self, axis: AxisId) -> bool {
        match self {
            Self::PlotSurface => true,
            Self::XAxis => axis == AxisId::X,
            Self::YAxis => axis == AxisId::Y,
        }
    }
}

/// Pointer position and axis bounds captured when a pan starts.
///
/// Drags are resolved against this snapshot, not incrementally, so the
/// result depends only on the total pointer displacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanAnchor {
    pub target: HitTarget,
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
}

impl PanAnchor {
    #[must_use]
    pub fn pixel(self, axis: AxisId) -> f64 {
        match axis {
            AxisId::X => self.pixel_x,
            AxisId::Y => self.pixel_y,
        }
    }

    #[must_use]
    pub fn bounds(self, axis: AxisId) -> (f64, f64) {
        match axis {
            AxisId::X => self.x_bounds,
            AxisId::Y => self.y_bounds,
        }
    }
}

/// `Idle -> Panning -> Idle` pointer state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    anchor: Option<PanAnchor>,
    cursor_x: f64,
    cursor_y: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            anchor: None,
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn anchor(self) -> Option<PanAnchor> {
        self.anchor
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn on_pan_start(&mut self, anchor: PanAnchor) {
        self.mode = InteractionMode::Panning;
        self.anchor = Some(anchor);
        self.on_pointer_move(anchor.pixel_x, anchor.pixel_y);
    }

    /// Returns `true` when a pan was in progress.
    pub fn on_pan_end(&mut self) -> bool {
        let was_panning = self.mode == InteractionMode::Panning;
        self.mode = InteractionMode::Idle;
        self.anchor = None;
        was_panning
    }
}
