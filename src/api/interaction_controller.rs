use crate::core::{AxisId, AxisRange};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitTarget, InteractionMode, PanAnchor, PointerButton};
use crate::render::Renderer;

use super::{ChartEngine, ChartEvent};

impl<R: Renderer> ChartEngine<R> {
    /// Handles a pointer press. A primary press over the plot or an axis
    /// starts panning and returns `true`.
    pub fn pointer_down(
        &mut self,
        button: PointerButton,
        target: HitTarget,
        x: f64,
        y: f64,
    ) -> ChartResult<bool> {
        validate_pointer(x, y)?;
        self.interaction.on_pointer_move(x, y);
        if button != PointerButton::Primary {
            return Ok(false);
        }

        self.interaction.on_pan_start(PanAnchor {
            target,
            pixel_x: x,
            pixel_y: y,
            x_bounds: self.x_axis.range().bounds(),
            y_bounds: self.y_axis.range().bounds(),
        });
        self.emit_event(ChartEvent::PanStarted);
        Ok(true)
    }

    /// Handles pointer motion; while panning, moves the affected axes so the
    /// data under the press point follows the pointer.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        validate_pointer(x, y)?;
        self.interaction.on_pointer_move(x, y);
        if self.interaction.mode() != InteractionMode::Panning {
            return Ok(());
        }
        let Some(anchor) = self.interaction.anchor() else {
            return Ok(());
        };

        let mut ranges: Vec<(AxisId, AxisRange)> = Vec::with_capacity(2);
        for axis in AxisId::BOTH {
            if !anchor.target.affects(axis) {
                continue;
            }
            let current = match axis {
                AxisId::X => x,
                AxisId::Y => y,
            };
            let (anchor_lower, anchor_upper) = anchor.bounds(axis);
            let range = self
                .axis(axis)
                .range()
                .with_bounds(anchor_lower, anchor_upper)?
                .panned(anchor.pixel(axis) - current)?;
            ranges.push((axis, range));
        }
        self.commit_user_ranges(&ranges)
    }

    /// Ends a pan. Returns `true` when one was in progress.
    pub fn pointer_up(&mut self) -> bool {
        let was_panning = self.interaction.on_pan_end();
        if was_panning {
            self.emit_event(ChartEvent::PanEnded);
        }
        was_panning
    }

    /// Handles a wheel step at pointer position `(x, y)`.
    ///
    /// Negative `delta_y` zooms out by the configured factor, positive zooms
    /// in. Over an axis only that axis zooms, and only while the pointer lies
    /// within its length. Returns `true` when any axis changed.
    pub fn scroll(&mut self, target: HitTarget, x: f64, y: f64, delta_y: f64) -> ChartResult<bool> {
        validate_pointer(x, y)?;
        if !delta_y.is_finite() {
            return Err(ChartError::InvalidData(
                "scroll delta must be finite".to_owned(),
            ));
        }
        if delta_y == 0.0 {
            return Ok(false);
        }
        let factor = if delta_y < 0.0 {
            self.zoom_factor
        } else {
            1.0 / self.zoom_factor
        };

        let mut ranges: Vec<(AxisId, AxisRange)> = Vec::with_capacity(2);
        for axis in AxisId::BOTH {
            if !target.affects(axis) {
                continue;
            }
            let anchor = match axis {
                AxisId::X => x,
                AxisId::Y => y,
            };
            let length = self.viewport.length_along(axis);
            if target != HitTarget::PlotSurface && (anchor <= 0.0 || anchor >= length) {
                continue;
            }
            ranges.push((axis, self.axis(axis).range().zoomed(anchor, factor)?));
        }

        if ranges.is_empty() {
            return Ok(false);
        }
        self.commit_user_ranges(&ranges)?;
        Ok(true)
    }

    /// Double activation on the plot surface returns both axes to
    /// auto-ranging. Returns `true` when handled.
    pub fn double_click(&mut self, target: HitTarget) -> ChartResult<bool> {
        if target != HitTarget::PlotSurface {
            return Ok(false);
        }
        self.set_auto_ranging(true)?;
        Ok(true)
    }
}

fn validate_pointer(x: f64, y: f64) -> ChartResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ChartError::InvalidData(
            "pointer position must be finite".to_owned(),
        ));
    }
    Ok(())
}
