use crate::core::{Axis, AxisId, SeriesCollection, Viewport};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{ChartEvent, ChartObserver, InvalidationTopic, InvalidationTopics, RenderStyle};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` is the viewport controller: it owns both axes, the series
/// store and the pointer state machine, turns input events into bound
/// changes, and hands finished frames to the renderer. All mutation happens
/// synchronously inside the call that triggered it; re-layout is signalled
/// through [`ChartEngine::pending_invalidation`] and drained by
/// [`ChartEngine::layout`] or [`ChartEngine::render`].
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) x_axis: Axis,
    pub(super) y_axis: Axis,
    pub(super) interaction: InteractionState,
    pub(super) series: SeriesCollection,
    pub(super) render_style: RenderStyle,
    pub(super) zoom_factor: f64,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
    pub(super) pending_invalidation: InvalidationTopics,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn axis(&self, axis: AxisId) -> &Axis {
        match axis {
            AxisId::X => &self.x_axis,
            AxisId::Y => &self.y_axis,
        }
    }

    #[must_use]
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    pub(super) fn axis_mut(&mut self, axis: AxisId) -> &mut Axis {
        match axis {
            AxisId::X => &mut self.x_axis,
            AxisId::Y => &mut self.y_axis,
        }
    }

    /// Splits the borrow so tick layout can measure labels with the renderer.
    pub(super) fn axis_and_measurer(&mut self, axis: AxisId) -> (&mut Axis, &R) {
        match axis {
            AxisId::X => (&mut self.x_axis, &self.renderer),
            AxisId::Y => (&mut self.y_axis, &self.renderer),
        }
    }

    #[must_use]
    pub fn scale(&self, axis: AxisId) -> f64 {
        self.axis(axis).scale()
    }

    #[must_use]
    pub fn offset(&self, axis: AxisId) -> f64 {
        self.axis(axis).offset()
    }

    #[must_use]
    pub fn auto_ranging(&self, axis: AxisId) -> bool {
        self.axis(axis).auto_ranging()
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.render_style = style.validate()?;
        self.invalidate(InvalidationTopic::Style);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Gives mutable access to the backend.
    ///
    /// Changing fonts or anything else that affects label metrics must be
    /// followed by [`ChartEngine::invalidate_tick_layouts`].
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Drops memoized tick layouts of both axes.
    pub fn invalidate_tick_layouts(&mut self) {
        for axis in AxisId::BOTH {
            self.axis_mut(axis).invalidate_ticks();
            self.invalidate_axis(axis);
        }
    }

    /// Runs a layout pass if needed, builds the frame and draws it.
    pub fn render(&mut self) -> ChartResult<()> {
        self.layout()?;
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_event(ChartEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
