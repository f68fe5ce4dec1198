use tracing::debug;

use crate::core::{Axis, AxisId, Orientation, SeriesCollection};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, InvalidationTopics, RenderStyle};

impl<R: Renderer> ChartEngine<R> {
    /// Creates a fully initialized engine.
    ///
    /// With `config.auto_ranging` set the axes start from the empty-data
    /// fallback range; otherwise they are pinned to the configured ranges.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;

        let x_axis = build_axis(&config, AxisId::X)?;
        let y_axis = build_axis(&config, AxisId::Y)?;

        let mut engine = Self {
            renderer,
            viewport: config.viewport,
            x_axis,
            y_axis,
            interaction: InteractionState::default(),
            series: SeriesCollection::new(),
            render_style: RenderStyle::default(),
            zoom_factor: config.zoom_factor,
            observers: Vec::new(),
            pending_invalidation: InvalidationTopics::all(),
        };

        if config.auto_ranging {
            for axis in AxisId::BOTH {
                engine.refresh_auto_range(axis)?;
            }
        }
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            auto_ranging = config.auto_ranging,
            "chart engine created"
        );
        Ok(engine)
    }
}

fn build_axis(config: &ChartEngineConfig, axis: AxisId) -> ChartResult<Axis> {
    let ((lower, upper), orientation) = match axis {
        AxisId::X => (config.x_range, Orientation::Horizontal),
        AxisId::Y => (config.y_range, Orientation::Vertical),
    };
    let mut built = Axis::new(
        orientation,
        lower,
        upper,
        config.viewport.length_along(axis),
    )?
    .with_range_tuning(config.range_tuning)?
    .with_tick_tuning(config.tick_tuning)?;
    built.set_minor_tick_count(config.minor_tick_count);
    built.set_tick_label_rotation_deg(config.tick_label_rotation_deg)?;
    built.set_auto_ranging(config.auto_ranging);
    Ok(built)
}
