pub mod axis;
pub mod axis_range;
pub mod label_format;
pub mod series;
pub mod tick_delta;
pub mod tick_layout;
pub mod types;

pub use axis::{Axis, DEFAULT_MINOR_TICK_COUNT, TickCacheStats, TickLabelFormatterFn};
pub use axis_range::{AxisRange, AxisRangeTuning};
pub use label_format::format_tick_label;
pub use series::{DataExtentSource, DataSeries, SeriesCollection, spacing};
pub use tick_delta::{TickDelta, is_nice_delta, select_tick_delta};
pub use tick_layout::{
    EstimatedLabelMeasurer, LabelExtent, LabelMeasurer, TickLayout, TickLayoutTuning, TickMark,
    generate_major_ticks, layout_major_ticks, layout_major_ticks_with, minor_tick_values,
};
pub use types::{AxisId, DataPoint, Orientation, Viewport};
