use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::core::label_format::format_tick_label;
use crate::core::tick_layout::{
    LabelMeasurer, TickLayout, TickLayoutTuning, TickMark, layout_major_ticks_with,
    minor_tick_values,
};
use crate::core::{AxisRange, AxisRangeTuning, Orientation};
use crate::error::{ChartError, ChartResult};

/// Host-supplied tick label override.
pub type TickLabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// JavaFX-style default of five minor intervals per major interval.
pub const DEFAULT_MINOR_TICK_COUNT: u32 = 5;

/// Hit/miss counters of the per-axis tick layout memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickCacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TickLayoutKey {
    range: AxisRange,
    rotation_deg: f64,
}

/// Memo of the last major-tick layout.
///
/// Keyed by the exact range and label rotation. Anything else that changes
/// label sizes (fonts, formatter, tuning) must clear it explicitly.
/// The converged spacing survives a clear and seeds the next search, so
/// consecutive layouts start close to their answer.
#[derive(Debug, Clone)]
struct TickLayoutCache {
    key: Option<TickLayoutKey>,
    layout: Option<TickLayout>,
    labels: BTreeMap<OrderedFloat<f64>, String>,
    spacing_px: f64,
    stats: TickCacheStats,
}

impl TickLayoutCache {
    fn new(initial_spacing_px: f64) -> Self {
        Self {
            key: None,
            layout: None,
            labels: BTreeMap::new(),
            spacing_px: initial_spacing_px,
            stats: TickCacheStats::default(),
        }
    }

    fn hit(&mut self, key: TickLayoutKey) -> bool {
        let hit = self.key == Some(key) && self.layout.is_some();
        if hit {
            self.stats.hits = self.stats.hits.saturating_add(1);
        }
        hit
    }

    fn store(&mut self, key: TickLayoutKey, layout: TickLayout) -> &TickLayout {
        self.stats.misses = self.stats.misses.saturating_add(1);
        self.spacing_px = layout.spacing_px;
        self.labels = layout
            .ticks
            .iter()
            .map(|tick| (OrderedFloat(tick.value), tick.label.clone()))
            .collect();
        self.key = Some(key);
        self.layout.insert(layout)
    }

    fn clear(&mut self) {
        self.key = None;
        self.layout = None;
        self.labels.clear();
    }
}

/// One chart axis: visible bounds, auto-range mode and tick layout state.
///
/// While `auto_ranging` is set the host refreshes bounds from data extents via
/// [`Axis::auto_range`]; pan and zoom pin the axis by clearing it.
#[derive(Clone)]
pub struct Axis {
    range: AxisRange,
    auto_ranging: bool,
    range_tuning: AxisRangeTuning,
    tick_tuning: TickLayoutTuning,
    minor_tick_count: u32,
    tick_label_rotation_deg: f64,
    label_formatter: Option<TickLabelFormatterFn>,
    tick_cache: TickLayoutCache,
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("range", &self.range)
            .field("auto_ranging", &self.auto_ranging)
            .field("minor_tick_count", &self.minor_tick_count)
            .field("tick_label_rotation_deg", &self.tick_label_rotation_deg)
            .field("has_label_formatter", &self.label_formatter.is_some())
            .finish_non_exhaustive()
    }
}

impl Axis {
    /// Creates an auto-ranging axis with explicit initial bounds.
    pub fn new(
        orientation: Orientation,
        lower_bound: f64,
        upper_bound: f64,
        pixel_length: f64,
    ) -> ChartResult<Self> {
        let range = AxisRange::new(lower_bound, upper_bound, pixel_length, orientation)?;
        let tick_tuning = TickLayoutTuning::default();
        Ok(Self {
            range,
            auto_ranging: true,
            range_tuning: AxisRangeTuning::default(),
            tick_tuning,
            minor_tick_count: DEFAULT_MINOR_TICK_COUNT,
            tick_label_rotation_deg: 0.0,
            label_formatter: None,
            tick_cache: TickLayoutCache::new(tick_tuning.initial_spacing_px),
        })
    }

    pub fn with_range_tuning(mut self, tuning: AxisRangeTuning) -> ChartResult<Self> {
        self.range_tuning = tuning.validate()?;
        Ok(self)
    }

    pub fn with_tick_tuning(mut self, tuning: TickLayoutTuning) -> ChartResult<Self> {
        self.tick_tuning = tuning.validate()?;
        self.tick_cache = TickLayoutCache::new(tuning.initial_spacing_px);
        Ok(self)
    }

    #[must_use]
    pub fn range(&self) -> AxisRange {
        self.range
    }

    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.range.lower_bound()
    }

    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.range.upper_bound()
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.range.scale()
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.range.offset()
    }

    #[must_use]
    pub fn pixel_length(&self) -> f64 {
        self.range.pixel_length()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.range.orientation()
    }

    #[must_use]
    pub fn auto_ranging(&self) -> bool {
        self.auto_ranging
    }

    #[must_use]
    pub fn range_tuning(&self) -> AxisRangeTuning {
        self.range_tuning
    }

    #[must_use]
    pub fn tick_tuning(&self) -> TickLayoutTuning {
        self.tick_tuning
    }

    /// Returns `true` when the mode actually changed.
    pub fn set_auto_ranging(&mut self, enabled: bool) -> bool {
        let changed = self.auto_ranging != enabled;
        self.auto_ranging = enabled;
        changed
    }

    #[must_use]
    pub fn value_to_pixel(&self, value: f64) -> f64 {
        self.range.value_to_pixel(value)
    }

    #[must_use]
    pub fn pixel_to_value(&self, pixel: f64) -> f64 {
        self.range.pixel_to_value(pixel)
    }

    /// Replaces the bounds, keeping the current pixel length.
    ///
    /// Rejected requests leave the previous bounds in place.
    pub fn set_bounds(&mut self, lower_bound: f64, upper_bound: f64) -> ChartResult<()> {
        self.range = self.range.with_bounds(lower_bound, upper_bound)?;
        Ok(())
    }

    /// Commits a precomputed range of the same orientation.
    pub fn set_range(&mut self, range: AxisRange) -> ChartResult<()> {
        if range.orientation() != self.orientation() {
            return Err(ChartError::InvalidData(format!(
                "range orientation {:?} does not match axis orientation {:?}",
                range.orientation(),
                self.orientation()
            )));
        }
        self.range = range;
        Ok(())
    }

    pub fn set_pixel_length(&mut self, pixel_length: f64) -> ChartResult<()> {
        self.range = self.range.with_pixel_length(pixel_length)?;
        Ok(())
    }

    /// Fits the bounds to a data extent and commits them.
    pub fn auto_range(
        &mut self,
        data_min: f64,
        data_max: f64,
        pixel_length: f64,
    ) -> ChartResult<AxisRange> {
        let range = AxisRange::auto_range(
            data_min,
            data_max,
            pixel_length,
            self.orientation(),
            self.range_tuning,
        )?;
        debug!(
            orientation = ?self.orientation(),
            data_min,
            data_max,
            lower = range.lower_bound(),
            upper = range.upper_bound(),
            scale = range.scale(),
            "auto-ranged axis"
        );
        self.range = range;
        Ok(range)
    }

    /// Shifts the view by `pixel_delta` pixels and pins the axis.
    pub fn pan(&mut self, pixel_delta: f64) -> ChartResult<()> {
        let range = self.range.panned(pixel_delta)?;
        self.set_user_range(range)
    }

    /// Zooms around the data value under `pixel_anchor` and pins the axis.
    pub fn zoom(&mut self, pixel_anchor: f64, factor: f64) -> ChartResult<()> {
        let range = self.range.zoomed(pixel_anchor, factor)?;
        self.set_user_range(range)
    }

    /// Commits a range chosen by user interaction and pins the axis.
    pub fn set_user_range(&mut self, range: AxisRange) -> ChartResult<()> {
        self.set_range(range)?;
        trace!(
            orientation = ?self.orientation(),
            lower = range.lower_bound(),
            upper = range.upper_bound(),
            "user range change"
        );
        self.auto_ranging = false;
        Ok(())
    }

    #[must_use]
    pub fn minor_tick_count(&self) -> u32 {
        self.minor_tick_count
    }

    pub fn set_minor_tick_count(&mut self, count: u32) {
        self.minor_tick_count = count;
    }

    #[must_use]
    pub fn tick_label_rotation_deg(&self) -> f64 {
        self.tick_label_rotation_deg
    }

    pub fn set_tick_label_rotation_deg(&mut self, rotation_deg: f64) -> ChartResult<()> {
        if !rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "tick label rotation must be finite".to_owned(),
            ));
        }
        self.tick_label_rotation_deg = rotation_deg;
        Ok(())
    }

    pub fn set_label_formatter(&mut self, formatter: Option<TickLabelFormatterFn>) {
        self.label_formatter = formatter;
        self.tick_cache.clear();
    }

    #[must_use]
    pub fn has_label_formatter(&self) -> bool {
        self.label_formatter.is_some()
    }

    /// Drops the memoized layout, e.g. after the label font changed.
    pub fn invalidate_ticks(&mut self) {
        self.tick_cache.clear();
    }

    #[must_use]
    pub fn tick_cache_stats(&self) -> TickCacheStats {
        self.tick_cache.stats
    }

    /// Lays out major ticks for the current bounds.
    ///
    /// Returns the memoized layout when neither the range nor the label
    /// rotation changed since the last call.
    pub fn compute_ticks(&mut self, measurer: &impl LabelMeasurer) -> ChartResult<Vec<TickMark>> {
        Ok(self.tick_layout(measurer)?.ticks.clone())
    }

    /// Like [`Axis::compute_ticks`] but exposes the whole layout.
    pub fn tick_layout(&mut self, measurer: &impl LabelMeasurer) -> ChartResult<&TickLayout> {
        let key = TickLayoutKey {
            range: self.range,
            rotation_deg: self.tick_label_rotation_deg,
        };
        if self.tick_cache.hit(key) {
            return self
                .tick_cache
                .layout
                .as_ref()
                .ok_or_else(|| ChartError::InvalidData("tick cache lost its layout".to_owned()));
        }

        let layout = match &self.label_formatter {
            Some(formatter) => layout_major_ticks_with(
                self.range,
                self.tick_cache.spacing_px,
                self.tick_label_rotation_deg,
                self.tick_tuning,
                measurer,
                |value, _magnitude| formatter(value),
            )?,
            None => layout_major_ticks_with(
                self.range,
                self.tick_cache.spacing_px,
                self.tick_label_rotation_deg,
                self.tick_tuning,
                measurer,
                format_tick_label,
            )?,
        };
        Ok(self.tick_cache.store(key, layout))
    }

    /// Major spacing in data units from the last layout.
    #[must_use]
    pub fn major_tick_delta(&self) -> Option<f64> {
        self.tick_cache.layout.as_ref().map(|layout| layout.delta)
    }

    /// Minor ticks for the current bounds, derived from the last major delta.
    ///
    /// Empty until [`Axis::compute_ticks`] has run once.
    #[must_use]
    pub fn compute_minor_ticks(&self, minor_count_per_interval: u32) -> Vec<f64> {
        match self.major_tick_delta() {
            Some(delta) => minor_tick_values(self.range, delta, minor_count_per_interval),
            None => Vec::new(),
        }
    }

    /// Minor ticks using the axis' configured count.
    #[must_use]
    pub fn minor_ticks(&self) -> Vec<f64> {
        self.compute_minor_ticks(self.minor_tick_count)
    }

    /// Label for a tick value: the formatter override when set, otherwise the
    /// label produced for exactly this value by the last layout.
    #[must_use]
    pub fn tick_label(&self, value: f64) -> Option<String> {
        if let Some(formatter) = &self.label_formatter {
            return Some(formatter(value));
        }
        self.tick_cache.labels.get(&OrderedFloat(value)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Axis;
    use crate::core::Orientation;
    use crate::core::tick_layout::EstimatedLabelMeasurer;

    fn horizontal(lower: f64, upper: f64, length: f64) -> Axis {
        Axis::new(Orientation::Horizontal, lower, upper, length).expect("valid axis")
    }

    #[test]
    fn second_layout_of_same_range_is_memoized() {
        let mut axis = horizontal(0.0, 100.0, 500.0);
        let measurer = EstimatedLabelMeasurer::default();

        let first = axis.compute_ticks(&measurer).expect("ticks");
        let second = axis.compute_ticks(&measurer).expect("ticks");
        assert_eq!(first, second);
        assert_eq!(axis.tick_cache_stats().hits, 1);
        assert_eq!(axis.tick_cache_stats().misses, 1);
    }

    #[test]
    fn changing_bounds_invalidates_memo() {
        let mut axis = horizontal(0.0, 100.0, 500.0);
        let measurer = EstimatedLabelMeasurer::default();
        axis.compute_ticks(&measurer).expect("ticks");
        axis.set_bounds(0.0, 1_000.0).expect("bounds");
        axis.compute_ticks(&measurer).expect("ticks");
        assert_eq!(axis.tick_cache_stats().misses, 2);
    }

    #[test]
    fn formatter_override_wins_over_cached_labels() {
        let mut axis = horizontal(0.0, 100.0, 500.0);
        let measurer = EstimatedLabelMeasurer::default();
        axis.set_label_formatter(Some(Arc::new(|value| format!("{value:.1} m"))));
        let ticks = axis.compute_ticks(&measurer).expect("ticks");
        assert!(ticks.iter().all(|tick| tick.label.ends_with(" m")));
        assert_eq!(axis.tick_label(3.0).as_deref(), Some("3.0 m"));
    }

    #[test]
    fn cached_label_lookup_is_exact() {
        let mut axis = horizontal(0.0, 100.0, 500.0);
        let measurer = EstimatedLabelMeasurer::default();
        let ticks = axis.compute_ticks(&measurer).expect("ticks");
        let tick = &ticks[1];
        assert_eq!(axis.tick_label(tick.value), Some(tick.label.clone()));
        assert_eq!(axis.tick_label(tick.value + 0.5), None);
    }

    #[test]
    fn minor_ticks_need_a_major_layout_first() {
        let mut axis = horizontal(0.0, 100.0, 500.0);
        assert!(axis.minor_ticks().is_empty());
        axis.compute_ticks(&EstimatedLabelMeasurer::default())
            .expect("ticks");
        assert!(!axis.minor_ticks().is_empty());
    }

    #[test]
    fn pan_and_zoom_pin_the_axis() {
        let mut axis = horizontal(0.0, 10.0, 500.0);
        assert!(axis.auto_ranging());
        axis.pan(20.0).expect("pan");
        assert!(!axis.auto_ranging());

        axis.set_auto_ranging(true);
        axis.zoom(250.0, 1.1).expect("zoom");
        assert!(!axis.auto_ranging());
    }
}
