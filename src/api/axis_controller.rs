use tracing::debug;

use crate::core::{AxisId, AxisRange, DataExtentSource, TickLabelFormatterFn};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Sets explicit bounds on one axis and pins it.
    ///
    /// `lower >= upper` is rejected and the previous bounds stay in place.
    pub fn set_bounds(&mut self, axis: AxisId, lower: f64, upper: f64) -> ChartResult<()> {
        let range = self.axis(axis).range().with_bounds(lower, upper)?;
        self.commit_user_ranges(&[(axis, range)])
    }

    /// Sets the bounds of both axes at once and pins them.
    ///
    /// Both pairs are validated before either axis changes.
    pub fn set_view_bounds(
        &mut self,
        x_lower: f64,
        x_upper: f64,
        y_lower: f64,
        y_upper: f64,
    ) -> ChartResult<()> {
        let x_range = self.x_axis.range().with_bounds(x_lower, x_upper)?;
        let y_range = self.y_axis.range().with_bounds(y_lower, y_upper)?;
        self.commit_user_ranges(&[(AxisId::X, x_range), (AxisId::Y, y_range)])
    }

    /// Switches auto-ranging on both axes.
    ///
    /// Enabling recomputes bounds from the current data extents right away.
    pub fn set_auto_ranging(&mut self, enabled: bool) -> ChartResult<()> {
        for axis in AxisId::BOTH {
            self.set_axis_auto_ranging(axis, enabled)?;
        }
        Ok(())
    }

    pub fn set_axis_auto_ranging(&mut self, axis: AxisId, enabled: bool) -> ChartResult<()> {
        let previous = self.axis(axis).auto_ranging();
        self.axis_mut(axis).set_auto_ranging(enabled);
        if enabled {
            self.refresh_auto_range(axis)?;
        }
        self.publish_auto_ranging_change(axis, previous);
        Ok(())
    }

    /// Fits one axis to an explicit data extent and pixel length.
    ///
    /// This is the raw auto-range step; it does not change the axis mode.
    pub fn auto_range(
        &mut self,
        axis: AxisId,
        data_min: f64,
        data_max: f64,
        pixel_length: f64,
    ) -> ChartResult<AxisRange> {
        let previous = self.axis(axis).range().bounds();
        let range = self
            .axis_mut(axis)
            .auto_range(data_min, data_max, pixel_length)?;
        self.invalidate_axis(axis);
        self.publish_bounds_change(axis, previous);
        Ok(range)
    }

    /// Recomputes an axis from series extents and the viewport length.
    ///
    /// No data centers the axis on zero with the fallback margin.
    pub(super) fn refresh_auto_range(&mut self, axis: AxisId) -> ChartResult<()> {
        let (data_min, data_max) = self.series.data_extent(axis).unwrap_or((0.0, 0.0));
        let pixel_length = self.viewport.length_along(axis);
        self.auto_range(axis, data_min, data_max, pixel_length)?;
        Ok(())
    }

    /// Refreshes every axis that is still auto-ranging.
    pub(super) fn refresh_auto_ranging_axes(&mut self) -> ChartResult<()> {
        for axis in AxisId::BOTH {
            if self.axis(axis).auto_ranging() {
                self.refresh_auto_range(axis)?;
            }
        }
        Ok(())
    }

    /// Commits user-chosen ranges, pins the axes and notifies.
    ///
    /// Callers validate every range first so a rejected request leaves both
    /// axes untouched.
    pub(super) fn commit_user_ranges(&mut self, ranges: &[(AxisId, AxisRange)]) -> ChartResult<()> {
        for &(axis, range) in ranges {
            let previous_bounds = self.axis(axis).range().bounds();
            let previous_auto = self.axis(axis).auto_ranging();
            self.axis_mut(axis).set_user_range(range)?;
            self.publish_bounds_change(axis, previous_bounds);
            self.publish_auto_ranging_change(axis, previous_auto);
        }
        Ok(())
    }

    pub fn set_tick_label_formatter(
        &mut self,
        axis: AxisId,
        formatter: Option<TickLabelFormatterFn>,
    ) {
        self.axis_mut(axis).set_label_formatter(formatter);
        self.invalidate_axis(axis);
    }

    pub fn set_minor_tick_count(&mut self, axis: AxisId, count: u32) {
        self.axis_mut(axis).set_minor_tick_count(count);
        self.invalidate_axis(axis);
    }

    pub fn set_tick_label_rotation_deg(&mut self, axis: AxisId, rotation_deg: f64) -> ChartResult<()> {
        self.axis_mut(axis).set_tick_label_rotation_deg(rotation_deg)?;
        self.invalidate_axis(axis);
        debug!(?axis, rotation_deg, "tick label rotation changed");
        Ok(())
    }
}
