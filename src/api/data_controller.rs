use tracing::{debug, trace};

use crate::core::{DataPoint, DataSeries, SeriesCollection};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn series(&self) -> &SeriesCollection {
        &self.series
    }

    /// Adds a named series and refits auto-ranging axes.
    pub fn add_series(&mut self, series: DataSeries) -> ChartResult<()> {
        debug!(name = series.name(), count = series.len(), "add series");
        self.series.add(series)?;
        self.on_data_changed()
    }

    /// Adds points under a generated `"data N"` name and returns that name.
    pub fn add_points(&mut self, points: Vec<DataPoint>) -> ChartResult<String> {
        let count = points.len();
        let name = self.series.add_unnamed(points);
        debug!(name = %name, count, "add unnamed series");
        self.on_data_changed()?;
        Ok(name)
    }

    /// Removes a series by name. Returns `Ok(false)` when no such series exists.
    pub fn remove_series(&mut self, name: &str) -> ChartResult<bool> {
        if self.series.remove(name).is_none() {
            return Ok(false);
        }
        debug!(name, "removed series");
        self.on_data_changed()?;
        Ok(true)
    }

    pub fn clear_series(&mut self) -> ChartResult<()> {
        if self.series.is_empty() {
            return Ok(());
        }
        self.series.clear();
        debug!("cleared all series");
        self.on_data_changed()
    }

    fn on_data_changed(&mut self) -> ChartResult<()> {
        trace!(series_count = self.series.len(), "data changed");
        self.publish_data_update();
        self.refresh_auto_ranging_axes()
    }
}
