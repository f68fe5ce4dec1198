use crate::core::AxisId;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Shifts one axis by `pixel_delta` pixels and pins it.
    ///
    /// The data shift is `pixel_delta / scale`, so `pan(a, d)` followed by
    /// `pan(a, -d)` restores the bounds.
    pub fn pan(&mut self, axis: AxisId, pixel_delta: f64) -> ChartResult<()> {
        let range = self.axis(axis).range().panned(pixel_delta)?;
        self.commit_user_ranges(&[(axis, range)])
    }
}
