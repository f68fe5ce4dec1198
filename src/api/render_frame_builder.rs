use tracing::warn;

use crate::core::{AxisId, DataPoint, Orientation};
use crate::error::ChartResult;
use crate::render::{
    LinePrimitive, PolylinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAlign,
};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes grid, ticks, labels and series for the current view.
    ///
    /// The x axis is drawn along the bottom edge and the y axis along the
    /// left edge; tick marks and labels extend outside the plot surface. An
    /// axis whose tick layout fails is left out of the frame with a warning,
    /// matching [`ChartEngine::layout`].
    pub fn build_render_frame(&mut self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        for axis in AxisId::BOTH {
            if let Err(err) = self.push_axis_primitives(axis, &mut frame) {
                warn!(?axis, error = %err, "skipping axis primitives");
            }
        }
        self.push_series_primitives(&mut frame);
        Ok(frame)
    }

    fn push_axis_primitives(&mut self, axis: AxisId, frame: &mut RenderFrame) -> ChartResult<()> {
        let ticks = self.compute_ticks(axis)?;
        let style = self.render_style;
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        let state = self.axis(axis);
        let orientation = state.orientation();
        let rotation_deg = state.tick_label_rotation_deg();

        // Perpendicular span of a tick line starting at the axis edge.
        let tick_line = |position: f64, length: f64, stroke_width, color| match orientation {
            Orientation::Horizontal => {
                LinePrimitive::new(position, height, position, height + length, stroke_width, color)
            }
            Orientation::Vertical => {
                LinePrimitive::new(0.0, position, -length, position, stroke_width, color)
            }
        };

        for tick in &ticks {
            let position = state.value_to_pixel(tick.value);
            if style.show_grid {
                frame.grid_lines.push(match orientation {
                    Orientation::Horizontal => LinePrimitive::new(
                        position,
                        0.0,
                        position,
                        height,
                        style.grid_line_width,
                        style.grid_line_color,
                    ),
                    Orientation::Vertical => LinePrimitive::new(
                        0.0,
                        position,
                        width,
                        position,
                        style.grid_line_width,
                        style.grid_line_color,
                    ),
                });
            }
            frame.tick_lines.push(tick_line(
                position,
                style.major_tick_length_px,
                style.tick_line_width,
                style.tick_color,
            ));

            if tick.label.is_empty() {
                continue;
            }
            let offset = style.major_tick_length_px + style.label_padding_px;
            let label = match orientation {
                Orientation::Horizontal => TextPrimitive::new(
                    tick.label.clone(),
                    position,
                    height + offset,
                    style.label_font_size_px,
                    style.label_color,
                    TextHAlign::Center,
                    TextVAlign::Top,
                ),
                Orientation::Vertical => TextPrimitive::new(
                    tick.label.clone(),
                    -offset,
                    position,
                    style.label_font_size_px,
                    style.label_color,
                    TextHAlign::Right,
                    TextVAlign::Middle,
                ),
            };
            frame.labels.push(label.with_rotation(rotation_deg));
        }

        if style.show_minor_ticks {
            for value in state.minor_ticks() {
                frame.tick_lines.push(tick_line(
                    state.value_to_pixel(value),
                    style.minor_tick_length_px,
                    style.tick_line_width,
                    style.tick_color,
                ));
            }
        }
        Ok(())
    }

    fn push_series_primitives(&self, frame: &mut RenderFrame) {
        let style = self.render_style;
        for series in self.series.iter() {
            let points: Vec<(f64, f64)> = series
                .points()
                .iter()
                .filter(|point| point.x.is_finite() && point.y.is_finite())
                .map(|&DataPoint { x, y }| {
                    (self.x_axis.value_to_pixel(x), self.y_axis.value_to_pixel(y))
                })
                .collect();
            if points.is_empty() {
                continue;
            }
            frame.series.push(PolylinePrimitive {
                points,
                stroke_width: style.series_line_width,
                color: style.series_line_color,
            });
        }
    }
}
