//! xy-chart: auto-ranging axes, nice tick layout and pan/zoom viewport for
//! 2-D Cartesian charts.
//!
//! The crate is rendering-agnostic. Hosts plug in a [`render::Renderer`] that
//! measures label text and draws the frames the engine produces; everything
//! else (ranges, ticks, input handling) lives here.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
