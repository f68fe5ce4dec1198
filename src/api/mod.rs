//! Public engine facade: the viewport controller and its notifications.

mod axis_controller;
mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod interaction_controller;
mod invalidation;
mod layout_coordinator;
mod observer;
mod observer_dispatch;
mod observer_registry;
mod pan_controller;
mod render_frame_builder;
mod render_style;
mod resize_controller;
mod zoom_controller;

pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, DEFAULT_ZOOM_FACTOR};
pub use invalidation::{InvalidationTopic, InvalidationTopics};
pub use observer::{ChartEvent, ChartObserver, ViewportContext};
pub use render_style::RenderStyle;
