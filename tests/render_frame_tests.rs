use std::sync::Arc;

use xy_chart::api::{ChartEngine, ChartEngineConfig, RenderStyle};
use xy_chart::core::{AxisId, DataSeries, Viewport};
use xy_chart::render::{Color, NullRenderer, TextHAlign, TextPrimitive, TextVAlign};

fn engine_with_line() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(800, 500));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .add_series(
            DataSeries::from_function("ramp", 0.0, 100.0, 11, |x| x * 2.0).expect("series"),
        )
        .expect("add series");
    engine
}

#[test]
fn render_hands_a_valid_frame_to_the_renderer() {
    let mut engine = engine_with_line();
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    let frame = renderer.last_frame.as_ref().expect("frame");
    frame.validate().expect("valid frame");
    assert_eq!(frame.viewport, Viewport::new(800, 500));
    assert_eq!(frame.series.len(), 1);
    assert_eq!(frame.series[0].points.len(), 11);
    assert!(!frame.labels.is_empty());
}

#[test]
fn grid_lines_follow_major_ticks() {
    let mut engine = engine_with_line();
    let frame = engine.build_render_frame().expect("frame");
    let x_ticks = engine.compute_ticks(AxisId::X).expect("x ticks");
    let y_ticks = engine.compute_ticks(AxisId::Y).expect("y ticks");

    assert_eq!(frame.grid_lines.len(), x_ticks.len() + y_ticks.len());
    assert_eq!(frame.labels.len(), x_ticks.len() + y_ticks.len());
    for (line, tick) in frame.grid_lines.iter().zip(&x_ticks) {
        let expected = engine.x_axis().value_to_pixel(tick.value);
        assert!((line.x1 - expected).abs() <= 1e-9);
        assert_eq!(line.y1, 0.0);
        assert_eq!(line.y2, 500.0);
    }
}

#[test]
fn style_toggles_grid_and_minor_ticks() {
    let mut engine = engine_with_line();
    let with_minor = engine.build_render_frame().expect("frame");

    engine
        .set_render_style(RenderStyle {
            show_grid: false,
            show_minor_ticks: false,
            ..RenderStyle::default()
        })
        .expect("style");
    let bare = engine.build_render_frame().expect("frame");

    assert!(bare.grid_lines.is_empty());
    assert!(bare.tick_lines.len() < with_minor.tick_lines.len());
    let major_count = engine.compute_ticks(AxisId::X).expect("x").len()
        + engine.compute_ticks(AxisId::Y).expect("y").len();
    assert_eq!(bare.tick_lines.len(), major_count);
}

#[test]
fn invalid_style_is_rejected() {
    let mut engine = engine_with_line();
    let err = engine.set_render_style(RenderStyle {
        label_font_size_px: 0.0,
        ..RenderStyle::default()
    });
    assert!(err.is_err());

    let err = engine.set_render_style(RenderStyle {
        grid_line_color: Color::rgba(1.5, 0.0, 0.0, 1.0),
        ..RenderStyle::default()
    });
    assert!(err.is_err());
    assert_eq!(engine.render_style(), RenderStyle::default());
}

#[test]
fn formatter_override_drives_labels_and_lookup() {
    let mut engine = engine_with_line();
    engine.set_tick_label_formatter(
        AxisId::X,
        Some(Arc::new(|value: f64| format!("{value:.0} s"))),
    );

    let frame = engine.build_render_frame().expect("frame");
    let x_labels: Vec<&TextPrimitive> = frame
        .labels
        .iter()
        .filter(|label| label.v_align == TextVAlign::Top)
        .collect();
    assert!(!x_labels.is_empty());
    assert!(x_labels.iter().all(|label| label.text.ends_with(" s")));
    assert!(x_labels.iter().all(|label| label.h_align == TextHAlign::Center));
    assert_eq!(engine.tick_label(AxisId::X, 40.0).as_deref(), Some("40 s"));
}

#[test]
fn cached_tick_label_is_exact_value_lookup() {
    let mut engine = engine_with_line();
    let ticks = engine.compute_ticks(AxisId::Y).expect("ticks");
    let first = ticks.first().expect("at least one tick");

    assert_eq!(
        engine.tick_label(AxisId::Y, first.value).as_deref(),
        Some(first.label.as_str())
    );
    assert_eq!(engine.tick_label(AxisId::Y, first.value + 1e-3), None);
}

#[test]
fn minor_ticks_subdivide_major_intervals() {
    let mut engine = engine_with_line();
    assert!(engine.minor_ticks(AxisId::X).is_empty());

    let ticks = engine.compute_ticks(AxisId::X).expect("ticks");
    let delta = engine.x_axis().major_tick_delta().expect("delta");
    let minor = engine.minor_ticks(AxisId::X);

    assert!(!minor.is_empty());
    let (lower, upper) = engine.x_axis().range().bounds();
    for value in &minor {
        assert!(*value >= lower && *value <= upper);
        let offset = (value / delta).fract().abs();
        assert!(offset > 1e-9 && offset < 1.0 - 1e-9);
    }
    assert!(minor.len() >= (ticks.len() - 1) * 4);
}

#[test]
fn narrow_axis_at_large_magnitude_renders() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 600)),
    )
    .expect("engine init");
    engine
        .set_bounds(AxisId::X, 1.000_000_000_000_000_5e17, 1.000_000_000_000_001e17)
        .expect("bounds");

    let ticks = engine.compute_ticks(AxisId::X).expect("ticks");
    let (lower, upper) = engine.x_axis().range().bounds();
    assert!(ticks.windows(2).all(|pair| pair[0].value < pair[1].value));
    assert!(ticks.iter().all(|tick| tick.value >= lower && tick.value <= upper));
    let minor = engine.minor_ticks(AxisId::X);
    assert!(minor.windows(2).all(|pair| pair[0] < pair[1]));

    engine.render().expect("render");
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn axis_without_tick_layout_is_left_out_of_frame() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(1, 400)),
    )
    .expect("engine init");
    // One pixel over a span near f64::MAX: the target tick delta overflows.
    engine
        .set_bounds(AxisId::X, -8.0e307, 8.0e307)
        .expect("bounds");
    assert!(engine.compute_ticks(AxisId::X).is_err());

    engine.render().expect("render");
    let frame = engine.renderer().last_frame.clone().expect("frame");
    let y_ticks = engine.compute_ticks(AxisId::Y).expect("y ticks");
    assert!(!y_ticks.is_empty());
    assert_eq!(frame.labels.len(), y_ticks.len());
    assert!(
        frame
            .labels
            .iter()
            .all(|label| label.h_align == TextHAlign::Right)
    );
}
