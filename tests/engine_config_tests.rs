use xy_chart::ChartError;
use xy_chart::api::{ChartEngine, ChartEngineConfig, DEFAULT_ZOOM_FACTOR};
use xy_chart::core::{AxisId, AxisRangeTuning, TickLayoutTuning, Viewport};
use xy_chart::render::NullRenderer;

#[test]
fn config_json_round_trip() {
    let config = ChartEngineConfig::new(Viewport::new(1024, 768))
        .with_x_range(-5.0, 5.0)
        .with_y_range(0.0, 250.0)
        .with_auto_ranging(false)
        .with_zoom_factor(1.25)
        .with_minor_tick_count(4)
        .with_tick_label_rotation_deg(45.0)
        .with_range_tuning(AxisRangeTuning {
            margin_ratio: 0.05,
            fallback_margin: 2.0,
        });

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_use_defaults() {
    let parsed = ChartEngineConfig::from_json_str(r#"{"viewport":{"width":640,"height":480}}"#)
        .expect("parse");

    assert_eq!(parsed, ChartEngineConfig::new(Viewport::new(640, 480)));
    assert!(parsed.auto_ranging);
    assert_eq!(parsed.zoom_factor, DEFAULT_ZOOM_FACTOR);
    assert_eq!(parsed.minor_tick_count, 5);
    assert_eq!(parsed.tick_tuning, TickLayoutTuning::default());
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = ChartEngineConfig::from_json_str("{not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn engine_rejects_invalid_config() {
    let zero = ChartEngineConfig::new(Viewport::new(0, 100));
    assert!(matches!(
        ChartEngine::new(NullRenderer::default(), zero),
        Err(ChartError::InvalidViewport { .. })
    ));

    let inverted = ChartEngineConfig::new(Viewport::new(100, 100)).with_x_range(3.0, 1.0);
    assert!(matches!(
        ChartEngine::new(NullRenderer::default(), inverted),
        Err(ChartError::InvalidBounds { .. })
    ));

    let no_zoom = ChartEngineConfig::new(Viewport::new(100, 100)).with_zoom_factor(1.0);
    assert!(matches!(
        ChartEngine::new(NullRenderer::default(), no_zoom),
        Err(ChartError::InvalidData(_))
    ));

    let bad_tuning = ChartEngineConfig::new(Viewport::new(100, 100)).with_tick_tuning(
        TickLayoutTuning {
            max_passes: 0,
            ..TickLayoutTuning::default()
        },
    );
    assert!(ChartEngine::new(NullRenderer::default(), bad_tuning).is_err());
}

#[test]
fn pinned_config_keeps_configured_ranges() {
    let config = ChartEngineConfig::new(Viewport::new(400, 200))
        .with_x_range(10.0, 20.0)
        .with_y_range(-1.0, 1.0)
        .with_auto_ranging(false)
        .with_minor_tick_count(2);
    let engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    assert_eq!(engine.x_axis().range().bounds(), (10.0, 20.0));
    assert_eq!(engine.y_axis().range().bounds(), (-1.0, 1.0));
    assert!(!engine.auto_ranging(AxisId::X));
    assert_eq!(engine.x_axis().minor_tick_count(), 2);
    assert_eq!(engine.x_axis().scale(), 40.0);
    assert_eq!(engine.y_axis().scale(), -100.0);
    assert_eq!(engine.offset(AxisId::Y), 200.0);
}

#[test]
fn auto_config_without_data_uses_fallback_margin() {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(400, 200)),
    )
    .expect("engine init");

    assert_eq!(engine.x_axis().range().bounds(), (-1.0, 1.0));
    assert_eq!(engine.y_axis().range().bounds(), (-1.0, 1.0));
    assert!(engine.auto_ranging(AxisId::Y));
}
