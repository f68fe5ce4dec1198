use std::cell::RefCell;
use std::rc::Rc;

use xy_chart::ChartError;
use xy_chart::api::{
    ChartEngine, ChartEngineConfig, ChartEvent, ChartObserver, InvalidationTopic, RenderStyle,
    ViewportContext,
};
use xy_chart::core::{AxisId, DataPoint, Viewport};
use xy_chart::interaction::{HitTarget, InteractionMode, PointerButton};
use xy_chart::render::NullRenderer;

#[derive(Clone)]
struct RecordingObserver {
    id: String,
    events: Rc<RefCell<Vec<(ChartEvent, ViewportContext)>>>,
}

impl RecordingObserver {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(ChartEvent, ViewportContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: ChartEvent, context: ViewportContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &ChartEvent) -> &'static str {
    match event {
        ChartEvent::BoundsChanged { axis: AxisId::X, .. } => "bounds_x",
        ChartEvent::BoundsChanged { axis: AxisId::Y, .. } => "bounds_y",
        ChartEvent::AutoRangingChanged { axis: AxisId::X, .. } => "auto_x",
        ChartEvent::AutoRangingChanged { axis: AxisId::Y, .. } => "auto_y",
        ChartEvent::TicksChanged { axis: AxisId::X, .. } => "ticks_x",
        ChartEvent::TicksChanged { axis: AxisId::Y, .. } => "ticks_y",
        ChartEvent::ViewportResized { .. } => "resized",
        ChartEvent::PanStarted => "pan_start",
        ChartEvent::PanEnded => "pan_end",
        ChartEvent::DataUpdated { .. } => "data",
        ChartEvent::Rendered => "rendered",
    }
}

fn build_engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(800, 500));
    ChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn observer_receives_deterministic_event_sequence() {
    let mut engine = build_engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_observer(Box::new(RecordingObserver::new("recorder", events.clone())))
        .expect("register observer");

    engine
        .pointer_down(PointerButton::Primary, HitTarget::PlotSurface, 100.0, 100.0)
        .expect("press");
    engine.pointer_move(140.0, 160.0).expect("drag");
    engine.pointer_up();
    engine.render().expect("render");

    let kinds: Vec<&'static str> = events.borrow().iter().map(|(e, _)| event_kind(e)).collect();
    assert_eq!(
        kinds,
        vec![
            "pan_start",
            "bounds_x",
            "auto_x",
            "bounds_y",
            "auto_y",
            "pan_end",
            "ticks_x",
            "ticks_y",
            "rendered",
        ]
    );
}

#[test]
fn context_reflects_state_after_change() {
    let mut engine = build_engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_observer(Box::new(RecordingObserver::new("recorder", events.clone())))
        .expect("register observer");

    engine.set_bounds(AxisId::X, 2.0, 4.0).expect("bounds");

    let recorded = events.borrow();
    let (event, context) = recorded.first().copied().expect("bounds event");
    assert_eq!(
        event,
        ChartEvent::BoundsChanged {
            axis: AxisId::X,
            lower: 2.0,
            upper: 4.0
        }
    );
    assert_eq!(context.bounds(AxisId::X), (2.0, 4.0));
    assert!(!context.x_auto_ranging);
    assert!(context.y_auto_ranging);
    assert_eq!(context.interaction_mode, InteractionMode::Idle);
}

#[test]
fn data_events_carry_series_count() {
    let mut engine = build_engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_observer(Box::new(RecordingObserver::new("recorder", events.clone())))
        .expect("register observer");

    engine
        .add_points(vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 5.0)])
        .expect("add points");

    let recorded = events.borrow();
    assert_eq!(recorded[0].0, ChartEvent::DataUpdated { series_count: 1 });
    assert!(
        recorded
            .iter()
            .any(|(event, _)| matches!(event, ChartEvent::BoundsChanged { axis: AxisId::X, .. }))
    );
}

#[test]
fn observer_registry_enforces_unique_non_empty_ids() {
    let mut engine = build_engine();
    let events = Rc::new(RefCell::new(Vec::new()));

    engine
        .register_observer(Box::new(RecordingObserver::new("a", events.clone())))
        .expect("first registration");
    let duplicate = engine
        .register_observer(Box::new(RecordingObserver::new("a", events.clone())))
        .expect_err("duplicate id must fail");
    assert!(matches!(duplicate, ChartError::InvalidData(_)));
    let empty = engine
        .register_observer(Box::new(RecordingObserver::new("", events.clone())))
        .expect_err("empty id must fail");
    assert!(matches!(empty, ChartError::InvalidData(_)));

    assert_eq!(engine.observer_count(), 1);
    assert!(engine.has_observer("a"));
    assert!(engine.unregister_observer("a"));
    assert!(!engine.unregister_observer("a"));
    assert_eq!(engine.observer_count(), 0);
}

#[test]
fn layout_drains_pending_invalidation_once() {
    let mut engine = build_engine();
    assert!(engine.needs_layout());

    let drained = engine.layout().expect("layout");
    assert!(drained.contains_topic(InvalidationTopic::XAxis));
    assert!(!engine.needs_layout());
    assert!(engine.layout().expect("second layout").is_none());

    engine.pan(AxisId::Y, 15.0).expect("pan");
    let pending = engine.pending_invalidation();
    assert!(pending.contains_topic(InvalidationTopic::YAxis));
    assert!(!pending.contains_topic(InvalidationTopic::XAxis));

    engine
        .set_render_style(RenderStyle {
            show_grid: false,
            ..RenderStyle::default()
        })
        .expect("style");
    assert!(
        engine
            .take_pending_invalidation()
            .contains_topic(InvalidationTopic::Style)
    );
    assert!(!engine.needs_layout());

    engine
        .set_viewport(Viewport::new(640, 480))
        .expect("resize");
    assert!(
        engine
            .pending_invalidation()
            .contains_topic(InvalidationTopic::Viewport)
    );
}

#[test]
fn repeated_drags_share_one_tick_recompute_per_layout() {
    let mut engine = build_engine();
    engine.layout().expect("initial layout");
    let misses = engine.x_axis().tick_cache_stats().misses;

    engine
        .pointer_down(PointerButton::Primary, HitTarget::PlotSurface, 10.0, 10.0)
        .expect("press");
    for step in 1..=20 {
        engine
            .pointer_move(10.0 + f64::from(step), 10.0)
            .expect("drag");
    }
    engine.pointer_up();
    engine.layout().expect("layout");

    assert_eq!(engine.x_axis().tick_cache_stats().misses, misses + 1);
}
