use std::cell::RefCell;
use std::rc::Rc;

use bar_chart_rs::ChartError;
use bar_chart_rs::api::{BarChartConfig, BarChartEngine};
use bar_chart_rs::core::{Bar, Viewport};
use bar_chart_rs::extensions::{ChartPlugin, PluginContext, PluginEvent};
use bar_chart_rs::interaction::InteractionMode;
use bar_chart_rs::render::NullRenderer;

type EventLog = Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: EventLog,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: EventLog) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::ConfigUpdated => "config",
        PluginEvent::BarsUpdated { .. } => "bars",
        PluginEvent::Resized { .. } => "resize",
        PluginEvent::OffsetChanged { .. } => "offset",
        PluginEvent::DragStarted => "drag_start",
        PluginEvent::DragMoved { .. } => "drag_move",
        PluginEvent::DragEnded => "drag_end",
        PluginEvent::BarSelected { .. } => "select",
        PluginEvent::Rendered => "rendered",
    }
}

fn build_engine(config: BarChartConfig) -> BarChartEngine<NullRenderer> {
    BarChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn ten_bars() -> Vec<Bar> {
    (0..10)
        .map(|i| Bar::from_values(format!("b{i}"), &[1.0]))
        .collect()
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut engine = build_engine(BarChartConfig::new(8.0, 2.0));
    let events = EventLog::default();
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.set_bars(ten_bars()).expect("set bars");
    engine
        .resize(Viewport::new(40.0, 90.0))
        .expect("resize viewport");
    engine.set_center_bar_index(Some(5));
    engine.drag_start();
    engine.drag_move(4.0);
    engine.drag_end();
    engine.render().expect("render");

    let events = events.borrow();
    let kinds: Vec<&'static str> = events.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec![
            "bars",
            "resize",
            "offset",
            "drag_start",
            "drag_move",
            "drag_end",
            "rendered",
        ]
    );

    assert_eq!(
        events[2].0,
        PluginEvent::OffsetChanged {
            old_offset: 0.0,
            offset: 35.0
        }
    );
    assert_eq!(events[4].0, PluginEvent::DragMoved { offset: 25.0 });
    assert_eq!(events[4].1.interaction_mode, InteractionMode::Dragging);
    assert_eq!(events[5].1.interaction_mode, InteractionMode::Idle);
    assert_eq!(events[5].1.offset, 25.0);
    assert_eq!(events[6].1.bars_len, 10);
}

#[test]
fn plugin_observes_bar_selection() {
    let config = BarChartConfig::new(8.0, 2.0)
        .with_center_bar_index(Some(5))
        .with_select_center_bar_on_scroll(true);
    let mut engine = build_engine(config);
    engine.set_bars(ten_bars()).expect("set bars");
    engine
        .resize(Viewport::new(40.0, 90.0))
        .expect("resize viewport");

    let events = EventLog::default();
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.drag_start();
    engine.drag_move(0.0);

    let events = events.borrow();
    let (event, context) = events.last().expect("selection event");
    assert_eq!(*event, PluginEvent::BarSelected { index: 4 });
    assert_eq!(context.center_bar_index, Some(5));
}

#[test]
fn config_update_is_reported_before_recentering() {
    let mut engine = build_engine(BarChartConfig::new(8.0, 2.0));
    engine.set_bars(ten_bars()).expect("set bars");
    engine
        .resize(Viewport::new(40.0, 90.0))
        .expect("resize viewport");

    let events = EventLog::default();
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine
        .set_config(BarChartConfig::new(8.0, 2.0).with_center_bar_index(Some(5)))
        .expect("set config");

    let kinds: Vec<&'static str> = events
        .borrow()
        .iter()
        .map(|(event, _)| event_kind(event))
        .collect();
    assert_eq!(kinds, vec!["config", "offset"]);
}

#[test]
fn duplicate_and_empty_plugin_ids_are_rejected() {
    let mut engine = build_engine(BarChartConfig::new(8.0, 2.0));
    let events = EventLog::default();

    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("first registration");
    let err = engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect_err("duplicate id must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = engine
        .register_plugin(Box::new(RecordingPlugin::new("", events)))
        .expect_err("empty id must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    assert_eq!(engine.plugin_count(), 1);
    assert!(engine.unregister_plugin("recorder"));
    assert!(!engine.unregister_plugin("recorder"));
    assert!(!engine.has_plugin("recorder"));
}
