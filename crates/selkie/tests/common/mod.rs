//! Shared test fixtures: a recording renderer double and widget builders.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use selkie::{
    EdgeMerge, EdgePatch, Event, GraphWidget, NodeMerge, NodePatch, RenderSettings, Renderer,
    RendererFactory, WidgetGraph, WidgetOptions,
};

/// Call counters shared with the test after the renderer moves into the
/// widget.
#[derive(Debug, Default)]
pub struct RenderLog {
    pub process: usize,
    pub refresh: usize,
    pub scheduled: usize,
    pub cleared: usize,
    pub killed: usize,
}

pub struct RecordingRenderer {
    log: Rc<RefCell<RenderLog>>,
    settings: RenderSettings,
}

impl Renderer for RecordingRenderer {
    fn process(&mut self) {
        self.log.borrow_mut().process += 1;
    }

    fn refresh(&mut self) {
        self.log.borrow_mut().refresh += 1;
    }

    fn schedule_refresh(&mut self) {
        self.log.borrow_mut().scheduled += 1;
    }

    fn clear(&mut self) {
        self.log.borrow_mut().cleared += 1;
    }

    fn kill(&mut self) {
        self.log.borrow_mut().killed += 1;
    }

    fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }
}

pub fn widget_on(
    graph: Rc<RefCell<WidgetGraph>>,
    options: WidgetOptions,
) -> (GraphWidget, Rc<RefCell<RenderLog>>) {
    let log: Rc<RefCell<RenderLog>> = Rc::default();
    let sink = Rc::clone(&log);
    let factory: RendererFactory = Box::new(move |_graph| {
        Box::new(RecordingRenderer {
            log: Rc::clone(&sink),
            settings: RenderSettings::default(),
        })
    });
    (GraphWidget::new(graph, options, factory), log)
}

pub fn widget(options: WidgetOptions) -> (GraphWidget, Rc<RefCell<RenderLog>>) {
    widget_on(Rc::new(RefCell::new(WidgetGraph::new())), options)
}

/// A rendered widget over an empty graph with default options.
pub fn rendered_widget() -> (GraphWidget, Rc<RefCell<RenderLog>>) {
    let (mut widget, log) = widget(WidgetOptions::default());
    widget.render().unwrap();
    (widget, log)
}

/// Records every emitted event into a shared vec.
pub fn record_events(widget: &mut GraphWidget) -> Rc<RefCell<Vec<Event>>> {
    let seen: Rc<RefCell<Vec<Event>>> = Rc::default();
    let sink = Rc::clone(&seen);
    widget.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    seen
}

pub fn node(key: &str, x: f64, y: f64) -> NodeMerge {
    NodeMerge::new(key, NodePatch::at(x, y))
}

pub fn edge(source: &str, target: &str) -> EdgeMerge {
    EdgeMerge::new(source, target, EdgePatch::default())
}
