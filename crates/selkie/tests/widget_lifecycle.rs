//! Activation state machine: render, destroy, and the gateway preconditions.

mod common;

use selkie::{Error, Event, WidgetOptions};

use common::{node, record_events, rendered_widget, widget};

#[test]
fn render_is_exclusive_until_destroyed() {
    let (mut widget, _log) = widget(WidgetOptions::default());

    widget.render().unwrap();
    assert_eq!(widget.render(), Err(Error::AlreadyRendered));

    widget.destroy();
    assert!(!widget.is_rendered());
    widget.render().unwrap();
    assert!(widget.is_rendered());
}

#[test]
fn destroy_is_idempotent_and_kills_the_renderer_once() {
    let (mut widget, log) = rendered_widget();

    widget.destroy();
    widget.destroy();

    let log = log.borrow();
    assert_eq!(log.cleared, 1);
    assert_eq!(log.killed, 1);
}

#[test]
fn destroy_on_a_never_rendered_widget_is_a_no_op() {
    let (mut widget, log) = widget(WidgetOptions::default());
    widget.destroy();
    assert_eq!(log.borrow().killed, 0);
}

#[test]
fn gateway_operations_require_a_rendered_widget() {
    let (mut widget, _log) = widget(WidgetOptions::default());

    assert_eq!(
        widget.merge_nodes(vec![node("n1", 0.0, 0.0)]),
        Err(Error::NotRendered)
    );
    assert_eq!(widget.drop_nodes(["n1"]), Err(Error::NotRendered));
    assert_eq!(widget.toggle_edge_rendering(None), Err(Error::NotRendered));
    assert_eq!(widget.undo(), Err(Error::NotRendered));
    assert_eq!(widget.redo(), Err(Error::NotRendered));
    assert_eq!(widget.pointer_enter_node("n1"), Err(Error::NotRendered));
}

#[test]
fn destroy_drops_history_and_highlight_state() {
    let (mut widget, _log) = rendered_widget();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();
    assert!(widget.history().is_some_and(|log| log.len() == 1));

    widget.destroy();
    assert!(widget.history().is_none());
    assert!(widget.highlighted_nodes().is_empty());
    assert!(widget.hovered_node().is_none());
}

#[test]
fn render_starts_a_fresh_history_log() {
    let (mut widget, _log) = rendered_widget();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();

    widget.destroy();
    widget.render().unwrap();
    assert!(widget.history().is_some_and(|log| log.is_empty()));
}

#[test]
fn disabled_history_reports_history_disabled() {
    let (mut widget, _log) = widget(WidgetOptions::default().with_history(false));
    widget.render().unwrap();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();

    assert!(widget.history().is_none());
    assert!(!widget.clear_history());
    assert_eq!(widget.undo(), Err(Error::HistoryDisabled));
    assert_eq!(widget.redo(), Err(Error::HistoryDisabled));
}

#[test]
fn render_emits_the_rendered_event() {
    let (mut widget, _log) = widget(WidgetOptions::default());
    let events = record_events(&mut widget);

    widget.render().unwrap();
    assert_eq!(*events.borrow(), vec![Event::Rendered]);
}

#[test]
fn unsubscribed_listeners_stop_receiving() {
    let (mut widget, _log) = widget(WidgetOptions::default());
    let events = record_events(&mut widget);

    widget.render().unwrap();
    let count_after_render = events.borrow().len();

    // A second listener id, then drop it before the next event.
    let id = widget.subscribe(|_event| {});
    assert!(widget.unsubscribe(id));
    assert!(!widget.unsubscribe(id));

    widget.destroy();
    widget.render().unwrap();
    assert!(events.borrow().len() > count_after_render);
}
