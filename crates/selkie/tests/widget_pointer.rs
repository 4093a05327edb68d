//! Pointer interaction: click vs. drag, context menu, node info boxes and
//! timed highlights.

mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use selkie::{
    AppMode, ContextMenuEntry, Event, GraphWidget, NodeAttributes, NodeInfoContent, NodeMerge,
    NodePatch, WidgetOptions, Z_BASELINE, Z_RAISED,
};

use common::{node, record_events, rendered_widget, widget};

fn node_attrs(widget: &GraphWidget, key: &str) -> NodeAttributes {
    widget
        .export_graph(true)
        .nodes
        .into_iter()
        .find(|exported| exported.key == key)
        .map(|exported| exported.attributes)
        .unwrap_or_else(|| panic!("node {key} not in export"))
}

#[test]
fn press_and_release_without_motion_is_a_click() {
    let (mut widget, _log) = rendered_widget();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();
    let events = record_events(&mut widget);

    widget.pointer_down_node("n1").unwrap();
    widget.pointer_up().unwrap();

    assert_eq!(
        *events.borrow(),
        vec![Event::ClickNode { key: "n1".into() }]
    );
}

#[test]
fn dragging_moves_the_node_in_dynamic_mode() {
    let (mut widget, _log) = rendered_widget();
    widget.set_app_mode(AppMode::Dynamic).unwrap();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();
    let events = record_events(&mut widget);

    widget.pointer_down_node("n1").unwrap();
    widget.pointer_move(4.0, 5.0).unwrap();
    widget.pointer_up().unwrap();

    let attrs = node_attrs(&widget, "n1");
    assert_eq!((attrs.x, attrs.y), (4.0, 5.0));
    assert_eq!(
        *events.borrow(),
        vec![
            Event::DragNode {
                key: "n1".into(),
                x: 4.0,
                y: 5.0
            },
            Event::DraggedNode { key: "n1".into() },
        ]
    );
}

#[test]
fn static_mode_ignores_pointer_motion() {
    let (mut widget, _log) = rendered_widget();
    widget.merge_nodes(vec![node("n1", 1.0, 2.0)]).unwrap();
    let events = record_events(&mut widget);

    widget.pointer_down_node("n1").unwrap();
    widget.pointer_move(9.0, 9.0).unwrap();
    widget.pointer_up().unwrap();

    let attrs = node_attrs(&widget, "n1");
    assert_eq!((attrs.x, attrs.y), (1.0, 2.0));
    // Never moved, so the release still counts as a click.
    assert_eq!(
        *events.borrow(),
        vec![Event::ClickNode { key: "n1".into() }]
    );
}

#[test]
fn press_on_an_unknown_node_arms_nothing() {
    let (mut widget, _log) = rendered_widget();
    let events = record_events(&mut widget);

    widget.pointer_down_node("ghost").unwrap();
    widget.pointer_up().unwrap();

    assert!(events.borrow().is_empty());
}

#[test]
fn right_click_opens_the_menu_and_selection_runs_the_entry() {
    let picked: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&picked);
    let options = WidgetOptions::default().with_context_menu(vec![
        ContextMenuEntry::new("inspect", |_key| {}),
        ContextMenuEntry::new("flag", move |key| sink.borrow_mut().push(key.to_string())),
    ]);
    let (mut widget, _log) = widget(options);
    widget.render().unwrap();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();
    let events = record_events(&mut widget);

    widget.pointer_right_click_node("n1").unwrap();
    assert_eq!(widget.open_context_menu_node(), Some("n1"));
    assert_eq!(widget.context_menu_labels(), vec!["inspect", "flag"]);

    assert!(widget.select_context_menu_entry(1).unwrap());
    assert_eq!(*picked.borrow(), vec!["n1".to_string()]);
    assert_eq!(widget.open_context_menu_node(), None);

    // No menu open anymore.
    assert!(!widget.select_context_menu_entry(1).unwrap());

    assert_eq!(
        *events.borrow(),
        vec![
            Event::RightClickNode { key: "n1".into() },
            Event::ContextMenuOpened { key: "n1".into() },
            Event::ContextMenuClosed { key: "n1".into() },
        ]
    );
}

#[test]
fn right_click_without_entries_only_reports_the_event() {
    let (mut widget, _log) = rendered_widget();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();
    let events = record_events(&mut widget);

    widget.pointer_right_click_node("n1").unwrap();

    assert_eq!(widget.open_context_menu_node(), None);
    assert_eq!(
        *events.borrow(),
        vec![Event::RightClickNode { key: "n1".into() }]
    );
}

#[test]
fn out_of_range_menu_selection_keeps_the_menu_open() {
    let options = WidgetOptions::default()
        .with_context_menu(vec![ContextMenuEntry::new("inspect", |_key| {})]);
    let (mut widget, _log) = widget(options);
    widget.render().unwrap();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();

    widget.pointer_right_click_node("n1").unwrap();
    assert!(!widget.select_context_menu_entry(5).unwrap());
    assert_eq!(widget.open_context_menu_node(), Some("n1"));

    widget.close_context_menu();
    assert_eq!(widget.open_context_menu_node(), None);
}

#[test]
fn resolved_node_info_opens_the_box() {
    let (mut widget, _log) = rendered_widget();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();
    let events = record_events(&mut widget);

    let token = widget.open_node_info("n1").unwrap().unwrap();
    let content = NodeInfoContent {
        header: Some("Node One".into()),
        ..NodeInfoContent::default()
    };
    assert!(widget.resolve_node_info(token, Ok(content.clone())));

    let (key, open) = widget.open_node_info_box().unwrap();
    assert_eq!(key, "n1");
    assert_eq!(open, &content);
    assert_eq!(
        *events.borrow(),
        vec![Event::NodeInfoBoxOpened { key: "n1".into() }]
    );

    assert!(widget.close_node_info());
    assert!(widget.open_node_info_box().is_none());
}

#[test]
fn unknown_nodes_get_no_info_token() {
    let (mut widget, _log) = rendered_widget();
    assert_eq!(widget.open_node_info("ghost").unwrap(), None);
}

#[test]
fn superseded_info_completions_are_dropped() {
    let (mut widget, _log) = rendered_widget();
    widget
        .merge_nodes(vec![node("n1", 0.0, 0.0), node("n2", 0.0, 0.0)])
        .unwrap();

    let first = widget.open_node_info("n1").unwrap().unwrap();
    let second = widget.open_node_info("n2").unwrap().unwrap();

    assert!(!widget.resolve_node_info(first, Ok(NodeInfoContent::default())));
    assert!(widget.open_node_info_box().is_none());

    assert!(widget.resolve_node_info(second, Ok(NodeInfoContent::default())));
    assert_eq!(widget.open_node_info_box().unwrap().0, "n2");
}

#[test]
fn completions_after_destroy_are_dropped() {
    let (mut widget, _log) = rendered_widget();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();

    let token = widget.open_node_info("n1").unwrap().unwrap();
    widget.destroy();

    assert!(!widget.resolve_node_info(token, Ok(NodeInfoContent::default())));
}

#[test]
fn failed_lookups_fall_back_to_attribute_content() {
    let (mut widget, _log) = rendered_widget();
    widget
        .merge_nodes(vec![NodeMerge::new(
            "n1",
            NodePatch {
                label: Some("Node One".into()),
                category: Some("person".into()),
                score: Some(0.5),
                ..NodePatch::default()
            },
        )])
        .unwrap();

    let token = widget.open_node_info("n1").unwrap().unwrap();
    assert!(widget.resolve_node_info(token, Err("backend unreachable".into())));

    let (_, content) = widget.open_node_info_box().unwrap();
    assert_eq!(content.preheader.as_deref(), Some("person"));
    assert_eq!(content.header.as_deref(), Some("Node One"));
    assert_eq!(content.footer.as_deref(), Some("score: 0.5"));
}

#[test]
fn dropping_the_inspected_node_closes_its_info_box() {
    let (mut widget, _log) = rendered_widget();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();

    let token = widget.open_node_info("n1").unwrap().unwrap();
    widget
        .resolve_node_info(token, Ok(NodeInfoContent::default()));
    assert!(widget.open_node_info_box().is_some());

    widget.drop_nodes(["n1"]).unwrap();
    assert!(widget.open_node_info_box().is_none());
}

#[test]
fn timed_highlight_reverts_when_its_deadline_fires() {
    let (mut widget, _log) = rendered_widget();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();

    widget
        .highlight_node("n1", Duration::from_secs(3600))
        .unwrap();
    assert_eq!(node_attrs(&widget, "n1").z, Z_RAISED);

    // Deadline far in the future: nothing fires yet.
    assert_eq!(widget.process_due_unhighlights(Instant::now()), 0);
    assert_eq!(node_attrs(&widget, "n1").z, Z_RAISED);

    // Re-highlighting replaces the deadline with an immediate one.
    widget.highlight_node("n1", Duration::ZERO).unwrap();
    assert_eq!(widget.process_due_unhighlights(Instant::now()), 1);
    assert_eq!(node_attrs(&widget, "n1").z, Z_BASELINE);
    assert_eq!(widget.process_due_unhighlights(Instant::now()), 0);
}

#[test]
fn cancelled_unhighlights_never_fire() {
    let (mut widget, _log) = rendered_widget();
    widget.merge_nodes(vec![node("n1", 0.0, 0.0)]).unwrap();

    widget.highlight_node("n1", Duration::ZERO).unwrap();
    assert!(widget.cancel_unhighlight("n1"));
    assert!(!widget.cancel_unhighlight("n1"));

    assert_eq!(widget.process_due_unhighlights(Instant::now()), 0);
    assert_eq!(node_attrs(&widget, "n1").z, Z_RAISED);
}

#[test]
fn highlighting_an_unknown_node_is_tolerated() {
    let (mut widget, _log) = rendered_widget();
    widget
        .highlight_node("ghost", Duration::ZERO)
        .unwrap();
    assert_eq!(widget.process_due_unhighlights(Instant::now()), 0);
}
