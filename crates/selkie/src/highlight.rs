//! Hover-driven sub-graph emphasis.
//!
//! On hover-enter the tracker rebuilds two transient sets (highlighted node
//! keys, highlighted edge keys) from the hovered node, the graph topology and
//! the configured inclusion rules, raising the z-order of everything included.
//! Hover-leave resets z to baseline and empties both sets.

use indexmap::IndexSet;

use crate::WidgetGraph;
use crate::attrs::{Z_BASELINE, Z_RAISED};
use crate::renderer::RenderSettings;

/// Which neighbors join the highlight beyond the direct ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightRules {
    /// Also include `important` neighbors-of-neighbors.
    pub include_important_neighbors: bool,
    /// When gathering neighbors-of-neighbors, also include reverse-direction
    /// edges between the direct neighbor and the second-order neighbor.
    pub important_neighbors_bidirectional: bool,
}

#[derive(Debug, Default)]
pub struct HighlightTracker {
    nodes: IndexSet<String>,
    edges: IndexSet<String>,
    hovered: Option<String>,
}

impl HighlightTracker {
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn nodes(&self) -> &IndexSet<String> {
        &self.nodes
    }

    pub fn edges(&self) -> &IndexSet<String> {
        &self.edges
    }

    pub(crate) fn remove_node(&mut self, key: &str) {
        self.nodes.shift_remove(key);
    }

    pub(crate) fn remove_edge(&mut self, key: &str) {
        self.edges.shift_remove(key);
    }

    /// Drops all transient state without touching the graph. Used on teardown,
    /// when the graph may already be gone from the renderer's point of view.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.hovered = None;
    }

    /// Rebuilds the highlight sets for a hover on `key`.
    ///
    /// Any previous hover's state is reset first, so consecutive enters
    /// without an intervening leave never accumulate. Leaves the sets empty
    /// when edges are not rendered or the node is hidden/unknown.
    pub(crate) fn enter(
        &mut self,
        graph: &mut WidgetGraph,
        settings: &RenderSettings,
        rules: HighlightRules,
        key: &str,
    ) {
        self.leave(graph);
        if !settings.render_edges {
            return;
        }
        match graph.node(key) {
            Some(attrs) if !attrs.hidden => {}
            _ => return,
        }

        self.hovered = Some(key.to_string());
        let only_important = settings.render_just_important_edges;

        let neighbors: Vec<String> = graph
            .neighbors(key)
            .into_iter()
            .map(str::to_string)
            .collect();
        for neighbor in neighbors {
            let visible = graph.node(&neighbor).is_some_and(|attrs| !attrs.hidden);
            if !visible {
                continue;
            }

            let mut included_edge = false;
            for edge_key in edge_keys_between(graph, key, &neighbor, true) {
                if only_important && !edge_is_important(graph, &edge_key) {
                    continue;
                }
                self.edges.insert(edge_key);
                included_edge = true;
            }
            if !included_edge {
                continue;
            }
            self.nodes.insert(neighbor.clone());

            if rules.include_important_neighbors {
                self.include_important_neighbors_of(graph, &neighbor, only_important, rules);
            }
        }

        self.nodes.insert(key.to_string());

        for node_key in &self.nodes {
            if let Some(attrs) = graph.node_mut(node_key) {
                attrs.z = Z_RAISED;
            }
        }
        for edge_key in &self.edges {
            if let Some(attrs) = graph.edge_mut(edge_key) {
                attrs.z = Z_RAISED;
            }
        }
    }

    fn include_important_neighbors_of(
        &mut self,
        graph: &mut WidgetGraph,
        neighbor: &str,
        only_important: bool,
        rules: HighlightRules,
    ) {
        let second_order: Vec<String> = graph
            .neighbors(neighbor)
            .into_iter()
            .map(str::to_string)
            .collect();
        for candidate in second_order {
            let eligible = graph
                .node(&candidate)
                .is_some_and(|attrs| attrs.important && !attrs.hidden);
            if !eligible {
                continue;
            }

            let mut included_edge = false;
            for edge_key in edge_keys_between(
                graph,
                neighbor,
                &candidate,
                rules.important_neighbors_bidirectional,
            ) {
                if only_important && !edge_is_important(graph, &edge_key) {
                    continue;
                }
                self.edges.insert(edge_key);
                included_edge = true;
            }
            if included_edge {
                self.nodes.insert(candidate);
            }
        }
    }

    /// Resets z-order on the hovered node and everything highlighted, then
    /// empties both sets and the hovered reference.
    pub(crate) fn leave(&mut self, graph: &mut WidgetGraph) {
        if let Some(hovered) = self.hovered.take() {
            if let Some(attrs) = graph.node_mut(&hovered) {
                attrs.z = Z_BASELINE;
            }
        }
        for node_key in self.nodes.drain(..) {
            if let Some(attrs) = graph.node_mut(&node_key) {
                attrs.z = Z_BASELINE;
            }
        }
        for edge_key in self.edges.drain(..) {
            if let Some(attrs) = graph.edge_mut(&edge_key) {
                attrs.z = Z_BASELINE;
            }
        }
    }
}

fn edge_keys_between(
    graph: &WidgetGraph,
    a: &str,
    b: &str,
    both_directions: bool,
) -> Vec<String> {
    let mut keys: Vec<String> = graph
        .edges_between(a, b)
        .into_iter()
        .map(str::to_string)
        .collect();
    if both_directions {
        keys.extend(graph.edges_between(b, a).into_iter().map(str::to_string));
    }
    keys
}

fn edge_is_important(graph: &WidgetGraph, edge_key: &str) -> bool {
    graph.edge(edge_key).is_some_and(|attrs| attrs.important)
}
