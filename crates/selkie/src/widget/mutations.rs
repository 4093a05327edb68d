//! The mutation gateway.
//!
//! Every graph mutation flows through here: capture the pre-state (when
//! recording), apply the change to the shared graph, notify the renderer,
//! append one history action. The `*_inner` variants take an explicit
//! `record` flag so undo/redo can replay without logging recursively.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::GraphWidget;
use crate::attrs::{AppMode, EdgePatch, NodePatch, NodeType, Position};
use crate::error::Result;
use crate::events::Event;
use crate::history::{Action, EdgeSnapshot, NodeSnapshot, PositionMap};
use crate::layout::{Layout, LayoutOptions};

/// One node upsert: key plus the fields to merge.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMerge {
    pub key: String,
    pub patch: NodePatch,
}

impl NodeMerge {
    pub fn new(key: impl Into<String>, patch: NodePatch) -> Self {
        Self {
            key: key.into(),
            patch,
        }
    }
}

/// One edge upsert. Without a key the edge is addressed by its endpoint pair.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMerge {
    pub key: Option<String>,
    pub source: String,
    pub target: String,
    pub patch: EdgePatch,
}

impl EdgeMerge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, patch: EdgePatch) -> Self {
        Self {
            key: None,
            source: source.into(),
            target: target.into(),
            patch,
        }
    }

    pub fn with_key(
        key: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        patch: EdgePatch,
    ) -> Self {
        Self {
            key: Some(key.into()),
            source: source.into(),
            target: target.into(),
            patch,
        }
    }

    pub(crate) fn from_snapshot(snapshot: EdgeSnapshot) -> Self {
        Self {
            key: Some(snapshot.key),
            source: snapshot.source,
            target: snapshot.target,
            patch: snapshot.attrs.as_patch(),
        }
    }
}

impl GraphWidget {
    /// Upserts nodes. `Ok(false)` only for an empty input set.
    pub fn merge_nodes(&mut self, nodes: Vec<NodeMerge>) -> Result<bool> {
        self.merge_nodes_inner(nodes, true)
    }

    pub(crate) fn merge_nodes_inner(&mut self, nodes: Vec<NodeMerge>, record: bool) -> Result<bool> {
        self.require_active()?;
        if nodes.is_empty() {
            return Ok(false);
        }

        let count = nodes.len();
        let mut old: Vec<NodeSnapshot> = Vec::new();
        let mut new: Vec<NodeSnapshot> = Vec::new();
        {
            let mut graph = self.graph.borrow_mut();
            for NodeMerge { key, patch } in nodes {
                if record {
                    if let Some(attrs) = graph.node(&key) {
                        old.push(NodeSnapshot {
                            key: key.clone(),
                            attrs: attrs.clone(),
                        });
                    }
                }
                graph.merge_node(key.clone(), patch);
                if record {
                    if let Some(attrs) = graph.node(&key) {
                        new.push(NodeSnapshot {
                            key: key.clone(),
                            attrs: attrs.clone(),
                        });
                    }
                } else {
                    // Replay path: a drop/undo cycle may have left edges around
                    // this node hidden; force them visible again.
                    let incident: Vec<String> = graph
                        .edges_of(&key)
                        .into_iter()
                        .map(str::to_string)
                        .collect();
                    for edge_key in incident {
                        if let Some(attrs) = graph.edge_mut(&edge_key) {
                            attrs.hidden = false;
                        }
                    }
                }
            }
        }

        debug!(count, record, "merged nodes");
        self.renderer_mut()?.process();
        if record {
            self.push_action(Action::MergeNodes { old, new });
        }
        Ok(true)
    }

    /// Removes nodes and their incident edges, aggregated into one history
    /// action. Unknown keys are skipped; `Ok(false)` when nothing was removed.
    pub fn drop_nodes<I, S>(&mut self, keys: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drop_nodes_inner(keys.into_iter().map(Into::into).collect(), true)
    }

    pub(crate) fn drop_nodes_inner(&mut self, keys: Vec<String>, record: bool) -> Result<bool> {
        self.require_active()?;

        let mut removed_nodes: Vec<NodeSnapshot> = Vec::new();
        let mut removed_edges: Vec<EdgeSnapshot> = Vec::new();
        {
            let mut graph = self.graph.borrow_mut();
            for key in keys {
                if !graph.has_node(&key) {
                    continue;
                }
                self.highlight.remove_node(&key);

                let incident: Vec<String> = graph
                    .edges_of(&key)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                for edge_key in incident {
                    self.highlight.remove_edge(&edge_key);
                    if let (Some((source, target)), Some(attrs)) =
                        (graph.edge_endpoints(&edge_key), graph.edge(&edge_key))
                    {
                        removed_edges.push(EdgeSnapshot {
                            key: edge_key.clone(),
                            source: source.to_string(),
                            target: target.to_string(),
                            attrs: attrs.clone(),
                        });
                    }
                    graph.drop_edge(&edge_key);
                }

                if let Some(attrs) = graph.node(&key) {
                    removed_nodes.push(NodeSnapshot {
                        key: key.clone(),
                        attrs: attrs.clone(),
                    });
                }
                graph.drop_node(&key);
            }
        }

        if removed_nodes.is_empty() {
            return Ok(false);
        }

        // The info box must not keep pointing at a node that is gone.
        let showing_dropped = self
            .open_info
            .as_ref()
            .is_some_and(|open| removed_nodes.iter().any(|node| node.key == open.node));
        if showing_dropped {
            self.close_node_info();
        }

        debug!(
            nodes = removed_nodes.len(),
            edges = removed_edges.len(),
            record,
            "dropped nodes"
        );
        self.renderer_mut()?.process();
        if record {
            self.push_action(Action::DropNodes {
                nodes: removed_nodes,
                edges: removed_edges,
            });
        }
        Ok(true)
    }

    /// Upserts edges. `Ok(false)` only for an empty input set.
    pub fn merge_edges(&mut self, edges: Vec<EdgeMerge>) -> Result<bool> {
        self.merge_edges_inner(edges, true)
    }

    pub(crate) fn merge_edges_inner(&mut self, edges: Vec<EdgeMerge>, record: bool) -> Result<bool> {
        self.require_active()?;
        if edges.is_empty() {
            return Ok(false);
        }

        let count = edges.len();
        let old = if record {
            self.snapshot_edges()
        } else {
            Vec::new()
        };
        {
            let mut graph = self.graph.borrow_mut();
            for EdgeMerge {
                key,
                source,
                target,
                patch,
            } in edges
            {
                match key {
                    Some(key) => {
                        graph.merge_edge_with_key(key, source, target, patch);
                    }
                    None => {
                        graph.merge_edge(source, target, patch);
                    }
                }
            }
        }

        debug!(count, record, "merged edges");
        self.renderer_mut()?.process();
        if record {
            let new = self.snapshot_edges();
            self.push_action(Action::MergeEdges { old, new });
        }
        Ok(true)
    }

    /// Replaces the whole edge set: clears it, then merges the given edges.
    /// Recorded as a single action.
    pub fn replace_edges(&mut self, edges: Vec<EdgeMerge>) -> Result<bool> {
        self.replace_edges_inner(edges, true)
    }

    pub(crate) fn replace_edges_inner(&mut self, edges: Vec<EdgeMerge>, record: bool) -> Result<bool> {
        self.require_active()?;

        let old = if record {
            self.snapshot_edges()
        } else {
            Vec::new()
        };
        self.graph.borrow_mut().clear_edges();

        // Delegate without recording so the replacement stays one action.
        let merged = self.merge_edges_inner(edges, false)?;
        if !merged {
            // Empty input: nothing was re-merged, but the clear still has to
            // reach the renderer.
            self.renderer_mut()?.process();
        }
        if record {
            let new = self.snapshot_edges();
            self.push_action(Action::ReplaceEdges { old, new });
        }
        Ok(merged)
    }

    /// Shows or hides edges; `None` flips the current state.
    pub fn toggle_edge_rendering(&mut self, hide: Option<bool>) -> Result<()> {
        self.toggle_edge_rendering_inner(hide, true)
    }

    pub(crate) fn toggle_edge_rendering_inner(
        &mut self,
        hide: Option<bool>,
        record: bool,
    ) -> Result<()> {
        self.require_active()?;
        let (old_hidden, new_hidden) = {
            let renderer = self.renderer_mut()?;
            let settings = renderer.settings_mut();
            let old_hidden = !settings.render_edges;
            let new_hidden = hide.unwrap_or(!old_hidden);
            settings.render_edges = !new_hidden;
            renderer.refresh();
            (old_hidden, new_hidden)
        };
        if record {
            self.push_action(Action::ToggleEdgeRendering {
                old: old_hidden,
                new: new_hidden,
            });
        }
        Ok(())
    }

    /// Restricts edge drawing to `important` edges; `None` flips. Always
    /// forces general edge rendering on as a side effect (not recorded as a
    /// separate step).
    pub fn toggle_just_important_edge_rendering(
        &mut self,
        only_important: Option<bool>,
    ) -> Result<()> {
        self.toggle_just_important_edge_rendering_inner(only_important, true)
    }

    pub(crate) fn toggle_just_important_edge_rendering_inner(
        &mut self,
        only_important: Option<bool>,
        record: bool,
    ) -> Result<()> {
        self.require_active()?;
        let (old, new) = {
            let settings = self.renderer_mut()?.settings_mut();
            let old = settings.render_just_important_edges;
            let new = only_important.unwrap_or(!old);
            settings.render_just_important_edges = new;
            (old, new)
        };
        self.toggle_edge_rendering_inner(Some(false), false)?;
        if record {
            self.push_action(Action::ToggleImportantEdges { old, new });
        }
        Ok(())
    }

    /// Runs a layout and records the position mappings before and after.
    pub fn set_and_apply_layout(
        &mut self,
        layout: &dyn Layout,
        options: &LayoutOptions,
    ) -> Result<bool> {
        self.require_active()?;
        let old = self.position_map();

        let mapping = layout.run(&mut self.graph.borrow_mut(), options);
        if let Some(positions) = mapping {
            self.apply_positions(&positions);
        }

        let new = self.position_map();
        debug!(layout = layout.name(), "applied layout");
        self.renderer_mut()?.refresh();
        self.emit(Event::SyncLayoutCompleted);
        self.push_action(Action::SetLayout { old, new });
        Ok(true)
    }

    /// Changes the shape used for nodes without an explicit type.
    pub fn set_and_apply_default_node_type(&mut self, node_type: NodeType) -> Result<bool> {
        self.set_and_apply_default_node_type_inner(node_type, true)
    }

    pub(crate) fn set_and_apply_default_node_type_inner(
        &mut self,
        node_type: NodeType,
        record: bool,
    ) -> Result<bool> {
        self.require_active()?;
        let old = self.default_node_type;
        self.default_node_type = node_type;
        {
            let renderer = self.renderer_mut()?;
            renderer.settings_mut().default_node_type = node_type;
            renderer.process();
            renderer.refresh();
        }
        if record {
            self.push_action(Action::SetDefaultNodeType {
                old,
                new: node_type,
            });
        }
        Ok(true)
    }

    /// Switches between static (no dragging) and dynamic (dragging) modes.
    pub fn set_app_mode(&mut self, app_mode: AppMode) -> Result<()> {
        self.set_app_mode_inner(app_mode, true)
    }

    pub(crate) fn set_app_mode_inner(&mut self, app_mode: AppMode, record: bool) -> Result<()> {
        self.require_active()?;
        let old = self.app_mode;
        self.app_mode = app_mode;
        if record {
            self.push_action(Action::SetAppMode { old, new: app_mode });
        }
        Ok(())
    }

    /// Enables or disables cluster backdrop rendering; `None` flips. Returns
    /// the resulting state. Optionally replaces the cluster color mapping
    /// first. Not part of the history log.
    pub fn toggle_node_backdrop_rendering(
        &mut self,
        colors: Option<FxHashMap<String, String>>,
        force: Option<bool>,
    ) -> Result<bool> {
        self.require_active()?;
        if let Some(colors) = colors {
            self.cluster_colors = colors;
        }
        let enabled = {
            let renderer = self.renderer_mut()?;
            let settings = renderer.settings_mut();
            let enabled = force.unwrap_or(!settings.render_node_backdrop);
            settings.render_node_backdrop = enabled;
            renderer.schedule_refresh();
            enabled
        };
        Ok(enabled)
    }

    pub(crate) fn snapshot_edges(&self) -> Vec<EdgeSnapshot> {
        let graph = self.graph.borrow();
        graph
            .edges()
            .map(|edge| EdgeSnapshot {
                key: edge.key.to_string(),
                source: edge.source.to_string(),
                target: edge.target.to_string(),
                attrs: edge.attrs.clone(),
            })
            .collect()
    }

    pub(crate) fn position_map(&self) -> PositionMap {
        let graph = self.graph.borrow();
        graph
            .nodes()
            .map(|(key, attrs)| (key.to_string(), Position::new(attrs.x, attrs.y)))
            .collect()
    }

    pub(crate) fn apply_positions(&self, positions: &PositionMap) {
        let mut graph = self.graph.borrow_mut();
        for (key, position) in positions {
            if let Some(attrs) = graph.node_mut(key) {
                attrs.x = position.x;
                attrs.y = position.y;
            }
        }
    }

    /// Moves nodes to the given mapping and reports layout completion, the
    /// same path a finished layout animation takes.
    pub(crate) fn animate_to(&mut self, positions: &PositionMap) -> Result<()> {
        self.apply_positions(positions);
        self.renderer_mut()?.refresh();
        self.emit(Event::SyncLayoutCompleted);
        Ok(())
    }
}
