//! Undo/redo dispatch.
//!
//! Both directions replay through the mutation gateway with recording turned
//! off, so reverting never grows the log. The action is cloned out of the log
//! first; payloads never alias live graph state.

use tracing::debug;

use super::GraphWidget;
use super::mutations::{EdgeMerge, NodeMerge};
use crate::error::{Error, Result};
use crate::history::Action;

impl GraphWidget {
    /// Reverts the most recent non-reverted action. `Ok(false)` when there is
    /// nothing left to undo.
    pub fn undo(&mut self) -> Result<bool> {
        self.require_active()?;
        let history = self.history.as_ref().ok_or(Error::HistoryDisabled)?;
        let Some(index) = history.undo_target() else {
            return Ok(false);
        };
        let action = history.action(index).clone();

        self.apply_inverse(action)?;
        if let Some(history) = self.history.as_mut() {
            history.set_reverted(index, true);
        }
        debug!(index, "reverted action");
        Ok(true)
    }

    /// Reapplies the most recently reverted action. `Ok(false)` when there is
    /// nothing left to redo.
    pub fn redo(&mut self) -> Result<bool> {
        self.require_active()?;
        let history = self.history.as_ref().ok_or(Error::HistoryDisabled)?;
        let Some(index) = history.redo_target() else {
            return Ok(false);
        };
        let action = history.action(index).clone();

        self.apply_forward(action)?;
        if let Some(history) = self.history.as_mut() {
            history.set_reverted(index, false);
        }
        debug!(index, "reapplied action");
        Ok(true)
    }

    fn apply_inverse(&mut self, action: Action) -> Result<()> {
        match action {
            Action::MergeNodes { old, new } => {
                // Drop everything the merge touched, then restore the nodes
                // that existed beforehand from their snapshots.
                let keys: Vec<String> = new.into_iter().map(|snapshot| snapshot.key).collect();
                self.drop_nodes_inner(keys, false)?;
                if !old.is_empty() {
                    let merges: Vec<NodeMerge> = old
                        .into_iter()
                        .map(|snapshot| NodeMerge::new(snapshot.key, snapshot.attrs.as_patch()))
                        .collect();
                    self.merge_nodes_inner(merges, false)?;
                }
                Ok(())
            }
            Action::DropNodes { nodes, edges } => {
                // Nodes first so the incident edges can be re-attached.
                let merges: Vec<NodeMerge> = nodes
                    .into_iter()
                    .map(|snapshot| NodeMerge::new(snapshot.key, snapshot.attrs.as_patch()))
                    .collect();
                self.merge_nodes_inner(merges, false)?;
                let edge_merges: Vec<EdgeMerge> =
                    edges.into_iter().map(EdgeMerge::from_snapshot).collect();
                self.merge_edges_inner(edge_merges, false)?;
                Ok(())
            }
            Action::MergeEdges { old, .. } | Action::ReplaceEdges { old, .. } => {
                let merges: Vec<EdgeMerge> =
                    old.into_iter().map(EdgeMerge::from_snapshot).collect();
                self.replace_edges_inner(merges, false)?;
                Ok(())
            }
            Action::ToggleEdgeRendering { old, .. } => {
                self.toggle_edge_rendering_inner(Some(old), false)
            }
            Action::ToggleImportantEdges { old, .. } => {
                self.toggle_just_important_edge_rendering_inner(Some(old), false)
            }
            Action::SetLayout { old, .. } => self.animate_to(&old),
            Action::SetDefaultNodeType { old, .. } => self
                .set_and_apply_default_node_type_inner(old, false)
                .map(|_| ()),
            Action::SetAppMode { old, .. } => self.set_app_mode_inner(old, false),
        }
    }

    fn apply_forward(&mut self, action: Action) -> Result<()> {
        match action {
            Action::MergeNodes { new, .. } => {
                let merges: Vec<NodeMerge> = new
                    .into_iter()
                    .map(|snapshot| NodeMerge::new(snapshot.key, snapshot.attrs.as_patch()))
                    .collect();
                self.merge_nodes_inner(merges, false)?;
                Ok(())
            }
            Action::DropNodes { nodes, .. } => {
                let keys: Vec<String> = nodes.into_iter().map(|snapshot| snapshot.key).collect();
                self.drop_nodes_inner(keys, false)?;
                Ok(())
            }
            Action::MergeEdges { new, .. } | Action::ReplaceEdges { new, .. } => {
                let merges: Vec<EdgeMerge> =
                    new.into_iter().map(EdgeMerge::from_snapshot).collect();
                self.replace_edges_inner(merges, false)?;
                Ok(())
            }
            Action::ToggleEdgeRendering { new, .. } => {
                self.toggle_edge_rendering_inner(Some(new), false)
            }
            Action::ToggleImportantEdges { new, .. } => {
                self.toggle_just_important_edge_rendering_inner(Some(new), false)
            }
            Action::SetLayout { new, .. } => self.animate_to(&new),
            Action::SetDefaultNodeType { new, .. } => self
                .set_and_apply_default_node_type_inner(new, false)
                .map(|_| ()),
            Action::SetAppMode { new, .. } => self.set_app_mode_inner(new, false),
        }
    }
}
