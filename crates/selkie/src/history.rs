//! Append-only history log of reversible mutations.
//!
//! Each entry is a tagged action carrying strongly-typed old/new payloads, so
//! the undo/redo dispatch is a closed match instead of a stringly-keyed bag.
//! Reverted entries always form a contiguous suffix of the log: `undo` moves
//! the boundary left, `redo` moves it right, and pushing a new action discards
//! the reverted suffix (no redo branching).

use indexmap::IndexMap;

use crate::attrs::{AppMode, EdgeAttributes, NodeAttributes, NodeType, Position};

/// Node positions keyed by node, in graph insertion order.
pub type PositionMap = IndexMap<String, Position>;

/// Structural clone of one node at snapshot time.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSnapshot {
    pub key: String,
    pub attrs: NodeAttributes,
}

/// Structural clone of one edge (endpoints included) at snapshot time.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSnapshot {
    pub key: String,
    pub source: String,
    pub target: String,
    pub attrs: EdgeAttributes,
}

/// One reversible mutation. `old` payloads restore the pre-mutation state,
/// `new` payloads replay it.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Upsert of nodes; `old` holds only the nodes that existed beforehand.
    MergeNodes {
        old: Vec<NodeSnapshot>,
        new: Vec<NodeSnapshot>,
    },
    /// Aggregated removal of nodes and their incident edges.
    DropNodes {
        nodes: Vec<NodeSnapshot>,
        edges: Vec<EdgeSnapshot>,
    },
    /// Edge upserts; payloads are full edge-set snapshots so undo can restore
    /// by wholesale replacement.
    MergeEdges {
        old: Vec<EdgeSnapshot>,
        new: Vec<EdgeSnapshot>,
    },
    /// Full edge-set replacement.
    ReplaceEdges {
        old: Vec<EdgeSnapshot>,
        new: Vec<EdgeSnapshot>,
    },
    /// Edge visibility flag; values are the hidden state.
    ToggleEdgeRendering { old: bool, new: bool },
    /// Important-only edge rendering flag.
    ToggleImportantEdges { old: bool, new: bool },
    /// Full position mappings before and after a layout run.
    SetLayout { old: PositionMap, new: PositionMap },
    SetDefaultNodeType { old: NodeType, new: NodeType },
    SetAppMode { old: AppMode, new: AppMode },
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub action: Action,
    pub reverted: bool,
}

#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Appends a new action. Any reverted suffix becomes unreachable and is
    /// discarded first.
    pub fn push(&mut self, action: Action) {
        while self.entries.last().is_some_and(|entry| entry.reverted) {
            self.entries.pop();
        }
        self.entries.push(HistoryEntry {
            action,
            reverted: false,
        });
    }

    /// Index of the entry `undo` should revert: the most recent non-reverted
    /// one.
    pub fn undo_target(&self) -> Option<usize> {
        self.entries.iter().rposition(|entry| !entry.reverted)
    }

    /// Index of the entry `redo` should reapply: the boundary entry of the
    /// reverted suffix (the one reverted last).
    pub fn redo_target(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.reverted)
    }

    // Boundary bookkeeping stays crate-internal; external callers could
    // otherwise break the contiguous-suffix invariant.
    pub(crate) fn action(&self, index: usize) -> &Action {
        &self.entries[index].action
    }

    pub(crate) fn set_reverted(&mut self, index: usize, reverted: bool) {
        self.entries[index].reverted = reverted;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
