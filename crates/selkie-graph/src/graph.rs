//! The core `Graph` container.
//!
//! Storage follows the same layout as the other key-addressed containers in
//! this workspace family: insertion-ordered entry vectors plus hash index maps
//! keyed by entity key. Lookups are O(1); removal reindexes the tail.

use rustc_hash::FxBuildHasher;

use crate::export::{ExportedEdge, ExportedNode, GraphExport};
use crate::patch::Patchable;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    key: String,
    attrs: N,
}

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    key: String,
    source: String,
    target: String,
    attrs: E,
}

/// A borrowed view of one edge: key, endpoints and attributes.
#[derive(Debug, Clone, Copy)]
pub struct EdgeRef<'a, E> {
    pub key: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub attrs: &'a E,
}

/// Directed multigraph with `String` node keys and explicit `String` edge keys.
///
/// Multiple edges may connect the same ordered pair of nodes as long as their
/// keys differ. Edges whose endpoints are missing cannot exist: dropping a node
/// drops its incident edges.
pub struct Graph<N, E> {
    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,
    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<String, usize>,
    // Monotonic counter for generated edge keys ("e0", "e1", ...). Never reset,
    // so keys freed by `clear_edges` are not reused within one graph lifetime.
    edge_key_counter: u64,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            edge_key_counter: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_node(&self, key: &str) -> bool {
        self.node_index.contains_key(key)
    }

    pub fn node(&self, key: &str) -> Option<&N> {
        self.node_index.get(key).map(|&idx| &self.nodes[idx].attrs)
    }

    pub fn node_mut(&mut self, key: &str) -> Option<&mut N> {
        self.node_index
            .get(key)
            .copied()
            .map(move |idx| &mut self.nodes[idx].attrs)
    }

    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = (&str, &N)> {
        self.nodes.iter().map(|n| (n.key.as_str(), &n.attrs))
    }

    pub fn node_keys(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.key.clone()).collect()
    }

    /// Inserts or replaces a node label wholesale.
    pub fn set_node(&mut self, key: impl Into<String>, attrs: N) {
        let key = key.into();
        if let Some(&idx) = self.node_index.get(&key) {
            self.nodes[idx].attrs = attrs;
            return;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            key: key.clone(),
            attrs,
        });
        self.node_index.insert(key, idx);
    }

    /// Removes a node and all incident edges. Returns `false` when the key is
    /// unknown.
    pub fn drop_node(&mut self, key: &str) -> bool {
        let Some(idx) = self.node_index.remove(key) else {
            return false;
        };
        self.nodes.remove(idx);
        for i in idx..self.nodes.len() {
            let node_key = self.nodes[i].key.as_str();
            if let Some(slot) = self.node_index.get_mut(node_key) {
                *slot = i;
            }
        }

        let incident: Vec<String> = self
            .edges
            .iter()
            .filter(|e| e.source == key || e.target == key)
            .map(|e| e.key.clone())
            .collect();
        for edge_key in incident {
            self.drop_edge(&edge_key);
        }

        true
    }

    pub fn has_edge(&self, key: &str) -> bool {
        self.edge_index.contains_key(key)
    }

    pub fn edge(&self, key: &str) -> Option<&E> {
        self.edge_index.get(key).map(|&idx| &self.edges[idx].attrs)
    }

    pub fn edge_mut(&mut self, key: &str) -> Option<&mut E> {
        self.edge_index
            .get(key)
            .copied()
            .map(move |idx| &mut self.edges[idx].attrs)
    }

    pub fn edge_endpoints(&self, key: &str) -> Option<(&str, &str)> {
        self.edge_index
            .get(key)
            .map(|&idx| (self.edges[idx].source.as_str(), self.edges[idx].target.as_str()))
    }

    pub fn edges(&self) -> impl DoubleEndedIterator<Item = EdgeRef<'_, E>> {
        self.edges.iter().map(|e| EdgeRef {
            key: e.key.as_str(),
            source: e.source.as_str(),
            target: e.target.as_str(),
            attrs: &e.attrs,
        })
    }

    pub fn edge_keys(&self) -> Vec<String> {
        self.edges.iter().map(|e| e.key.clone()).collect()
    }

    pub fn drop_edge(&mut self, key: &str) -> bool {
        let Some(idx) = self.edge_index.remove(key) else {
            return false;
        };
        self.edges.remove(idx);
        for i in idx..self.edges.len() {
            let edge_key = self.edges[i].key.as_str();
            if let Some(slot) = self.edge_index.get_mut(edge_key) {
                *slot = i;
            }
        }
        true
    }

    /// Removes every edge while keeping all nodes.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
        self.edge_index.clear();
    }

    /// Distinct adjacent nodes in insertion order of their connecting edges,
    /// counting both directions.
    pub fn neighbors(&self, key: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for e in &self.edges {
            let other = if e.source == key {
                e.target.as_str()
            } else if e.target == key {
                e.source.as_str()
            } else {
                continue;
            };
            if other != key && !out.contains(&other) {
                out.push(other);
            }
        }
        out
    }

    /// Keys of edges going from `source` to `target` (directional).
    pub fn edges_between(&self, source: &str, target: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.source == source && e.target == target)
            .map(|e| e.key.as_str())
            .collect()
    }

    /// Keys of all edges incident to `key`, in either direction.
    pub fn edges_of(&self, key: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.source == key || e.target == key)
            .map(|e| e.key.as_str())
            .collect()
    }

    fn next_edge_key(&mut self) -> String {
        loop {
            let candidate = format!("e{}", self.edge_key_counter);
            self.edge_key_counter += 1;
            if !self.edge_index.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}

impl<N: Patchable, E> Graph<N, E> {
    /// Upserts a node: creates it from the patch when absent, otherwise
    /// shallow-merges the patch into the existing label. Returns `true` when
    /// the node was created.
    pub fn merge_node(&mut self, key: impl Into<String>, patch: N::Patch) -> bool {
        let key = key.into();
        if let Some(&idx) = self.node_index.get(&key) {
            self.nodes[idx].attrs.apply_patch(patch);
            return false;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            key: key.clone(),
            attrs: N::from_patch(patch),
        });
        self.node_index.insert(key, idx);
        true
    }
}

impl<N: Patchable, E: Patchable> Graph<N, E>
where
    N::Patch: Default,
{
    /// Upserts an edge under an explicit key. Missing endpoints are created
    /// with default node labels. Returns `true` when the edge was created.
    pub fn merge_edge_with_key(
        &mut self,
        key: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        patch: E::Patch,
    ) -> bool {
        let key = key.into();
        if let Some(&idx) = self.edge_index.get(&key) {
            self.edges[idx].attrs.apply_patch(patch);
            return false;
        }

        let source = source.into();
        let target = target.into();
        if !self.has_node(&source) {
            self.merge_node(source.clone(), N::Patch::default());
        }
        if !self.has_node(&target) {
            self.merge_node(target.clone(), N::Patch::default());
        }

        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            key: key.clone(),
            source,
            target,
            attrs: E::from_patch(patch),
        });
        self.edge_index.insert(key, idx);
        true
    }

    /// Upserts an edge addressed by its endpoint pair: the first existing
    /// `source -> target` edge is merged into, otherwise a new edge is created
    /// under a generated key. Returns the key of the affected edge.
    pub fn merge_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        patch: E::Patch,
    ) -> String {
        let source = source.into();
        let target = target.into();
        if let Some(existing) = self
            .edges_between(&source, &target)
            .first()
            .map(|k| (*k).to_string())
        {
            if let Some(attrs) = self.edge_mut(&existing) {
                attrs.apply_patch(patch);
            }
            return existing;
        }
        let key = self.next_edge_key();
        self.merge_edge_with_key(key.clone(), source, target, patch);
        key
    }
}

impl<N: Clone, E: Clone> Graph<N, E> {
    /// Snapshot of the whole graph, suitable for serialization by the caller.
    pub fn export(&self, exclude_edges: bool) -> GraphExport<N, E> {
        GraphExport {
            nodes: self
                .nodes
                .iter()
                .map(|n| ExportedNode {
                    key: n.key.clone(),
                    attributes: n.attrs.clone(),
                })
                .collect(),
            edges: if exclude_edges {
                Vec::new()
            } else {
                self.edges
                    .iter()
                    .map(|e| ExportedEdge {
                        key: e.key.clone(),
                        source: e.source.clone(),
                        target: e.target.clone(),
                        attributes: e.attrs.clone(),
                    })
                    .collect()
            },
        }
    }
}
