//! Node and edge attribute models plus their shallow-merge patches.
//!
//! The widget never invents attribute fields: everything here mirrors what the
//! renderer and the classification pipeline read (position, visual attributes,
//! visibility, z-order, and the optional `category`/`score`/`important`/
//! `cluster` classification fields).

use selkie_graph::Patchable;
use serde::{Deserialize, Serialize};

/// Baseline z-order for nodes and edges at rest.
pub const Z_BASELINE: i32 = 0;
/// z-order applied to hovered/highlighted entities so they draw on top.
pub const Z_RAISED: i32 = 1;

/// Shape used when a node does not carry an explicit `node_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    #[default]
    Circle,
    Square,
    Triangle,
    Diamond,
}

/// Interaction mode: `Static` disables node dragging, `Dynamic` enables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    #[default]
    Static,
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeAttributes {
    pub x: f64,
    pub y: f64,
    pub color: Option<String>,
    pub size: Option<f64>,
    pub label: Option<String>,
    pub node_type: Option<NodeType>,
    pub hidden: bool,
    pub z: i32,
    pub category: Option<String>,
    pub score: Option<f64>,
    pub important: bool,
    pub cluster: Option<String>,
}

impl NodeAttributes {
    /// A patch carrying every field, for replaying a full snapshot.
    pub fn as_patch(&self) -> NodePatch {
        NodePatch {
            x: Some(self.x),
            y: Some(self.y),
            color: self.color.clone(),
            size: self.size,
            label: self.label.clone(),
            node_type: self.node_type,
            hidden: Some(self.hidden),
            z: Some(self.z),
            category: self.category.clone(),
            score: self.score,
            important: Some(self.important),
            cluster: self.cluster.clone(),
        }
    }
}

/// Partial node update; only `Some` fields are applied on merge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub color: Option<String>,
    pub size: Option<f64>,
    pub label: Option<String>,
    pub node_type: Option<NodeType>,
    pub hidden: Option<bool>,
    pub z: Option<i32>,
    pub category: Option<String>,
    pub score: Option<f64>,
    pub important: Option<bool>,
    pub cluster: Option<String>,
}

impl NodePatch {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }
}

impl Patchable for NodeAttributes {
    type Patch = NodePatch;

    fn from_patch(patch: NodePatch) -> Self {
        let mut out = Self::default();
        out.apply_patch(patch);
        out
    }

    fn apply_patch(&mut self, patch: NodePatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        if let Some(size) = patch.size {
            self.size = Some(size);
        }
        if let Some(label) = patch.label {
            self.label = Some(label);
        }
        if let Some(node_type) = patch.node_type {
            self.node_type = Some(node_type);
        }
        if let Some(hidden) = patch.hidden {
            self.hidden = hidden;
        }
        if let Some(z) = patch.z {
            self.z = z;
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(score) = patch.score {
            self.score = Some(score);
        }
        if let Some(important) = patch.important {
            self.important = important;
        }
        if let Some(cluster) = patch.cluster {
            self.cluster = Some(cluster);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeAttributes {
    pub color: Option<String>,
    pub size: Option<f64>,
    pub label: Option<String>,
    pub weight: Option<f64>,
    pub important: bool,
    pub hidden: bool,
    pub z: i32,
}

impl EdgeAttributes {
    pub fn as_patch(&self) -> EdgePatch {
        EdgePatch {
            color: self.color.clone(),
            size: self.size,
            label: self.label.clone(),
            weight: self.weight,
            important: Some(self.important),
            hidden: Some(self.hidden),
            z: Some(self.z),
        }
    }
}

/// Partial edge update; only `Some` fields are applied on merge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgePatch {
    pub color: Option<String>,
    pub size: Option<f64>,
    pub label: Option<String>,
    pub weight: Option<f64>,
    pub important: Option<bool>,
    pub hidden: Option<bool>,
    pub z: Option<i32>,
}

impl EdgePatch {
    pub fn important(value: bool) -> Self {
        Self {
            important: Some(value),
            ..Self::default()
        }
    }
}

impl Patchable for EdgeAttributes {
    type Patch = EdgePatch;

    fn from_patch(patch: EdgePatch) -> Self {
        let mut out = Self::default();
        out.apply_patch(patch);
        out
    }

    fn apply_patch(&mut self, patch: EdgePatch) {
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        if let Some(size) = patch.size {
            self.size = Some(size);
        }
        if let Some(label) = patch.label {
            self.label = Some(label);
        }
        if let Some(weight) = patch.weight {
            self.weight = Some(weight);
        }
        if let Some(important) = patch.important {
            self.important = important;
        }
        if let Some(hidden) = patch.hidden {
            self.hidden = hidden;
        }
        if let Some(z) = patch.z {
            self.z = z;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patches_touch_only_their_set_fields() {
        let mut attrs = NodeAttributes {
            x: 1.0,
            y: 2.0,
            color: Some("#abc".into()),
            ..NodeAttributes::default()
        };
        attrs.apply_patch(NodePatch {
            y: Some(9.0),
            label: Some("n".into()),
            ..NodePatch::default()
        });

        assert_eq!(attrs.x, 1.0);
        assert_eq!(attrs.y, 9.0);
        assert_eq!(attrs.color.as_deref(), Some("#abc"));
        assert_eq!(attrs.label.as_deref(), Some("n"));
    }

    #[test]
    fn as_patch_replays_a_full_snapshot() {
        let attrs = NodeAttributes {
            x: 3.0,
            hidden: true,
            important: true,
            cluster: Some("k1".into()),
            ..NodeAttributes::default()
        };

        assert_eq!(NodeAttributes::from_patch(attrs.as_patch()), attrs);
    }

    #[test]
    fn attributes_round_trip_through_serde() {
        let attrs = NodeAttributes {
            x: 1.5,
            node_type: Some(NodeType::Diamond),
            score: Some(0.25),
            ..NodeAttributes::default()
        };
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(serde_json::from_str::<NodeAttributes>(&json).unwrap(), attrs);

        let edge = EdgeAttributes {
            weight: Some(2.0),
            important: true,
            ..EdgeAttributes::default()
        };
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(serde_json::from_str::<EdgeAttributes>(&json).unwrap(), edge);
    }
}
