//! Node info boxes.
//!
//! Fetching info is asynchronous on the host's side; this crate stays
//! executor-free. `open_node_info` hands out a token, the host resolves it
//! whenever its fetch completes, and the widget drops completions that arrive
//! after teardown or after a newer request superseded them.

use crate::attrs::NodeAttributes;

/// Sections of the info box; absent sections are not drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeInfoContent {
    pub preheader: Option<String>,
    pub header: Option<String>,
    pub content: Option<String>,
    pub footer: Option<String>,
}

impl NodeInfoContent {
    /// Default rendering path when the host's fetch failed: built from what
    /// the graph already knows about the node.
    pub(crate) fn fallback(key: &str, attrs: &NodeAttributes) -> Self {
        Self {
            preheader: attrs.category.clone(),
            header: Some(attrs.label.clone().unwrap_or_else(|| key.to_string())),
            content: None,
            footer: attrs.score.map(|score| format!("score: {score}")),
        }
    }
}

/// Identifies one in-flight info request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoToken(pub(crate) u64);

#[derive(Debug)]
pub(crate) struct PendingInfo {
    pub(crate) token: InfoToken,
    pub(crate) node: String,
}

#[derive(Debug)]
pub(crate) struct OpenInfoBox {
    pub(crate) node: String,
    pub(crate) content: NodeInfoContent,
}
