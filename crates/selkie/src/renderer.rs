//! The renderer seam.
//!
//! Drawing is a black box to this crate: the widget only asks the renderer to
//! reprocess graph data, repaint, or tear down, and reads/writes the small
//! settings block that gates edge and backdrop rendering. Everything else
//! (camera, frame scheduling, hit-testing, WebGL/canvas programs) stays on the
//! host's side of this trait.

use std::cell::RefCell;
use std::rc::Rc;

use crate::WidgetGraph;
use crate::attrs::NodeType;

/// Renderer-owned toggle flags the widget reads and writes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Whether edges are drawn at all.
    pub render_edges: bool,
    /// Restrict edge drawing to edges flagged `important`.
    pub render_just_important_edges: bool,
    /// Cluster backdrop blobs behind node groups.
    pub render_node_backdrop: bool,
    /// Shape for nodes without an explicit `node_type` attribute.
    pub default_node_type: NodeType,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            render_edges: true,
            render_just_important_edges: false,
            render_node_backdrop: false,
            default_node_type: NodeType::default(),
        }
    }
}

/// External rendering engine consumed by the widget.
pub trait Renderer {
    /// Re-derive render data from the graph (topology or attributes changed).
    fn process(&mut self);

    /// Repaint with current render data.
    fn refresh(&mut self);

    /// Request a repaint on the next frame rather than immediately.
    fn schedule_refresh(&mut self);

    /// Drop all render data.
    fn clear(&mut self);

    /// Tear the renderer down; it will not be used again.
    fn kill(&mut self);

    fn settings(&self) -> &RenderSettings;

    fn settings_mut(&mut self) -> &mut RenderSettings;
}

/// Builds a renderer bound to the shared graph when the widget activates.
pub type RendererFactory = Box<dyn FnMut(Rc<RefCell<WidgetGraph>>) -> Box<dyn Renderer>>;
