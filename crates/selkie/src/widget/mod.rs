//! The widget controller: one instance owns activation state, the history
//! log, the highlight tracker and all transient interaction state, and
//! mediates every mutation between the caller, the shared graph and the
//! external renderer.

mod mutations;
mod pointer;
mod undo;

pub use mutations::{EdgeMerge, NodeMerge};

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use selkie_graph::GraphExport;
use tracing::debug;

use crate::WidgetGraph;
use crate::attrs::{AppMode, EdgeAttributes, NodeAttributes, NodeType};
use crate::config::WidgetOptions;
use crate::error::{Error, Result};
use crate::events::{Emitter, Event, SubscriptionId};
use crate::highlight::HighlightTracker;
use crate::history::HistoryLog;
use crate::info::{NodeInfoContent, OpenInfoBox, PendingInfo};
use crate::renderer::{Renderer, RendererFactory};
use crate::scheduler::UnhighlightQueue;

/// Whether the widget is currently driving a live renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Inactive,
    Active,
}

#[derive(Debug)]
struct DragState {
    node: String,
    moved: bool,
}

/// Interactive graph-visualization widget.
///
/// The graph is caller-owned and shared (`Rc<RefCell<_>>`); the renderer is
/// constructed by the factory on [`render`](Self::render) and torn down on
/// [`destroy`](Self::destroy). All operations run synchronously on the calling
/// thread.
pub struct GraphWidget {
    graph: Rc<RefCell<WidgetGraph>>,
    options: WidgetOptions,
    make_renderer: RendererFactory,
    renderer: Option<Box<dyn Renderer>>,
    activation: Activation,
    history: Option<HistoryLog>,
    highlight: HighlightTracker,
    emitter: Emitter,
    app_mode: AppMode,
    default_node_type: NodeType,
    cluster_colors: FxHashMap<String, String>,
    drag: Option<DragState>,
    pending_info: Option<PendingInfo>,
    open_info: Option<OpenInfoBox>,
    next_info_token: u64,
    unhighlight: UnhighlightQueue,
    open_menu: Option<String>,
}

impl GraphWidget {
    pub fn new(
        graph: Rc<RefCell<WidgetGraph>>,
        options: WidgetOptions,
        make_renderer: RendererFactory,
    ) -> Self {
        let app_mode = options.app_mode;
        let default_node_type = options.default_node_type;
        let cluster_colors = options.cluster_colors.clone();
        Self {
            graph,
            options,
            make_renderer,
            renderer: None,
            activation: Activation::default(),
            history: None,
            highlight: HighlightTracker::default(),
            emitter: Emitter::default(),
            app_mode,
            default_node_type,
            cluster_colors,
            drag: None,
            pending_info: None,
            open_info: None,
            next_info_token: 0,
            unhighlight: UnhighlightQueue::default(),
            open_menu: None,
        }
    }

    /// Builds the renderer, activates the widget and starts a fresh history
    /// log when history is enabled.
    pub fn render(&mut self) -> Result<()> {
        if self.activation == Activation::Active {
            return Err(Error::AlreadyRendered);
        }

        let mut renderer = (self.make_renderer)(Rc::clone(&self.graph));
        renderer.settings_mut().default_node_type = self.default_node_type;
        self.renderer = Some(renderer);
        self.activation = Activation::Active;
        if self.options.history_enabled {
            self.history = Some(HistoryLog::default());
        }

        debug!(history = self.options.history_enabled, "widget rendered");
        self.emitter.emit(&Event::Rendered);
        Ok(())
    }

    /// Tears the renderer down and drops all transient state. A no-op when the
    /// widget is not rendered, so calling it twice is safe.
    pub fn destroy(&mut self) {
        if self.activation == Activation::Inactive {
            return;
        }

        if let Some(mut renderer) = self.renderer.take() {
            renderer.clear();
            renderer.kill();
        }
        self.activation = Activation::Inactive;
        self.highlight.clear();
        self.history = None;
        self.unhighlight.clear();
        self.pending_info = None;
        self.open_info = None;
        self.open_menu = None;
        self.drag = None;

        debug!("widget destroyed");
    }

    pub fn is_rendered(&self) -> bool {
        self.activation == Activation::Active
    }

    pub(crate) fn require_active(&self) -> Result<()> {
        match self.activation {
            Activation::Active => Ok(()),
            Activation::Inactive => Err(Error::NotRendered),
        }
    }

    /// Access to the live renderer, for host-side concerns (camera and mouse
    /// capture stay behind the host's concrete renderer type).
    pub fn renderer_mut(&mut self) -> Result<&mut dyn Renderer> {
        match self.renderer.as_deref_mut() {
            Some(renderer) => Ok(renderer),
            None => Err(Error::NotRendered),
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Event) + 'static) -> SubscriptionId {
        self.emitter.subscribe(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.emitter.unsubscribe(id)
    }

    pub fn app_mode(&self) -> AppMode {
        self.app_mode
    }

    pub fn default_node_type(&self) -> NodeType {
        self.default_node_type
    }

    pub fn cluster_colors(&self) -> &FxHashMap<String, String> {
        &self.cluster_colors
    }

    pub fn hovered_node(&self) -> Option<&str> {
        self.highlight.hovered()
    }

    pub fn highlighted_nodes(&self) -> Vec<String> {
        self.highlight.nodes().iter().cloned().collect()
    }

    pub fn highlighted_edges(&self) -> Vec<String> {
        self.highlight.edges().iter().cloned().collect()
    }

    pub fn open_node_info_box(&self) -> Option<(&str, &NodeInfoContent)> {
        self.open_info
            .as_ref()
            .map(|open| (open.node.as_str(), &open.content))
    }

    pub fn open_context_menu_node(&self) -> Option<&str> {
        self.open_menu.as_deref()
    }

    /// Read access to the history log, mainly for inspection and tests.
    pub fn history(&self) -> Option<&HistoryLog> {
        self.history.as_ref()
    }

    /// Empties the history log. `false` when there is no log (history disabled
    /// or widget not rendered).
    pub fn clear_history(&mut self) -> bool {
        match self.history.as_mut() {
            Some(history) => {
                history.clear();
                true
            }
            None => false,
        }
    }

    /// Serializable snapshot of the shared graph.
    pub fn export_graph(&self, exclude_edges: bool) -> GraphExport<NodeAttributes, EdgeAttributes> {
        self.graph.borrow().export(exclude_edges)
    }

    pub(crate) fn push_action(&mut self, action: crate::history::Action) {
        if let Some(history) = self.history.as_mut() {
            history.push(action);
        }
    }

    pub(crate) fn emit(&mut self, event: Event) {
        self.emitter.emit(&event);
    }
}
