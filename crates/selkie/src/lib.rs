//! Headless core of an interactive graph-visualization widget.
//!
//! The widget mediates between a caller-owned attribute graph and an external
//! renderer: lifecycle (render/destroy), a mutation gateway with an undo/redo
//! history log, hover-driven highlighting, pointer interaction and node info
//! boxes. Drawing itself stays behind the [`Renderer`] trait; this crate has
//! no drawing, threading or executor dependencies.

#![forbid(unsafe_code)]

pub mod attrs;
pub mod config;
pub mod error;
pub mod events;
pub mod highlight;
pub mod history;
pub mod info;
pub mod layout;
pub mod menu;
pub mod renderer;
mod scheduler;
pub mod widget;

pub use attrs::{
    AppMode, EdgeAttributes, EdgePatch, NodeAttributes, NodePatch, NodeType, Position, Z_BASELINE,
    Z_RAISED,
};
pub use config::WidgetOptions;
pub use error::{Error, Result};
pub use events::{Event, SubscriptionId};
pub use highlight::HighlightRules;
pub use history::{Action, EdgeSnapshot, HistoryLog, NodeSnapshot, PositionMap};
pub use info::{InfoToken, NodeInfoContent};
pub use layout::{Layout, LayoutOptions};
pub use menu::ContextMenuEntry;
pub use renderer::{RenderSettings, Renderer, RendererFactory};
pub use widget::{Activation, EdgeMerge, GraphWidget, NodeMerge};

/// The attribute multigraph this widget drives.
pub type WidgetGraph = selkie_graph::Graph<NodeAttributes, EdgeAttributes>;
