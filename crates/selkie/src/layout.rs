//! The layout seam.
//!
//! Layout algorithms are external collaborators: pure functions over the graph
//! that either mutate node positions in place (returning `None`) or return a
//! position mapping for the widget to move nodes toward.

use crate::WidgetGraph;
use crate::attrs::Position;
use crate::history::PositionMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Overall spread of the produced layout.
    pub scale: f64,
    pub center: Position,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: Position::default(),
        }
    }
}

pub trait Layout {
    fn name(&self) -> &str;

    /// Computes positions for every node. `None` means positions were written
    /// into the graph directly.
    fn run(&self, graph: &mut WidgetGraph, options: &LayoutOptions) -> Option<PositionMap>;
}
