#![forbid(unsafe_code)]

//! Deterministic reference layouts for the selkie graph widget.
//!
//! Each layout implements [`selkie::Layout`] and returns a position mapping
//! rather than mutating the graph, so the widget can record and animate the
//! move. Hidden nodes are positioned like any other node.

pub mod circular;
pub mod grid;
pub mod random;

pub use circular::CircularLayout;
pub use grid::GridLayout;
pub use random::RandomLayout;
