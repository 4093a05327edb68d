#![forbid(unsafe_code)]

//! Key-addressed attribute multigraph container used by `selkie`.
//!
//! Nodes and edges are addressed by opaque `String` keys, unique within their
//! kind. Attribute labels are caller-supplied types; upsert semantics go through
//! the [`Patchable`] trait so partial updates can be merged into existing
//! labels without the container knowing their shape.
//!
//! Iteration order is insertion order, which keeps downstream consumers
//! (highlight computation, history snapshots, exports) deterministic.

pub mod export;
pub mod graph;
pub mod patch;

pub use export::{ExportedEdge, ExportedNode, GraphExport};
pub use graph::{EdgeRef, Graph};
pub use patch::Patchable;
