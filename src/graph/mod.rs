//! Vertices, edges and graphs.
//!
//! # Low-level graphs and `KeyedGraph`
//!
//! Algorithms in this crate work on low-level graphs,
//! whose vertices and edges are lightweight ID's.
//! They are essentially `usize`,
//! so algorithms may feel free to copy and store them.
//!
//! [KeyedGraph] wraps a low-level graph and identifies every vertex by the data it carries.
//! This is what users usually deal with: add edges between values, then query by values.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod keyed_graph;
pub use self::keyed_graph::*;

pub mod directed;
