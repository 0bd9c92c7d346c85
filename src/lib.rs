//! A directed graph whose vertices are identified by the data they carry,
//! together with a handful of textbook algorithms.
//!
//! * [graph::KeyedGraph] is the entry point.
//!   Adding an edge between two values creates their vertices on first mention.
//! * [algorithm] holds depth-first reachability, breadth-first shortest paths,
//!   Kahn's topological sort and graphviz output.
//!
//! ```rust
//! use keyed_digraph::{graph::KeyedGraph, Error};
//!
//! let mut g = KeyedGraph::new();
//! g.add_edge("A", "B");
//! g.add_edge("B", "C");
//! g.add_edge("A", "C");
//!
//! assert!(g.dfs(&"A", &"C"));
//! assert_eq!(g.bfs(&"A", &"C").unwrap(), vec![&"A", &"C"]);
//! assert_eq!(g.toposort().unwrap(), vec![&"A", &"B", &"C"]);
//!
//! g.add_edge("C", "A");
//! assert!(matches!(g.toposort(), Err(Error::CyclicGraph { .. })));
//! ```
pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
