//! Graph algorithms
//!
//! Traversals take their scratch state (visited marks, came-from links, residual in-degrees)
//! from [scratch] or keep it internally, and drop it on return.
mod bfs;
pub use self::bfs::*;
mod dfs;
pub use self::dfs::*;
pub mod scratch;
mod toposort;
pub use self::toposort::*;
pub mod graphviz;
