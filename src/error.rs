use thiserror::Error;

/// Errors surfaced by graph queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A query named a vertex which is not in the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// The goal cannot be reached from the source.
    #[error("no path exists from {from} to {to}")]
    NoPathExists {
        /// Source vertex, rendered with `Debug`.
        from: String,
        /// Goal vertex, rendered with `Debug`.
        to: String,
    },

    /// Topological sort ran into a directed cycle.
    #[error("graph contains a cycle: only {processed} of {total} vertices can be ordered")]
    CyclicGraph {
        /// Vertices emitted before the sort got stuck.
        processed: usize,
        /// Vertices in the graph.
        total: usize,
    },
}

/// Shorthand for results carrying [Error].
pub type Result<T> = std::result::Result<T, Error>;
