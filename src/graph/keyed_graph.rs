//! `KeyedGraph`: a directed graph whose vertices are identified by the data they carry.
use crate::{
    algorithm::{BreadthFirstSearch, DepthFirstSearch, DfsStrategy, TopologicalSort},
    graph::*,
    Error, Result,
};
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;

/// A directed graph over a low-level [directed::AdjacencyListGraph],
/// with a 1-1 mapping between vertex data and [VertexId]'s.
///
/// * `T`: vertex data. It is the identity of a vertex, so it must be hashable.
///
/// Adding an edge is the only way to grow the graph besides [KeyedGraph::add_vertex].
/// Vertices are never removed.
///
/// Algorithms keep their traversal state to themselves,
/// so any number of queries may run on a shared `&KeyedGraph`.
#[derive(Clone)]
pub struct KeyedGraph<T>
where
    T: Hash + Eq,
{
    lower_graph: directed::AdjacencyListGraph,
    vertex_keys: BiHashMap<VertexId, T, RandomState, RandomState>,
    dfs_strategy: DfsStrategy,
}

impl<T> Default for KeyedGraph<T>
where
    T: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KeyedGraph<T>
where
    T: Hash + Eq + Clone,
{
    /// Creates an empty graph whose [KeyedGraph::dfs] uses [DfsStrategy::Shallow].
    pub fn new() -> Self {
        Self {
            lower_graph: directed::AdjacencyListGraph::new(),
            vertex_keys: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            dfs_strategy: DfsStrategy::default(),
        }
    }

    /// Replaces the strategy used by [KeyedGraph::dfs].
    pub fn with_dfs_strategy(mut self, strategy: DfsStrategy) -> Self {
        self.dfs_strategy = strategy;
        self
    }

    /// Returns the vertex of `data`, creating an isolated one if it is unknown.
    pub fn add_vertex(&mut self, data: T) -> VertexId {
        if let Some(vid) = self.vertex_keys.get_by_right(&data) {
            *vid
        } else {
            let vid = self.lower_graph.add_vertex();
            tracing::trace!(vertex = vid.to_raw(), "vertex created");
            self.vertex_keys.insert(vid, data);
            vid
        }
    }

    /// Adds an edge from `source` to `sink`, creating either endpoint on first mention.
    ///
    /// Duplicated edges are kept, and count twice in the in-degree of `sink`.
    pub fn add_edge(&mut self, source: T, sink: T) -> EdgeId {
        let vid_src = self.add_vertex(source);
        let vid_snk = self.add_vertex(sink);
        let eid = self.lower_graph.add_edge(vid_src, vid_snk);
        tracing::trace!(
            edge = eid.to_raw(),
            source = vid_src.to_raw(),
            sink = vid_snk.to_raw(),
            "edge added"
        );
        eid
    }
}

impl<T> KeyedGraph<T>
where
    T: Hash + Eq,
{
    /// The underlying low-level graph, for running algorithms on [VertexId]'s directly.
    pub fn lower_graph(&self) -> &directed::AdjacencyListGraph {
        &self.lower_graph
    }

    pub fn dfs_strategy(&self) -> DfsStrategy {
        self.dfs_strategy
    }

    pub fn vertex_size(&self) -> usize {
        self.lower_graph.vertex_size()
    }

    pub fn edge_size(&self) -> usize {
        self.lower_graph.edge_size()
    }

    pub fn contains_vertex(&self, data: &T) -> bool {
        self.vertex_keys.contains_right(data)
    }

    pub fn vertex_id(&self, data: &T) -> Option<VertexId> {
        self.vertex_keys.get_by_right(data).copied()
    }

    pub fn data(&self, vid: &VertexId) -> Option<&T> {
        self.vertex_keys.get_by_left(vid)
    }

    /// Iterates over vertices in creation order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = (VertexId, &T)> + '_ {
        self.lower_graph
            .iter_vertices()
            .filter_map(|vid| self.data(&vid).map(|data| (vid, data)))
    }

    /// Iterates over the sinks of out-edges of `data`, in insertion order.
    ///
    /// Parallel edges show up once per edge. Unknown data has no neighbors.
    pub fn out_neighbors<'a>(&'a self, data: &T) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        match self.vertex_id(data) {
            Some(vid) => Box::new(
                self.lower_graph
                    .out_edges(&vid)
                    .filter_map(|e| self.data(&e.sink)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Number of edges into `data`, or `None` if it is unknown.
    pub fn in_degree(&self, data: &T) -> Option<usize> {
        self.vertex_id(data)
            .map(|vid| self.lower_graph.in_degree(&vid))
    }

    /// Whether `goal` is found from `from` by depth-first search under the configured strategy.
    ///
    /// See [DfsStrategy] for what `false` means.
    /// Unknown data finds nothing.
    pub fn dfs(&self, from: &T, goal: &T) -> bool {
        self.dfs_with(from, goal, self.dfs_strategy)
    }

    /// [KeyedGraph::dfs] under an explicit strategy.
    pub fn dfs_with(&self, from: &T, goal: &T, strategy: DfsStrategy) -> bool {
        match (self.vertex_id(from), self.vertex_id(goal)) {
            (Some(vid_from), Some(vid_goal)) => {
                self.lower_graph.dfs(&vid_from, &vid_goal, strategy)
            }
            _ => {
                tracing::debug!("dfs on a vertex out of the graph");
                false
            }
        }
    }

    /// A path from `source` to `goal` with the fewest edges, both ends included.
    ///
    /// Fails with [Error::VertexNotFound] if either end is unknown, `source` checked first,
    /// and with [Error::NoPathExists] if `goal` cannot be reached.
    pub fn bfs(&self, source: &T, goal: &T) -> Result<Vec<&T>>
    where
        T: std::fmt::Debug,
    {
        let vid_src = self
            .vertex_id(source)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", source)))?;
        let vid_goal = self
            .vertex_id(goal)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", goal)))?;
        match self.lower_graph.shortest_path(&vid_src, &vid_goal) {
            Some(path) => Ok(path.iter().filter_map(|vid| self.data(vid)).collect()),
            None => {
                tracing::debug!(
                    source = vid_src.to_raw(),
                    goal = vid_goal.to_raw(),
                    "no path between vertices"
                );
                Err(Error::NoPathExists {
                    from: format!("{:?}", source),
                    to: format!("{:?}", goal),
                })
            }
        }
    }

    /// Orders all vertex data so that every edge points forward.
    ///
    /// Ties are broken first-come first-served: vertices without in-edges in creation order,
    /// the others in the order their last in-edge gets consumed.
    /// Fails with [Error::CyclicGraph] on any directed cycle.
    pub fn toposort(&self) -> Result<Vec<&T>> {
        let order = self.lower_graph.toposort()?;
        Ok(order.iter().filter_map(|vid| self.data(vid)).collect())
    }

    /// Inspects the graph with `Debug` of vertex data, indented.
    pub fn debug(&self) -> GraphDebug<'_, T> {
        GraphDebug::new(self)
    }
}

/// One line per vertex in creation order: `A -> B, C`, or just `A` without out-edges.
impl<T> std::fmt::Display for KeyedGraph<T>
where
    T: Hash + Eq + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (vid, data) in self.iter_vertices() {
            write!(f, "{}", data)?;
            let mut sinks = self
                .lower_graph
                .out_edges(&vid)
                .filter_map(|e| self.data(&e.sink));
            if let Some(first) = sinks.next() {
                write!(f, " -> {}", first)?;
                for sink in sinks {
                    write!(f, ", {}", sink)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> std::fmt::Debug for KeyedGraph<T>
where
    T: Hash + Eq + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "KeyedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}
