use super::Edge;

/// ID for vertices, which are essentially `usize`.
///
/// IDs are handed out densely in creation order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A factory to generate `VertexId` uniquely.
#[derive(Clone)]
pub struct VertexIdFactory(usize);

impl Default for VertexIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// Structural part of a vertex: its outgoing edges and how many edges come into it.
///
/// Traversal state such as visited marks never lives here.
/// Algorithms keep it on their own side for the duration of a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    out_edges: Vec<Edge>,
    in_degree: usize,
}

impl Vertex {
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            out_edges: vec![],
            in_degree: 0,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Appends an outgoing edge. Parallel edges and self-loops are kept as they are.
    pub fn add_edge(&mut self, edge: Edge) {
        debug_assert_eq!(edge.source, self.id);
        self.out_edges.push(edge);
    }

    /// Iterates over outgoing edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.out_edges.iter()
    }

    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    /// Records one more incoming edge.
    pub fn add_indegree(&mut self) {
        self.in_degree += 1;
    }

    pub fn in_degree(&self) -> usize {
        self.in_degree
    }
}
