use crate::graph::*;

pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId;
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices in creation order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    /// Iterates over edges in insertion order.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    /// Iterates over out-edges of a vertex in insertion order.
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
    /// Number of edges, parallel ones included, whose sink is `v`.
    fn in_degree(&self, v: &VertexId) -> usize;
}
