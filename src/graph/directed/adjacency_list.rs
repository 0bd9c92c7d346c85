use crate::graph::*;

/// A directed graph storing out-edges on their source vertices.
///
/// Vertex IDs are dense, so vertices live in a plain vector indexed by ID.
///
/// |                 | Complexity                          |
/// | --------------- | ----------------------------------- |
/// | `add_vertex`    | amortized $O(1)$                    |
/// | `add_edge`      | amortized $O(1)$                    |
/// | `vertex_size`   | $O(1)$                              |
/// | `edge_size`     | $O(1)$                              |
/// | `out_edges`     | $O(1)$, then $O(1)$ on each `.next` |
/// | `in_degree`     | $O(1)$                              |
#[derive(Clone, Default)]
pub struct AdjacencyListGraph {
    vid_factory: VertexIdFactory,
    eid_factory: EdgeIdFactory,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl AdjacencyListGraph {
    pub fn vertex(&self, v: &VertexId) -> Option<&Vertex> {
        self.vertices.get(v.to_raw())
    }
}

impl std::fmt::Debug for AdjacencyListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyListGraph {{")?;
        for v in self.vertices.iter() {
            writeln!(f, "{:?}:", v.id())?;
            for e in v.edges() {
                writeln!(f, "  -> {:?} by {:?}", e.sink, e.id)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for AdjacencyListGraph {
    fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            eid_factory: EdgeIdFactory::new(),
            vertices: vec![],
            edges: vec![],
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.vid_factory.one_more();
        debug_assert_eq!(vid.to_raw(), self.vertices.len());
        self.vertices.push(Vertex::new(vid));
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        debug_assert!(self.contains_vertex(&source));
        debug_assert!(self.contains_vertex(&sink));
        let eid = self.eid_factory.one_more();
        let edge = Edge {
            id: eid,
            source,
            sink,
        };
        self.vertices[sink.to_raw()].add_indegree();
        self.vertices[source.to_raw()].add_edge(edge);
        self.edges.push(edge);
        eid
    }
}

impl QueryableGraph for AdjacencyListGraph {
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().map(|v| v.id()))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertices.len()
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        match self.vertex(v) {
            Some(vert) => Box::new(vert.edges().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn in_degree(&self, v: &VertexId) -> usize {
        self.vertex(v).map(|vert| vert.in_degree()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{directed::*, *};
    use quickcheck_macros::quickcheck;

    #[test]
    fn parallel_edges_and_self_loops() {
        let mut g = AdjacencyListGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let e0 = g.add_edge(v0, v1);
        let e1 = g.add_edge(v0, v1);
        let e2 = g.add_edge(v1, v1);
        assert_ne!(e0, e1);
        assert_eq!(g.edge_size(), 3);
        assert_eq!(g.in_degree(&v0), 0);
        assert_eq!(g.in_degree(&v1), 3);
        let outs: Vec<_> = g.out_edges(&v0).map(|e| e.id).collect();
        assert_eq!(outs, vec![e0, e1]);
        let outs: Vec<_> = g.out_edges(&v1).map(|e| e.id).collect();
        assert_eq!(outs, vec![e2]);
    }

    #[test]
    fn unknown_vertex() {
        let g = AdjacencyListGraph::new();
        let v = VertexId::new(3);
        assert!(!g.contains_vertex(&v));
        assert_eq!(g.out_edges(&v).count(), 0);
        assert_eq!(g.in_degree(&v), 0);
    }

    #[quickcheck]
    fn degrees_match_edges(edges: EdgeList) {
        let g = edges.to_lower_graph();
        assert_eq!(g.vertex_size(), edges.vertex_size);
        assert_eq!(g.edge_size(), edges.edges.len());
        for v in g.iter_vertices() {
            let expected_in = edges
                .edges
                .iter()
                .filter(|(_, snk)| *snk == v.to_raw())
                .count();
            assert_eq!(g.in_degree(&v), expected_in);
            let expected_out: Vec<_> = edges
                .edges
                .iter()
                .filter(|(src, _)| *src == v.to_raw())
                .map(|(_, snk)| *snk)
                .collect();
            let trial_out: Vec<_> = g.out_edges(&v).map(|e| e.sink.to_raw()).collect();
            assert_eq!(trial_out, expected_out);
        }
        let trial_edges: Vec<_> = g
            .iter_edges()
            .map(|e| (e.source.to_raw(), e.sink.to_raw()))
            .collect();
        assert_eq!(trial_edges, edges.edges);
    }
}
