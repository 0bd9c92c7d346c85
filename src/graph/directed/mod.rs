mod adjacency_list;
pub use self::adjacency_list::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use petgraph::graph::{DiGraph, NodeIndex};
    use quickcheck::Arbitrary;
    use rs_quickcheck_util::*;

    /// Arbitrary directed graphs over vertices `0..vertex_size`.
    ///
    /// Parallel edges and self-loops are generated as well.
    #[derive(Clone)]
    pub struct EdgeList {
        pub vertex_size: usize,
        pub edges: Vec<(usize, usize)>,
    }

    impl std::fmt::Debug for EdgeList {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{} vertices, {:?}", self.vertex_size, self.edges)
        }
    }

    impl EdgeList {
        /// Drops self-loops and points every remaining edge from the smaller end to the larger one.
        pub fn acyclic(&self) -> Self {
            let edges = self
                .edges
                .iter()
                .filter(|(a, b)| a != b)
                .map(|&(a, b)| (a.min(b), a.max(b)))
                .collect();
            Self {
                vertex_size: self.vertex_size,
                edges,
            }
        }

        pub fn to_lower_graph(&self) -> directed::AdjacencyListGraph {
            let mut g = directed::AdjacencyListGraph::new();
            for _ in 0..self.vertex_size {
                g.add_vertex();
            }
            for (src, snk) in self.edges.iter() {
                g.add_edge(VertexId::new(*src), VertexId::new(*snk));
            }
            g
        }

        /// Vertex `i` of the keyed graph carries `i` and also gets `VertexId(i)`.
        pub fn to_keyed_graph(&self) -> KeyedGraph<usize> {
            let mut g = KeyedGraph::new();
            for v in 0..self.vertex_size {
                g.add_vertex(v);
            }
            for (src, snk) in self.edges.iter() {
                g.add_edge(*src, *snk);
            }
            g
        }

        pub fn to_petgraph(&self) -> DiGraph<(), ()> {
            let mut g = DiGraph::new();
            for _ in 0..self.vertex_size {
                g.add_node(());
            }
            for (src, snk) in self.edges.iter() {
                g.add_edge(NodeIndex::new(*src), NodeIndex::new(*snk), ());
            }
            g
        }
    }

    impl Arbitrary for EdgeList {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let vertex_size = usize::arbitrary(g) % 8 + 1;
            let edges = gen_bytes(g, b"abcd.", b'.', 0..)
                .iter()
                .map(|_| {
                    (
                        usize::arbitrary(g) % vertex_size,
                        usize::arbitrary(g) % vertex_size,
                    )
                })
                .collect();
            Self { vertex_size, edges }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.edges.len();
            if l == 0 {
                return Box::new(std::iter::empty());
            }
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| {
                let mut res = me.clone();
                res.edges = me.edges[0..n].to_vec();
                res
            });
            Box::new(it)
        }
    }
}
