use crate::{graph::*, Error, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// Kahn's algorithm.
///
/// Vertices whose in-degrees drop to zero are emitted first-come first-served.
/// Vertices with no in-edges at all come first, in creation order.
pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Orders all vertices so that every edge points forward.
    ///
    /// Fails with [Error::CyclicGraph] if there is a directed cycle, self-loops included.
    /// No partial ordering is returned in that case.
    fn toposort(&self) -> Result<Vec<VertexId>> {
        let total = self.vertex_size();
        let mut degree_queue = DegreeQueue::new(self);
        let mut order = Vec::with_capacity(total);
        while let Some(vert) = degree_queue.pop_free() {
            for e in self.out_edges(&vert) {
                degree_queue.decr_indegree(&e.sink);
            }
            order.push(vert);
        }
        if order.len() != total {
            tracing::debug!(processed = order.len(), total, "toposort hits a cycle");
            return Err(Error::CyclicGraph {
                processed: order.len(),
                total,
            });
        }
        Ok(order)
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

/// Residual in-degrees of the vertices not emitted yet.
///
/// Priorities are `(residual in-degree, arrival)` with the smallest first,
/// where `arrival` counts the vertices which have dropped to zero so far.
struct DegreeQueue {
    queue: KeyedPriorityQueue<VertexId, Reverse<(usize, usize)>, RandomState>,
    arrivals: usize,
}

impl DegreeQueue {
    fn new<G: QueryableGraph>(graph: &G) -> Self {
        let mut res = Self {
            queue: KeyedPriorityQueue::with_capacity_and_hasher(
                graph.vertex_size(),
                RandomState::new(),
            ),
            arrivals: 0,
        };
        for v in graph.iter_vertices() {
            let priority = res.priority(graph.in_degree(&v));
            res.queue.push(v, priority);
        }
        res
    }

    fn priority(&mut self, residual: usize) -> Reverse<(usize, usize)> {
        if residual == 0 {
            let arrival = self.arrivals;
            self.arrivals += 1;
            Reverse((0, arrival))
        } else {
            Reverse((residual, 0))
        }
    }

    /// Takes the earliest vertex with no residual in-edges, if any.
    fn pop_free(&mut self) -> Option<VertexId> {
        match self.queue.peek() {
            Some((_, Reverse((0, _)))) => self.queue.pop().map(|(v, _)| v),
            _ => None,
        }
    }

    fn decr_indegree(&mut self, v: &VertexId) {
        let residual = match self.queue.get_priority(v) {
            Some(Reverse((residual, _))) => *residual,
            None => return,
        };
        let priority = self.priority(residual.saturating_sub(1));
        let _ = self.queue.set_priority(v, priority);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::*;
    use petgraph::algo::is_cyclic_directed;
    use quickcheck_macros::quickcheck;

    fn ids(xs: &[usize]) -> Vec<VertexId> {
        xs.iter().map(|x| VertexId::new(*x)).collect()
    }

    #[test]
    fn first_come_first_served() {
        let g = EdgeList {
            vertex_size: 4,
            edges: vec![(3, 1), (0, 2)],
        }
        .to_lower_graph();
        assert_eq!(g.toposort().unwrap(), ids(&[0, 3, 2, 1]));
    }

    #[test]
    fn parallel_edges() {
        let g = EdgeList {
            vertex_size: 2,
            edges: vec![(0, 1), (0, 1)],
        }
        .to_lower_graph();
        assert_eq!(g.toposort().unwrap(), ids(&[0, 1]));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let g = EdgeList {
            vertex_size: 2,
            edges: vec![(0, 1), (1, 1)],
        }
        .to_lower_graph();
        assert_eq!(
            g.toposort(),
            Err(Error::CyclicGraph {
                processed: 1,
                total: 2
            })
        );
    }

    #[test]
    fn empty_graph() {
        let g = AdjacencyListGraph::new();
        assert!(g.toposort().unwrap().is_empty());
    }

    #[quickcheck]
    fn edges_point_forward(edges: EdgeList) {
        let edges = edges.acyclic();
        let g = edges.to_lower_graph();
        let order = g.toposort().unwrap();
        assert_eq!(order.len(), g.vertex_size());
        let mut position = vec![usize::MAX; g.vertex_size()];
        for (i, v) in order.iter().enumerate() {
            assert_eq!(position[v.to_raw()], usize::MAX);
            position[v.to_raw()] = i;
        }
        for e in g.iter_edges() {
            assert!(position[e.source.to_raw()] < position[e.sink.to_raw()]);
        }
    }

    #[quickcheck]
    fn fails_exactly_on_cycles(edges: EdgeList) {
        let g = edges.to_lower_graph();
        let oracle = edges.to_petgraph();
        assert_eq!(g.toposort().is_err(), is_cyclic_directed(&oracle));
    }

    #[quickcheck]
    fn repeated_calls_agree(edges: EdgeList) {
        let g = edges.to_lower_graph();
        assert_eq!(g.toposort(), g.toposort());
    }
}
