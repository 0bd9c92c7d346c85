use super::scratch::Marks;
use crate::graph::*;
use std::collections::VecDeque;

pub trait BreadthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// A path from `source` to `goal` with the fewest edges, both ends included.
    ///
    /// Returns `None` if `goal` cannot be reached or either end is not in the graph.
    /// Among equally short paths, the one discovered first along out-edge order wins.
    fn shortest_path(&self, source: &VertexId, goal: &VertexId) -> Option<Vec<VertexId>> {
        if !self.contains_vertex(source) || !self.contains_vertex(goal) {
            return None;
        }
        let marks = scan(self, *source, *goal);
        if !marks.is_visited(goal) {
            return None;
        }
        let mut path = vec![*goal];
        let mut backward = *goal;
        while backward != *source {
            backward = marks.came_from(&backward)?;
            path.push(backward);
        }
        path.reverse();
        Some(path)
    }
}

impl<G: QueryableGraph> BreadthFirstSearch for G {}

/// Breadth-first scan from `source`, stopping as soon as `goal` is discovered.
///
/// Every discovered vertex but `source` gets a came-from link to the vertex it was discovered from.
fn scan<G: QueryableGraph>(graph: &G, source: VertexId, goal: VertexId) -> Marks {
    let mut marks = Marks::with_capacity(graph.vertex_size());
    let mut queue = VecDeque::new();
    marks.set_visited(source);
    queue.push_back(source);
    if source == goal {
        return marks;
    }
    while let Some(v) = queue.pop_front() {
        for e in graph.out_edges(&v) {
            if marks.set_visited(e.sink) {
                marks.set_came_from(e.sink, v);
                if e.sink == goal {
                    return marks;
                }
                queue.push_back(e.sink);
            }
        }
    }
    marks
}
