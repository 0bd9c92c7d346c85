use super::scratch::Marks;
use crate::graph::*;

/// How [DepthFirstSearch::dfs] explores out-edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DfsStrategy {
    /// Follows the first unvisited out-neighbor of every vertex and never comes back.
    ///
    /// Once the walk gets stuck, the answer is `false`,
    /// even if the goal hangs off a sibling that was skipped.
    /// So `true` means reachable, but `false` does not mean unreachable.
    #[default]
    Shallow,
    /// Textbook depth-first search with backtracking. Answers true reachability.
    Exhaustive,
}

pub trait DepthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Whether `goal` is found from `from` along directed edges, under `strategy`.
    ///
    /// A vertex always reaches itself.
    /// Returns `false` if either vertex is not in the graph.
    fn dfs(&self, from: &VertexId, goal: &VertexId, strategy: DfsStrategy) -> bool {
        if !self.contains_vertex(from) || !self.contains_vertex(goal) {
            return false;
        }
        match strategy {
            DfsStrategy::Shallow => shallow_walk(self, *from, *goal),
            DfsStrategy::Exhaustive => exhaustive(self, *from, *goal),
        }
    }
}

impl<G: QueryableGraph> DepthFirstSearch for G {}

fn shallow_walk<G: QueryableGraph>(graph: &G, from: VertexId, goal: VertexId) -> bool {
    let mut marks = Marks::new();
    let mut current = from;
    loop {
        if current == goal {
            return true;
        }
        marks.set_visited(current);
        let next = graph
            .out_edges(&current)
            .map(|e| e.sink)
            .find(|v| !marks.is_visited(v));
        match next {
            Some(v) => current = v,
            None => return false,
        }
    }
}

fn exhaustive<G: QueryableGraph>(graph: &G, from: VertexId, goal: VertexId) -> bool {
    let mut marks = Marks::with_capacity(graph.vertex_size());
    let mut stack = vec![from];
    marks.set_visited(from);
    while let Some(v) = stack.pop() {
        if v == goal {
            return true;
        }
        for e in graph.out_edges(&v) {
            if marks.set_visited(e.sink) {
                stack.push(e.sink);
            }
        }
    }
    false
}
