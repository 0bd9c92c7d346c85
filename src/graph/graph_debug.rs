use crate::graph::*;
use std::hash::Hash;

/// A default implementation of inspecting into a [KeyedGraph] with customized indentation.
pub struct GraphDebug<'a, T>
where
    T: Hash + Eq,
{
    graph: &'a KeyedGraph<T>,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, T> GraphDebug<'a, T>
where
    T: Hash + Eq,
{
    pub fn new(graph: &'a KeyedGraph<T>) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, T> std::fmt::Debug for GraphDebug<'a, T>
where
    T: Hash + Eq + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lower = self.graph.lower_graph();
        for (vid, data) in self.graph.iter_vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", data)?;
            for e in lower.out_edges(&vid) {
                if let Some(sink) = self.graph.data(&e.sink) {
                    self.display_indent(f, 1)?;
                    writeln!(f, "--{:?}-> {:?}", e.id, sink)?;
                }
            }
        }
        Ok(())
    }
}
