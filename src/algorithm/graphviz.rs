//! Visualize keyed graphs in the graphviz format.
use crate::graph::*;
use std::fmt::{Display, Write};
use std::hash::Hash;

/**
 * Dumps a keyed graph into graphviz format.
 *
 * Every edge becomes a line `"source" -> "sink"`, with vertices named by `Display` of their data.
 * Vertices go in creation order, and edges of a vertex in insertion order.
 * Vertices without any edge are left out.
 *
 * # Examples
 *
 * ```rust
 * use keyed_digraph::{algorithm::graphviz::*, graph::*};
 *
 * let mut g = KeyedGraph::new();
 * g.add_edge("A", "B");
 * g.add_edge("B", "C");
 * g.add_edge("A", "C");
 * g.add_vertex("D");
 * assert_eq!(
 *     g.generate_dot(),
 *     "digraph d {\n\t\"A\" -> \"B\"\n\t\"A\" -> \"C\"\n\t\"B\" -> \"C\"\n}"
 * );
 *
 * let mut buf = String::new();
 * g.write_dot(&mut buf, "trial").unwrap();
 * assert!(buf.starts_with("digraph trial {\n"));
 * ```
 */
pub trait DumpInGraphviz {
    /// Writes the graph named `graph_name`. No newline follows the closing brace.
    fn write_dot<W>(&self, out: &mut W, graph_name: &str) -> std::fmt::Result
    where
        W: Write;

    /// The graph named `d`, as a string.
    fn generate_dot(&self) -> String {
        let mut res = String::new();
        // writing into a `String` does not fail
        let _ = self.write_dot(&mut res, "d");
        res
    }
}

impl<T> DumpInGraphviz for KeyedGraph<T>
where
    T: Hash + Eq + Display,
{
    fn write_dot<W>(&self, out: &mut W, graph_name: &str) -> std::fmt::Result
    where
        W: Write,
    {
        writeln!(out, "digraph {} {{", graph_name)?;
        let lower = self.lower_graph();
        for (vid, data) in self.iter_vertices() {
            let src = quoted(data);
            for e in lower.out_edges(&vid) {
                if let Some(sink) = self.data(&e.sink) {
                    writeln!(out, "\t{} -> {}", src, quoted(sink))?;
                }
            }
        }
        write!(out, "}}")
    }
}

/// A graphviz ID in double quotes, escaping quotes and backslashes inside.
fn quoted<T: Display>(data: &T) -> String {
    let raw = data.to_string();
    let mut res = String::with_capacity(raw.len() + 2);
    res.push('"');
    for c in raw.chars() {
        if c == '"' || c == '\\' {
            res.push('\\');
        }
        res.push(c);
    }
    res.push('"');
    res
}
