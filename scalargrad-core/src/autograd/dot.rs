//! Graphviz (DOT) export of a computation graph.
//!
//! Each value becomes a record node `label | data | grad`. A value produced by
//! an operation gets an extra small node carrying the operator name, wired
//! `operand -> op -> value`, so the picture reads left to right from the
//! leaves to the root.

use crate::autograd::graph::{topological_sort, NodeId};
use crate::value::Value;
use std::collections::HashMap;
use std::fmt::{self, Write};

/// Renders the graph ending at `root` as a DOT digraph.
pub fn to_dot(root: &Value) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dot(root, &mut out);
    out
}

/// Writes the DOT rendering of the graph ending at `root` into `out`.
///
/// Nodes are numbered in topological order (`n0` is the first leaf, the root
/// has the highest index), which keeps the output stable for a given graph.
pub fn write_dot<W: Write>(root: &Value, out: &mut W) -> fmt::Result {
    let nodes = topological_sort(root);
    let index: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.node_id(), i))
        .collect();

    writeln!(out, "digraph computation {{")?;
    writeln!(out, "  rankdir=LR;")?;

    for (i, node) in nodes.iter().enumerate() {
        let label = node.label().map(|l| escape(&l)).unwrap_or_default();
        writeln!(
            out,
            "  n{i} [shape=record, label=\"{{ {label} | data {:.4} | grad {:.4} }}\"];",
            node.data(),
            node.grad()
        )?;
        if let Some(tag) = node.op_tag() {
            writeln!(out, "  n{i}_op [label=\"{tag}\"];")?;
            writeln!(out, "  n{i}_op -> n{i};")?;
        }
    }

    for (i, node) in nodes.iter().enumerate() {
        for operand in node.operands() {
            // Every operand of a sorted node is itself in the sorted list.
            if let Some(j) = index.get(&operand.node_id()) {
                writeln!(out, "  n{j} -> n{i}_op;")?;
            }
        }
    }

    writeln!(out, "}}")
}

fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '"' | '{' | '}' | '|' | '<' | '>' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;
