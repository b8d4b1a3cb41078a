use crate::value::{Node, Value};
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a graph node: the address of its shared cell.
///
/// Stable for as long as some handle keeps the node alive, which the sorted
/// list guarantees during a traversal.
pub(crate) type NodeId = *const RefCell<Node>;

/// Sorts the graph ending at `root` in topological order.
///
/// Every node reachable from `root` (including `root`) appears exactly once,
/// after all of its operands; `root` is always last. Operands are visited in
/// operation order (left operand first), so the order is deterministic for a
/// given graph. A leaf yields `[root]`.
///
/// The graph must be acyclic, which every `Value` operation guarantees.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited = HashSet::new();
    let mut sorted_list = Vec::new();
    build_topo(root, &mut visited, &mut sorted_list);
    sorted_list
}

/// Depth-first post-order traversal with an explicit stack.
///
/// Produces the same order as the recursive formulation (visit operands left
/// to right, then append the node) without recursion depth limits on long
/// chains such as summed losses.
fn build_topo(root: &Value, visited: &mut HashSet<NodeId>, sorted_list: &mut Vec<Value>) {
    // (node, operands already scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            log::trace!("[build_topo] Node {:?} already visited.", node.node_id());
            continue;
        }
        log::trace!("[build_topo] Visiting node {:?} ({:?})", node.node_id(), node.op_tag());

        let operands = node.operands();
        stack.push((node, true));
        // Reversed so the left operand is popped, and therefore sorted, first.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
