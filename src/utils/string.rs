//! String formatting helpers for reports

use crate::graph::NodeId;

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Render a component's members as `{3, 4, 5}`, in their stored order.
pub fn format_node_list(nodes: &[NodeId]) -> String {
    let inner = nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{inner}}}")
}
