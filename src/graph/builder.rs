//! Incremental graph construction

use super::types::{DirectedGraph, NodeId};
use crate::error::RoundaboutError;

/// Accumulates an adjacency structure edge by edge.
///
/// Unlike [`DirectedGraph::from_successors`], the builder accepts edges in
/// any order and does not require the successor lists to exist up front.
/// Validation happens once, at [`build`](GraphBuilder::build) time, with the
/// same error contract: any successor outside `0..N` fails the whole build.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    successors: Vec<Vec<NodeId>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the graph to `node_count` nodes with empty successor lists.
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        if node_count > self.successors.len() {
            self.successors.resize_with(node_count, Vec::new);
        }
        self
    }

    /// Append one node with no successors, returning its identifier.
    pub fn add_node(&mut self) -> NodeId {
        self.successors.push(Vec::new());
        self.successors.len() - 1
    }

    /// Record an edge `from → to`.
    ///
    /// Grows the node set to include `from` if needed; `to` is only checked
    /// at build time, so forward references to not-yet-added nodes are fine.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> &mut Self {
        if from >= self.successors.len() {
            self.successors.resize_with(from + 1, Vec::new);
        }
        self.successors[from].push(to);
        self
    }

    /// Validate the accumulated structure and produce the graph.
    pub fn build(self) -> Result<DirectedGraph, RoundaboutError> {
        DirectedGraph::from_successors(self.successors)
    }
}
