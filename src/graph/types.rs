//! Core graph types
//!
//! This module contains the adjacency-list representation used by the
//! component search.

use crate::error::RoundaboutError;

/// Identifier of a node: its position in the adjacency list.
pub type NodeId = usize;

/// An immutable directed graph over nodes `0..N`.
///
/// Each node owns an ordered list of successor identifiers. The order is
/// preserved exactly as given: it never affects which components are found,
/// only the order in which tied components are emitted. Multi-edges and
/// self-loops are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph {
    successors: Vec<Vec<NodeId>>,
}

impl DirectedGraph {
    /// Construct a graph from per-node successor lists.
    ///
    /// Fails with [`RoundaboutError::InvalidEdgeIndex`] if any successor
    /// identifier falls outside `0..N`, where `N` is the number of lists.
    /// No partially-validated graph is ever returned.
    pub fn from_successors(successors: Vec<Vec<NodeId>>) -> Result<Self, RoundaboutError> {
        let node_count = successors.len();
        for (node, list) in successors.iter().enumerate() {
            for &successor in list {
                if successor >= node_count {
                    return Err(RoundaboutError::InvalidEdgeIndex {
                        node,
                        successor,
                        node_count,
                    });
                }
            }
        }

        Ok(Self { successors })
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.successors.len()
    }

    /// Total number of edges, counting duplicates and self-loops.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Successors of `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.node_count()`. Node identifiers handed out by
    /// this graph are always in range; only a caller-invented id can trip
    /// this.
    pub fn successors(&self, node: NodeId) -> &[NodeId] {
        &self.successors[node]
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}
