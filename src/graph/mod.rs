//! # Graph Model Module
//!
//! This module provides the directed-graph representation that the component
//! search operates on, plus an incremental builder for assembling graphs
//! edge by edge.
//!
//! ## Components
//!
//! - **DirectedGraph**: an immutable adjacency-list graph over nodes
//!   identified by their position `0..N`
//! - **GraphBuilder**: accumulates nodes and edges, validating everything at
//!   `build()` time
//!
//! Every successor identifier is checked against `0..N` during construction;
//! an out-of-range reference fails with
//! [`RoundaboutError::InvalidEdgeIndex`](crate::error::RoundaboutError)
//! before any traversal can run. Multi-edges and self-loops are accepted
//! as-is.
//!
//! ## Example
//!
//! ```
//! use roundabout::graph::DirectedGraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Two nodes pointing at each other, plus an isolated third node
//! let graph = DirectedGraph::from_successors(vec![vec![1], vec![0], vec![]])?;
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.successors(0), &[1]);
//! assert!(graph.successors(2).is_empty());
//! # Ok(())
//! # }
//! ```

mod builder;
mod types;

pub use builder::GraphBuilder;
pub use types::{DirectedGraph, NodeId};
