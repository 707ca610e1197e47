//! # Strongly Connected Component Search Module
//!
//! This module implements the component search over a
//! [`DirectedGraph`](crate::graph::DirectedGraph).
//!
//! ## Algorithm
//!
//! A single depth-first pass assigns every node a discovery index and a
//! low-link value (the smallest discovery index reachable through tree edges
//! plus at most one edge back into the open stack). A node whose low-link
//! still equals its own index after all successors have been examined is the
//! root of a component; at that point the working stack is unwound down to
//! the root, yielding one complete component. Time complexity is O(V + E),
//! auxiliary space O(V).
//!
//! The search is iterative: recursion is simulated with an explicit stack of
//! frames, so deep graphs (long chains, pathological paths) cannot exhaust
//! the native call stack.
//!
//! ## Key Components
//!
//! - **SccFinder**: public entry point; runs the search and holds the
//!   finished component list
//! - **Traversal** (private): per-run state — discovery indices, low-links,
//!   working stack, frame stack — created fresh for every run
//!
//! ## Output order
//!
//! Components are emitted in reverse topological order of the condensation:
//! if any edge leads from component X to a different component Y, then Y
//! appears before X. Within a component, nodes appear in reverse stack-pop
//! order with the root last; consumers should treat that order as fixed but
//! otherwise arbitrary.
//!
//! ## Example
//!
//! ```
//! use roundabout::graph::DirectedGraph;
//! use roundabout::scc::SccFinder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 0 and 1 form a cycle; 2 sits alone downstream
//! let graph = DirectedGraph::from_successors(vec![vec![1], vec![0, 2], vec![]])?;
//!
//! let mut finder = SccFinder::new();
//! finder.find_components(&graph);
//!
//! assert_eq!(finder.component_count(), 2);
//! assert!(finder.has_cycle());
//! // {2} has no outgoing edges, so it completes before {0, 1}
//! assert_eq!(finder.components()[0], vec![2]);
//! # Ok(())
//! # }
//! ```

mod scc_impl;

pub use scc_impl::*;
