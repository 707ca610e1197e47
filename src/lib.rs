//! # Roundabout - Strongly Connected Components of Directed Graphs
//!
//! Roundabout computes the strongly connected components (SCCs) of a
//! directed graph: the maximal groups of nodes that are all mutually
//! reachable from one another. SCCs underpin cycle detection,
//! dependency-graph condensation, and liveness analyses.
//!
//! ## Main Components
//!
//! - **Graph**: Validated adjacency-list representation of a directed graph
//! - **Scc**: The single-pass, linear-time component search
//! - **Parser**: Turns delimited text into typed numeric sequences for
//!   building graphs from input files
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Finding the components of a graph
//!
//! ```
//! use roundabout::graph::DirectedGraph;
//! use roundabout::scc::SccFinder;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Describe the graph as per-node successor lists.
//! // Nodes 0-2 form a cycle; node 3 hangs off it.
//! let graph = DirectedGraph::from_successors(vec![
//!     vec![1],    // 0 -> 1
//!     vec![2],    // 1 -> 2
//!     vec![0, 3], // 2 -> 0, 2 -> 3
//!     vec![],     // 3
//! ])?;
//!
//! // Step 2: Run the component search
//! let mut finder = SccFinder::new();
//! finder.find_components(&graph);
//!
//! // Step 3: Inspect the partition. Components come out in reverse
//! // topological order, so the sink {3} precedes the cycle {0, 1, 2}.
//! assert_eq!(finder.component_count(), 2);
//! assert_eq!(finder.components()[0], vec![3]);
//! assert!(finder.has_cycle());
//! # Ok(())
//! # }
//! ```
//!
//! ### Building a graph from text
//!
//! ```
//! use roundabout::graph::GraphBuilder;
//! use roundabout::parser::parse_sequence;
//!
//! # fn main() -> miette::Result<()> {
//! // One successor list per node, parsed from delimited text
//! let mut builder = GraphBuilder::new().with_node_count(3);
//! for (node, line) in ["1 2", "2", "0"].iter().enumerate() {
//!     for successor in parse_sequence::<usize>(line, " ")? {
//!         builder.add_edge(node, successor);
//!     }
//! }
//! let graph = builder.build()?;
//!
//! assert_eq!(graph.edge_count(), 4);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod error;
pub mod graph;
pub mod parser;
pub mod reports;
pub mod scc;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute;

    let cli = Cli::parse();
    execute(cli)
}
