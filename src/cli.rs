use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "roundabout",
    about = "🔄 Find the strongly connected components of a directed graph",
    long_about = "roundabout reads a directed graph as an adjacency list and computes its \
                  strongly connected components in a single linear-time pass. Components are \
                  printed in reverse topological order: anything a component points at has \
                  already been listed by the time the component itself appears.",
    version
)]
pub struct Cli {
    /// Graph file to read (stdin if not specified)
    ///
    /// One line per node, in node order: the line for node i lists the
    /// successors of i, separated by the token separator. An empty line
    /// means a node with no successors; lines starting with '#' are skipped.
    #[arg(value_name = "GRAPH_FILE", env = "ROUNDABOUT_INPUT")]
    pub input: Option<PathBuf>,

    /// Token separator between successor identifiers
    #[arg(
        short,
        long,
        default_value = crate::constants::input::DEFAULT_SEPARATOR,
        env = "ROUNDABOUT_SEPARATOR"
    )]
    pub separator: String,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_FORMAT,
        env = "ROUNDABOUT_FORMAT"
    )]
    pub format: OutputFormat,

    /// Exit with error code if the graph contains any cycle
    #[arg(long, env = "ROUNDABOUT_ERROR_ON_CYCLES")]
    pub error_on_cycles: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable console output
    Human,
    /// JSON format for programmatic use
    Json,
}
