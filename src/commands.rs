//! Command execution for the roundabout CLI
//!
//! Reading the input, assembling the graph, running the component search,
//! and rendering the requested report.

use std::io::Read;
use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::{Cli, OutputFormat};
use crate::constants::input::COMMENT_PREFIX;
use crate::error::RoundaboutError;
use crate::graph::DirectedGraph;
use crate::parser::parse_sequence;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::scc::SccFinder;

/// Read the graph text from a file, or from stdin when no path is given.
pub fn read_input(input: Option<&Path>) -> Result<String, RoundaboutError> {
    match input {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| RoundaboutError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Build a graph from adjacency-list text.
///
/// Each non-comment line holds the successor list of the next node; an empty
/// line is a node with no successors. Tokenization failures surface as
/// `ParseError`, out-of-range successors as `InvalidEdgeIndex` — no graph is
/// produced in either case.
pub fn graph_from_text(text: &str, separator: &str) -> Result<DirectedGraph, RoundaboutError> {
    let successors = text
        .lines()
        .filter(|line| !line.trim_start().starts_with(COMMENT_PREFIX))
        .map(|line| parse_sequence(line, separator))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| RoundaboutError::ParseError(Box::new(e)))?;

    DirectedGraph::from_successors(successors)
}

/// Execute the component search end to end.
pub fn execute(cli: Cli) -> Result<()> {
    let text = read_input(cli.input.as_deref())
        .into_diagnostic()
        .wrap_err("Failed to read graph input")?;

    let graph = graph_from_text(&text, &cli.separator)
        .into_diagnostic()
        .wrap_err("Failed to build graph from input")?;

    eprintln!(
        "{} Searching {} nodes, {} edges...\n",
        style("🔄").cyan(),
        graph.node_count(),
        graph.edge_count()
    );

    let mut finder = SccFinder::new();
    finder.find_components(&graph);

    let report = match cli.format {
        OutputFormat::Human => HumanReportGenerator::new().generate_report(&finder),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(&finder),
    };

    match report {
        Ok(report) => print!("{report}"),
        Err(e) => {
            return Err(e)
                .into_diagnostic()
                .wrap_err("Failed to generate report");
        }
    }

    if cli.error_on_cycles && finder.has_cycle() {
        std::process::exit(1);
    }

    Ok(())
}
