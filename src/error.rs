use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A token in the input text could not be converted to the requested
/// numeric type.
///
/// Raised by the token parser only; graph construction has its own
/// `InvalidEdgeIndex` failure and never produces this.
#[derive(Error, Debug, Diagnostic)]
#[error("Cannot parse '{token}' as {type_name}")]
#[diagnostic(
    code(roundabout::parse_error),
    help("Every token between separators must be a valid {type_name}")
)]
pub struct ParseError {
    pub token: String,
    pub type_name: &'static str,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("not a {type_name}")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum RoundaboutError {
    #[error("Node {node} lists successor {successor}, but the graph has {node_count} nodes")]
    #[diagnostic(
        code(roundabout::invalid_edge_index),
        help("Successor identifiers must lie in 0..{node_count}")
    )]
    InvalidEdgeIndex {
        node: usize,
        successor: usize,
        node_count: usize,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ParseError(Box<ParseError>),

    #[error("Failed to read graph input '{path}'")]
    #[diagnostic(
        code(roundabout::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(roundabout::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(roundabout::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(code(roundabout::io_error), help("Check file permissions"))]
    Io(#[from] std::io::Error),
}
