//! Configuration constants for roundabout

/// Input parsing configuration
pub mod input {
    /// Default token separator between successor identifiers
    pub const DEFAULT_SEPARATOR: &str = " ";

    /// Lines starting with this prefix are skipped when reading a graph
    pub const COMMENT_PREFIX: &str = "#";
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}
