//! Report generation modules for different output formats
//!
//! This module contains report generators for the component search results:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::RoundaboutError;
use crate::scc::SccFinder;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from finished component search results
    fn generate_report(&self, finder: &SccFinder) -> Result<String, RoundaboutError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
