//! JSON format report generation

use serde::Serialize;

use super::ReportGenerator;
use crate::error::RoundaboutError;
use crate::graph::NodeId;
use crate::scc::SccFinder;

pub struct JsonReportGenerator;

/// Serialized shape of a finished component search.
///
/// Components stay in emission order: reverse topological order is part of
/// the contract, so no sorting happens here.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    node_count: usize,
    component_count: usize,
    has_cycle: bool,
    components: &'a [Vec<NodeId>],
}

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, finder: &SccFinder) -> Result<String, RoundaboutError> {
        let report = JsonReport {
            node_count: finder.node_count(),
            component_count: finder.component_count(),
            has_cycle: finder.has_cycle(),
            components: finder.components(),
        };

        serde_json::to_string_pretty(&report).map_err(RoundaboutError::Json)
    }
}
