//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::RoundaboutError;
use crate::scc::SccFinder;
use crate::utils::string::{format_node_list, pluralize};

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, finder: &SccFinder) -> Result<String, RoundaboutError> {
        let mut output = String::new();

        if finder.node_count() == 0 {
            writeln!(
                output,
                "{} The graph is empty - nothing to analyze.",
                style("ℹ️").blue()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "{} Found {} strongly connected {} across {} {}:\n",
            style("🔄").cyan(),
            style(finder.component_count()).bold(),
            pluralize("component", finder.component_count()),
            style(finder.node_count()).bold(),
            pluralize("node", finder.node_count()),
        )?;

        for (i, component) in finder.components().iter().enumerate() {
            let marker = if component.len() > 1 {
                style("●").yellow()
            } else {
                style("•").dim()
            };
            writeln!(
                output,
                "  {} Component #{} ({} {}): {}",
                marker,
                i + 1,
                component.len(),
                pluralize("node", component.len()),
                style(format_node_list(component)).bold()
            )?;
        }

        writeln!(output)?;
        if finder.has_cycle() {
            writeln!(
                output,
                "{} The graph contains cycles: every multi-node component above is one.",
                style("❌").red().bold()
            )?;
        } else {
            writeln!(
                output,
                "{} No cycles - every component is a single node.",
                style("✅").green().bold()
            )?;
        }

        writeln!(
            output,
            "{} Components are listed in reverse topological order: edges between \
             components always point at an earlier entry.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
