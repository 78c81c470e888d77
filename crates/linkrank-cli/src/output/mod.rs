//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use anyhow::Result;
use linkrank_core::{Distribution, LinkGraph};
use serde::Serialize;

/// One block of ranked pages
#[derive(Debug, Serialize)]
pub struct RankSection {
    /// Machine-readable name: sampling, iteration or transition
    pub method: &'static str,
    /// Human-readable heading
    #[serde(skip)]
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passes: Option<usize>,
    pub ranks: Distribution,
}

/// Format ranked sections
pub fn format_sections(sections: &[RankSection], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_sections(sections),
        OutputFormat::Csv => csv::format_sections(sections),
        OutputFormat::Md => Ok(markdown::format_sections(sections)),
        OutputFormat::Cli => Ok(terminal::format_sections(sections)),
    }
}

/// Format a link graph
pub fn format_graph(graph: &LinkGraph, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_graph(graph),
        OutputFormat::Csv => csv::format_graph(graph),
        OutputFormat::Md => Ok(markdown::format_graph(graph)),
        OutputFormat::Cli => Ok(terminal::format_graph(graph)),
    }
}
