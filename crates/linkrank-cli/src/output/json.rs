//! JSON output formatter

use super::RankSection;
use anyhow::Result;
use linkrank_core::LinkGraph;

pub fn format_sections(sections: &[RankSection]) -> Result<String> {
    Ok(serde_json::to_string_pretty(sections)? + "\n")
}

pub fn format_graph(graph: &LinkGraph) -> Result<String> {
    let output = serde_json::json!({
        "pages": graph.len(),
        "links": graph.edge_count(),
        "dangling": graph.dangling_pages().collect::<Vec<_>>(),
        "graph": graph,
    });

    Ok(serde_json::to_string_pretty(&output)? + "\n")
}
