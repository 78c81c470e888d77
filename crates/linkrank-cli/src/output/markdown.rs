//! Markdown output formatter

use super::RankSection;
use linkrank_core::LinkGraph;

pub fn format_sections(sections: &[RankSection]) -> String {
    let mut output = String::from("# PageRank\n\n");

    for section in sections {
        output.push_str(&format!("## {}\n\n", section.heading));
        output.push_str("| Page | Rank |\n|------|------|\n");
        for (page, rank) in section.ranks.iter() {
            output.push_str(&format!("| `{}` | {:.4} |\n", page, rank));
        }
        output.push('\n');
    }

    output
}

pub fn format_graph(graph: &LinkGraph) -> String {
    let mut output = String::from("# Link Graph\n\n");

    for page in graph.pages() {
        let links: Vec<String> = graph
            .links(page)
            .into_iter()
            .flatten()
            .map(|l| format!("`{}`", l))
            .collect();
        if links.is_empty() {
            output.push_str(&format!("- `{}`: *dangling*\n", page));
        } else {
            output.push_str(&format!("- `{}`: {}\n", page, links.join(", ")));
        }
    }

    output
}
