//! Terminal output formatter

use super::RankSection;
use linkrank_core::LinkGraph;

pub fn format_sections(sections: &[RankSection]) -> String {
    let mut output = String::new();

    for section in sections {
        output.push_str(&section.heading);
        output.push('\n');
        for (page, rank) in section.ranks.iter() {
            output.push_str(&format!("  {}: {:.4}\n", page, rank));
        }
    }

    output
}

pub fn format_graph(graph: &LinkGraph) -> String {
    let mut output = String::new();

    for page in graph.pages() {
        let links: Vec<&str> = graph.links(page).into_iter().flatten().collect();
        if links.is_empty() {
            output.push_str(&format!("{} (dangling)\n", page));
        } else {
            output.push_str(&format!("{} -> {}\n", page, links.join(", ")));
        }
    }

    output.push_str(&format!(
        "\n{} pages, {} links\n",
        graph.len(),
        graph.edge_count()
    ));
    output
}
