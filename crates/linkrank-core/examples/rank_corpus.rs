// Rank a small in-memory corpus using linkrank as a library

use linkrank_core::{IterativeEstimator, LinkGraph, MonteCarloEstimator};

fn main() -> linkrank_core::Result<()> {
    println!("Linkrank Library Example\n");

    let graph = LinkGraph::from_links(vec![
        ("ai.html", vec!["algorithms.html", "inference.html"]),
        ("algorithms.html", vec!["coding.html", "programming.html"]),
        ("c.html", vec!["programming.html"]),
        ("inference.html", vec!["ai.html"]),
        ("logic.html", vec!["inference.html"]),
        ("programming.html", vec!["c.html", "python.html"]),
        ("python.html", vec!["ai.html", "programming.html"]),
        ("coding.html", vec![]),
    ])?;
    println!(
        "Graph: {} pages, {} links, {} dangling\n",
        graph.len(),
        graph.edge_count(),
        graph.dangling_pages().count()
    );

    let sampled = MonteCarloEstimator::new().run_seeded(&graph, 2024)?;
    println!("Sampled ranks:");
    for (page, rank) in sampled.iter() {
        println!("  {}: {:.4}", page, rank);
    }

    let report = IterativeEstimator::new().run(&graph)?;
    println!("\nIterated ranks ({} passes):", report.passes);
    for (page, rank) in report.ranks.iter() {
        println!("  {}: {:.4}", page, rank);
    }

    println!(
        "\nLargest disagreement: {:.4}",
        sampled.max_abs_diff(&report.ranks)
    );

    Ok(())
}
