//! PageRank computation command

use crate::app::{OutputFormat, RankArgs};
use crate::output::{format_sections, RankSection};
use anyhow::Result;
use linkrank_core::{crawl, RankConfig};

/// Crawl the corpus and rank its pages with the selected estimators
pub fn run(args: RankArgs, config: RankConfig, format: OutputFormat) -> Result<()> {
    let config = args.apply(config);
    config.validate()?;

    let graph = crawl(&args.corpus.corpus, &config.crawl)?;
    let mut sections = Vec::new();

    if args.method.samples() {
        let ranks = config.sampler().run_with_seed(&graph, config.seed)?;
        sections.push(RankSection {
            method: "sampling",
            heading: format!("PageRank Results from Sampling (n = {})", config.samples),
            samples: Some(config.samples),
            seed: config.seed,
            passes: None,
            ranks,
        });
    }

    if args.method.iterates() {
        let report = config.iterator().run(&graph)?;
        tracing::info!(
            "Iteration converged in {} passes (delta {:e})",
            report.passes,
            report.delta
        );
        sections.push(RankSection {
            method: "iteration",
            heading: "PageRank Results from Iteration".to_string(),
            samples: None,
            seed: None,
            passes: Some(report.passes),
            ranks: report.ranks,
        });
    }

    print!("{}", format_sections(&sections, format)?);
    Ok(())
}
