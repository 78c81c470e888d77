//! Transition model command

use crate::app::{OutputFormat, TransitionArgs};
use crate::output::{format_sections, RankSection};
use anyhow::Result;
use linkrank_core::{crawl, transition, RankConfig};

/// Print where a surfer on `page` goes next
pub fn run(args: TransitionArgs, config: RankConfig, format: OutputFormat) -> Result<()> {
    let graph = crawl(&args.corpus.corpus, &args.corpus.crawl_options(&config.crawl))?;
    let damping = args.damping.unwrap_or(config.damping_factor);
    let ranks = transition(&graph, &args.page, damping)?;

    let section = RankSection {
        method: "transition",
        heading: format!("Transition Model from {} (damping = {})", args.page, damping),
        samples: None,
        seed: None,
        passes: None,
        ranks,
    };

    print!("{}", format_sections(&[section], format)?);
    Ok(())
}
