//! Link graph command

use crate::app::{CorpusArgs, OutputFormat};
use crate::output::format_graph;
use anyhow::Result;
use linkrank_core::{crawl, RankConfig};

pub fn run(args: CorpusArgs, config: RankConfig, format: OutputFormat) -> Result<()> {
    let graph = crawl(&args.corpus, &args.crawl_options(&config.crawl))?;
    print!("{}", format_graph(&graph, format)?);
    Ok(())
}
