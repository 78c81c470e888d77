//! Linkrank CLI
//!
//! Rank the pages of an HTML corpus by sampling and by iteration.

use anyhow::Result;
use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::{LinkRankError, RankConfig};

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<LinkRankError>()
            .map(LinkRankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => RankConfig::load_from(path)?,
        None => RankConfig::load()?,
    };

    match cli.command {
        Commands::Rank(args) => commands::rank::run(args, config, cli.format),
        Commands::Links(args) => commands::links::run(args, config, cli.format),
        Commands::Transition(args) => commands::transition::run(args, config, cli.format),
    }
}
