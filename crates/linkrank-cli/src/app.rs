//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkrank_core::{CrawlOptions, RankConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(author, version, about = "Rank the pages of an HTML corpus with PageRank")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (YAML)
    #[arg(long, global = true, env = "LINKRANK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every page of a corpus
    Rank(RankArgs),

    /// Show the link graph of a corpus
    Links(CorpusArgs),

    /// Show the next-page distribution from one page
    Transition(TransitionArgs),
}

#[derive(Args)]
pub struct CorpusArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,

    /// Glob pattern for page files, relative to the corpus
    #[arg(long)]
    pub pattern: Option<String>,

    /// Include pages in subdirectories
    #[arg(long)]
    pub recursive: bool,
}

impl CorpusArgs {
    /// Crawl options with command-line overrides applied
    pub fn crawl_options(&self, base: &CrawlOptions) -> CrawlOptions {
        let mut options = base.clone();
        if let Some(ref pattern) = self.pattern {
            options.pattern = pattern.clone();
        }
        if self.recursive {
            options.recursive = true;
        }
        options
    }
}

#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Probability of following a link rather than jumping
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of pages sampled by the random walk
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Per-page convergence threshold for iteration
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Maximum iteration passes
    #[arg(long)]
    pub max_passes: Option<usize>,

    /// Seed for the random walk
    #[arg(long)]
    pub seed: Option<u64>,

    /// Estimator(s) to run
    #[arg(long, value_enum, default_value = "both")]
    pub method: Method,
}

impl RankArgs {
    /// Config with command-line overrides applied
    pub fn apply(&self, mut config: RankConfig) -> RankConfig {
        if let Some(damping) = self.damping {
            config.damping_factor = damping;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if let Some(max_passes) = self.max_passes {
            config.max_passes = max_passes;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.crawl = self.corpus.crawl_options(&config.crawl);
        config
    }
}

#[derive(Args)]
pub struct TransitionArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Current page
    pub page: String,

    /// Probability of following a link rather than jumping
    #[arg(short, long)]
    pub damping: Option<f64>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Sample,
    Iterate,
    Both,
}

impl Method {
    pub fn samples(self) -> bool {
        matches!(self, Method::Sample | Method::Both)
    }

    pub fn iterates(self) -> bool {
        matches!(self, Method::Iterate | Method::Both)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}
