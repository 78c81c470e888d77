//! Linkrank Core Library
//!
//! PageRank estimation for hyperlink graphs.
//!
//! # Features
//! - Corpus crawling from a directory of HTML pages
//! - Random-surfer transition model with dangling-page handling
//! - Monte-Carlo estimation by random-walk sampling
//! - Iterative estimation to a fixed point
//! - YAML configuration with environment overrides

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::RankConfig;
pub use error::{LinkRankError, Error, Result};
pub use graph::{crawl, extract_links, CrawlOptions, LinkGraph, Page};
pub use rank::{
    iterate_rank, sample_rank, transition, Distribution, IterationReport, IterativeEstimator,
    MonteCarloEstimator,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
