//! Corpus crawling: turn a directory of HTML pages into a link graph

use super::{extract_links, LinkGraph, Page};
use crate::error::{LinkRankError, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Crawl options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlOptions {
    /// Glob pattern matched against the path relative to the corpus root
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,

    /// Skip dot-files and dot-directories
    #[serde(default = "default_true")]
    pub exclude_hidden: bool,
}

fn default_pattern() -> String {
    "*.html".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            recursive: false,
            exclude_hidden: true,
        }
    }
}

/// Crawl `root` and build the link graph of its pages.
///
/// Each matching file becomes a page named by its path relative to `root`.
/// A page's links are the anchor targets found in it, minus the page itself
/// and minus anything that does not name another page of the corpus.
pub fn crawl(root: &Path, options: &CrawlOptions) -> Result<LinkGraph> {
    if !root.is_dir() {
        return Err(LinkRankError::CorpusNotFound(root.display().to_string()));
    }

    let pattern = Pattern::new(&options.pattern)?;
    let mut walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    let mut raw: BTreeMap<Page, BTreeSet<String>> = BTreeMap::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_skip(e, options))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| path.to_string_lossy().to_string());

        if !pattern.matches(&relative) {
            continue;
        }

        let content = std::fs::read_to_string(path)?;
        let links: BTreeSet<String> = extract_links(&content).into_iter().collect();
        tracing::debug!("{}: {} distinct anchors", relative, links.len());
        raw.insert(relative, links);
    }

    if raw.is_empty() {
        return Err(LinkRankError::graph(format!(
            "no pages matching {} in {}",
            options.pattern,
            root.display()
        )));
    }

    let corpus: BTreeSet<Page> = raw.keys().cloned().collect();
    let mut dropped = 0usize;
    let links: BTreeMap<Page, BTreeSet<Page>> = raw
        .into_iter()
        .map(|(page, targets)| {
            let total = targets.len();
            let kept: BTreeSet<Page> = targets
                .into_iter()
                .filter(|t| *t != page && corpus.contains(t))
                .collect();
            dropped += total - kept.len();
            (page, kept)
        })
        .collect();

    let graph = LinkGraph::new(links)?;
    tracing::info!(
        "Crawled {} pages with {} links ({} dangling, {} anchors dropped)",
        graph.len(),
        graph.edge_count(),
        graph.dangling_pages().count(),
        dropped
    );

    Ok(graph)
}

fn should_skip(entry: &DirEntry, options: &CrawlOptions) -> bool {
    let name = entry.file_name().to_string_lossy();
    options.exclude_hidden && name.starts_with('.')
}
