//! Link graph model and corpus crawling

mod crawl;
mod link_extractor;

pub use crawl::{crawl, CrawlOptions};
pub use link_extractor::extract_links;

use crate::error::{LinkRankError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Page identifier
pub type Page = String;

/// Directed graph of pages and their outbound links.
///
/// Pages are stored in sorted order and addressed internally by index, so
/// every traversal over the graph is deterministic. Construction validates
/// that the graph is non-empty, that every link target is itself a page, and
/// that no page links to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGraph {
    pages: Vec<Page>,
    outbound: Vec<Vec<usize>>,
    lookup: HashMap<Page, usize>,
}

impl LinkGraph {
    /// Build a graph from a page -> outbound links mapping
    pub fn new(links: BTreeMap<Page, BTreeSet<Page>>) -> Result<Self> {
        if links.is_empty() {
            return Err(LinkRankError::graph("graph has no pages"));
        }

        let pages: Vec<Page> = links.keys().cloned().collect();
        let lookup: HashMap<Page, usize> = pages
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();

        let mut outbound = Vec::with_capacity(pages.len());
        for (page, targets) in &links {
            let mut indices = Vec::with_capacity(targets.len());
            for target in targets {
                if target == page {
                    return Err(LinkRankError::graph(format!("{} links to itself", page)));
                }
                let idx = lookup.get(target).ok_or_else(|| {
                    LinkRankError::graph(format!("{} links to unknown page {}", page, target))
                })?;
                indices.push(*idx);
            }
            outbound.push(indices);
        }

        Ok(Self {
            pages,
            outbound,
            lookup,
        })
    }

    /// Build a graph from `(page, targets)` pairs.
    ///
    /// Repeated pages have their link sets merged.
    pub fn from_links<P, T, I>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, T)>,
        P: Into<Page>,
        T: IntoIterator,
        T::Item: Into<Page>,
    {
        let mut map: BTreeMap<Page, BTreeSet<Page>> = BTreeMap::new();
        for (page, targets) in links {
            map.entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }
        Self::new(map)
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a constructed graph; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of links
    pub fn edge_count(&self) -> usize {
        self.outbound.iter().map(Vec::len).sum()
    }

    /// Pages in sorted order
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(String::as_str)
    }

    pub fn contains(&self, page: &str) -> bool {
        self.lookup.contains_key(page)
    }

    /// Outbound links of `page`, or `None` if the page is unknown
    pub fn links(&self, page: &str) -> Option<impl Iterator<Item = &str>> {
        let idx = self.index_of(page)?;
        Some(self.outbound[idx].iter().map(move |&t| self.pages[t].as_str()))
    }

    /// Whether `page` has no outbound links
    pub fn is_dangling(&self, page: &str) -> bool {
        self.index_of(page)
            .map(|idx| self.outbound[idx].is_empty())
            .unwrap_or(false)
    }

    /// Pages with no outbound links
    pub fn dangling_pages(&self) -> impl Iterator<Item = &str> {
        self.outbound
            .iter()
            .enumerate()
            .filter(|(_, links)| links.is_empty())
            .map(move |(i, _)| self.pages[i].as_str())
    }

    /// Reverse-link index: for each page, the pages that link directly to it.
    ///
    /// Dangling pages are not expanded here; callers decide how to treat them.
    pub fn inbound_index(&self) -> Vec<Vec<usize>> {
        let mut inbound = vec![Vec::new(); self.len()];
        for (source, targets) in self.outbound.iter().enumerate() {
            for &target in targets {
                inbound[target].push(source);
            }
        }
        inbound
    }

    /// Adjacency as a sorted page -> links mapping
    pub fn to_map(&self) -> BTreeMap<Page, BTreeSet<Page>> {
        self.pages
            .iter()
            .zip(&self.outbound)
            .map(|(page, targets)| {
                let links = targets.iter().map(|&t| self.pages[t].clone()).collect();
                (page.clone(), links)
            })
            .collect()
    }

    pub(crate) fn index_of(&self, page: &str) -> Option<usize> {
        self.lookup.get(page).copied()
    }

    pub(crate) fn page_at(&self, idx: usize) -> &str {
        &self.pages[idx]
    }

    pub(crate) fn outbound_at(&self, idx: usize) -> &[usize] {
        &self.outbound[idx]
    }
}

impl Serialize for LinkGraph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> LinkGraph {
        LinkGraph::from_links(vec![
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn test_pages_sorted() {
        let graph = LinkGraph::from_links(vec![
            ("b", Vec::<&str>::new()),
            ("a", vec!["b"]),
        ])
        .unwrap();
        let pages: Vec<_> = graph.pages().collect();
        assert_eq!(pages, vec!["a", "b"]);
    }

    #[test]
    fn test_counts() {
        let graph = sample_graph();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(!graph.is_empty());
    }

    #[test]
    fn test_dangling() {
        let graph = sample_graph();
        assert!(graph.is_dangling("3.html"));
        assert!(!graph.is_dangling("1.html"));
        assert!(!graph.is_dangling("missing.html"));
        let dangling: Vec<_> = graph.dangling_pages().collect();
        assert_eq!(dangling, vec!["3.html"]);
    }

    #[test]
    fn test_links() {
        let graph = sample_graph();
        let links: Vec<_> = graph.links("2.html").unwrap().collect();
        assert_eq!(links, vec!["1.html", "3.html"]);
        assert!(graph.links("nope").is_none());
    }

    #[test]
    fn test_inbound_index() {
        let graph = sample_graph();
        let inbound = graph.inbound_index();
        // 1.html <- 2.html, 2.html <- 1.html, 3.html <- 2.html
        assert_eq!(inbound[0], vec![1]);
        assert_eq!(inbound[1], vec![0]);
        assert_eq!(inbound[2], vec![1]);
    }

    #[test]
    fn test_empty_graph_rejected() {
        let err = LinkGraph::new(BTreeMap::new()).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidGraph(_)));
    }

    #[test]
    fn test_self_link_rejected() {
        let err = LinkGraph::from_links(vec![("a", vec!["a"])]).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidGraph(_)));
        assert!(err.to_string().contains("itself"));
    }

    #[test]
    fn test_unknown_target_rejected() {
        let err = LinkGraph::from_links(vec![("a", vec!["b"])]).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidGraph(_)));
        assert!(err.to_string().contains("unknown page b"));
    }

    #[test]
    fn test_repeated_pages_merge() {
        let graph = LinkGraph::from_links(vec![
            ("a", vec!["b"]),
            ("a", vec!["c"]),
            ("b", vec![]),
            ("c", vec![]),
        ])
        .unwrap();
        assert_eq!(graph.links("a").unwrap().count(), 2);
    }

    #[test]
    fn test_serialize_as_map() {
        let graph = sample_graph();
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json["2.html"], serde_json::json!(["1.html", "3.html"]));
        assert_eq!(json["3.html"], serde_json::json!([]));
    }
}
