//! Random-surfer transition model

use super::{check_damping, Distribution};
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;

/// Next-page probability distribution for a surfer currently on `page`.
///
/// With probability `damping` the surfer follows one of the page's links
/// chosen uniformly; otherwise it jumps to any page of the graph uniformly.
/// A dangling page jumps uniformly with probability 1.
pub fn transition(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    check_damping(damping)?;
    let idx = graph
        .index_of(page)
        .ok_or_else(|| LinkRankError::graph(format!("unknown page {}", page)))?;

    let weights = transition_weights(graph, idx, damping);
    Ok(Distribution::from_weights(
        weights
            .into_iter()
            .enumerate()
            .map(|(i, w)| (graph.page_at(i).to_string(), w))
            .collect(),
    ))
}

/// Transition weights indexed by page position
pub(crate) fn transition_weights(graph: &LinkGraph, idx: usize, damping: f64) -> Vec<f64> {
    let n = graph.len() as f64;
    let links = graph.outbound_at(idx);

    if links.is_empty() {
        return vec![1.0 / n; graph.len()];
    }

    let mut weights = vec![(1.0 - damping) / n; graph.len()];
    let follow = damping / links.len() as f64;
    for &target in links {
        weights[target] += follow;
    }
    weights
}
