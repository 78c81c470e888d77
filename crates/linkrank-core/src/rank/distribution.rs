//! Probability distributions over pages

use crate::graph::Page;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from page to probability mass.
///
/// Produced by the transition model (next-step probabilities) and by the
/// estimators (steady-state ranks). Values are non-negative and sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    weights: BTreeMap<Page, f64>,
}

impl Distribution {
    pub(crate) fn from_weights(weights: BTreeMap<Page, f64>) -> Self {
        Self { weights }
    }

    /// Probability of `page`, zero if the page is unknown
    pub fn get(&self, page: &str) -> f64 {
        self.weights.get(page).copied().unwrap_or(0.0)
    }

    /// Entries sorted by page
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(p, &w)| (p.as_str(), w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Highest-weighted pages, ties broken by page name
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Largest absolute per-page difference against `other`.
    ///
    /// Pages missing from either side count as zero.
    pub fn max_abs_diff(&self, other: &Distribution) -> f64 {
        self.weights
            .keys()
            .chain(other.weights.keys())
            .map(|p| (self.get(p) - other.get(p)).abs())
            .fold(0.0, f64::max)
    }
}
