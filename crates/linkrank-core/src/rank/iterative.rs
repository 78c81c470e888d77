//! Iterative PageRank
//!
//! Solves the PageRank recurrence by repeated passes. Every pass recomputes
//! all pages from the previous pass's snapshot and the loop stops once no
//! page moved by `tolerance` or more.

use super::{
    check_damping, check_max_passes, check_tolerance, Distribution, DEFAULT_DAMPING,
    DEFAULT_MAX_PASSES, DEFAULT_TOLERANCE,
};
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;

/// Iterative PageRank estimator
#[derive(Debug, Clone)]
pub struct IterativeEstimator {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Per-page convergence threshold
    pub tolerance: f64,
    /// Passes allowed before giving up
    pub max_passes: usize,
}

/// Outcome of a converged iteration
#[derive(Debug, Clone)]
pub struct IterationReport {
    /// Final ranks
    pub ranks: Distribution,
    /// Number of passes performed
    pub passes: usize,
    /// Largest per-page change in the final pass
    pub delta: f64,
}

impl Default for IterativeEstimator {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

impl IterativeEstimator {
    /// Create a new IterativeEstimator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence threshold
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum number of passes
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Iterate until every page's rank changes by less than the tolerance.
    ///
    /// Fails with `LinkRankError::Convergence` if that does not happen within
    /// `max_passes` passes; no partial ranks are returned.
    pub fn run(&self, graph: &LinkGraph) -> Result<IterationReport> {
        check_damping(self.damping)?;
        check_tolerance(self.tolerance)?;
        check_max_passes(self.max_passes)?;

        let system = RankSystem::new(graph, self.damping);
        let n = graph.len();

        let mut ranks = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut delta = f64::MAX;

        for pass in 1..=self.max_passes {
            system.pass(&ranks, &mut next);

            delta = ranks
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut ranks, &mut next);

            if delta < self.tolerance {
                tracing::debug!("Iteration converged after {} passes (delta {:e})", pass, delta);
                return Ok(IterationReport {
                    ranks: system.distribution(ranks),
                    passes: pass,
                    delta,
                });
            }
        }

        tracing::warn!(
            "Iteration did not converge within {} passes (delta {:e})",
            self.max_passes,
            delta
        );
        Err(LinkRankError::Convergence {
            passes: self.max_passes,
            delta,
        })
    }
}

/// Compute PageRank by iterating to a fixed point
pub fn iterate_rank(graph: &LinkGraph, damping: f64, tolerance: f64) -> Result<Distribution> {
    IterativeEstimator::new()
        .with_damping(damping)
        .with_tolerance(tolerance)
        .run(graph)
        .map(|report| report.ranks)
}

/// Precomputed link structure for the update rule
struct RankSystem<'a> {
    graph: &'a LinkGraph,
    damping: f64,
    inbound: Vec<Vec<usize>>,
    out_degree: Vec<usize>,
    dangling: Vec<usize>,
}

impl<'a> RankSystem<'a> {
    fn new(graph: &'a LinkGraph, damping: f64) -> Self {
        let out_degree: Vec<usize> = (0..graph.len())
            .map(|i| graph.outbound_at(i).len())
            .collect();
        let dangling = out_degree
            .iter()
            .enumerate()
            .filter(|(_, &deg)| deg == 0)
            .map(|(i, _)| i)
            .collect();

        Self {
            graph,
            damping,
            inbound: graph.inbound_index(),
            out_degree,
            dangling,
        }
    }

    /// One full pass: `next` is computed from `ranks` only.
    ///
    /// A dangling page counts as linking to every page, itself included, so
    /// its share `rank / N` reaches every page alike.
    fn pass(&self, ranks: &[f64], next: &mut [f64]) {
        let n = ranks.len() as f64;
        let teleport = (1.0 - self.damping) / n;
        let dangling_share: f64 = self.dangling.iter().map(|&q| ranks[q] / n).sum();

        for (p, slot) in next.iter_mut().enumerate() {
            let linked: f64 = self.inbound[p]
                .iter()
                .map(|&q| ranks[q] / self.out_degree[q] as f64)
                .sum();
            *slot = teleport + self.damping * (linked + dangling_share);
        }
    }

    fn distribution(&self, mut ranks: Vec<f64>) -> Distribution {
        // Already sums to 1 up to rounding; normalize away the drift
        let sum: f64 = ranks.iter().sum();
        if sum > 0.0 {
            for rank in &mut ranks {
                *rank /= sum;
            }
        }

        Distribution::from_weights(
            ranks
                .into_iter()
                .enumerate()
                .map(|(i, r)| (self.graph.page_at(i).to_string(), r))
                .collect(),
        )
    }
}
