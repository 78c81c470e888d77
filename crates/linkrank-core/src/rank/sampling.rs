//! Monte-Carlo PageRank by random-walk sampling

use super::transition::transition_weights;
use super::{check_damping, check_samples, Distribution, DEFAULT_DAMPING, DEFAULT_SAMPLES};
use crate::error::Result;
use crate::graph::LinkGraph;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random-walk PageRank estimator
#[derive(Debug, Clone)]
pub struct MonteCarloEstimator {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Number of pages visited by the walk, start page included
    pub samples: usize,
}

impl Default for MonteCarloEstimator {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl MonteCarloEstimator {
    /// Create a new MonteCarloEstimator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of samples
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Run the walk with a caller-supplied random source
    pub fn run<R: Rng + ?Sized>(&self, graph: &LinkGraph, rng: &mut R) -> Result<Distribution> {
        sample_rank(graph, self.damping, self.samples, rng)
    }

    /// Run the walk with a deterministic generator seeded from `seed`
    pub fn run_seeded(&self, graph: &LinkGraph, seed: u64) -> Result<Distribution> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run(graph, &mut rng)
    }

    /// Run seeded when a seed is given, otherwise from the thread-local generator
    pub fn run_with_seed(&self, graph: &LinkGraph, seed: Option<u64>) -> Result<Distribution> {
        match seed {
            Some(seed) => self.run_seeded(graph, seed),
            None => self.run(graph, &mut rand::thread_rng()),
        }
    }
}

/// Estimate PageRank by walking `samples` pages.
///
/// The walk starts on a uniformly chosen page and moves according to the
/// transition model. Each page's rank is the fraction of visits it received.
pub fn sample_rank<R: Rng + ?Sized>(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Distribution> {
    check_damping(damping)?;
    check_samples(samples)?;

    let n = graph.len();
    let mut visits = vec![0usize; n];
    // Transition tables depend only on the page, so build each one lazily
    let mut tables: Vec<Option<CumulativeTable>> = (0..n).map(|_| None).collect();

    let mut current = rng.gen_range(0..n);
    tracing::debug!("Random walk starts on {}", graph.page_at(current));
    visits[current] += 1;

    for _ in 1..samples {
        let table = tables[current]
            .get_or_insert_with(|| CumulativeTable::new(&transition_weights(graph, current, damping)));
        current = table.draw(rng);
        visits[current] += 1;
    }

    let total = samples as f64;
    let ranks = visits
        .into_iter()
        .enumerate()
        .map(|(i, count)| (graph.page_at(i).to_string(), count as f64 / total))
        .collect();

    tracing::debug!("Sampled {} pages over {} page graph", samples, n);
    Ok(Distribution::from_weights(ranks))
}

/// Cumulative-weight table for weighted random choice.
///
/// Draws scale a uniform `[0, 1)` value by the table's actual total, so
/// weight vectors whose sum drifts from 1 are handled without renormalizing.
/// Zero-weight entries are never drawn.
#[derive(Debug, Clone)]
pub(crate) struct CumulativeTable {
    cumulative: Vec<f64>,
    last_positive: usize,
}

impl CumulativeTable {
    pub(crate) fn new(weights: &[f64]) -> Self {
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut running = 0.0;
        let mut last_positive = 0;
        for (i, &w) in weights.iter().enumerate() {
            if w > 0.0 {
                running += w;
                last_positive = i;
            }
            cumulative.push(running);
        }
        Self {
            cumulative,
            last_positive,
        }
    }

    pub(crate) fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub(crate) fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let target = rng.gen::<f64>() * self.total();
        self.index_for(target)
    }

    fn index_for(&self, target: f64) -> usize {
        // First entry whose cumulative weight exceeds the target; rounding can
        // put the target on the total itself
        self.cumulative
            .partition_point(|&c| c <= target)
            .min(self.last_positive)
    }
}
