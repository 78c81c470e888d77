//! PageRank estimation
//!
//! This module provides the random-surfer transition model and two
//! independent estimators built on it: a Monte-Carlo random walk and an
//! iterative fixed-point solver.

mod distribution;
pub mod iterative;
pub mod sampling;
pub mod transition;

pub use distribution::Distribution;
pub use iterative::{iterate_rank, IterationReport, IterativeEstimator};
pub use sampling::{sample_rank, MonteCarloEstimator};
pub use transition::transition;

use crate::error::{LinkRankError, Result};

/// Default probability of following a link rather than jumping
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of pages sampled by the random walk
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default per-page convergence threshold for iteration
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Default cap on iteration passes
pub const DEFAULT_MAX_PASSES: usize = 10_000;

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(LinkRankError::parameter(format!(
            "damping factor must be within [0, 1], got {}",
            damping
        )));
    }
    Ok(())
}

pub(crate) fn check_samples(samples: usize) -> Result<()> {
    if samples < 1 {
        return Err(LinkRankError::parameter("sample count must be at least 1"));
    }
    Ok(())
}

pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    // Written this way so NaN is rejected too
    if !(tolerance > 0.0) {
        return Err(LinkRankError::parameter(format!(
            "tolerance must be positive, got {}",
            tolerance
        )));
    }
    Ok(())
}

pub(crate) fn check_max_passes(max_passes: usize) -> Result<()> {
    if max_passes < 1 {
        return Err(LinkRankError::parameter("max passes must be at least 1"));
    }
    Ok(())
}
