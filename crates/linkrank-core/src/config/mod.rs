//! Configuration management

use crate::error::{LinkRankError, Result};
use crate::graph::CrawlOptions;
use crate::rank::{
    check_damping, check_max_passes, check_samples, check_tolerance, IterativeEstimator,
    MonteCarloEstimator, DEFAULT_DAMPING, DEFAULT_MAX_PASSES, DEFAULT_SAMPLES, DEFAULT_TOLERANCE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ranking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping
    #[serde(default = "default_damping")]
    pub damping_factor: f64,

    /// Pages visited by the random walk
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Per-page convergence threshold for iteration
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration passes allowed before giving up
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,

    /// Seed for the random walk; unseeded walks use OS entropy
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,

    /// Corpus crawling options
    #[serde(default)]
    pub crawl: CrawlOptions,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: default_damping(),
            samples: default_samples(),
            tolerance: default_tolerance(),
            max_passes: default_max_passes(),
            seed: default_seed(),
            crawl: CrawlOptions::default(),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(fallback)
}

fn default_damping() -> f64 {
    env_or("LINKRANK_DAMPING", DEFAULT_DAMPING)
}

fn default_samples() -> usize {
    env_or("LINKRANK_SAMPLES", DEFAULT_SAMPLES)
}

fn default_tolerance() -> f64 {
    env_or("LINKRANK_TOLERANCE", DEFAULT_TOLERANCE)
}

fn default_max_passes() -> usize {
    DEFAULT_MAX_PASSES
}

fn default_seed() -> Option<u64> {
    std::env::var("LINKRANK_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
}

impl RankConfig {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(RankConfig::default())
        }
    }

    /// Load config from a YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RankConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config as YAML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Check every parameter against the estimators' preconditions
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping_factor)?;
        check_samples(self.samples)?;
        check_tolerance(self.tolerance)?;
        check_max_passes(self.max_passes)?;
        if self.crawl.pattern.trim().is_empty() {
            return Err(LinkRankError::Config("crawl pattern is empty".to_string()));
        }
        Ok(())
    }

    /// Monte-Carlo estimator configured from these settings
    pub fn sampler(&self) -> MonteCarloEstimator {
        MonteCarloEstimator::new()
            .with_damping(self.damping_factor)
            .with_samples(self.samples)
    }

    /// Iterative estimator configured from these settings
    pub fn iterator(&self) -> IterativeEstimator {
        IterativeEstimator::new()
            .with_damping(self.damping_factor)
            .with_tolerance(self.tolerance)
            .with_max_passes(self.max_passes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: RankConfig = serde_yaml::from_str("damping_factor: 0.5\n").unwrap();
        assert_eq!(config.damping_factor, 0.5);
        assert_eq!(config.max_passes, DEFAULT_MAX_PASSES);
        assert_eq!(config.crawl.pattern, "*.html");
    }

    #[test]
    fn test_nested_crawl_section() {
        let yaml = "crawl:\n  pattern: \"**/*.htm\"\n  recursive: true\n";
        let config: RankConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.crawl.pattern, "**/*.htm");
        assert!(config.crawl.recursive);
        assert!(config.crawl.exclude_hidden);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yml");

        let config = RankConfig {
            damping_factor: 0.7,
            samples: 500,
            seed: Some(12),
            ..RankConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = RankConfig::load_from(&path).unwrap();
        assert_eq!(loaded.damping_factor, 0.7);
        assert_eq!(loaded.samples, 500);
        assert_eq!(loaded.seed, Some(12));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "damping_factor: 1.5\n").unwrap();

        let err = RankConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidParameter(_)));
    }

    #[test]
    fn test_validate_empty_pattern() {
        let mut config = RankConfig::default();
        config.crawl.pattern = " ".to_string();
        assert!(matches!(config.validate(), Err(LinkRankError::Config(_))));
    }

    #[test]
    fn test_estimators_follow_config() {
        let config = RankConfig {
            damping_factor: 0.6,
            samples: 42,
            tolerance: 0.01,
            max_passes: 7,
            ..RankConfig::default()
        };
        let sampler = config.sampler();
        assert_eq!(sampler.damping, 0.6);
        assert_eq!(sampler.samples, 42);
        let iterator = config.iterator();
        assert_eq!(iterator.tolerance, 0.01);
        assert_eq!(iterator.max_passes, 7);
    }
}
