//! Balancer configuration, loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BalanceError, Result};
use crate::roster::{PositionPolicy, RatingPolicy, ValidationPolicy};

/// Default half-width of the ordering jitter, in rating points
pub const DEFAULT_JITTER: f64 = 5.0;

/// Largest accepted jitter half-width: a full rating scale
pub const MAX_JITTER: f64 = crate::types::MAX_RATING;

/// Balancer configuration
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancerConfig {
    /// Half-width of the uniform jitter applied to ratings before ordering.
    /// Zero gives a plain descending-rating order.
    pub jitter: f64,
    /// Fixed seed for reproducible splits (None = fresh randomness each run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// What to do with ratings outside `[0, 100]`
    pub rating: RatingPolicy,
    /// What to do with unrecognized position labels
    pub positions: PositionPolicy,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            jitter: DEFAULT_JITTER,
            seed: None,
            rating: RatingPolicy::default(),
            positions: PositionPolicy::default(),
        }
    }
}

impl BalancerConfig {
    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=MAX_JITTER).contains(&self.jitter) {
            return Err(BalanceError::InvalidConfig(format!(
                "jitter must be between 0 and {} (got {})",
                MAX_JITTER, self.jitter
            )));
        }
        Ok(())
    }

    /// Roster validation rules from this config
    pub fn validation(&self) -> ValidationPolicy {
        ValidationPolicy {
            rating: self.rating,
            positions: self.positions,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
