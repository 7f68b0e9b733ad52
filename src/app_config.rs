use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::ConfigError;
use crate::timing::overlap::FixStrategy;

/// Pipeline configuration module
/// This module holds the plain-value configuration consumed by the
/// segmentation and timing-repair stages. There is no file discovery here;
/// callers construct or deserialize a configuration and pass it in.
/// Represents the full pipeline configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PipelineConfig {
    /// Target language code (ISO), drives line-wrap width selection
    #[serde(default = "default_language")]
    pub language: String,

    /// Duration splitting config
    #[serde(default)]
    pub split: SplitConfig,

    /// Adjacent merge config
    #[serde(default)]
    pub merge: MergeConfig,

    /// Overlap repair config
    #[serde(default)]
    pub repair: RepairConfig,

    /// Whether continuation pairs are merged before overlap repair
    #[serde(default = "default_true")]
    pub merge_adjacent: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            split: SplitConfig::default(),
            merge: MergeConfig::default(),
            repair: RepairConfig::default(),
            merge_adjacent: true,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.split.validate()?;
        self.merge.validate()?;
        Ok(())
    }
}

/// Configuration for duration splitting
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    /// Hard duration ceiling per subtitle entry
    #[serde(default = "default_max_duration_ms")]
    pub max_duration_ms: u64,

    /// Duration the splitter aims for when cutting long sentences
    #[serde(default = "default_optimal_duration_ms")]
    pub optimal_duration_ms: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_duration_ms: default_max_duration_ms(),
            optimal_duration_ms: default_optimal_duration_ms(),
        }
    }
}

impl SplitConfig {
    /// Validate duration thresholds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_duration_ms == 0 {
            return Err(ConfigError::NonPositiveMaxDuration(self.max_duration_ms));
        }
        if self.optimal_duration_ms == 0 {
            return Err(ConfigError::NonPositiveOptimalDuration(self.optimal_duration_ms));
        }
        if self.optimal_duration_ms > self.max_duration_ms {
            return Err(ConfigError::OptimalExceedsMax {
                optimal: self.optimal_duration_ms,
                max: self.max_duration_ms,
            });
        }
        Ok(())
    }
}

/// Configuration for merging adjacent continuation entries
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MergeConfig {
    /// Pairs separated by this gap or more are never merged
    #[serde(default = "default_max_gap_ms")]
    pub max_gap_ms: u64,

    /// Combined character budget above which pairs are never merged
    #[serde(default = "default_max_total_length")]
    pub max_total_length: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            max_gap_ms: default_max_gap_ms(),
            max_total_length: default_max_total_length(),
        }
    }
}

impl MergeConfig {
    /// Validate the merge budget
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_total_length == 0 {
            return Err(ConfigError::NonPositiveLengthBudget);
        }
        Ok(())
    }
}

/// Configuration for overlap repair
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RepairConfig {
    /// Strategy applied to each overlapping pair
    #[serde(default)]
    pub strategy: FixStrategy,

    /// Gap to leave between repaired entries, in milliseconds
    #[serde(default = "default_min_gap_ms")]
    pub min_gap_ms: u64,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            strategy: FixStrategy::default(),
            min_gap_ms: default_min_gap_ms(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_duration_ms() -> u64 {
    7000
}

fn default_optimal_duration_ms() -> u64 {
    3000
}

fn default_max_gap_ms() -> u64 {
    1000
}

fn default_max_total_length() -> usize {
    80
}

fn default_min_gap_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}
