/*!
 * Error types for the sastre engine.
 *
 * This module contains custom error types for the segmentation and
 * timing-repair stages, using the thiserror crate for ergonomic error
 * definitions.
 */

use thiserror::Error;

/// Errors for configuration values the engine cannot work with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Maximum segment duration must be strictly positive
    #[error("maximum duration must be positive, got {0} ms")]
    NonPositiveMaxDuration(u64),

    /// Optimal segment duration must be strictly positive
    #[error("optimal duration must be positive, got {0} ms")]
    NonPositiveOptimalDuration(u64),

    /// Optimal duration cannot exceed the maximum duration
    #[error("optimal duration {optimal} ms exceeds maximum duration {max} ms")]
    OptimalExceedsMax {
        /// Configured optimal duration in milliseconds
        optimal: u64,
        /// Configured maximum duration in milliseconds
        max: u64,
    },

    /// Merge character budget must be strictly positive
    #[error("merge length budget must be positive")]
    NonPositiveLengthBudget,

    /// Strategy name did not match any known overlap-fix strategy
    #[error("unknown fix strategy: {0}")]
    UnknownStrategy(String),
}

/// Errors for inputs that violate a stage's preconditions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A non-empty token sequence is required
    #[error("token sequence is empty")]
    EmptyTokens,

    /// A non-empty sentence sequence is required
    #[error("sentence sequence is empty")]
    EmptySentences,

    /// A non-empty subtitle entry sequence is required
    #[error("subtitle entry sequence is empty")]
    EmptyEntries,
}

/// Engine error type that wraps all stage failures
#[derive(Error, Debug)]
pub enum EngineError {
    /// Error from a configuration value
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from a rejected input
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// A stage would have emitted a sequence violating an output invariant.
    /// This signals a logic defect and is never silently swallowed.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
