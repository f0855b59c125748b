//! Error types for particles, evaluators and population setup.
//!
//! Everything in this crate is pure computation, so the taxonomy is
//! narrow: invalid input is reported, valid input always succeeds.

use thiserror::Error;

/// Errors raised by the multi-objective building blocks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MopsoError {
    /// A particle was compared or ranked before its cost was evaluated.
    #[error("cost not set for particle {id}")]
    CostNotSet {
        /// Id of the particle without a cost.
        id: usize,
    },

    /// Two cost vectors with different objective counts were compared.
    #[error("cost length mismatch: particle {left_id} has {left_len} objectives, particle {right_id} has {right_len}")]
    CostLengthMismatch {
        /// Id of the first particle.
        left_id: usize,
        /// Objective count of the first particle.
        left_len: usize,
        /// Id of the second particle.
        right_id: usize,
        /// Objective count of the second particle.
        right_len: usize,
    },

    /// Bound vectors do not match the particle dimension.
    #[error("bounds mismatch: dimension is {dim}, lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Declared dimension.
        dim: usize,
        /// Length of the lower bounds.
        lower_len: usize,
        /// Length of the upper bounds.
        upper_len: usize,
    },

    /// A lower bound exceeds its corresponding upper bound.
    #[error("invalid bounds at index {index}: lower ({lower}) > upper ({upper})")]
    InvalidBounds {
        /// Index of the invalid bound pair.
        index: usize,
        /// The lower bound value.
        lower: f64,
        /// The upper bound value.
        upper: f64,
    },

    /// A dimension of zero was requested.
    #[error("invalid dimension: {dimension} (must be >= 1)")]
    InvalidDimension {
        /// The rejected dimension.
        dimension: usize,
    },

    /// The position passed to an evaluator is shorter than the dimension.
    #[error("position too short: expected {expected} variables, got {got}")]
    PositionTooShort {
        /// Required number of decision variables.
        expected: usize,
        /// Actual length of the position.
        got: usize,
    },

    /// Population size of zero was requested.
    #[error("population size must be >= 1")]
    EmptyPopulation,

    /// The name does not match any UF1 correction form.
    #[error("unknown correction form: {name:?} (expected \"sum-of-squares\" or \"square-of-sum\")")]
    UnknownCorrectionForm {
        /// The name that was parsed.
        name: String,
    },

    /// A ranking was applied to a population of a different length.
    #[error("ranking covers {ranked} particles but the population has {population}")]
    RankingLengthMismatch {
        /// Number of particles in the ranking.
        ranked: usize,
        /// Number of particles it was applied to.
        population: usize,
    },

    /// No evaluator is registered under the requested name.
    #[error("unknown objective function: {name:?}")]
    UnknownObjective {
        /// The name that was looked up.
        name: String,
    },
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, MopsoError>;

impl MopsoError {
    /// Returns `true` for errors caused by missing or incompatible costs.
    pub fn is_cost_error(&self) -> bool {
        matches!(
            self,
            MopsoError::CostNotSet { .. }
                | MopsoError::CostLengthMismatch { .. }
                | MopsoError::RankingLengthMismatch { .. }
        )
    }

    /// Returns `true` for errors caused by bound vectors.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            MopsoError::BoundsMismatch { .. } | MopsoError::InvalidBounds { .. }
        )
    }

    /// Returns `true` for degenerate evaluator or configuration input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MopsoError::InvalidDimension { .. }
                | MopsoError::PositionTooShort { .. }
                | MopsoError::EmptyPopulation
                | MopsoError::UnknownObjective { .. }
                | MopsoError::UnknownCorrectionForm { .. }
        )
    }
}
