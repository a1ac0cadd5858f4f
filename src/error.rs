//! Error types for planning operations.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors produced by planning components.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Leveling stopped with stages that never became ready
    /// (dependency cycle or reference to a stage outside the input).
    #[error("unresolvable dependencies for stages: {}", .stages.join(", "))]
    UnresolvableDependencies {
        /// IDs of the stages left unleveled, in ascending order.
        stages: Vec<String>,
    },
    /// Input failed validation.
    #[error("invalid input: {} error(s)", .0.len())]
    Invalid(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for PlanError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Invalid(errors)
    }
}
