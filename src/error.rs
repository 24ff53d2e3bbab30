//! Error taxonomy shared by every stage of the solver
use thiserror::Error;

use crate::problem::ConstraintSign;

/// Errors produced while validating, standardizing, or solving a problem.
///
/// All of these describe invalid input or genuine infeasibility of the
/// model, never transient conditions, so they are propagated to the caller
/// as-is rather than retried or recovered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The direction field is not "maximize" or "minimize"
    #[error("the objective direction must be 'maximize' or 'minimize', got '{0}'")]
    InvalidDirection(String),
    /// A constraint's dimensions disagree with the rest of the problem
    #[error("dimension mismatch: expected {expected} entries, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// A constraint sign other than "<=" survived sign normalization
    #[error("only '<=' constraints are supported in this version, got '{0}'")]
    UnsupportedConstraint(ConstraintSign),
    /// The objective has more variables than this solver accepts
    #[error(
        "at most {max} variables are supported, got {0}",
        max = crate::problem::MAX_VARIABLES
    )]
    TooManyVariables(usize),
    /// A required field of the request is absent
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    /// An improving column exists with no positive coefficient in any row
    #[error("the problem is unbounded")]
    Unbounded,
    /// The request body could not be read as (or the report written to) the
    /// expected JSON shape
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    /// The configured iteration cap was reached before optimality
    #[error("iteration limit of {0} reached before optimality")]
    IterationLimit(u64),
}

impl SolverError {
    /// Stable machine-readable kind, for mapping onto transport-level codes
    pub fn kind(&self) -> &'static str {
        match self {
            SolverError::InvalidDirection(_) => "invalid_direction",
            SolverError::DimensionMismatch { .. } => "dimension_mismatch",
            SolverError::UnsupportedConstraint(_) => "unsupported_constraint",
            SolverError::TooManyVariables(_) => "too_many_variables",
            SolverError::MissingField(_) => "missing_field",
            SolverError::Unbounded => "unbounded",
            SolverError::MalformedRequest(_) => "malformed_request",
            SolverError::IterationLimit(_) => "iteration_limit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        assert_eq!(
            SolverError::InvalidDirection("best".to_string()).kind(),
            "invalid_direction"
        );
        assert_eq!(SolverError::Unbounded.kind(), "unbounded");
        assert_eq!(SolverError::MissingField("objective").kind(), "missing_field");
    }

    #[test]
    fn messages_identify_the_violation() {
        let err = SolverError::TooManyVariables(5);
        assert_eq!(err.to_string(), "at most 4 variables are supported, got 5");

        let err = SolverError::UnsupportedConstraint(ConstraintSign::GreaterEq);
        assert_eq!(
            err.to_string(),
            "only '<=' constraints are supported in this version, got '>='"
        );
    }
}
