//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ iteration cap exhausted (non-best-effort methods, all estimators)
//! │   ├ invalid `max_iter`
//! │   └ stop criterion not supported by the algorithm
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     └ non-finite or non-positive tolerance
//!
//! Method-specific failures (e.g. a vanishing derivative) live in each
//! method's own error enum, which wraps both of the above.


use thiserror::Error;
use super::algorithms::Algorithm;
use super::criterion::StopCriterion;


/// Root-finding runtime errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RootFindingError {
    #[error("{algorithm} did not converge after {iterations} iterations")]
    NonConvergence { algorithm: Algorithm, iterations: usize },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("stop criterion {criterion} not applicable for algorithm {algorithm}")]
    CriterionNotApplicable { criterion: StopCriterion, algorithm: Algorithm },
}


/// Tolerance configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ToleranceError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}
