//! Helpers shared by the method loops and estimators.

use tracing::{debug, warn};

use super::algorithms::Algorithm;
use super::errors::RootFindingError;
use super::report::{RootFindingReport, TerminationReason};


/// Evaluates `f(x)` and bumps the evaluation counter.
#[inline]
pub(crate) fn eval_counted<F>(f: &mut F, x: f64, evals: &mut usize) -> f64
where F: FnMut(f64) -> f64 {
    *evals += 1;
    f(x)
}


/// Turns a closed-form estimate into an iteration count.
///
/// ├ `n <= 0`     : target already met, 0 iterations
/// ├ `n` finite   : `ceil(n)`
/// └ `n` non-finite : `None`, caller decides which error applies
#[inline]
pub(crate) fn ceil_count(n: f64) -> Option<usize> {
    if n.is_nan() || n == f64::INFINITY {
        return None;
    }
    if n <= 0.0 {
        return Some(0);
    }
    Some(n.ceil() as usize)
}


/// Logs and packages a successful termination.
pub(crate) fn tolerance_reached(report: RootFindingReport) -> RootFindingReport {
    debug!(
        algorithm  = report.algorithm_name,
        iterations = report.iterations,
        criterion  = %report.criterion,
        root       = report.root,
        "tolerance reached"
    );
    report
}


/// Applies the method's iteration-cap policy to its final state.
///
/// ├ best-effort methods : `Ok(report)` with [`TerminationReason::IterationLimit`]
/// └ otherwise           : [`RootFindingError::NonConvergence`]
pub(crate) fn iteration_limit(
    algorithm: Algorithm,
    report: RootFindingReport,
) -> Result<RootFindingReport, RootFindingError> {
    debug_assert_eq!(report.termination_reason, TerminationReason::IterationLimit);

    if algorithm.best_effort_on_limit() {
        warn!(
            algorithm  = %algorithm,
            iterations = report.iterations,
            root       = report.root,
            "iteration limit reached; returning current estimate"
        );
        Ok(report)
    } else {
        Err(RootFindingError::NonConvergence { algorithm, iterations: report.iterations })
    }
}
