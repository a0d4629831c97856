use super::algorithms::{Algorithm, OpenFamily, ESTIMATE_MAX_ITER};
use super::common::{eval_counted, iteration_limit, tolerance_reached};
use super::config::{validate_tolerance, SolverCfg};
use super::criterion::{absolute_step, relative_step, StopCriterion};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, TerminationReason};
use super::rounding::round_to_digits;
use thiserror::Error;
use tracing::trace;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


#[derive(Debug, Error, PartialEq)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("secant stagnated: f(x0) == f(x1) at x0={x0}, x1={x1}")]
    Stagnation { x0: f64, x1: f64 },
}


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`
///
/// # Returns
/// - `Ok(x2)`                     : `x1 - fx1 (x1 - x0) / (fx1 - fx0)`
/// - `Err(SecantError::Stagnation)` : `fx1 == fx0`, the line is horizontal
#[inline]
pub(crate) fn secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> Result<f64, SecantError> {
    let denom = fx1 - fx0;
    if denom == 0.0 {
        return Err(SecantError::Stagnation { x0, x1 });
    }
    Ok(x1 - fx1 * (x1 - x0) / denom)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess
/// - `x1`   : Second initial guess
/// - `cfg`  : [`SolverCfg`] (tolerance, `max_iter`, digits, criterion)
///
/// # Returns
/// [`RootFindingReport`] with `termination_reason` always
/// [`TerminationReason::ToleranceReached`].
///
/// # Errors
/// - [`SecantError::Stagnation`]  : `f(xₖ) == f(xₖ₋₁)` at some step
/// - [`SecantError::RootFinding`] : `max_iter` exhausted
///   ([`RootFindingError::NonConvergence`]) or `max_iter == 0`
/// - [`SecantError::Tolerance`]   : tolerance <= 0 or non-finite
///
/// # Behavior
/// - Update: `x₂ = x₁ - f(x₁) (x₁ - x₀) / (f(x₁) - f(x₀))`
/// - Criteria:
///     - [`StopCriterion::AbsoluteStep`]  : `|x₂ - x₁| < tol`
///     - [`StopCriterion::RelativeStep`]  : `|f(x₂) - f(x₁)| / max(|f(x₂)|, ε) < tol`,
///       measured on function values rather than iterates
///     - [`StopCriterion::ResidualValue`] : `|f(x₂)| < tol`
///
/// # Warning
/// - Poor initial guesses may lead to divergence; running out of iterations
///   is an error. For guaranteed convergence, use a bracketed method (bisection).
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: &SolverCfg,
) -> Result<RootFindingReport, SecantError>
where F: FnMut(f64) -> f64 {

    let cfg       = cfg.validate::<SecantError>()?;
    let tol       = cfg.tolerance();
    let criterion = cfg.criterion();

    let mut evals = 0;

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = eval_counted(&mut func, x_prev, &mut evals);
    let mut f_curr = eval_counted(&mut func, x_curr, &mut evals);
    for iter in 1..=cfg.max_iter() {
        let x_next = secant_x_intercept((x_prev, f_prev), (x_curr, f_curr))?;
        let f_next = eval_counted(&mut func, x_next, &mut evals);
        trace!(iter, x_prev, x_curr, x_next, f_next, "secant step");

        let met = match criterion {
            StopCriterion::AbsoluteStep  => absolute_step(x_next, x_curr) < tol,
            StopCriterion::RelativeStep  => relative_step(f_next, f_curr) < tol,
            StopCriterion::ResidualValue => f_next.abs() < tol,
        };
        if met {
            return Ok(tolerance_reached(RootFindingReport {
                root               : x_next,
                rounded_root       : round_to_digits(x_next, cfg.digits()),
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                criterion,
                algorithm_name     : ALGORITHM.algorithm_name(),
            }));
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    iteration_limit(ALGORITHM, RootFindingReport {
        root               : x_curr,
        rounded_root       : round_to_digits(x_curr, cfg.digits()),
        iterations         : cfg.max_iter(),
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        criterion,
        algorithm_name     : ALGORITHM.algorithm_name(),
    }).map_err(SecantError::from)
}


/// Secant root, rounded to `cfg.digits()`. See [`secant`].
pub fn find_root<F>(func: F, x0: f64, x1: f64, cfg: &SolverCfg) -> Result<f64, SecantError>
where F: FnMut(f64) -> f64 {
    secant(func, x0, x1, cfg).map(|report| report.rounded_root)
}


/// Iterations the secant method needs from `(x0, x1)` until
/// `|x₂ - x₁| < tolerance`.
///
/// Re-runs the recurrence with the absolute-step test only, capped at
/// [`ESTIMATE_MAX_ITER`] steps.
///
/// # Errors
/// - [`SecantError::Stagnation`]          : `f(xₖ) == f(xₖ₋₁)` at some step
/// - [`RootFindingError::NonConvergence`] : not met within the cap
/// - [`ToleranceError::InvalidTolerance`]
pub fn estimate_iterations<F>(
    tolerance: f64,
    mut func: F,
    x0: f64,
    x1: f64,
) -> Result<usize, SecantError>
where F: FnMut(f64) -> f64 {
    let tol = validate_tolerance(tolerance)?;

    let mut evals = 0;

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = eval_counted(&mut func, x_prev, &mut evals);
    let mut f_curr = eval_counted(&mut func, x_curr, &mut evals);
    for iter in 1..=ESTIMATE_MAX_ITER {
        let x_next = secant_x_intercept((x_prev, f_prev), (x_curr, f_curr))?;
        if absolute_step(x_next, x_curr) < tol {
            return Ok(iter);
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = eval_counted(&mut func, x_next, &mut evals);
    }

    Err(RootFindingError::NonConvergence {
        algorithm  : ALGORITHM,
        iterations : ESTIMATE_MAX_ITER,
    }.into())
}
