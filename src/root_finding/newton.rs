//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily, ESTIMATE_MAX_ITER};
use super::common::{eval_counted, iteration_limit, tolerance_reached};
use super::config::{validate_tolerance, SolverCfg};
use super::criterion::absolute_step;
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, TerminationReason};
use super::rounding::round_to_digits;
use thiserror::Error;
use tracing::trace;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);


#[derive(Debug, Error, PartialEq)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("derivative vanished at x={x}; Newton step undefined")]
    ZeroDerivative { x: f64 },
}


/// One Newton update from `x`.
///
/// # Returns
/// - `Ok((x_next, f(x)))`
/// - `Err(NewtonError::ZeroDerivative)` if `f'(x) == 0` exactly
#[inline]
fn newton_step<F, G>(
    f: &mut F,
    df: &mut G,
    x: f64,
    evals: &mut usize,
) -> Result<(f64, f64), NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    let fx  = eval_counted(f, x, evals);
    let dfx = eval_counted(df, x, evals);
    if dfx == 0.0 {
        return Err(NewtonError::ZeroDerivative { x });
    }
    Ok((x - fx / dfx, fx))
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : analytic derivative of `func`
/// - `x0`    : initial guess
/// - `cfg`   : [`SolverCfg`] (tolerance, `max_iter`, digits, criterion)
///
/// # Returns
/// [`RootFindingReport`] with `termination_reason` always
/// [`TerminationReason::ToleranceReached`].
///
/// # Errors
/// - [`NewtonError::ZeroDerivative`] : `f'(x) == 0` at some iterate
/// - [`NewtonError::RootFinding`]    : `max_iter` exhausted
///   ([`RootFindingError::NonConvergence`]) or `max_iter == 0`
/// - [`NewtonError::Tolerance`]      : tolerance <= 0 or non-finite
///
/// # Behavior
/// - Update: `x₁ = x₀ - f(x₀) / f'(x₀)`
/// - Step criteria compare `x₁` with `x₀`; the residual criterion tests
///   `|f(x₀)|`, the value already computed for the step, and returns `x₁`.
/// - Unlike bisection there is no bracket to fall back on, so running out
///   of iterations is an error.
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: &SolverCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    let cfg       = cfg.validate::<NewtonError>()?;
    let tol       = cfg.tolerance();
    let criterion = cfg.criterion();

    let mut evals = 0;
    let mut x     = x0;
    for iter in 1..=cfg.max_iter() {
        let (x_next, fx) = newton_step(&mut func, &mut dfunc, x, &mut evals)?;
        trace!(iter, x, x_next, fx, "newton step");

        if criterion.is_met(tol, x_next, x, || fx) {
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
        x = x_next;
    }

    iteration_limit(ALGORITHM, RootFindingReport {
        root               : x,
        rounded_root       : round_to_digits(x, cfg.digits()),
        iterations         : cfg.max_iter(),
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        criterion,
        algorithm_name     : ALGORITHM.algorithm_name(),
    }).map_err(NewtonError::from)
}


/// Newton-Raphson root, rounded to `cfg.digits()`. See [`newton`].
pub fn find_root<F, G>(func: F, dfunc: G, x0: f64, cfg: &SolverCfg) -> Result<f64, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    newton(func, dfunc, x0, cfg).map(|report| report.rounded_root)
}


/// Iterations Newton-Raphson needs from `x0` until `|x₁ - x₀| < tolerance`.
///
/// Simulates the iteration with the absolute-step test only, capped at
/// [`ESTIMATE_MAX_ITER`] steps.
///
/// # Errors
/// - [`NewtonError::ZeroDerivative`] : `f'(x) == 0` at some iterate
/// - [`RootFindingError::NonConvergence`] : not met within the cap
/// - [`ToleranceError::InvalidTolerance`]
pub fn estimate_iterations<F, G>(
    tolerance: f64,
    mut func: F,
    mut dfunc: G,
    x0: f64,
) -> Result<usize, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    let tol = validate_tolerance(tolerance)?;

    let mut evals = 0;
    let mut x     = x0;
    for iter in 1..=ESTIMATE_MAX_ITER {
        let (x_next, _) = newton_step(&mut func, &mut dfunc, x, &mut evals)?;
        if absolute_step(x_next, x) < tol {
            return Ok(iter);
        }
        x = x_next;
    }

    Err(RootFindingError::NonConvergence {
        algorithm  : ALGORITHM,
        iterations : ESTIMATE_MAX_ITER,
    }.into())
}
