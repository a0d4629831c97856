//! Fixed-point iteration on `g(x) = f(x) + x`.
//!
//! A root of `f` is a fixed point of `g`. Local convergence is required up
//! front: `|g'(x₀)| < 1`, with `g'` taken as a forward difference.

use super::algorithms::{Algorithm, OpenFamily};
use super::common::{ceil_count, eval_counted, iteration_limit, tolerance_reached};
use super::config::{validate_tolerance, SolverCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, TerminationReason};
use super::rounding::round_to_digits;
use thiserror::Error;
use tracing::trace;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::FixedPoint);

/// Forward-difference step for estimating `g'(x₀)`.
pub const FD_STEP: f64 = 1e-5;


#[derive(Debug, Error, PartialEq)]
pub enum FixedPointError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("convergence condition |g'(x0)| < 1 fails at x0={x0}: g'(x0)={slope}")]
    Divergence { x0: f64, slope: f64 },

    #[error("iteration estimate undefined for g'(x0)={slope}: needs 0 < g'(x0) < 1")]
    UndefinedEstimate { slope: f64 },
}


/// `g(x) = f(x) + x`
#[inline]
fn g_eval<F>(f: &mut F, x: f64, evals: &mut usize) -> f64
where F: FnMut(f64) -> f64 {
    eval_counted(f, x, evals) + x
}

/// `(g(x + h) - g(x)) / h` with `h = FD_STEP`
#[inline]
fn g_slope<F>(f: &mut F, x: f64, evals: &mut usize) -> f64
where F: FnMut(f64) -> f64 {
    (g_eval(f, x + FD_STEP, evals) - g_eval(f, x, evals)) / FD_STEP
}

/// Errors with [`FixedPointError::Divergence`] unless `|g'(x₀)| < 1`.
fn convergence_guard<F>(f: &mut F, x0: f64, evals: &mut usize) -> Result<f64, FixedPointError>
where F: FnMut(f64) -> f64 {
    let slope = g_slope(f, x0, evals);
    if slope.is_nan() || slope.abs() >= 1.0 {
        return Err(FixedPointError::Divergence { x0, slope });
    }
    Ok(slope)
}


/// Finds a root of `func` by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration)
/// of `g(x) = func(x) + x`.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : initial guess
/// - `cfg`  : [`SolverCfg`] (tolerance, `max_iter`, digits, criterion)
///
/// # Returns
/// [`RootFindingReport`]; on [`TerminationReason::IterationLimit`] the root
/// is the last computed iterate.
///
/// # Errors
/// - [`FixedPointError::Divergence`]  : `|g'(x₀)| >= 1`, checked before iterating
/// - [`FixedPointError::RootFinding`] : `max_iter == 0`
/// - [`FixedPointError::Tolerance`]   : tolerance <= 0 or non-finite
///
/// # Behavior
/// - Update: `x₁ = g(x₀)`
/// - Step criteria compare `x₁` with `x₀`; the residual criterion tests `|f(x₁)|`.
pub fn fixed_point<F>(
    mut func: F,
    x0: f64,
    cfg: &SolverCfg,
) -> Result<RootFindingReport, FixedPointError>
where F: FnMut(f64) -> f64 {

    let cfg       = cfg.validate::<FixedPointError>()?;
    let tol       = cfg.tolerance();
    let criterion = cfg.criterion();

    let mut evals = 0;
    let slope = convergence_guard(&mut func, x0, &mut evals)?;
    trace!(x0, slope, "fixed-point convergence guard passed");

    let mut x      = x0;
    let mut x_next = x0;
    for iter in 1..=cfg.max_iter() {
        x_next = g_eval(&mut func, x, &mut evals);
        trace!(iter, x, x_next, "fixed-point step");

        let met = criterion.is_met(tol, x_next, x, || eval_counted(&mut func, x_next, &mut evals));
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
        x = x_next;
    }

    iteration_limit(ALGORITHM, RootFindingReport {
        root               : x_next,
        rounded_root       : round_to_digits(x_next, cfg.digits()),
        iterations         : cfg.max_iter(),
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        criterion,
        algorithm_name     : ALGORITHM.algorithm_name(),
    }).map_err(FixedPointError::from)
}


/// Fixed-point root, rounded to `cfg.digits()`.
///
/// Non-convergence within `max_iter` is not an error: the last iterate is
/// returned. See [`fixed_point`].
pub fn find_root<F>(func: F, x0: f64, cfg: &SolverCfg) -> Result<f64, FixedPointError>
where F: FnMut(f64) -> f64 {
    fixed_point(func, x0, cfg).map(|report| report.rounded_root)
}


/// Closed-form iteration estimate for linear convergence with rate `g'(x₀)`:
///
/// `n = ceil( ln(tol * (1 - g') / |g(x₀) - x₀|) / ln(g') )`
///
/// Returns 0 when `x₀` is already a fixed point or the bound is non-positive.
///
/// # Errors
/// - [`FixedPointError::Divergence`]        : `|g'(x₀)| >= 1`
/// - [`FixedPointError::UndefinedEstimate`] : `g'(x₀) <= 0`; the logarithm of
///   the rate is undefined for oscillating (or instant) convergence
/// - [`FixedPointError::Tolerance`]         : tolerance <= 0 or non-finite
pub fn estimate_iterations<F>(tolerance: f64, mut func: F, x0: f64) -> Result<usize, FixedPointError>
where F: FnMut(f64) -> f64 {
    let tol = validate_tolerance(tolerance)?;

    let mut evals = 0;
    let slope = convergence_guard(&mut func, x0, &mut evals)?;

    let first_step = (g_eval(&mut func, x0, &mut evals) - x0).abs();
    if first_step == 0.0 {
        return Ok(0);
    }
    if slope <= 0.0 {
        return Err(FixedPointError::UndefinedEstimate { slope });
    }

    let n = (tol * (1.0 - slope) / first_step).ln() / slope.ln();
    ceil_count(n).ok_or(FixedPointError::UndefinedEstimate { slope })
}
