//! Modified Newton method for roots of unknown multiplicity.
//!
//! Applies Newton to `u(x) = f(x) / f'(x)`, which has only simple roots:
//!
//! `x₁ = x₀ - f f' / (f'² - f f'')`

use super::algorithms::{Algorithm, OpenFamily};
use super::common::{ceil_count, eval_counted, iteration_limit, tolerance_reached};
use super::config::{validate_tolerance, SolverCfg};
use super::criterion::StopCriterion;
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, TerminationReason};
use super::rounding::round_to_digits;
use thiserror::Error;
use tracing::trace;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::MultipleRoots);

/// Assumed asymptotic order of convergence for the estimator.
const CONVERGENCE_ORDER: f64 = 2.0;

/// Smallest `|f'² - f f''|` the estimator accepts.
pub const ILL_CONDITIONED_THRESHOLD: f64 = 1e-12;


#[derive(Debug, Error, PartialEq)]
pub enum MultipleRootsError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("derivative vanished at x={x}; modified Newton step undefined")]
    ZeroDerivative { x: f64 },

    #[error("degenerate step at x={x}: f'^2 - f*f'' = {denom}")]
    DegenerateStep { x: f64, denom: f64 },

    #[error("ill-conditioned estimate at x0={x0}: |f'^2 - f*f''| = {denom} below threshold")]
    IllConditioned { x0: f64, denom: f64 },
}


/// `(f f', f'² - f f'')` at `x`, failing on `f'(x) == 0`.
#[inline]
fn step_terms<F, G, H>(
    f: &mut F,
    df: &mut G,
    ddf: &mut H,
    x: f64,
    evals: &mut usize,
) -> Result<(f64, f64), MultipleRootsError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    H: FnMut(f64) -> f64
{
    let fx   = eval_counted(f, x, evals);
    let dfx  = eval_counted(df, x, evals);
    let ddfx = eval_counted(ddf, x, evals);
    if dfx == 0.0 {
        return Err(MultipleRootsError::ZeroDerivative { x });
    }
    Ok((fx * dfx, dfx * dfx - fx * ddfx))
}


/// Finds a root of `func` of any multiplicity with the modified
/// (second-order) Newton method.
///
/// # Arguments
/// - `func`   : function whose root is sought
/// - `dfunc`  : first derivative
/// - `ddfunc` : second derivative
/// - `x0`     : initial guess
/// - `cfg`    : [`SolverCfg`]; criterion must be
///   [`StopCriterion::AbsoluteStep`] or [`StopCriterion::RelativeStep`]
///
/// # Returns
/// [`RootFindingReport`]; on [`TerminationReason::IterationLimit`] the root
/// is the last computed iterate.
///
/// # Errors
/// - [`MultipleRootsError::ZeroDerivative`] : `f'(x) == 0` at some iterate
/// - [`MultipleRootsError::DegenerateStep`] : `f'² - f f'' == 0` at some iterate
/// - [`MultipleRootsError::RootFinding`]    : `max_iter == 0`, or
///   [`RootFindingError::CriterionNotApplicable`] for the residual criterion
/// - [`MultipleRootsError::Tolerance`]      : tolerance <= 0 or non-finite
pub fn multiple_roots<F, G, H>(
    mut func: F,
    mut dfunc: G,
    mut ddfunc: H,
    x0: f64,
    cfg: &SolverCfg,
) -> Result<RootFindingReport, MultipleRootsError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    H: FnMut(f64) -> f64
{
    let cfg       = cfg.validate::<MultipleRootsError>()?;
    let tol       = cfg.tolerance();
    let criterion = cfg.criterion();
    if criterion == StopCriterion::ResidualValue {
        return Err(RootFindingError::CriterionNotApplicable { criterion, algorithm: ALGORITHM }.into());
    }

    let mut evals  = 0;
    let mut x      = x0;
    let mut x_next = x0;
    for iter in 1..=cfg.max_iter() {
        let (num, denom) = step_terms(&mut func, &mut dfunc, &mut ddfunc, x, &mut evals)?;
        if denom == 0.0 {
            return Err(MultipleRootsError::DegenerateStep { x, denom });
        }
        x_next = x - num / denom;
        trace!(iter, x, x_next, "multiple-roots step");

        if criterion.is_met(tol, x_next, x, || f64::NAN) {
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
    }).map_err(MultipleRootsError::from)
}


/// Modified Newton root, rounded to `cfg.digits()`.
///
/// Non-convergence within `max_iter` is not an error: the last iterate is
/// returned. See [`multiple_roots`].
pub fn find_root<F, G, H>(
    func: F,
    dfunc: G,
    ddfunc: H,
    x0: f64,
    cfg: &SolverCfg,
) -> Result<f64, MultipleRootsError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    H: FnMut(f64) -> f64
{
    multiple_roots(func, dfunc, ddfunc, x0, cfg).map(|report| report.rounded_root)
}


/// Iteration estimate assuming order-2 convergence from the first step:
///
/// `C = |f f' / (f'² - f f'')|` at `x₀`, `n = ceil( ln(tol / C) / ln 2 )`
///
/// Returns 0 when `C == 0` (`x₀` is a root) or the bound is non-positive.
///
/// # Errors
/// - [`MultipleRootsError::ZeroDerivative`] : `f'(x₀) == 0`
/// - [`MultipleRootsError::IllConditioned`] : `|f'² - f f''| < 1e-12` at `x₀`
/// - [`MultipleRootsError::Tolerance`]      : tolerance <= 0 or non-finite
pub fn estimate_iterations<F, G, H>(
    tolerance: f64,
    mut func: F,
    mut dfunc: G,
    mut ddfunc: H,
    x0: f64,
) -> Result<usize, MultipleRootsError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    H: FnMut(f64) -> f64
{
    let tol = validate_tolerance(tolerance)?;

    let mut evals = 0;
    let (num, denom) = step_terms(&mut func, &mut dfunc, &mut ddfunc, x0, &mut evals)?;
    if denom.is_nan() || denom.abs() < ILL_CONDITIONED_THRESHOLD {
        return Err(MultipleRootsError::IllConditioned { x0, denom });
    }

    let c = (num / denom).abs();
    if c == 0.0 {
        return Ok(0);
    }

    let n = (tol / c).ln() / CONVERGENCE_ORDER.ln();
    ceil_count(n).ok_or(MultipleRootsError::IllConditioned { x0, denom })
}
