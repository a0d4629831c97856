use super::algorithms::{Algorithm, BracketFamily};
use super::common::{ceil_count, eval_counted, iteration_limit, tolerance_reached};
use super::config::{validate_tolerance, SolverCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, TerminationReason};
use super::rounding::round_to_digits;
use super::signs::{opposite_sign, same_sign};
use thiserror::Error;
use tracing::trace;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);

#[derive(Debug, Error, PartialEq)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds  { a: f64, b: f64 },

    #[error("bracket width b - a overflows f64 for [{a}, {b}]")]
    WidthOverflow  { a: f64, b: f64 },
}


/// Calculates midpoint of [a, b] without forming `a + b`
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that `func` is continuous on `[a, b]` and that
/// `func(a) * func(b) <= 0`, guaranteeing a root inside the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the bracket. Must be finite.
/// ├ `b`    - Other end of the bracket. Must be finite.
/// └ `cfg`  - [`SolverCfg`]: tolerance, `max_iter`, rounding digits, criterion.
///
/// # Returns
///
/// A [`RootFindingReport`]; `termination_reason` is
/// ├ [`TerminationReason::ToleranceReached`] when the criterion was met
/// └ [`TerminationReason::IterationLimit`] when `max_iter` ran out. The
///   root is then the midpoint of the final bracket.
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`]  - `a` or `b` is NaN/inf.
/// ├ [`BisectionError::InvalidBracket`] - `func(a) * func(b) > 0`.
/// ├ [`BisectionError::Tolerance`]      - tolerance <= 0 or non-finite.
/// └ [`BisectionError::RootFinding`]    - `max_iter` == 0.
///
/// # Notes
/// ├ Each iteration compares the new midpoint with the previous one; the
/// │ first "previous midpoint" is `a`.
/// ├ [`StopCriterion::ResidualValue`](super::criterion::StopCriterion) tests |f(m)|.
/// └ If f(a) * f(m) < 0 the bracket becomes [a, m], otherwise [m, b].
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: &SolverCfg,
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let cfg       = cfg.validate::<BisectionError>()?;
    let tol       = cfg.tolerance();
    let criterion = cfg.criterion();
    let digits    = cfg.digits();

    let mut evals = 0;

    let mut fa = eval_counted(&mut func, a, &mut evals);
    let fb     = eval_counted(&mut func, b, &mut evals);
    if same_sign(fa, fb) {
        return Err(BisectionError::InvalidBracket { a, b, fa, fb });
    }

    let mut previous = a;
    for iter in 1..=cfg.max_iter() {
        let m  = midpoint(a, b);
        let fm = eval_counted(&mut func, m, &mut evals);
        trace!(iter, a, b, m, fm, "bisection step");

        if criterion.is_met(tol, m, previous, || fm) {
            return Ok(tolerance_reached(RootFindingReport {
                root               : m,
                rounded_root       : round_to_digits(m, digits),
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                criterion,
                algorithm_name     : ALGORITHM.algorithm_name(),
            }));
        }

        // ties (f(a) * f(m) == 0) move the left end
        if opposite_sign(fa, fm) {
            b = m;
        } else {
            a  = m;
            fa = fm;
        }
        previous = m;
    }

    let m = midpoint(a, b);
    iteration_limit(ALGORITHM, RootFindingReport {
        root               : m,
        rounded_root       : round_to_digits(m, digits),
        iterations         : cfg.max_iter(),
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        criterion,
        algorithm_name     : ALGORITHM.algorithm_name(),
    }).map_err(BisectionError::from)
}


/// Bisection root, rounded to `cfg.digits()`.
///
/// Non-convergence within `max_iter` is not an error: the midpoint of
/// the final bracket is returned. See [`bisection`] for details.
pub fn find_root<F>(func: F, a: f64, b: f64, cfg: &SolverCfg) -> Result<f64, BisectionError>
where F: FnMut(f64) -> f64 {
    bisection(func, a, b, cfg).map(|report| report.rounded_root)
}


/// Number of bisections guaranteeing a bracket narrower than `tolerance`.
///
/// `ceil(-log2(tolerance / (b - a)))`, independent of the function.
/// Returns 0 if `[a, b]` is already narrower than `tolerance`.
///
/// # Errors
/// ├ [`BisectionError::InvalidBounds`] - `a`, `b` non-finite or `a >= b`.
/// ├ [`BisectionError::WidthOverflow`] - `b - a` is not representable.
/// └ [`BisectionError::Tolerance`]     - tolerance <= 0 or non-finite.
pub fn estimate_iterations(tolerance: f64, a: f64, b: f64) -> Result<usize, BisectionError> {
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }
    let tol   = validate_tolerance(tolerance)?;
    let width = b - a;
    if !width.is_finite() {
        return Err(BisectionError::WidthOverflow { a, b });
    }

    let n = -(tol / width).log2();
    ceil_count(n).ok_or(BisectionError::InvalidBounds { a, b })
}
