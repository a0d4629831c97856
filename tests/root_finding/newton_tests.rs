use rootfind::root_finding::algorithms::{Algorithm, OpenFamily};
use rootfind::root_finding::newton::{estimate_iterations, find_root, newton, NewtonError};
use rootfind::{RootFindingError, SolverCfg, StopCriterion, TerminationReason};

type TestResult = Result<(), NewtonError>;

fn cfg(tol: f64, max_iter: usize, criterion: StopCriterion) -> SolverCfg {
    SolverCfg::new(tol, max_iter, 6, criterion)
}

#[test]
fn finds_sqrt_2_to_six_digits() -> TestResult {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let root = find_root(f, df, 1.0, &cfg(1e-5, 100, StopCriterion::AbsoluteStep))?;
    assert_eq!(root, 1.414214);
    Ok(())
}

#[test]
fn rounds_stored_root_past_decimal_tie() -> TestResult {
    let cfg  = SolverCfg::new(1e-5, 100, 1, StopCriterion::AbsoluteStep);
    let root = find_root(|x| x + 6.65, |_x| 1.0, 0.0, &cfg)?;
    assert_eq!(root, -6.7);
    Ok(())
}

#[test]
fn report_matches_estimate() -> TestResult {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let n   = estimate_iterations(1e-5, f, df, 1.0)?;
    let res = newton(f, df, 1.0, &cfg(1e-5, 100, StopCriterion::AbsoluteStep))?;

    assert_eq!(n, 4);
    assert_eq!(res.iterations, n);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.evaluations, 2 * n);
    assert_eq!(res.algorithm_name, "newton");
    Ok(())
}

#[test]
fn residual_tests_pre_update_point() -> TestResult {
    let f  = |x: f64| x - 3.0;
    let df = |_x: f64| 1.0;

    // iteration 1: |f(10)| = 7, x1 = 3; iteration 2: |f(3)| = 0
    let res = newton(f, df, 10.0, &cfg(1e-6, 10, StopCriterion::ResidualValue))?;
    assert_eq!(res.iterations, 2);
    assert_eq!(res.root, 3.0);
    Ok(())
}

#[test]
fn relative_step_guarded_at_zero_root() -> TestResult {
    let f  = |x: f64| 2.0 * x;
    let df = |_x: f64| 2.0;

    let res = newton(f, df, 5.0, &cfg(1e-5, 10, StopCriterion::RelativeStep))?;
    assert_eq!(res.iterations, 2);
    assert_eq!(res.rounded_root, 0.0);
    Ok(())
}

#[test]
fn zero_derivative() -> TestResult {
    let f  = |x: f64| x * x + 1.0;
    let df = |x: f64| 2.0 * x;

    let err = find_root(f, df, 0.0, &cfg(1e-5, 100, StopCriterion::AbsoluteStep)).unwrap_err();
    assert_eq!(err, NewtonError::ZeroDerivative { x: 0.0 });

    let err = estimate_iterations(1e-5, f, df, 0.0).unwrap_err();
    assert_eq!(err, NewtonError::ZeroDerivative { x: 0.0 });
    Ok(())
}

#[test]
fn iteration_limit_is_an_error() -> TestResult {
    // no real root: every step has |f / f'| >= 1
    let f  = |x: f64| x * x + 1.0;
    let df = |x: f64| 2.0 * x;

    let err = newton(f, df, 0.5, &cfg(1e-5, 20, StopCriterion::AbsoluteStep)).unwrap_err();
    assert_eq!(
        err,
        NewtonError::RootFinding(RootFindingError::NonConvergence {
            algorithm  : Algorithm::Open(OpenFamily::Newton),
            iterations : 20,
        })
    );
    Ok(())
}

#[test]
fn estimate_non_convergence() -> TestResult {
    let f  = |x: f64| x * x + 1.0;
    let df = |x: f64| 2.0 * x;

    let err = estimate_iterations(1e-5, f, df, 0.5).unwrap_err();
    assert!(matches!(
        err,
        NewtonError::RootFinding(RootFindingError::NonConvergence { iterations: 1000, .. })
    ));
    Ok(())
}

#[test]
fn cubic_from_classic_guess() -> TestResult {
    let f  = |x: f64| x * x * x - x - 2.0;
    let df = |x: f64| 3.0 * x * x - 1.0;

    let root = find_root(f, df, 1.5, &cfg(1e-8, 50, StopCriterion::AbsoluteStep))?;
    assert_eq!(root, 1.52138);
    Ok(())
}
