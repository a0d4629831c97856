use rootfind::root_finding::algorithms::{Algorithm, OpenFamily};
use rootfind::root_finding::secant::{estimate_iterations, find_root, secant, SecantError};
use rootfind::{RootFindingError, SolverCfg, StopCriterion, TerminationReason};

type TestResult = Result<(), SecantError>;

fn cfg(tol: f64, max_iter: usize, criterion: StopCriterion) -> SolverCfg {
    SolverCfg::new(tol, max_iter, 6, criterion)
}

#[test]
fn finds_cubic_root_by_residual() -> TestResult {
    let f = |x: f64| x * x * x - x - 2.0;

    let res = secant(f, 1.0, 2.0, &cfg(1e-6, 1000, StopCriterion::ResidualValue))?;
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.algorithm_name, "secant");
    assert!(f(res.root).abs() < 1e-6);
    assert_eq!(res.rounded_root, 1.52138);
    Ok(())
}

#[test]
fn report_matches_estimate() -> TestResult {
    let f = |x: f64| x * x * x - x - 2.0;

    let n   = estimate_iterations(1e-5, f, 1.0, 2.0)?;
    let res = secant(f, 1.0, 2.0, &cfg(1e-5, 1000, StopCriterion::AbsoluteStep))?;

    assert_eq!(n, 6);
    assert_eq!(res.iterations, n);
    // f(x0), f(x1), then one per step
    assert_eq!(res.evaluations, 2 + n);
    Ok(())
}

#[test]
fn relative_criterion_compares_function_values() -> TestResult {
    // iteration 1 lands on the root: |0 - f(1)| / ε is huge
    // iteration 2 repeats it:         |0 - 0| / ε == 0
    let f   = |x: f64| x - 3.0;
    let res = secant(f, 0.0, 1.0, &cfg(1e-5, 10, StopCriterion::RelativeStep))?;

    assert_eq!(res.iterations, 2);
    assert_eq!(res.root, 3.0);
    Ok(())
}

#[test]
fn stagnation() -> TestResult {
    let f = |_x: f64| 3.0;

    let err = find_root(f, 0.0, 1.0, &cfg(1e-5, 100, StopCriterion::AbsoluteStep)).unwrap_err();
    assert_eq!(err, SecantError::Stagnation { x0: 0.0, x1: 1.0 });

    let err = estimate_iterations(1e-5, f, 0.0, 1.0).unwrap_err();
    assert_eq!(err, SecantError::Stagnation { x0: 0.0, x1: 1.0 });
    Ok(())
}

#[test]
fn iteration_limit_is_an_error() -> TestResult {
    // no root; each step moves left by about one unit
    let f   = |x: f64| x.exp();
    let err = secant(f, 0.0, 1.0, &cfg(1e-12, 10, StopCriterion::AbsoluteStep)).unwrap_err();

    assert_eq!(
        err,
        SecantError::RootFinding(RootFindingError::NonConvergence {
            algorithm  : Algorithm::Open(OpenFamily::Secant),
            iterations : 10,
        })
    );
    Ok(())
}

#[test]
fn estimate_non_convergence() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let err = estimate_iterations(1e-12, f, 0.5, 1.5).unwrap_err();
    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::NonConvergence { iterations: 1000, .. })
    ));
    Ok(())
}
