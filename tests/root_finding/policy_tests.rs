//! Behavior shared across methods: iteration-cap policy, rounding, reentrancy.
use proptest::prelude::*;
use rootfind::root_finding::algorithms::{BracketFamily, OpenFamily};
use rootfind::root_finding::rounding::round_to_digits;
use rootfind::{
    bisection, fixed_point, multiple_roots, newton, secant,
    Algorithm, SolverCfg, StopCriterion, TerminationReason,
};

const ALL: [Algorithm; 5] = [
    Algorithm::Bracket(BracketFamily::Bisection),
    Algorithm::Open(OpenFamily::Newton),
    Algorithm::Open(OpenFamily::FixedPoint),
    Algorithm::Open(OpenFamily::MultipleRoots),
    Algorithm::Open(OpenFamily::Secant),
];

// Methods with a fallback value return it under the cap;
// Newton and secant surface the failure.
#[test]
fn iteration_cap_policy_is_method_specific() {
    let best_effort: Vec<&str> = ALL.iter()
        .filter(|a| a.best_effort_on_limit())
        .map(|a| a.algorithm_name())
        .collect();
    assert_eq!(best_effort, ["bisection", "fixed_point", "multiple_roots"]);

    let cfg = SolverCfg::new(1e-15, 2, 6, StopCriterion::AbsoluteStep);
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let ddf = |_x: f64| 2.0;
    let h   = |x: f64| 0.5 * (2.0 / x - x); // h(x) + x = (x + 2/x) / 2

    let limit = TerminationReason::IterationLimit;
    assert_eq!(bisection::bisection(f, 0.0, 2.0, &cfg).unwrap().termination_reason, limit);
    assert_eq!(fixed_point::fixed_point(h, 1.5, &cfg).unwrap().termination_reason, limit);
    assert_eq!(multiple_roots::multiple_roots(f, df, ddf, 1.0, &cfg).unwrap().termination_reason, limit);
    assert!(newton::newton(f, df, 1.0, &cfg).is_err());
    assert!(secant::secant(f, 1.0, 2.0, &cfg).is_err());
}

#[test]
fn recommended_caps() {
    let caps: Vec<usize> = ALL.iter().map(|a| a.recommended_max_iter()).collect();
    assert_eq!(caps, [100_000, 100, 100_000, 1_000, 1_000]);
    assert_eq!(Algorithm::Open(OpenFamily::MultipleRoots).to_string(), "multiple_roots");
}

#[test]
fn concurrent_calls_share_nothing() {
    let handles: Vec<_> = (1..=8)
        .map(|k| std::thread::spawn(move || {
            let target = k as f64;
            let cfg    = SolverCfg::new(1e-10, 100, 6, StopCriterion::AbsoluteStep);
            newton::find_root(move |x| x * x - target, |x| 2.0 * x, target, &cfg)
        }))
        .collect();

    for (k, handle) in (1..=8).zip(handles) {
        let root = handle.join().unwrap().unwrap();
        assert_eq!(root, round_to_digits((k as f64).sqrt(), 6));
    }
}

proptest! {
    #[test]
    fn every_method_returns_rounded_values(digits in 0u32..10, c in 1.0f64..50.0) {
        let cfg = SolverCfg::new(1e-9, 500, digits, StopCriterion::AbsoluteStep);
        let f   = move |x: f64| x * x - c;
        let df  = |x: f64| 2.0 * x;
        let ddf = |_x: f64| 2.0;
        let h   = move |x: f64| 0.5 * (c / x - x);

        let roots = [
            bisection::find_root(f, 0.0, c + 1.0, &cfg).unwrap(),
            newton::find_root(f, df, c, &cfg).unwrap(),
            fixed_point::find_root(h, c, &cfg).unwrap(),
            multiple_roots::find_root(f, df, ddf, c, &cfg).unwrap(),
            secant::find_root(f, c, c + 1.0, &cfg).unwrap(),
        ];
        for root in roots {
            prop_assert_eq!(round_to_digits(root, digits), root);
            prop_assert!((root - c.sqrt()).abs() <= 0.5 * 10f64.powi(-(digits as i32)) + 1e-6);
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn cfg_loads_from_json() {
    let cfg: SolverCfg = serde_json::from_str(
        r#"{ "tolerance": 1e-5, "max_iter": 100, "digits": 6, "criterion": "residual_value" }"#
    ).unwrap();
    assert_eq!(cfg, SolverCfg::new(1e-5, 100, 6, StopCriterion::ResidualValue));
}
