//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

use super::criterion::StopCriterion;


/// Reasons a root-finding algorithm may terminate.
///
/// [`TerminationReason::IterationLimit`] only reaches callers for the
/// best-effort methods (bisection, fixed-point, multiple roots); the others
/// turn it into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`               : final iterate, unrounded
/// - `rounded_root`       : `root` rounded to the configured digits
/// - `iterations`         : update steps performed
/// - `evaluations`        : total evaluations of f, f', f''
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])
/// - `criterion`          : stop criterion that governed the loop
/// - `algorithm_name`     : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root               : f64,
    pub rounded_root       : f64,
    pub iterations         : usize,
    pub evaluations        : usize,
    pub termination_reason : TerminationReason,
    pub criterion          : StopCriterion,
    pub algorithm_name     : &'static str,
}

impl RootFindingReport {
    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }
}
