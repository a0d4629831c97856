//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared [`ESTIMATE_MAX_ITER`] cap used by simulated estimators.


/// Internal cap for estimators that simulate the iteration
/// (e.g. [`OpenFamily::Newton`], [`OpenFamily::Secant`]).
///
/// Independent of the caller's `max_iter`; estimators ignore it.
pub const ESTIMATE_MAX_ITER: usize = 1000;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Newton,
    FixedPoint,
    MultipleRoots,
    Secant,
}

impl Algorithm {
    /// Recommended iteration cap for each method.
    ///
    /// # Notes
    /// - Usage guidance only; solvers never fall back to these values.
    /// - See [`crate::root_finding::config::SolverCfg::recommended`].
    pub const fn recommended_max_iter(self) -> usize {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)  => 100_000,
            Algorithm::Open(OpenFamily::Newton)           => 100,
            Algorithm::Open(OpenFamily::FixedPoint)       => 100_000,
            Algorithm::Open(OpenFamily::MultipleRoots)    => 1_000,
            Algorithm::Open(OpenFamily::Secant)           => 1_000,
        }
    }

    /// Whether the method returns its current estimate when `max_iter`
    /// runs out (`true`) or fails with
    /// [`RootFindingError::NonConvergence`](super::errors::RootFindingError::NonConvergence).
    pub const fn best_effort_on_limit(self) -> bool {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)
            | Algorithm::Open(OpenFamily::FixedPoint)
            | Algorithm::Open(OpenFamily::MultipleRoots) => true,
            Algorithm::Open(OpenFamily::Newton)
            | Algorithm::Open(OpenFamily::Secant)        => false,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)  => "bisection",
            Algorithm::Open(OpenFamily::Newton)           => "newton",
            Algorithm::Open(OpenFamily::FixedPoint)       => "fixed_point",
            Algorithm::Open(OpenFamily::MultipleRoots)    => "multiple_roots",
            Algorithm::Open(OpenFamily::Secant)           => "secant",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
