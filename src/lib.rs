//! Classic root-finding for scalar, single-variable functions.
//!
//! Each method in [`root_finding`] exposes
//! ├ `find_root`           : runs the iteration, returns the rounded root
//! ├ `estimate_iterations` : predicts the iteration count for a tolerance
//! └ a report entry point  : same run, returning a [`RootFindingReport`]
//!
//! ```
//! use rootfind::{newton, SolverCfg, StopCriterion};
//!
//! let cfg  = SolverCfg::new(1e-5, 100, 6, StopCriterion::AbsoluteStep);
//! let root = newton::find_root(|x| x * x - 2.0, |x| 2.0 * x, 1.0, &cfg).unwrap();
//! assert_eq!(root, 1.414214);
//! ```

pub mod root_finding;

pub use root_finding::{bisection, fixed_point, multiple_roots, newton, secant};
pub use root_finding::algorithms::Algorithm;
pub use root_finding::config::SolverCfg;
pub use root_finding::criterion::StopCriterion;
pub use root_finding::errors::{RootFindingError, ToleranceError};
pub use root_finding::report::{RootFindingReport, TerminationReason};
