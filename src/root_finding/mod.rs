// common helpers
pub mod algorithms;
pub mod criterion;
pub mod config;
pub mod report;
pub mod errors;
pub mod rounding;
pub(crate) mod common;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod newton;
pub mod fixed_point;
pub mod multiple_roots;
pub mod secant;
