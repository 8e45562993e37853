//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckConfig, CheckResult, CheckStep, check_words};
pub use simple::run_simple;
