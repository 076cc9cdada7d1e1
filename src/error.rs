//! Configuration errors raised while constructing an engine.

use crate::validation::GraphViolation;
use thiserror::Error;

/// Errors that can occur when constructing an engine.
///
/// A failed construction never returns a partial engine and never runs any
/// entry action.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("too many states declared: {declared}, max allowed is {bound}")]
    TooManyStates { declared: usize, bound: usize },

    #[error("invalid state graph: {}", format_violations(.violations))]
    InvalidGraph { violations: Vec<GraphViolation> },
}

fn format_violations(violations: &[GraphViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
