//! Problems found in a state graph.

use crate::core::StateId;
use thiserror::Error;

/// A single defect in a declared state graph
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphViolation {
    #[error("initial state {initial} is not declared")]
    UnknownInitial { initial: StateId },

    #[error("state '{state}' has undeclared parent {parent}")]
    UnknownParent { state: String, parent: StateId },

    #[error("state '{state}' is its own ancestor")]
    CyclicAncestry { state: String },

    #[error("transition {transition} has undeclared source {state}")]
    UnknownSource { transition: usize, state: StateId },

    #[error("transition {transition} has undeclared target {state}")]
    UnknownTarget { transition: usize, state: StateId },
}
