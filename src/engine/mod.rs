//! Execution of hierarchical state machines.
//!
//! # Ordering
//!
//! - Initialization enters the initial state's hierarchy root first.
//! - Each tick runs handle actions root first, even when nothing fires.
//! - Transitions are scanned in declaration order; the first that can fire wins.
//! - A transition exits innermost first up to the common ancestor, runs its
//!   own actions, then enters outermost first down to the target.
//!
//! The common ancestor itself is neither exited nor entered.

mod hierarchy;
mod machine;

pub use machine::{Engine, MachineSnapshot, StepResult};

pub(crate) use machine::check_capacity;
