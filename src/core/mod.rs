//! Core building blocks of a hierarchical state machine.
//!
//! - States with ordered entry, exit and handle callbacks and an optional parent
//! - Guard predicates for transition events and conditions
//! - Transitions binding a source state, guards, actions and a target
//!
//! None of these types execute anything on their own; the engine drives them.

mod guard;
mod state;
mod transition;

pub(crate) use state::run_actions;
pub use guard::Guard;
pub use state::{Action, State, StateId};
pub use transition::Transition;
