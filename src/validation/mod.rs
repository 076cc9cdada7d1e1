//! Optional hardening checks for state graphs.
//!
//! [`Engine::initialize`](crate::engine::Engine::initialize) only checks the
//! state-count bound. This module checks the rest of the caller's obligations
//! (declared ids everywhere, no ancestry cycles) using Stillwater's
//! `Validation`, so every problem is reported in one pass instead of the first
//! one only.
//!
//! # Example
//!
//! ```rust
//! use nestate::core::{State, StateId, Transition};
//! use nestate::validation::{validate_graph, GraphViolation};
//!
//! let states = vec![State::new("Loop").parent(StateId::new(0))];
//! let transitions = vec![Transition::always(StateId::new(0), StateId::new(3))];
//!
//! let result = validate_graph(StateId::new(0), &states, &transitions);
//! assert!(result.is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::validate_graph;
pub use violations::GraphViolation;
