//! Nestate: a hierarchical state machine engine
//!
//! States nest inside parent states. Entering a state enters its enclosing
//! scopes first, leaving it leaves the inner scopes first, and every tick runs
//! the handle callbacks of the whole active hierarchy from the outside in.
//! Scopes shared by the source and target of a transition are left untouched.
//!
//! The engine does not schedule itself: an external driver calls
//! [`Engine::process`] at whatever cadence the application needs.
//!
//! # Core Concepts
//!
//! - **State**: a node with entry, exit and handle callbacks and an optional parent
//! - **Transition**: a guarded edge with its own actions
//! - **Engine**: owns the states and transitions and tracks the current state
//!
//! # Example
//!
//! ```rust
//! use nestate::builder::MachineBuilder;
//! use nestate::core::{State, Transition};
//! use std::sync::{Arc, Mutex};
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let entered = Arc::clone(&log);
//! let exited = Arc::clone(&log);
//!
//! let mut builder = MachineBuilder::new();
//! let machine = builder.add_state(State::new("Machine"));
//! let idle = builder.add_state(
//!     State::new("Idle")
//!         .parent(machine)
//!         .on_exit(move || exited.lock().unwrap().push("Idle exit")),
//! );
//! let running = builder.add_state(
//!     State::new("Running")
//!         .parent(machine)
//!         .on_entry(move || entered.lock().unwrap().push("Running entry")),
//! );
//! builder.add_transition(Transition::always(idle, running));
//!
//! let mut engine = builder.build(idle).unwrap();
//! engine.process();
//!
//! assert_eq!(engine.current_state(), running);
//! assert_eq!(*log.lock().unwrap(), vec!["Idle exit", "Running entry"]);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod validation;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use config::{EngineConfig, DEFAULT_MAX_STATES};
pub use core::{Action, Guard, State, StateId, Transition};
pub use engine::{Engine, MachineSnapshot, StepResult};
pub use error::ConfigError;
