//! Builder API for ergonomic state machine construction.
//!
//! [`MachineBuilder`] assigns state handles as states are declared, so parents
//! and transitions can refer to them without counting indices by hand, and
//! validates the resulting graph before the engine starts.

pub mod machine;

pub use machine::MachineBuilder;
