//! States of a hierarchical machine.
//!
//! A state is a node in an ancestry forest: it has at most one parent and
//! carries three ordered callback lists. The engine runs `entry` callbacks when
//! the state is entered, `handle` callbacks on every tick while the state (or
//! one of its descendants) is active, and `exit` callbacks when it is left.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side-effecting callback run by the engine.
///
/// Actions close over whatever caller-owned state they need (counters, flags,
/// channels). The engine treats them uniformly as zero-argument procedures.
pub type Action = Box<dyn FnMut() + Send>;

/// Handle to a state inside an engine's state table.
///
/// A `StateId` is the position of the state in the table it was declared in.
/// Identity is by handle, never by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(usize);

impl StateId {
    /// Create a handle for the state at `index` in the state table.
    pub const fn new(index: usize) -> Self {
        StateId(index)
    }

    /// Position of the state in its table.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the state hierarchy.
///
/// # Example
///
/// ```rust
/// use nestate::core::{State, StateId};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let polls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&polls);
///
/// let heating = State::new("Heating")
///     .parent(StateId::new(0))
///     .on_handle(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     });
///
/// assert_eq!(heating.name(), "Heating");
/// assert_eq!(heating.parent_id(), Some(StateId::new(0)));
/// ```
pub struct State {
    name: String,
    parent: Option<StateId>,
    pub(crate) entry: Vec<Action>,
    pub(crate) exit: Vec<Action>,
    pub(crate) handle: Vec<Action>,
}

impl State {
    /// Create a top-level state with no callbacks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            entry: Vec::new(),
            exit: Vec::new(),
            handle: Vec::new(),
        }
    }

    /// Nest this state inside `parent`.
    pub fn parent(mut self, parent: StateId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Append an entry action.
    pub fn on_entry<F>(mut self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.entry.push(Box::new(action));
        self
    }

    /// Append an exit action.
    pub fn on_exit<F>(mut self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.exit.push(Box::new(action));
        self
    }

    /// Append a handle action, run on every tick while this state is active.
    pub fn on_handle<F>(mut self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.handle.push(Box::new(action));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_id(&self) -> Option<StateId> {
        self.parent
    }

    /// Check if this state has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("entry", &self.entry.len())
            .field("exit", &self.exit.len())
            .field("handle", &self.handle.len())
            .finish()
    }
}

pub(crate) fn run_actions(actions: &mut [Action]) {
    for action in actions.iter_mut() {
        action();
    }
}
