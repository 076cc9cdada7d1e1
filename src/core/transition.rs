//! Guarded transitions between states.

use super::guard::Guard;
use super::state::{run_actions, Action, StateId};
use std::fmt;

/// A guarded edge from one state to another.
///
/// A transition is eligible when the machine is in `source`, its event holds,
/// and every extra guard holds. Its actions belong to the edge itself and run
/// after the exits and before the entries of a hierarchical transition.
///
/// # Example
///
/// ```rust
/// use nestate::core::{StateId, Transition};
///
/// let idle = StateId::new(0);
/// let busy = StateId::new(1);
///
/// let mut start = Transition::new(idle, busy, || true)
///     .guard(|| true)
///     .action(|| println!("starting"));
///
/// assert!(start.can_fire(idle));
/// assert!(!start.can_fire(busy));
/// ```
pub struct Transition {
    pub(crate) source: StateId,
    pub(crate) target: StateId,
    pub(crate) event: Guard,
    pub(crate) guards: Vec<Guard>,
    pub(crate) actions: Vec<Action>,
}

impl Transition {
    /// Create a transition triggered by `event`.
    pub fn new<F>(source: StateId, target: StateId, event: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        Self {
            source,
            target,
            event: Guard::new(event),
            guards: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Create a transition whose event always holds.
    pub fn always(source: StateId, target: StateId) -> Self {
        Self::new(source, target, || true)
    }

    /// Append a guard. Guards are checked in the order they were added.
    pub fn guard<F>(mut self, predicate: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.guards.push(Guard::new(predicate));
        self
    }

    /// Append a transition action.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.actions.push(Box::new(action));
        self
    }

    pub fn source(&self) -> StateId {
        self.source
    }

    pub fn target(&self) -> StateId {
        self.target
    }

    /// Check whether this transition fires from `current`.
    ///
    /// The event is evaluated first; guards only run when it holds, and stop
    /// at the first one that fails.
    pub fn can_fire(&mut self, current: StateId) -> bool {
        if current != self.source {
            return false;
        }

        self.event.check() && self.guards.iter_mut().all(Guard::check)
    }

    pub(crate) fn run_actions(&mut self) {
        run_actions(&mut self.actions);
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("guards", &self.guards.len())
            .field("actions", &self.actions.len())
            .finish()
    }
}
