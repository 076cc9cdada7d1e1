//! Guard predicates for controlling state transitions.
//!
//! Guards are zero-argument boolean queries. The engine evaluates them fresh
//! on every tick, so a guard can observe any caller-owned state it captures
//! (a sensor reading, a timer, a flag flipped by another component).

use std::fmt;

/// Predicate that decides whether a transition may fire "now".
///
/// Both the event of a transition and its extra guards are `Guard`s.
///
/// # Example
///
/// ```rust
/// use nestate::core::Guard;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let door_open = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&door_open);
/// let mut guard = Guard::new(move || flag.load(Ordering::SeqCst));
///
/// assert!(!guard.check());
/// door_open.store(true, Ordering::SeqCst);
/// assert!(guard.check());
/// ```
pub struct Guard {
    predicate: Box<dyn FnMut() -> bool + Send>,
}

impl Guard {
    /// Create a guard from a predicate closure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that always holds.
    pub fn always() -> Self {
        Guard::new(|| true)
    }

    /// Guard that never holds.
    pub fn never() -> Self {
        Guard::new(|| false)
    }

    /// Evaluate the predicate.
    ///
    /// Results are never cached; every call runs the closure.
    pub fn check(&mut self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard")
    }
}

impl<F> From<F> for Guard
where
    F: FnMut() -> bool + Send + 'static,
{
    fn from(predicate: F) -> Self {
        Guard::new(predicate)
    }
}
