//! Hierarchical state machine engine.

use super::hierarchy::{ancestors, common_ancestor, enter_from, exit_to, path_to, run_root_to_leaf};
use crate::config::EngineConfig;
use crate::core::{State, StateId, Transition};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Outcome of a single [`Engine::process`] tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepResult {
    /// No transition matched; the machine stayed where it was
    Stayed { state: StateId },

    /// A transition fired and the machine moved to a new state
    Transitioned { from: StateId, to: StateId },
}

impl StepResult {
    pub fn is_transition(&self) -> bool {
        matches!(self, StepResult::Transitioned { .. })
    }

    /// State the machine is in after the tick.
    pub fn state(&self) -> StateId {
        match *self {
            StepResult::Stayed { state } => state,
            StepResult::Transitioned { to, .. } => to,
        }
    }
}

/// Serializable diagnostic view of an engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    pub current: StateId,
    pub current_name: String,
    /// Names of the active states, outermost first
    pub active_path: Vec<String>,
}

/// Hierarchical state machine driven by an external tick.
///
/// The engine owns its state table and transition table. `StateId`s refer to
/// positions in the state table handed to [`Engine::initialize`].
///
/// # Caller obligations
///
/// The engine only checks the number of declared states. Every `StateId` used
/// as a parent, source, target or initial state must be declared, and parent
/// links must not form a cycle. An undeclared id panics on first use; a cycle
/// makes hierarchy walks loop forever. Use
/// [`MachineBuilder`](crate::builder::MachineBuilder) to have both checked up
/// front.
pub struct Engine {
    current: StateId,
    states: Vec<State>,
    transitions: Vec<Transition>,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the default configuration.
    ///
    /// Runs the entry actions of `initial` and all of its ancestors, root
    /// first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nestate::core::{State, StateId, Transition};
    /// use nestate::engine::Engine;
    ///
    /// let off = StateId::new(0);
    /// let on = StateId::new(1);
    ///
    /// let mut engine = Engine::initialize(
    ///     off,
    ///     vec![State::new("Off"), State::new("On")],
    ///     vec![Transition::always(off, on), Transition::always(on, off)],
    /// )
    /// .unwrap();
    ///
    /// engine.process();
    /// assert_eq!(engine.current_state(), on);
    /// assert_eq!(engine.current_name(), "On");
    /// ```
    pub fn initialize(
        initial: StateId,
        states: Vec<State>,
        transitions: Vec<Transition>,
    ) -> Result<Self, ConfigError> {
        Self::initialize_with(EngineConfig::default(), initial, states, transitions)
    }

    /// Create an engine with an explicit configuration.
    pub fn initialize_with(
        config: EngineConfig,
        initial: StateId,
        states: Vec<State>,
        transitions: Vec<Transition>,
    ) -> Result<Self, ConfigError> {
        check_capacity(&config, states.len())?;

        let mut engine = Self {
            current: initial,
            states,
            transitions,
            config,
        };

        run_root_to_leaf(&mut engine.states, initial, |s| &mut s.entry);

        tracing::debug!(
            initial = engine.current_name(),
            states = engine.states.len(),
            transitions = engine.transitions.len(),
            "state machine initialized"
        );

        Ok(engine)
    }

    /// Run one tick.
    ///
    /// Handle actions of the current state's hierarchy run root first. Then
    /// the first declared transition that can fire from the current state is
    /// executed: exits from the source up to the common ancestor, the
    /// transition's own actions, then entries from the common ancestor down to
    /// the target. The current state changes only after all of that.
    pub fn process(&mut self) -> StepResult {
        let from = self.current;
        run_root_to_leaf(&mut self.states, from, |s| &mut s.handle);

        let Some(index) = self.transitions.iter_mut().position(|t| t.can_fire(from)) else {
            tracing::trace!(state = self.current_name(), "no transition matched");
            return StepResult::Stayed { state: from };
        };

        let to = self.transitions[index].target;
        let ancestor = common_ancestor(&self.states, from, to);

        exit_to(&mut self.states, from, ancestor);
        self.transitions[index].run_actions();
        enter_from(&mut self.states, to, ancestor);

        self.current = to;

        tracing::debug!(
            from = self.states[from.index()].name(),
            to = self.current_name(),
            "transition fired"
        );

        StepResult::Transitioned { from, to }
    }

    /// Get the current state (pure)
    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// Name of the current state.
    pub fn current_name(&self) -> &str {
        self.state(self.current).name()
    }

    /// Look up a declared state.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of this engine's state table.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    /// Active states, outermost first, ending with the current state.
    pub fn active_path(&self) -> Vec<StateId> {
        let mut path = path_to(&self.states, self.current, None);
        path.reverse();
        path
    }

    /// Check if `id` is the current state or one of its ancestors.
    pub fn is_in(&self, id: StateId) -> bool {
        ancestors(&self.states, self.current).any(|active| active == id)
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            current: self.current,
            current_name: self.current_name().to_string(),
            active_path: self
                .active_path()
                .into_iter()
                .map(|id| self.state(id).name().to_string())
                .collect(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

pub(crate) fn check_capacity(config: &EngineConfig, declared: usize) -> Result<(), ConfigError> {
    if declared > config.max_states {
        tracing::warn!(
            declared,
            bound = config.max_states,
            "rejecting state machine with too many states"
        );
        return Err(ConfigError::TooManyStates {
            declared,
            bound: config.max_states,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<String>>>;

    fn record(log: &Log, label: &str) -> impl FnMut() + Send + 'static {
        let log = Arc::clone(log);
        let label = label.to_string();
        move || log.lock().unwrap().push(label.clone())
    }

    fn take(log: &Log) -> Vec<String> {
        std::mem::take(&mut *log.lock().unwrap())
    }

    fn recorded_state(log: &Log, name: &str) -> State {
        State::new(name)
            .on_entry(record(log, &format!("{name} entry")))
            .on_exit(record(log, &format!("{name} exit")))
            .on_handle(record(log, &format!("{name} handle")))
    }

    #[test]
    fn initialize_enters_initial_state() {
        let log = Log::default();
        let engine = Engine::initialize(
            StateId::new(0),
            vec![recorded_state(&log, "Only")],
            Vec::new(),
        )
        .unwrap();

        assert_eq!(engine.current_state(), StateId::new(0));
        assert_eq!(take(&log), vec!["Only entry"]);
    }

    #[test]
    fn initialize_rejects_too_many_states() {
        let log = Log::default();
        let states = (0..11)
            .map(|i| recorded_state(&log, &format!("S{i}")))
            .collect();

        let result = Engine::initialize(StateId::new(0), states, Vec::new());

        assert!(matches!(
            result,
            Err(ConfigError::TooManyStates {
                declared: 11,
                bound: 10
            })
        ));
        assert!(take(&log).is_empty());
    }

    #[test]
    fn configured_bound_is_enforced() {
        let config = EngineConfig::default().with_max_states(2);
        let states = vec![State::new("A"), State::new("B"), State::new("C")];

        let result = Engine::initialize_with(config, StateId::new(0), states, Vec::new());

        assert!(matches!(
            result,
            Err(ConfigError::TooManyStates {
                declared: 3,
                bound: 2
            })
        ));
    }

    #[test]
    fn larger_bound_accepts_more_states() {
        let config = EngineConfig::default().with_max_states(20);
        let states = (0..15).map(|i| State::new(format!("S{i}"))).collect();

        let engine = Engine::initialize_with(config, StateId::new(0), states, Vec::new()).unwrap();

        assert_eq!(engine.state_count(), 15);
        assert_eq!(engine.config().max_states, 20);
    }

    #[test]
    fn process_without_transitions_only_handles() {
        let log = Log::default();
        let mut engine = Engine::initialize(
            StateId::new(0),
            vec![recorded_state(&log, "Idle")],
            Vec::new(),
        )
        .unwrap();
        take(&log);

        let result = engine.process();

        assert_eq!(result, StepResult::Stayed { state: StateId::new(0) });
        assert!(!result.is_transition());
        assert_eq!(take(&log), vec!["Idle handle"]);
    }

    #[test]
    fn process_reports_transition() {
        let a = StateId::new(0);
        let b = StateId::new(1);
        let mut engine = Engine::initialize(
            a,
            vec![State::new("A"), State::new("B")],
            vec![Transition::always(a, b)],
        )
        .unwrap();

        let result = engine.process();

        assert_eq!(result, StepResult::Transitioned { from: a, to: b });
        assert_eq!(result.state(), b);
        assert_eq!(engine.transition_count(), 1);
    }

    #[test]
    fn self_transition_runs_only_edge_actions() {
        let log = Log::default();
        let a = StateId::new(0);
        let mut engine = Engine::initialize(
            a,
            vec![recorded_state(&log, "A")],
            vec![Transition::always(a, a).action(record(&log, "A -> A"))],
        )
        .unwrap();
        take(&log);

        let result = engine.process();

        assert_eq!(result, StepResult::Transitioned { from: a, to: a });
        assert_eq!(take(&log), vec!["A handle", "A -> A"]);
    }

    #[test]
    fn active_path_and_is_in() {
        let root = StateId::new(0);
        let mid = StateId::new(1);
        let leaf = StateId::new(2);
        let other = StateId::new(3);
        let engine = Engine::initialize(
            leaf,
            vec![
                State::new("Root"),
                State::new("Mid").parent(root),
                State::new("Leaf").parent(mid),
                State::new("Other").parent(root),
            ],
            Vec::new(),
        )
        .unwrap();

        assert_eq!(engine.active_path(), vec![root, mid, leaf]);
        assert!(engine.is_in(root));
        assert!(engine.is_in(mid));
        assert!(engine.is_in(leaf));
        assert!(!engine.is_in(other));
    }

    #[test]
    fn snapshot_serializes_correctly() {
        let parent = StateId::new(0);
        let child = StateId::new(1);
        let engine = Engine::initialize(
            child,
            vec![State::new("Parent"), State::new("Child").parent(parent)],
            Vec::new(),
        )
        .unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.current, child);
        assert_eq!(snapshot.current_name, "Child");
        assert_eq!(snapshot.active_path, vec!["Parent", "Child"]);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: MachineSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
