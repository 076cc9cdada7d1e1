//! Builder for constructing validated state machines.

use crate::config::EngineConfig;
use crate::core::{State, StateId, Transition};
use crate::engine::{check_capacity, Engine};
use crate::error::ConfigError;
use crate::validation::validate_graph;
use stillwater::validation::Validation;

/// Builder that hands out a [`StateId`] for every declared state.
///
/// Unlike [`Engine::initialize`], [`build`](MachineBuilder::build) checks the
/// whole graph before any entry action runs.
///
/// # Example
///
/// ```rust
/// use nestate::builder::MachineBuilder;
/// use nestate::core::{State, Transition};
///
/// let mut builder = MachineBuilder::new();
/// let door = builder.add_state(State::new("Door"));
/// let open = builder.add_state(State::new("Open").parent(door));
/// let closed = builder.add_state(State::new("Closed").parent(door));
///
/// builder
///     .add_transition(Transition::always(closed, open))
///     .add_transition(Transition::always(open, closed));
///
/// let mut engine = builder.build(closed).unwrap();
/// engine.process();
/// assert_eq!(engine.current_state(), open);
/// ```
pub struct MachineBuilder {
    config: EngineConfig,
    states: Vec<State>,
    transitions: Vec<Transition>,
}

impl MachineBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Declare a state and get its handle.
    pub fn add_state(&mut self, state: State) -> StateId {
        let id = StateId::new(self.states.len());
        self.states.push(state);
        id
    }

    /// Add a transition. Declaration order is matching order.
    pub fn add_transition(&mut self, transition: Transition) -> &mut Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn add_transitions<I>(&mut self, transitions: I) -> &mut Self
    where
        I: IntoIterator<Item = Transition>,
    {
        self.transitions.extend(transitions);
        self
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Validate the graph and build the engine in `initial`.
    ///
    /// The bound is checked first, then the graph; on any error no entry
    /// action has run.
    pub fn build(self, initial: StateId) -> Result<Engine, ConfigError> {
        check_capacity(&self.config, self.states.len())?;

        if let Validation::Failure(errors) = validate_graph(initial, &self.states, &self.transitions)
        {
            let violations: Vec<_> = errors.iter().cloned().collect();
            tracing::warn!(
                violations = violations.len(),
                "rejecting malformed state graph"
            );
            return Err(ConfigError::InvalidGraph { violations });
        }

        Engine::initialize_with(self.config, initial, self.states, self.transitions)
    }
}

impl Default for MachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
