//! Graph checks that accumulate every violation.

use crate::core::{State, StateId, Transition};
use crate::validation::violations::GraphViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<GraphViolation>>;

/// Validate a state graph, reporting ALL violations.
///
/// Checks that the initial state, every parent, and every transition endpoint
/// are declared, and that no state is its own ancestor. Returns
/// `Validation::Success(())` when the graph is well formed.
pub fn validate_graph(
    initial: StateId,
    states: &[State],
    transitions: &[Transition],
) -> Validation<(), NonEmptyVec<GraphViolation>> {
    let declared = |id: StateId| id.index() < states.len();
    let mut checks: Vec<Check> = Vec::new();

    if !declared(initial) {
        checks.push(Validation::fail(GraphViolation::UnknownInitial { initial }));
    }

    for (index, state) in states.iter().enumerate() {
        if let Some(parent) = state.parent_id() {
            if !declared(parent) {
                checks.push(Validation::fail(GraphViolation::UnknownParent {
                    state: state.name().to_string(),
                    parent,
                }));
            }
        }

        if on_cycle(states, StateId::new(index)) {
            checks.push(Validation::fail(GraphViolation::CyclicAncestry {
                state: state.name().to_string(),
            }));
        }
    }

    for (index, transition) in transitions.iter().enumerate() {
        if !declared(transition.source()) {
            checks.push(Validation::fail(GraphViolation::UnknownSource {
                transition: index,
                state: transition.source(),
            }));
        }
        if !declared(transition.target()) {
            checks.push(Validation::fail(GraphViolation::UnknownTarget {
                transition: index,
                state: transition.target(),
            }));
        }
    }

    // Accumulate ALL failures
    Validation::all_vec(checks).map(|_| ())
}

// A forest chain is at most `states.len()` long, so a walk that has not ended
// by then is on or below a cycle. Only states the walk returns to are on it.
fn on_cycle(states: &[State], start: StateId) -> bool {
    let mut cursor = states[start.index()].parent_id();

    for _ in 0..states.len() {
        match cursor {
            Some(id) if id == start => return true,
            Some(id) if id.index() < states.len() => cursor = states[id.index()].parent_id(),
            _ => return false,
        }
    }

    false
}
