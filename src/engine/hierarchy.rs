//! Ancestry walks over a state table.
//!
//! All functions here follow parent links until they run out. They assume the
//! parent relation is a forest: a cycle makes them loop forever, and a parent
//! id outside the table panics on indexing.

use crate::core::{run_actions, Action, State, StateId};

/// Iterator from a state outward to its root ancestor, the state itself first.
pub(crate) struct Ancestors<'a> {
    states: &'a [State],
    next: Option<StateId>,
}

impl Iterator for Ancestors<'_> {
    type Item = StateId;

    fn next(&mut self) -> Option<StateId> {
        let current = self.next?;
        self.next = self.states[current.index()].parent_id();
        Some(current)
    }
}

pub(crate) fn ancestors(states: &[State], state: StateId) -> Ancestors<'_> {
    Ancestors {
        states,
        next: Some(state),
    }
}

/// Deepest state that is an ancestor of both `a` and `b` (each counts as its
/// own ancestor). `None` when they live in disjoint trees.
pub(crate) fn common_ancestor(states: &[State], a: StateId, b: StateId) -> Option<StateId> {
    let mut visited = Vec::with_capacity(states.len());
    visited.extend(ancestors(states, a));

    ancestors(states, b).find(|candidate| visited.contains(candidate))
}

/// States from `state` outward, stopping before `ancestor`.
///
/// With `ancestor == None` the path runs to the root. Innermost state first.
pub(crate) fn path_to(states: &[State], state: StateId, ancestor: Option<StateId>) -> Vec<StateId> {
    let mut path = Vec::with_capacity(states.len());
    path.extend(ancestors(states, state).take_while(|id| Some(*id) != ancestor));
    path
}

/// Run the selected callbacks of every state from the root down to `state`.
pub(crate) fn run_root_to_leaf<F>(states: &mut [State], state: StateId, mut select: F)
where
    F: FnMut(&mut State) -> &mut Vec<Action>,
{
    let path = path_to(states, state, None);
    for id in path.into_iter().rev() {
        run_actions(select(&mut states[id.index()]));
    }
}

/// Run exit callbacks from `state` outward, stopping before `ancestor`.
pub(crate) fn exit_to(states: &mut [State], state: StateId, ancestor: Option<StateId>) {
    for id in path_to(states, state, ancestor) {
        let exited = &mut states[id.index()];
        tracing::trace!(state = exited.name(), "exiting state");
        run_actions(&mut exited.exit);
    }
}

/// Run entry callbacks from just below `ancestor` down to `state`.
pub(crate) fn enter_from(states: &mut [State], state: StateId, ancestor: Option<StateId>) {
    let path = path_to(states, state, ancestor);
    for id in path.into_iter().rev() {
        let entered = &mut states[id.index()];
        tracing::trace!(state = entered.name(), "entering state");
        run_actions(&mut entered.entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // 0: Root
    // 1: Left (Root)   2: Right (Root)
    // 3: LeftLeaf (Left)   4: RightLeaf (Right)
    // 5: Island
    fn tree() -> Vec<State> {
        vec![
            State::new("Root"),
            State::new("Left").parent(StateId::new(0)),
            State::new("Right").parent(StateId::new(0)),
            State::new("LeftLeaf").parent(StateId::new(1)),
            State::new("RightLeaf").parent(StateId::new(2)),
            State::new("Island"),
        ]
    }

    fn ids(raw: &[usize]) -> Vec<StateId> {
        raw.iter().copied().map(StateId::new).collect()
    }

    #[test]
    fn ancestors_walk_outward() {
        let states = tree();
        let chain: Vec<_> = ancestors(&states, StateId::new(3)).collect();

        assert_eq!(chain, ids(&[3, 1, 0]));
    }

    #[test]
    fn root_has_only_itself_as_ancestor() {
        let states = tree();
        let chain: Vec<_> = ancestors(&states, StateId::new(5)).collect();

        assert_eq!(chain, ids(&[5]));
    }

    #[test]
    fn common_ancestor_of_siblings_is_parent() {
        let mut states = tree();
        states.push(State::new("LeftLeaf2").parent(StateId::new(1)));

        assert_eq!(
            common_ancestor(&states, StateId::new(3), StateId::new(6)),
            Some(StateId::new(1))
        );
    }

    #[test]
    fn common_ancestor_across_subtrees() {
        let states = tree();

        assert_eq!(
            common_ancestor(&states, StateId::new(3), StateId::new(4)),
            Some(StateId::new(0))
        );
    }

    #[test]
    fn common_ancestor_of_disjoint_trees_is_none() {
        let states = tree();

        assert_eq!(common_ancestor(&states, StateId::new(3), StateId::new(5)), None);
    }

    #[test]
    fn common_ancestor_with_own_ancestor_is_that_ancestor() {
        let states = tree();

        assert_eq!(
            common_ancestor(&states, StateId::new(3), StateId::new(0)),
            Some(StateId::new(0))
        );
        assert_eq!(
            common_ancestor(&states, StateId::new(1), StateId::new(3)),
            Some(StateId::new(1))
        );
    }

    #[test]
    fn common_ancestor_of_state_with_itself() {
        let states = tree();

        assert_eq!(
            common_ancestor(&states, StateId::new(4), StateId::new(4)),
            Some(StateId::new(4))
        );
    }

    #[test]
    fn path_stops_before_ancestor() {
        let states = tree();

        assert_eq!(
            path_to(&states, StateId::new(3), Some(StateId::new(0))),
            ids(&[3, 1])
        );
        assert_eq!(path_to(&states, StateId::new(3), None), ids(&[3, 1, 0]));
        assert!(path_to(&states, StateId::new(1), Some(StateId::new(1))).is_empty());
    }

    #[test]
    fn exit_and_enter_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut states: Vec<State> = tree()
            .into_iter()
            .map(|state| {
                let name = state.name().to_string();
                let (entry_log, exit_log) = (Arc::clone(&log), Arc::clone(&log));
                let (entry_name, exit_name) = (name.clone(), name);
                state
                    .on_entry(move || entry_log.lock().unwrap().push(format!("{entry_name} entry")))
                    .on_exit(move || exit_log.lock().unwrap().push(format!("{exit_name} exit")))
            })
            .collect();

        let root = Some(StateId::new(0));
        exit_to(&mut states, StateId::new(3), root);
        enter_from(&mut states, StateId::new(4), root);

        assert_eq!(
            *log.lock().unwrap(),
            vec!["LeftLeaf exit", "Left exit", "Right entry", "RightLeaf entry"]
        );
    }

    #[test]
    fn root_to_leaf_runs_outermost_first() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (a, b) = (Arc::clone(&log), Arc::clone(&log));
        let mut states = vec![
            State::new("Outer").on_handle(move || a.lock().unwrap().push("Outer")),
            State::new("Inner")
                .parent(StateId::new(0))
                .on_handle(move || b.lock().unwrap().push("Inner")),
        ];

        run_root_to_leaf(&mut states, StateId::new(1), |s| &mut s.handle);

        assert_eq!(*log.lock().unwrap(), vec!["Outer", "Inner"]);
    }
}
