use super::*;
use serde::{Deserialize, Serialize};

/// Anything that carries an ordered path of actions.
pub trait ActionSequence {
    fn path(&self) -> &[ActionId];

    /// The path as an unordered set.
    fn action_set(&self) -> FxHashSet<&ActionId> {
        self.path().iter().collect()
    }
}

/// A finished plan without its model state.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    pub path: Vec<ActionId>,
    #[serde(default)]
    pub test_case: TestCase,
}

impl Plan {
    pub fn new(path: Vec<ActionId>) -> Self {
        Plan {
            path,
            test_case: vec![],
        }
    }
}

impl ActionSequence for Plan {
    fn path(&self) -> &[ActionId] {
        &self.path
    }
}

/// The unit of search state: a plan under construction.
///
/// Cloning is a deep copy, a clone can be grown or rewound without touching
/// the node it came from.
#[derive(Debug, PartialEq, Clone)]
pub struct SearchNode<S> {
    pub path: Vec<ActionId>,
    pub state: S,
    pub test_case: TestCase,
    /// Actions possible from `state`, in the order the model returned them.
    pub actions: IndexSet<ActionId>,
    pub last_action: Option<ActionId>,
}

impl<S> SearchNode<S> {
    pub fn new(state: S) -> Self {
        SearchNode {
            path: vec![],
            state,
            test_case: vec![],
            actions: IndexSet::new(),
            last_action: None,
        }
    }

    /// Appends an action to the path and makes it the last action.
    pub fn push_action(&mut self, action: ActionId) {
        self.path.push(action.clone());
        self.last_action = Some(action);
    }

    /// Removes an action from the possible actions, keeping the order of the rest.
    pub fn forbid(&mut self, action: &ActionId) -> bool {
        self.actions.shift_remove(action)
    }

    pub fn forbid_last_action(&mut self) -> bool {
        match self.last_action.clone() {
            Some(last) => self.forbid(&last),
            None => false,
        }
    }

    pub fn has_possible_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn to_plan(&self) -> Plan {
        Plan {
            path: self.path.clone(),
            test_case: self.test_case.clone(),
        }
    }
}

impl<S> ActionSequence for SearchNode<S> {
    fn path(&self) -> &[ActionId] {
        &self.path
    }
}

#[cfg(test)]
mod node_tests {
    use super::*;

    fn id(s: &str) -> ActionId {
        s.parse().unwrap()
    }

    #[test]
    fn clones_are_independent() {
        let mut n = SearchNode::new(vec![1]);
        n.actions.insert(id("X.a"));
        n.actions.insert(id("X.b"));
        n.push_action(id("X.a"));

        let mut c = n.clone();
        c.push_action(id("X.b"));
        c.state.push(2);
        c.forbid(&id("X.a"));

        assert_eq!(n.path, vec![id("X.a")]);
        assert_eq!(n.state, vec![1]);
        assert_eq!(n.actions.len(), 2);
        assert_eq!(n.last_action, Some(id("X.a")));
        assert_eq!(c.last_action, Some(id("X.b")));
    }

    #[test]
    fn forbid_keeps_order() {
        let mut n = SearchNode::new(());
        for a in ["X.a", "X.b", "X.c", "X.d"] {
            n.actions.insert(id(a));
        }
        n.push_action(id("X.b"));
        assert!(n.forbid_last_action());
        assert!(!n.forbid_last_action());
        let left: Vec<_> = n.actions.iter().map(|a| a.to_string()).collect();
        assert_eq!(left, vec!["X.a", "X.c", "X.d"]);
    }

    #[test]
    fn action_set_ignores_repeats() {
        let p = Plan::new(vec![id("X.a"), id("X.b"), id("X.a")]);
        assert_eq!(p.action_set().len(), 2);
    }
}
