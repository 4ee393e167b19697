//! Picks the next action for a growing plan.
//!
//! The preference order is: an unused action of the component the last action
//! belonged to, then any unused action, then the already used action that the
//! reference plans still demand the most.

use crate::ActionCounts;
use tp_domain::*;

/// Possible actions that no plan has taken yet, in node order.
pub fn unused_actions<'a>(
    possible: &'a IndexSet<ActionId>,
    satisfied: &FxHashSet<ActionId>,
) -> Vec<&'a ActionId> {
    possible.iter().filter(|a| !satisfied.contains(*a)).collect()
}

pub fn action_with_same_component<'a>(
    last_action: Option<&ActionId>,
    unused: &[&'a ActionId],
) -> Option<&'a ActionId> {
    let last = last_action?;
    unused.iter().copied().find(|a| a.same_component(last))
}

/// The action with the strictly highest count. Earlier actions win ties and
/// nothing is returned unless some count is above zero.
pub fn most_occurring_action<'a>(
    possible: &'a IndexSet<ActionId>,
    counts: &ActionCounts,
) -> Option<&'a ActionId> {
    let mut best: Option<(&ActionId, usize)> = None;
    for action in possible {
        let best_count = best.map(|(_, c)| c).unwrap_or(0);
        let count = counts.get(action);
        if count > best_count {
            best = Some((action, count));
        }
    }
    best.map(|(a, _)| a)
}

pub fn choose_action<S>(
    node: &SearchNode<S>,
    counts: &ActionCounts,
    satisfied: &FxHashSet<ActionId>,
) -> Option<ActionId> {
    let unused = unused_actions(&node.actions, satisfied);
    if let Some(a) = action_with_same_component(node.last_action.as_ref(), &unused) {
        return Some(a.clone());
    }
    if let Some(a) = unused.first() {
        return Some((*a).clone());
    }
    most_occurring_action(&node.actions, counts).cloned()
}
