//! Coverage bookkeeping against the corpus of reference plans.

use tp_domain::set_relations::is_subset;
use tp_domain::*;

/// How often each action still occurs among the reference plans.
///
/// The number of entries is the size of the action universe, planning is
/// done once that many actions have been satisfied.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ActionCounts {
    counts: FxHashMap<ActionId, usize>,
}

impl ActionCounts {
    pub fn new() -> Self {
        ActionCounts::default()
    }

    pub fn set(&mut self, action: ActionId, count: usize) {
        self.counts.insert(action, count);
    }

    pub fn increment(&mut self, action: &ActionId) {
        *self.counts.entry(action.clone()).or_insert(0) += 1;
    }

    /// The count of an action, zero when it is not known.
    pub fn get(&self, action: &ActionId) -> usize {
        self.counts.get(action).copied().unwrap_or(0)
    }

    pub fn contains(&self, action: &ActionId) -> bool {
        self.counts.contains_key(action)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(ActionId, usize)> for ActionCounts {
    fn from_iter<I: IntoIterator<Item = (ActionId, usize)>>(iter: I) -> Self {
        ActionCounts {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Computes action counts from the remaining reference plans.
pub trait ReferenceCorpus {
    fn calculate_action_counts(
        &self,
        reference_plans: &[Plan],
        discovered: &IndexSet<ActionId>,
    ) -> ActionCounts;
}

/// Every discovered action starts at zero and each occurrence in a reference
/// plan adds one.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccurrenceCounts;

impl ReferenceCorpus for OccurrenceCounts {
    fn calculate_action_counts(
        &self,
        reference_plans: &[Plan],
        discovered: &IndexSet<ActionId>,
    ) -> ActionCounts {
        let mut counts: ActionCounts = discovered.iter().map(|a| (a.clone(), 0)).collect();
        for action in reference_plans.iter().flat_map(|p| p.path.iter()) {
            counts.increment(action);
        }
        counts
    }
}

/// Drops every reference plan whose actions are all satisfied already.
pub fn prune_existing_plans<P>(reference_plans: &[P], satisfied: &FxHashSet<ActionId>) -> Vec<P>
where
    P: ActionSequence + Clone,
{
    reference_plans
        .iter()
        .filter(|p| !is_subset(p.path(), satisfied))
        .cloned()
        .collect()
}

#[cfg(test)]
mod bookkeeping_tests {
    use super::*;

    fn id(s: &str) -> ActionId {
        s.parse().unwrap()
    }

    fn plan(actions: &[&str]) -> Plan {
        Plan::new(actions.iter().map(|a| id(a)).collect())
    }

    #[test]
    fn prune_covered_reference_plans() {
        let refs = vec![plan(&["X.a", "X.b"]), plan(&["X.a", "X.b", "X.c"])];
        let mut satisfied = FxHashSet::default();
        satisfied.insert(id("X.a"));

        let pruned = prune_existing_plans(&refs, &satisfied);
        assert_eq!(pruned, refs);

        satisfied.insert(id("X.b"));
        let pruned = prune_existing_plans(&refs, &satisfied);
        assert_eq!(pruned, vec![plan(&["X.a", "X.b", "X.c"])]);

        satisfied.insert(id("X.c"));
        assert!(prune_existing_plans(&refs, &satisfied).is_empty());
    }

    #[test]
    fn occurrence_counts() {
        let discovered: IndexSet<ActionId> = ["X.a", "X.b", "X.c"].iter().map(|a| id(a)).collect();
        let refs = vec![plan(&["X.a", "X.b", "X.a"]), plan(&["X.b", "Y.z"])];

        let counts = OccurrenceCounts.calculate_action_counts(&refs, &discovered);
        assert_eq!(counts.get(&id("X.a")), 2);
        assert_eq!(counts.get(&id("X.b")), 2);
        assert_eq!(counts.get(&id("X.c")), 0);
        assert!(counts.contains(&id("X.c")));
        // actions only seen in the reference plans join the universe
        assert_eq!(counts.get(&id("Y.z")), 1);
        assert_eq!(counts.len(), 4);

        let counts = OccurrenceCounts.calculate_action_counts(&[], &discovered);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get(&id("Q.unknown")), 0);
    }
}
