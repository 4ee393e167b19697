use tp_domain::set_relations::is_superset;
use tp_domain::*;

/// Keeps only the plans whose actions are not all covered by a single other plan.
///
/// Plans are compared as unordered action sets against every other plan of the
/// input. Equal sets count as covering, so identical plans remove each other.
/// Survivors keep their input order.
pub fn reduce_to_minimum_set<P>(plans: &[P]) -> Vec<P>
where
    P: ActionSequence + Clone,
{
    minimum_set_indices(plans)
        .into_iter()
        .map(|i| plans[i].clone())
        .collect()
}

/// Input positions of the plans [`reduce_to_minimum_set`] keeps, ascending.
pub fn minimum_set_indices<P: ActionSequence>(plans: &[P]) -> Vec<usize> {
    let sets: Vec<FxHashSet<&ActionId>> = plans.iter().map(|p| p.action_set()).collect();

    (0..sets.len())
        .filter(|&i| {
            !sets
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && is_superset(other, &sets[i]))
        })
        .collect()
}
