use tp_domain::set_relations::is_equal;
use tp_domain::*;

/// Index of the first finished plan that covers exactly the candidate's actions.
pub fn find_duplicate<P, Q>(finished: &[P], candidate: &Q) -> Option<usize>
where
    P: ActionSequence,
    Q: ActionSequence,
{
    finished
        .iter()
        .position(|p| is_equal(p.path(), candidate.path()))
}

pub fn is_duplicate<P, Q>(finished: &[P], candidate: &Q) -> bool
where
    P: ActionSequence,
    Q: ActionSequence,
{
    find_duplicate(finished, candidate).is_some()
}
