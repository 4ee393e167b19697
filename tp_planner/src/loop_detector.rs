use tp_domain::*;

/// Looks for a block of actions that was just repeated.
///
/// For every earlier occurrence `i` of the last action, most recent first,
/// the actions between `i` and the tail are compared with the same number of
/// actions right before `i`. Returns the first `i` where they match.
pub fn detect_loop<S>(node: &SearchNode<S>) -> Option<usize> {
    let last = node.last_action.as_ref()?;
    let path = &node.path;
    let tail = path.len().checked_sub(1)?;

    path[..tail]
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, a)| *a == last)
        .map(|(i, _)| i)
        .find(|&i| {
            let candidate = &path[i + 1..tail];
            match i.checked_sub(candidate.len()) {
                Some(earlier_start) => &path[earlier_start..i] == candidate,
                None => false,
            }
        })
}
