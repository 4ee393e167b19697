use tp_domain::*;

/// Rewinds a looping plan to an earlier snapshot.
///
/// Starting at `loop_start` and walking back, the snapshot is cloned and the
/// action that was taken right after it is removed from its possible actions.
/// The first snapshot left with something to do is returned, the history is
/// truncated to end with it, and the removal is written back to the stored
/// snapshot so a later rewind to the same point avoids that action too.
///
/// Snapshot 0 is never used as a restart point. Returns `None` and leaves the
/// history untouched when no snapshot qualifies.
pub fn backtrack<S: Clone>(
    history: &mut Vec<SearchNode<S>>,
    loop_start: usize,
) -> Option<SearchNode<S>> {
    // the loop start is a path index, the history can be shorter than the path
    let mut index = loop_start.min(history.len().saturating_sub(2));

    while index > 0 {
        let mut candidate = history[index].clone();
        if let Some(taken) = &history[index + 1].last_action {
            candidate.forbid(taken);
        }
        if candidate.has_possible_actions() {
            history[index].actions = candidate.actions.clone();
            history.truncate(index + 1);
            return Some(candidate);
        }
        index -= 1;
    }
    None
}

#[cfg(test)]
mod backtrack_tests {
    use super::*;

    fn id(s: &str) -> ActionId {
        s.parse().unwrap()
    }

    fn snapshot(path: &[&str], actions: &[&str]) -> SearchNode<usize> {
        let mut n = SearchNode::new(path.len());
        for a in path {
            n.push_action(id(a));
        }
        n.actions = actions.iter().map(|a| id(a)).collect();
        n
    }

    #[test]
    fn rewind_to_loop_start() {
        let n0 = snapshot(&["X.a"], &["X.b"]);
        let n1 = snapshot(&["X.a", "X.b"], &["X.c", "X.d"]);
        let n2 = snapshot(&["X.a", "X.b", "X.c"], &["X.b"]);
        let mut history = vec![n0.clone(), n1.clone(), n2];

        let restart = backtrack(&mut history, 1).unwrap();
        assert_eq!(restart.path, n1.path);
        assert_eq!(restart.state, 2);
        assert_eq!(restart.actions.iter().collect::<Vec<_>>(), vec![&id("X.d")]);
        assert_eq!(restart.last_action, Some(id("X.b")));

        assert_eq!(history.len(), 2);
        assert_eq!(history[0], n0);
        // the choice is remembered in the stored snapshot
        assert_eq!(history[1].actions, restart.actions);
    }

    #[test]
    fn walk_back_past_dead_ends() {
        let n0 = snapshot(&["X.a"], &["X.b"]);
        let n1 = snapshot(&["X.a", "X.b"], &["X.c", "X.e"]);
        let n2 = snapshot(&["X.a", "X.b", "X.c"], &["X.d"]);
        let n3 = snapshot(&["X.a", "X.b", "X.c", "X.d"], &["X.c"]);
        let mut history = vec![n0, n1, n2, n3];

        // n2 only offered X.d, which was taken; n1 still has X.e
        let restart = backtrack(&mut history, 2).unwrap();
        assert_eq!(restart.path.len(), 2);
        assert_eq!(restart.actions.iter().collect::<Vec<_>>(), vec![&id("X.e")]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn no_candidate() {
        let n0 = snapshot(&["X.a"], &["X.b", "X.z"]);
        let n1 = snapshot(&["X.a", "X.b"], &["X.c"]);
        let n2 = snapshot(&["X.a", "X.b", "X.c"], &["X.b"]);
        let mut history = vec![n0, n1, n2];
        let before = history.clone();

        // snapshot 0 has an alternative but is never a restart point
        assert_eq!(backtrack(&mut history, 1), None);
        assert_eq!(history, before);
    }

    #[test]
    fn loop_start_beyond_history() {
        let n0 = snapshot(&["X.a"], &["X.b"]);
        let n1 = snapshot(&["X.a", "X.b"], &["X.c", "X.d"]);
        let n2 = snapshot(&["X.a", "X.b", "X.c"], &["X.b"]);
        let mut history = vec![n0, n1, n2];

        let restart = backtrack(&mut history, 7).unwrap();
        assert_eq!(restart.path.len(), 2);
        assert_eq!(history.len(), 2);

        let mut short = vec![snapshot(&["X.a"], &["X.b"])];
        assert_eq!(backtrack(&mut short, 3), None);
        assert_eq!(backtrack(&mut Vec::<SearchNode<usize>>::new(), 0), None);
    }
}
