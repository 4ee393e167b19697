//! Subset, superset and equality over unordered collections.
//!
//! The arguments are anything that can be iterated by reference, so a plan
//! path (which may contain duplicates) can be compared directly with a set.

use rustc_hash::FxHashSet;
use std::hash::Hash;

fn to_set<'a, T, I>(items: I) -> FxHashSet<&'a T>
where
    T: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().collect()
}

/// True if every element of `subset` is also in `superset`.
pub fn is_subset<'a, T, A, B>(subset: A, superset: B) -> bool
where
    T: Eq + Hash + 'a,
    A: IntoIterator<Item = &'a T>,
    B: IntoIterator<Item = &'a T>,
{
    let superset = to_set(superset);
    subset.into_iter().all(|x| superset.contains(x))
}

/// True if `superset` contains every element of `subset`. Equal sets count.
pub fn is_superset<'a, T, A, B>(superset: A, subset: B) -> bool
where
    T: Eq + Hash + 'a,
    A: IntoIterator<Item = &'a T>,
    B: IntoIterator<Item = &'a T>,
{
    is_subset(subset, superset)
}

pub fn is_equal<'a, T, A, B>(a: A, b: B) -> bool
where
    T: Eq + Hash + 'a,
    A: IntoIterator<Item = &'a T>,
    B: IntoIterator<Item = &'a T>,
{
    to_set(a) == to_set(b)
}
