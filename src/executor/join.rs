//! Join engine
//!
//! Two strategies for relating a left and a right sequence:
//!
//! - [`inner_join`]: hash equi-join on a derived key. Pairs come out in
//!   left order, then right order. Left items without a match are dropped.
//! - [`correlate`]: for every left item, the ordered subset of the right
//!   sequence accepted by a pair predicate. [`semi_join`] keeps only the
//!   left items whose subset is non-empty.
//!
//! For a key-equality predicate both strategies relate the same pairs.

use std::collections::HashMap;
use std::hash::Hash;

use super::filters::PairFilter;

/// A left item and the right items related to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correlated<'a, L, R> {
    pub left: &'a L,
    pub matches: Vec<&'a R>,
}

impl<L, R> Correlated<'_, L, R> {
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Pairs every left item with every right item sharing its key.
pub fn inner_join<'a, L, R, K, FL, FR>(
    left: &'a [L],
    right: &'a [R],
    left_key: FL,
    right_key: FR,
) -> Vec<(&'a L, &'a R)>
where
    K: Eq + Hash,
    FL: Fn(&'a L) -> K,
    FR: Fn(&'a R) -> K,
{
    let mut lookup: HashMap<K, Vec<&'a R>> = HashMap::new();
    for item in right {
        lookup.entry(right_key(item)).or_default().push(item);
    }

    let mut pairs = Vec::new();
    for item in left {
        if let Some(matched) = lookup.get(&left_key(item)) {
            pairs.extend(matched.iter().map(|r| (item, *r)));
        }
    }
    pairs
}

/// Decorates every left item with the right items the predicate accepts.
pub fn correlate<'a, L, R>(
    left: &'a [L],
    right: &'a [R],
    predicate: &PairFilter<'_, L, R>,
) -> Vec<Correlated<'a, L, R>> {
    left.iter()
        .map(|l| Correlated {
            left: l,
            matches: right.iter().filter(|r| predicate.matches(l, r)).collect(),
        })
        .collect()
}

/// [`correlate`], keeping only left items with at least one match.
pub fn semi_join<'a, L, R>(
    left: &'a [L],
    right: &'a [R],
    predicate: &PairFilter<'_, L, R>,
) -> Vec<Correlated<'a, L, R>> {
    correlate(left, right, predicate)
        .into_iter()
        .filter(Correlated::has_matches)
        .collect()
}
