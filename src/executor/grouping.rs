//! Grouping engine
//!
//! Partitions a sequence by a key extractor. Groups appear in the order
//! their key is first seen; members keep their input order. Every input
//! item lands in exactly one group and no group is empty.

use std::collections::HashMap;
use std::hash::Hash;

/// A key and the items that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    pub key: K,
    pub members: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Groups this group's members by a second key, keeping this key.
    pub fn regroup<K2, F>(self, key_fn: F) -> Group<K, Group<K2, T>>
    where
        K2: Eq + Hash + Clone,
        F: FnMut(&T) -> K2,
    {
        Group {
            key: self.key,
            members: group_by(self.members, key_fn),
        }
    }
}

/// Groups `items` by `key_fn` in first-seen key order.
pub fn group_by<I, K, F>(items: I, mut key_fn: F) -> Vec<Group<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: Vec<Group<K, I::Item>> = Vec::new();
    let mut positions: HashMap<K, usize> = HashMap::new();

    for item in items {
        let key = key_fn(&item);
        match positions.get(&key) {
            Some(&position) => groups[position].members.push(item),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    members: vec![item],
                });
            }
        }
    }

    groups
}

/// Counts items per key in first-seen key order.
pub fn count_by<I, K, F>(items: I, key_fn: F) -> Vec<(K, usize)>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    group_by(items, key_fn)
        .into_iter()
        .map(|group| {
            let n = group.len();
            (group.key, n)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let words = vec!["banana", "apple", "blueberry", "cherry", "avocado"];
        let groups = group_by(words, |w| w.chars().next());

        let keys: Vec<_> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![Some('b'), Some('a'), Some('c')]);
        assert_eq!(groups[0].members, vec!["banana", "blueberry"]);
        assert_eq!(groups[1].members, vec!["apple", "avocado"]);
    }

    #[test]
    fn test_partition() {
        let values: Vec<u32> = (0..100).collect();
        let groups = group_by(values.iter(), |v| **v % 7);

        let total: usize = groups.iter().map(Group::len).sum();
        assert_eq!(total, values.len());
        assert!(groups.iter().all(|g| !g.is_empty()));
        for value in &values {
            let containing = groups
                .iter()
                .filter(|g| g.members.contains(&value))
                .count();
            assert_eq!(containing, 1);
        }
    }

    #[test]
    fn test_composite_key_equality() {
        let rows = vec![(1, 1997), (2, 1997), (1, 1997), (1, 1998)];
        let groups = group_by(rows, |r| (r.0, r.1));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key, (1, 1997));
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by(Vec::<u8>::new(), |v| *v);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_regroup_builds_tree() {
        let items = vec![("fruit", 3), ("veg", 0), ("fruit", 0), ("fruit", 5)];
        let tree: Vec<_> = group_by(items, |i| i.0)
            .into_iter()
            .map(|g| g.regroup(|i| i.1 > 0))
            .collect();

        assert_eq!(tree[0].key, "fruit");
        let inner = &tree[0].members;
        assert!(inner[0].key);
        assert_eq!(inner[0].members, vec![("fruit", 3), ("fruit", 5)]);
        assert!(!inner[1].key);
        assert_eq!(tree[1].key, "veg");
        assert_eq!(tree[1].members.len(), 1);
    }

    #[test]
    fn test_count_by() {
        let months = vec![8, 10, 8, 1, 8];
        assert_eq!(count_by(months, |m| *m), vec![(8, 3), (10, 1), (1, 1)]);
    }
}
