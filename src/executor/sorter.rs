//! Multi-key result sorting
//!
//! Sorts rows by an ordered list of keys, each with its own direction.
//! Later keys only break ties left by earlier keys. The sort is stable:
//! rows equal under every key keep their input order.

use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// One key of a sort specification
pub struct SortKey<'a, T> {
    compare: Box<dyn Fn(&T, &T) -> Ordering + 'a>,
    direction: SortDirection,
}

impl<'a, T: 'a> SortKey<'a, T> {
    /// Sorts by the extracted key in the given direction
    pub fn new<K, F>(extract: F, direction: SortDirection) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        Self {
            compare: Box::new(move |a: &T, b: &T| extract(a).cmp(&extract(b))),
            direction,
        }
    }

    /// Sorts with an explicit comparator, for keys borrowed from the row
    pub fn by(compare: impl Fn(&T, &T) -> Ordering + 'a, direction: SortDirection) -> Self {
        Self {
            compare: Box::new(compare),
            direction,
        }
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl<T> SortKey<'_, T> {
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        self.direction.apply((self.compare)(a, b))
    }
}

/// Ordered list of sort keys, highest precedence first
pub struct SortSpec<'a, T> {
    keys: Vec<SortKey<'a, T>>,
}

impl<'a, T: 'a> SortSpec<'a, T> {
    /// Starts a specification with an ascending key
    pub fn asc<K: Ord>(extract: impl Fn(&T) -> K + 'a) -> Self {
        Self {
            keys: vec![SortKey::new(extract, SortDirection::Asc)],
        }
    }

    /// Starts a specification with a descending key
    pub fn desc<K: Ord>(extract: impl Fn(&T) -> K + 'a) -> Self {
        Self {
            keys: vec![SortKey::new(extract, SortDirection::Desc)],
        }
    }

    /// Adds an ascending tie-breaker
    pub fn then_asc<K: Ord>(mut self, extract: impl Fn(&T) -> K + 'a) -> Self {
        self.keys.push(SortKey::new(extract, SortDirection::Asc));
        self
    }

    /// Adds a descending tie-breaker
    pub fn then_desc<K: Ord>(mut self, extract: impl Fn(&T) -> K + 'a) -> Self {
        self.keys.push(SortKey::new(extract, SortDirection::Desc));
        self
    }

    /// Adds a tie-breaker with an explicit comparator
    pub fn then_by(
        mut self,
        compare: impl Fn(&T, &T) -> Ordering + 'a,
        direction: SortDirection,
    ) -> Self {
        self.keys.push(SortKey::by(compare, direction));
        self
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn directions(&self) -> Vec<SortDirection> {
        self.keys.iter().map(SortKey::direction).collect()
    }
}

impl<T> SortSpec<'_, T> {
    /// Lexicographic comparison over the keys in precedence order
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.ordering(a, b))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

/// Sorts result rows
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts rows according to `spec`.
    ///
    /// Sort is stable and deterministic.
    pub fn sort<T>(rows: &mut [T], spec: &SortSpec<'_, T>) {
        rows.sort_by(|a, b| spec.compare(a, b));
    }

    /// Sorts an owned vector and returns it
    pub fn sorted<T>(mut rows: Vec<T>, spec: &SortSpec<'_, T>) -> Vec<T> {
        Self::sort(&mut rows, spec);
        rows
    }
}
