//! Composable predicates
//!
//! A [`Filter`] is a pure boolean function over a single item; a
//! [`PairFilter`] tests an (outer, inner) pair and drives correlated
//! sub-queries. Filters compose with `and`, `or` and `not` exactly like
//! boolean expressions.

use std::cmp::Ordering;

/// Comparison applied by threshold predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// value == bound
    Eq,
    /// value > bound
    Gt,
    /// value >= bound
    Gte,
    /// value < bound
    Lt,
    /// value <= bound
    Lte,
}

impl CompareOp {
    /// Applies the comparison to `value` against `bound`.
    ///
    /// Incomparable values never match.
    pub fn holds<K: PartialOrd>(&self, value: &K, bound: &K) -> bool {
        let Some(ordering) = value.partial_cmp(bound) else {
            return false;
        };
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Gte => ordering != Ordering::Less,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Lte => ordering != Ordering::Greater,
        }
    }
}

/// A boolean predicate over `T`
pub struct Filter<'a, T: ?Sized> {
    test: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T: ?Sized + 'a> Filter<'a, T> {
    /// Wraps a predicate function
    pub fn new(test: impl Fn(&T) -> bool + 'a) -> Self {
        Self {
            test: Box::new(test),
        }
    }

    /// Matches every item
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Matches no item
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    /// Compares a projection of the item against a caller-supplied bound
    pub fn compare<K, P>(projection: P, op: CompareOp, bound: K) -> Self
    where
        K: PartialOrd + 'a,
        P: Fn(&T) -> K + 'a,
    {
        Self::new(move |item| op.holds(&projection(item), &bound))
    }

    /// Both predicates must hold
    pub fn and(self, other: Filter<'a, T>) -> Self {
        Self::new(move |item| self.matches(item) && other.matches(item))
    }

    /// Either predicate must hold
    pub fn or(self, other: Filter<'a, T>) -> Self {
        Self::new(move |item| self.matches(item) || other.matches(item))
    }

    /// Negates the predicate
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::new(move |item| !self.matches(item))
    }

    /// All predicates must hold; an empty list matches everything
    pub fn all_of(filters: impl IntoIterator<Item = Filter<'a, T>>) -> Self {
        filters.into_iter().fold(Self::always(), Filter::and)
    }

    /// At least one predicate must hold; an empty list matches nothing
    pub fn any_of(filters: impl IntoIterator<Item = Filter<'a, T>>) -> Self {
        filters.into_iter().fold(Self::never(), Filter::or)
    }

    /// Returns the items that satisfy the predicate, in input order
    pub fn select<'s, I>(&self, items: I) -> Vec<&'s T>
    where
        I: IntoIterator<Item = &'s T>,
        T: 's,
    {
        items
            .into_iter()
            .filter(|item| self.matches(item))
            .collect()
    }
}

impl<T: ?Sized> Filter<'_, T> {
    /// Checks whether the item satisfies the predicate
    pub fn matches(&self, item: &T) -> bool {
        (self.test)(item)
    }
}

/// A boolean predicate over an (outer, inner) pair
pub struct PairFilter<'a, L: ?Sized, R: ?Sized> {
    test: Box<dyn Fn(&L, &R) -> bool + 'a>,
}

impl<'a, L: ?Sized + 'a, R: ?Sized + 'a> PairFilter<'a, L, R> {
    pub fn new(test: impl Fn(&L, &R) -> bool + 'a) -> Self {
        Self {
            test: Box::new(test),
        }
    }

    /// Matches pairs whose projected keys are equal
    pub fn key_eq<K, FL, FR>(left_key: FL, right_key: FR) -> Self
    where
        K: PartialEq,
        FL: Fn(&L) -> K + 'a,
        FR: Fn(&R) -> K + 'a,
    {
        Self::new(move |left, right| left_key(left) == right_key(right))
    }
}

impl<L: ?Sized, R: ?Sized> PairFilter<'_, L, R> {
    pub fn matches(&self, left: &L, right: &R) -> bool {
        (self.test)(left, right)
    }
}
