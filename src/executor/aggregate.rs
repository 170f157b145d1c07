//! Aggregate reducers
//!
//! `sum` of nothing is zero. `average`, `min` and `max` of nothing are
//! undefined and return `None`; callers exclude empty inputs upstream
//! instead of substituting a default.
//!
//! Reducers never panic on overflow. `checked_sum` reports it, `sum`
//! saturates at the `Decimal` bounds and `average` falls back to summing
//! pre-divided values.

use rust_decimal::Decimal;

/// Sum of the values; zero for an empty sequence, saturating on overflow
pub fn sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |total, v| total.saturating_add(v))
}

/// Sum of the values; `None` if it leaves the `Decimal` range
pub fn checked_sum<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, v| total.checked_add(v))
}

/// Number of items
pub fn count<I: IntoIterator>(items: I) -> usize {
    items.into_iter().count()
}

/// Arithmetic mean; `None` for an empty sequence
pub fn average<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let values: Vec<Decimal> = values.into_iter().collect();
    if values.is_empty() {
        return None;
    }
    let n = Decimal::from(values.len() as u64);
    match checked_sum(values.iter().copied()) {
        Some(total) => Some(total / n),
        // the mean lies within the value range even when the sum does not
        None => Some(
            values
                .iter()
                .fold(Decimal::ZERO, |mean, v| mean.saturating_add(*v / n)),
        ),
    }
}

/// Mean of integer counts as a decimal; `None` for an empty sequence
pub fn average_count<I>(counts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = usize>,
{
    average(counts.into_iter().map(|c| Decimal::from(c as u64)))
}

/// Smallest value; `None` for an empty sequence
pub fn min<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    values.into_iter().min()
}

/// Largest value; `None` for an empty sequence
pub fn max<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    values.into_iter().max()
}
