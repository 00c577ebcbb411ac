//! Generic read-only query operations over a record slice.
//!
//! # Responsibility
//! - Provide reusable counting, extremum, projection and listing shapes
//!   that specialized repositories compose with field accessors.
//!
//! # Invariants
//! - No operation mutates its input.
//! - Extremum ties keep the first record encountered.
//! - Records whose queried value is absent are skipped, never errors.

use crate::query::{QueryError, QueryResult};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Direction of an extremum search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    fn prefers<K: PartialOrd>(self, candidate: &K, best: &K) -> bool {
        match self {
            Self::Max => candidate > best,
            Self::Min => candidate < best,
        }
    }
}

/// Counts records whose member collection is present and contains `value`.
pub fn count_with_member<'a, T, V, Q, F>(records: &'a [T], value: &Q, members: F) -> usize
where
    V: Borrow<Q> + 'a,
    Q: PartialEq + ?Sized,
    F: Fn(&'a T) -> Option<&'a [V]>,
{
    records
        .iter()
        .filter_map(|record| members(record))
        .filter(|collection| {
            collection
                .iter()
                .any(|member| <V as Borrow<Q>>::borrow(member) == value)
        })
        .count()
}

/// Returns the record with the greatest (or least) key.
///
/// # Errors
/// - `QueryError::EmptyCollection` when `records` is empty.
pub fn find_extremum<'a, T, K, F>(
    records: &'a [T],
    extremum: Extremum,
    query: &'static str,
    key: F,
) -> QueryResult<&'a T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    find_extremum_present(records, extremum, query, |record| Some(key(record)))
}

/// Like [`find_extremum`], but first drops records whose key is `None`.
///
/// # Errors
/// - `QueryError::EmptyCollection` when no record has a present key.
pub fn find_extremum_present<'a, T, K, F>(
    records: &'a [T],
    extremum: Extremum,
    query: &'static str,
    key: F,
) -> QueryResult<&'a T>
where
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    let mut best: Option<(&'a T, K)> = None;
    for record in records {
        let Some(candidate) = key(record) else {
            continue;
        };
        let replace = match &best {
            Some((_, best_key)) => extremum.prefers(&candidate, best_key),
            None => true,
        };
        if replace {
            best = Some((record, candidate));
        }
    }

    best.map(|(record, _)| record)
        .ok_or(QueryError::EmptyCollection { query })
}

/// Filters records, projects the survivors and joins them in source order.
pub fn join_projected<T, P, F, D>(records: &[T], filter: P, project: F, delimiter: &str) -> String
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> D,
    D: Display,
{
    records
        .iter()
        .filter(|record| filter(record))
        .map(|record| project(record).to_string())
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Projects every record and yields the values in ascending order.
///
/// Sorting is stable, so equal values keep source order.
pub fn sorted_projection<'a, T, K, F>(records: &'a [T], project: F) -> impl Iterator<Item = K> + 'a
where
    K: Ord + 'a,
    F: Fn(&'a T) -> K,
{
    let mut values: Vec<K> = records.iter().map(project).collect();
    values.sort();
    values.into_iter()
}

/// Drops value-equal duplicates (first occurrence wins) and formats the rest.
pub fn distinct_formatted<'a, T, F>(records: &'a [T], format: F) -> impl Iterator<Item = String> + 'a
where
    T: PartialEq,
    F: Fn(&T) -> String + 'a,
{
    let mut seen: Vec<&'a T> = Vec::new();
    records
        .iter()
        .filter(move |record| {
            if seen.contains(record) {
                false
            } else {
                seen.push(*record);
                true
            }
        })
        .map(move |record| format(record))
}

/// Groups projected values by key; each group keeps source order.
pub fn group_by_key<'a, T, K, V, FK, FV>(
    records: &'a [T],
    key: FK,
    project: FV,
) -> BTreeMap<K, Vec<V>>
where
    K: Ord,
    FK: Fn(&'a T) -> K,
    FV: Fn(&'a T) -> V,
{
    let mut groups: BTreeMap<K, Vec<V>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(project(record));
    }
    groups
}
