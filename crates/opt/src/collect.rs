//! Lifting a sequence of optional values into an optional sequence.

use crate::Option;

/// Collects a sequence of [`Option`]s into an `Option` of a [`Vec`].
///
/// Traverses the input in order, accumulating wrapped values. Stops at the
/// first [`None`](Option::None) and returns it; elements past that point are
/// never realized, so lazily produced inputs with side effects are safe. An
/// empty input yields `Some` of an empty `Vec`.
#[inline]
pub fn collect<T>(iter: impl IntoIterator<Item = Option<T>>) -> Option<Vec<T>> {
    iter.into_iter().collect()
}

impl<A, V: FromIterator<A>> FromIterator<Option<A>> for Option<V> {
    /// Takes each element in the iterator: if it is `None`, no further
    /// elements are taken and `None` is returned. Otherwise the wrapped
    /// values are collected into `V` in input order.
    fn from_iter<I: IntoIterator<Item = Option<A>>>(iter: I) -> Self {
        let mut absent = false;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Option::Some(value) => std::option::Option::Some(value),
                Option::None => {
                    absent = true;
                    std::option::Option::None
                }
            })
            .collect();
        if absent { Self::None } else { Self::Some(collected) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{none, some};
    use std::cell::Cell;

    #[test]
    fn collect_all_some() {
        let collected = collect([some(1), some(2), some(3)]);
        assert_eq!(collected, some(vec![1, 2, 3]));
    }

    #[test]
    fn collect_with_none() {
        assert_eq!(collect([some(1), none(), some(3)]), none());
        assert_eq!(collect([none::<u64>()]), none());
    }

    #[test]
    fn collect_empty() {
        let collected: Option<Vec<u64>> = collect(std::iter::empty());
        assert_eq!(collected, some(Vec::new()));
    }

    #[test]
    fn collect_stops_at_first_none() {
        let realized = Cell::new(0);
        let items = (0..5).map(|i| {
            realized.set(realized.get() + 1);
            if i == 2 { none() } else { some(i) }
        });
        assert_eq!(collect(items), none());
        // Elements after the first `None` are never produced.
        assert_eq!(realized.get(), 3);
    }

    #[test]
    fn collect_preserves_order() {
        let collected = collect((0..100).rev().map(some));
        assert_eq!(collected, some((0..100).rev().collect::<Vec<_>>()));
    }

    #[test]
    fn from_iter_targets_any_collection() {
        let word: Option<String> = "word".chars().map(some).collect();
        assert_eq!(word, some("word".to_string()));
        let missing: Option<String> = [some('w'), none(), some('d')].into_iter().collect();
        assert_eq!(missing, none());
    }
}
