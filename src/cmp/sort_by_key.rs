use std::{fmt::Debug, ops::ControlFlow};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::{Collector, assert_collector};

/// A [`Collector`] that buffers the items it collects and returns them
/// in ascending order of a key.
///
/// The key is extracted once per item, when it is collected.
/// Sorting runs in O(n log n) and is **not** stable: the relative order of
/// items with equal keys is unspecified. Use [`SortBy`](super::SortBy) when ties
/// must keep their order.
///
/// # Examples
///
/// ```
/// use myquery::{prelude::*, cmp::SortByKey};
///
/// let sorted = ["ccc", "a", "bb"]
///     .into_iter()
///     .feed_into(SortByKey::new(|s: &&str| s.len()));
///
/// assert_eq!(sorted, ["a", "bb", "ccc"]);
/// ```
pub struct SortByKey<T, K, F> {
    // Items paired with their keys, each key computed once on collection.
    keyed: Vec<(K, T)>,
    key_of: F,
}

impl<T, K, F> SortByKey<T, K, F>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    /// Creates a new instance of this collector with a given key-extraction function.
    #[inline]
    pub const fn new(key_of: F) -> Self {
        assert_collector(Self {
            keyed: Vec::new(),
            key_of,
        })
    }
}

impl<T, K, F> Collector for SortByKey<T, K, F>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    type Item = T;
    type Output = Vec<T>;

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.keyed.push(((self.key_of)(&item), item));
        ControlFlow::Continue(())
    }

    fn finish(self) -> Vec<T> {
        let mut keyed = self.keyed;
        keyed.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        keyed.into_iter().map(|(_, item)| item).collect()
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        let key_of = &mut self.key_of;
        self.keyed
            .extend(items.into_iter().map(|item| (key_of(&item), item)));
        ControlFlow::Continue(())
    }
}

impl<T: Clone, K: Clone, F: Clone> Clone for SortByKey<T, K, F> {
    fn clone(&self) -> Self {
        Self {
            keyed: self.keyed.clone(),
            key_of: self.key_of.clone(),
        }
    }
}

impl<T: Debug, K: Debug, F> Debug for SortByKey<T, K, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortByKey")
            .field("keyed", &self.keyed)
            .finish_non_exhaustive()
    }
}
