use std::{fmt::Debug, ops::ControlFlow};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::{Collector, assert_collector};

use super::Comparator;

/// A [`Collector`] that buffers the items it collects and returns them
/// sorted with a [`Comparator`].
///
/// `compare(a, b) > 0` means `a` ends up before `b`. See [`Comparator`] for the
/// sign convention.
///
/// The sort is stable: items the comparator considers tied keep the order
/// they were collected in. It runs repeated passes of adjacent swaps over
/// its own buffer, so it costs O(n²) comparisons in the worst case
/// and O(n) on input that is already in order.
///
/// The comparator must be consistent (a strict weak ordering by sign);
/// otherwise passes may never settle.
///
/// # Examples
///
/// ```
/// use myquery::{prelude::*, cmp::{SortBy, ascending}};
///
/// let sorted = [4, 3, 12, 24, 5, 98, 8, 0, 2]
///     .into_iter()
///     .feed_into(SortBy::new(ascending()));
///
/// assert_eq!(sorted, [0, 2, 3, 4, 5, 8, 12, 24, 98]);
/// ```
///
/// Ties keep their order:
///
/// ```
/// use myquery::{prelude::*, cmp::SortBy};
///
/// let by_len = |a: &&str, b: &&str| b.len().cmp(&a.len()) as i32;
/// let sorted = ["bb", "a", "cc", "d"].into_iter().feed_into(SortBy::new(by_len));
///
/// assert_eq!(sorted, ["a", "d", "bb", "cc"]);
/// ```
#[derive(Clone)]
pub struct SortBy<T, C> {
    items: Vec<T>,
    compare: C,
}

impl<T, C> SortBy<T, C>
where
    C: Comparator<T>,
{
    /// Creates a new instance of this collector with the given comparator.
    #[inline]
    pub const fn new(compare: C) -> Self {
        assert_collector(Self {
            items: Vec::new(),
            compare,
        })
    }
}

impl<T, C> Collector for SortBy<T, C>
where
    C: Comparator<T>,
{
    type Item = T;
    type Output = Vec<T>;

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.items.push(item);
        ControlFlow::Continue(())
    }

    fn finish(self) -> Vec<T> {
        let Self {
            mut items,
            mut compare,
        } = self;

        bubble_sort(&mut items, &mut compare);
        items
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.items.extend(items);
        ControlFlow::Continue(())
    }
}

impl<T: Debug, C> Debug for SortBy<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortBy")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Swaps adjacent items until a full pass over every pair swaps nothing.
fn bubble_sort<T>(items: &mut [T], compare: &mut impl Comparator<T>) {
    let Some(last) = items.len().checked_sub(1) else {
        return;
    };

    let mut swapped = true;
    while swapped {
        swapped = false;

        for i in 0..last {
            // Only a strict preference swaps, so ties never move.
            if compare.precedes(&items[i + 1], &items[i]) {
                items.swap(i, i + 1);
                swapped = true;
            }
        }
    }
}
