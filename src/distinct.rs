//! A [`Collector`] that drops repeated items.
//!
//! [`Collector`]: crate::Collector

use std::{fmt::Debug, ops::ControlFlow};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::{Collector, assert_collector};

/// A [`Collector`] that keeps the first occurrence of every distinct item,
/// in collection order.
///
/// Equality is the item type's own [`PartialEq`]. Each item is checked against
/// the items kept so far, so collecting n items costs O(n²) comparisons in the
/// worst case. No [`Hash`] or [`Ord`] is required.
///
/// # Examples
///
/// ```
/// use myquery::{prelude::*, distinct::Distinct};
///
/// let unique = [3, 1, 3, 2, 1].into_iter().feed_into(Distinct::new());
///
/// assert_eq!(unique, [3, 1, 2]);
/// ```
#[derive(Clone)]
pub struct Distinct<T> {
    kept: Vec<T>,
}

impl<T: PartialEq> Distinct<T> {
    /// Creates a new instance of this collector.
    #[inline]
    pub const fn new() -> Self {
        assert_collector(Self { kept: Vec::new() })
    }
}

impl<T: PartialEq> Default for Distinct<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> Collector for Distinct<T> {
    type Item = T;
    type Output = Vec<T>;

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if !self.kept.contains(&item) {
            self.kept.push(item);
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Vec<T> {
        self.kept
    }
}

impl<T: Debug> Debug for Distinct<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Distinct")
            .field("kept", &self.kept)
            .finish()
    }
}
