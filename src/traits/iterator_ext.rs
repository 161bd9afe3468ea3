use crate::Collector;

/// Extends [`Iterator`] with the [`feed_into`](IteratorExt::feed_into) method
/// for working seamlessly with [`Collector`]s.
///
/// This trait is automatically implemented for all [`Iterator`] types.
/// Unlike the functions in [`query`](crate::query), nothing here can be absent,
/// so feeding never fails.
pub trait IteratorExt: Iterator {
    /// Feeds items from this iterator into the provided collector till
    /// the collector closes or the iterator is exhausted,
    /// and returns the collector’s output.
    ///
    /// Items after the one that closed the collector stay in the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use myquery::{prelude::*, cmp::SortByKey};
    ///
    /// let sorted = [3, 1, 2].into_iter().feed_into(SortByKey::new(|&x: &i32| x));
    ///
    /// assert_eq!(sorted, [1, 2, 3]);
    /// ```
    #[inline]
    fn feed_into<C>(&mut self, collector: C) -> C::Output
    where
        C: Collector<Item = Self::Item>,
    {
        collector.collect_then_finish(self)
    }
}

impl<I: Iterator> IteratorExt for I {}
