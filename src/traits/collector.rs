use std::ops::ControlFlow;

use crate::{Cloned, Filter, Map, assert_collector};

/// Receives the items of one traversal and produces a materialized result.
///
/// This trait requires two core methods:
///
/// - [`collect`](Collector::collect): consumes an item and returns whether the collector continues
///   accepting further items *after* this operation.
/// - [`finish`](Collector::finish): consumes the collector and returns the accumulated result.
///
/// Every operation of this crate is a collector. The guarded functions in [`query`](crate::query)
/// validate their arguments, build the matching collector and feed the source into it.
///
/// # Implementing
///
/// Define the output type you want to produce, wrap the running state in a struct,
/// and implement this trait for that struct.
/// You may also override [`collect_many`](Collector::collect_many) and
/// [`collect_then_finish`](Collector::collect_then_finish) for optimizations.
///
/// # Example
///
/// ```
/// use std::ops::ControlFlow;
/// use myquery::prelude::*;
///
/// /// Concatenates words, separated by a single space.
/// #[derive(Default)]
/// struct Sentence(String);
///
/// impl Collector for Sentence {
///     type Item = &'static str;
///     type Output = String;
///
///     fn collect(&mut self, word: &'static str) -> ControlFlow<()> {
///         if !self.0.is_empty() {
///             self.0.push(' ');
///         }
///         self.0.push_str(word);
///         ControlFlow::Continue(())
///     }
///
///     fn finish(self) -> String {
///         self.0
///     }
/// }
///
/// let sentence = ["the", "noble", "singer"]
///     .into_iter()
///     .feed_into(Sentence::default());
///
/// assert_eq!(sentence, "the noble singer");
/// ```
pub trait Collector: Sized {
    /// Type of the items this collector accepts.
    type Item;

    /// The result this collector yields, via the [`finish`](Collector::finish) method.
    type Output;

    /// Collects an item and returns a [`ControlFlow`] indicating whether the collector is “closed”,
    /// meaning it will no longer accept items **right after** this operation.
    ///
    /// Return [`Continue(())`] to indicate the collector can still accept more items,
    /// or [`Break(())`] if further feeding is meaningless.
    /// Most collectors of this crate never close. The exception is
    /// [`ForEachCancellable`](crate::iter::ForEachCancellable), which closes as soon as
    /// its action asks to stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use myquery::{prelude::*, iter::Count};
    ///
    /// let mut count = Count::new();
    ///
    /// assert!(count.collect("a").is_continue());
    /// assert!(count.collect("b").is_continue());
    ///
    /// assert_eq!(count.finish(), 2);
    /// ```
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    fn collect(&mut self, item: Self::Item) -> ControlFlow<()>;

    /// Consumes the collector and returns the accumulated result.
    fn finish(self) -> Self::Output;

    /// Collects items from an iterator and returns a [`ControlFlow`] indicating whether
    /// the collector is closed after the last item it took, possibly none.
    ///
    /// Feeding stops at the first [`Break(())`](ControlFlow::Break); the rest of
    /// the iterator is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use myquery::Collector;
    ///
    /// let mut v = vec![1, 2];
    /// v.collect_many([3, 4, 5]);
    ///
    /// assert_eq!(v, [1, 2, 3, 4, 5]);
    /// ```
    fn collect_many(&mut self, items: impl IntoIterator<Item = Self::Item>) -> ControlFlow<()> {
        // `try_for_each` instead of a `for` loop: some iterators (`chain`, `skip`, ...)
        // are faster with internal iteration.
        items.into_iter().try_for_each(|item| self.collect(item))
    }

    /// Collects items from an iterator, consumes the collector, and produces the accumulated result.
    ///
    /// This is equivalent to [`collect_many`](Collector::collect_many)
    /// followed by [`finish`](Collector::finish) (which is the default implementation),
    /// but it can be overridden since the collector is dropped right after.
    ///
    /// # Examples
    ///
    /// ```
    /// use myquery::Collector;
    ///
    /// assert_eq!(vec![1, 2].collect_then_finish([3, 4, 5]), [1, 2, 3, 4, 5]);
    /// ```
    fn collect_then_finish(self, items: impl IntoIterator<Item = Self::Item>) -> Self::Output {
        let mut this = self;

        // Whether it breaks or not does not matter, we finish either way.
        let _ = this.collect_many(items);
        this.finish()
    }

    /// Creates a collector that only forwards the items satisfying `pred`.
    ///
    /// Relative order of the forwarded items is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use myquery::prelude::*;
    ///
    /// let evens = (1..=10).feed_into(vec![].filter(|&x: &i32| x % 2 == 0));
    ///
    /// assert_eq!(evens, [2, 4, 6, 8, 10]);
    /// ```
    #[inline]
    fn filter<F>(self, pred: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        assert_collector(Filter::new(self, pred))
    }

    /// Creates a collector that projects every incoming item with `f`
    /// before collecting it.
    ///
    /// # Examples
    ///
    /// ```
    /// use myquery::prelude::*;
    ///
    /// let lens = ["a", "bcd", "ef"]
    ///     .into_iter()
    ///     .feed_into(vec![].map(|s: &str| s.len()));
    ///
    /// assert_eq!(lens, [1, 3, 2]);
    /// ```
    #[inline]
    fn map<F, T>(self, f: F) -> Map<Self, T, F>
    where
        F: FnMut(T) -> Self::Item,
    {
        assert_collector(Map::new(self, f))
    }

    /// Creates a collector that accepts references and collects a clone of each.
    ///
    /// # Examples
    ///
    /// ```
    /// use myquery::prelude::*;
    ///
    /// let words = [String::from("a"), String::from("b")];
    /// let copy: Vec<String> = words.iter().feed_into(vec![].cloned());
    ///
    /// assert_eq!(copy, words);
    /// ```
    #[inline]
    fn cloned<'a>(self) -> Cloned<'a, Self>
    where
        Self::Item: Clone + 'a,
    {
        assert_collector(Cloned::new(self))
    }
}
