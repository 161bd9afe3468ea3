use std::{fmt::Debug, marker::PhantomData, ops::ControlFlow};

use crate::{Collector, assert_collector};

/// A [`Collector`] that calls an action on every item, in order.
///
/// This collector corresponds to [`Iterator::for_each()`].
///
/// # Examples
///
/// ```
/// use myquery::{prelude::*, iter::ForEach};
///
/// let mut seen = vec![];
/// [1, 2, 3].into_iter().feed_into(ForEach::new(|num| seen.push(num)));
///
/// assert_eq!(seen, [1, 2, 3]);
/// ```
pub struct ForEach<T, F> {
    action: F,
    _marker: PhantomData<fn(T)>,
}

impl<T, F> ForEach<T, F>
where
    F: FnMut(T),
{
    /// Creates a new instance of this collector with the given action.
    #[inline]
    pub const fn new(action: F) -> Self {
        assert_collector(Self {
            action,
            _marker: PhantomData,
        })
    }
}

impl<T, F> Collector for ForEach<T, F>
where
    F: FnMut(T),
{
    type Item = T;
    type Output = ();

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        (self.action)(item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) {}

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        items.into_iter().for_each(&mut self.action);
        ControlFlow::Continue(())
    }
}

impl<T, F> Debug for ForEach<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForEach").finish_non_exhaustive()
    }
}

/// A [`Collector`] that calls an action on every item, in order,
/// together with the item's zero-based position.
///
/// # Examples
///
/// ```
/// use myquery::{prelude::*, iter::ForEachIndexed};
///
/// let mut seen = vec![];
/// ["a", "b"]
///     .into_iter()
///     .feed_into(ForEachIndexed::new(|index, s: &str| seen.push(format!("{index}{s}"))));
///
/// assert_eq!(seen, ["0a", "1b"]);
/// ```
pub struct ForEachIndexed<T, F> {
    action: F,
    index: usize,
    _marker: PhantomData<fn(T)>,
}

impl<T, F> ForEachIndexed<T, F>
where
    F: FnMut(usize, T),
{
    /// Creates a new instance of this collector with the given action.
    /// The first item collected gets position 0.
    #[inline]
    pub const fn new(action: F) -> Self {
        assert_collector(Self {
            action,
            index: 0,
            _marker: PhantomData,
        })
    }
}

impl<T, F> Collector for ForEachIndexed<T, F>
where
    F: FnMut(usize, T),
{
    type Item = T;
    type Output = ();

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        (self.action)(self.index, item);
        self.index += 1;
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) {}
}

impl<T, F> Debug for ForEachIndexed<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForEachIndexed")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// A [`Collector`] that calls an action on items, in order, until the action asks to stop.
///
/// The action receives the item's zero-based position and the item, and returns
/// [`Break(())`] to cancel. The request is checked once per item, right after the
/// action runs: the item that cancels is visited, and nothing after it is.
/// Once cancelled, the collector stays closed and the action is never called again.
///
/// Its [`Output`](Collector::Output) is [`Break(())`] if the action cancelled,
/// or [`Continue(())`] if every item was visited.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use myquery::{prelude::*, iter::ForEachCancellable};
///
/// let mut seen = vec![];
/// let mut nums = 0..10;
/// let flow = nums.feed_into(ForEachCancellable::new(|index, num| {
///     seen.push(num);
///     if index == 3 {
///         ControlFlow::Break(())
///     } else {
///         ControlFlow::Continue(())
///     }
/// }));
///
/// assert!(flow.is_break());
/// assert_eq!(seen, [0, 1, 2, 3]);
/// // The rest is untouched.
/// assert_eq!(nums.next(), Some(4));
/// ```
///
/// [`Break(())`]: ControlFlow::Break
/// [`Continue(())`]: ControlFlow::Continue
pub struct ForEachCancellable<T, F> {
    action: F,
    index: usize,
    cancelled: bool,
    _marker: PhantomData<fn(T)>,
}

impl<T, F> ForEachCancellable<T, F>
where
    F: FnMut(usize, T) -> ControlFlow<()>,
{
    /// Creates a new instance of this collector with the given action.
    #[inline]
    pub const fn new(action: F) -> Self {
        assert_collector(Self {
            action,
            index: 0,
            cancelled: false,
            _marker: PhantomData,
        })
    }

    /// Returns whether the action has asked to stop.
    #[inline]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl<T, F> Collector for ForEachCancellable<T, F>
where
    F: FnMut(usize, T) -> ControlFlow<()>,
{
    type Item = T;
    type Output = ControlFlow<()>;

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if self.cancelled {
            return ControlFlow::Break(());
        }

        let flow = (self.action)(self.index, item);
        self.index += 1;
        self.cancelled = flow.is_break();
        flow
    }

    #[inline]
    fn finish(self) -> ControlFlow<()> {
        if self.cancelled {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<T, F> Debug for ForEachCancellable<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForEachCancellable")
            .field("index", &self.index)
            .field("cancelled", &self.cancelled)
            .finish_non_exhaustive()
    }
}
