use std::{fmt::Debug, marker::PhantomData, ops::ControlFlow};

use crate::Collector;

/// A [`Collector`] that projects each incoming item with a selector,
/// then hands the projection to the inner collector.
///
/// Every item is projected exactly once, in order. The adaptor closes as soon
/// as the inner collector does.
///
/// This `struct` is created by [`Collector::map()`]. See its documentation for more.
pub struct Map<C, T, F> {
    inner: C,
    selector: F,
    _source: PhantomData<fn(T)>,
}

impl<C, T, F> Map<C, T, F> {
    pub(crate) fn new(inner: C, selector: F) -> Self {
        Self {
            inner,
            selector,
            _source: PhantomData,
        }
    }
}

impl<C, T, F> Collector for Map<C, T, F>
where
    C: Collector,
    F: FnMut(T) -> C::Item,
{
    type Item = T;
    type Output = C::Output;

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        let projected = (self.selector)(item);
        self.inner.collect(projected)
    }

    #[inline]
    fn finish(self) -> C::Output {
        self.inner.finish()
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        let selector = &mut self.selector;
        self.inner.collect_many(items.into_iter().map(selector))
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> C::Output {
        self.inner
            .collect_then_finish(items.into_iter().map(self.selector))
    }
}

impl<C: Clone, T, F: Clone> Clone for Map<C, T, F> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone(), self.selector.clone())
    }
}

impl<C: Debug, T, F> Debug for Map<C, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
